//! Post-build step that turns a WebGL build folder into an installable PWA:
//! copies the manifest, service worker and icons next to `index.html`, then
//! links them from the page.

use std::path::{Path, PathBuf};

use serde::Serialize;

pub mod assets;
pub mod error;
pub mod html;

pub use assets::{copy_assets, CopyReport};
pub use error::{PatchError, Result};
pub use html::{patch_html, patch_index_html, PatchOutcome};

pub const DEFAULT_PWA_DIR: &str = "pwa";

#[derive(Debug, Clone)]
pub struct Options {
    /// WebGL build folder containing `index.html`.
    pub build_dir: PathBuf,
    /// Source folder with `manifest.json`, `service-worker.js` and `icons/`.
    pub pwa_dir: PathBuf,
}

impl Options {
    pub fn new(build_dir: impl Into<PathBuf>) -> Self {
        Self {
            build_dir: build_dir.into(),
            pwa_dir: PathBuf::from(DEFAULT_PWA_DIR),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PatchReport {
    pub build_dir: PathBuf,
    pub pwa_dir: PathBuf,
    pub assets: CopyReport,
    pub html: PatchOutcome,
}

/// Copy assets then patch `index.html`. Fails before touching anything if
/// either directory is missing.
pub fn run(opts: &Options) -> Result<PatchReport> {
    let build_dir = absolute(&opts.build_dir)?;
    let pwa_dir = absolute(&opts.pwa_dir)?;

    if !build_dir.is_dir() {
        return Err(PatchError::BuildDirNotFound(build_dir));
    }
    if !pwa_dir.is_dir() {
        return Err(PatchError::AssetDirNotFound(pwa_dir));
    }

    let assets = copy_assets(&pwa_dir, &build_dir)?;
    let html = patch_index_html(&build_dir)?;
    Ok(PatchReport { build_dir, pwa_dir, assets, html })
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(PatchError::io("resolve", path))?;
    Ok(cwd.join(path))
}
