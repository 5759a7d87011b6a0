use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{PatchError, Result};

pub const MANIFEST: &str = "manifest.json";
pub const SERVICE_WORKER: &str = "service-worker.js";
pub const ICONS_DIR: &str = "icons";
pub const ICON_EXT: &str = ".png";

/// Files copied into the build directory, relative to it.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct CopyReport {
    pub copied: Vec<PathBuf>,
}

/// Copy the manifest, service worker and `icons/*.png` from `pwa_dir` into
/// `build_dir`, overwriting existing copies.
///
/// Both required files are checked before anything is written, so a
/// `MissingAssets` error leaves `build_dir` untouched.
pub fn copy_assets(pwa_dir: &Path, build_dir: &Path) -> Result<CopyReport> {
    let missing: Vec<&'static str> = [MANIFEST, SERVICE_WORKER]
        .into_iter()
        .filter(|name| !pwa_dir.join(name).is_file())
        .collect();
    if !missing.is_empty() {
        return Err(PatchError::MissingAssets { dir: pwa_dir.to_path_buf(), missing });
    }

    let mut report = CopyReport::default();
    for name in [MANIFEST, SERVICE_WORKER] {
        copy_file(&pwa_dir.join(name), &build_dir.join(name))?;
        report.copied.push(PathBuf::from(name));
    }

    let icons_src = pwa_dir.join(ICONS_DIR);
    if !icons_src.is_dir() {
        log::warn!("no {} directory in {}, skipping icons", ICONS_DIR, pwa_dir.display());
        return Ok(report);
    }
    let icons_dst = build_dir.join(ICONS_DIR);
    fs::create_dir_all(&icons_dst).map_err(PatchError::io("create", &icons_dst))?;

    let entries = fs::read_dir(&icons_src).map_err(PatchError::io("read", &icons_src))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(PatchError::io("read", &icons_src))?;
        let path = entry.path();
        if path.is_file() && is_icon(&entry.file_name().to_string_lossy()) {
            names.push(entry.file_name());
        }
    }
    // read_dir order is platform dependent
    names.sort();
    for name in names {
        copy_file(&icons_src.join(&name), &icons_dst.join(&name))?;
        report.copied.push(Path::new(ICONS_DIR).join(name));
    }
    Ok(report)
}

/// Copy contents and permissions, then carry the source mtime over. A
/// failure to set the mtime only warns; the copy itself has succeeded.
fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    fs::copy(src, dst).map_err(PatchError::io("copy", src))?;
    if let Err(e) = copy_mtime(src, dst) {
        log::warn!("could not preserve mtime on {}: {e}", dst.display());
    }
    log::debug!("copied {} -> {}", src.display(), dst.display());
    Ok(())
}

fn copy_mtime(src: &Path, dst: &Path) -> std::io::Result<()> {
    let modified = fs::metadata(src)?.modified()?;
    fs::File::options().write(true).open(dst)?.set_modified(modified)
}

/// ASCII case-insensitive `.png` suffix match.
fn is_icon(name: &str) -> bool {
    name.len() >= ICON_EXT.len()
        && name.as_bytes()[name.len() - ICON_EXT.len()..].eq_ignore_ascii_case(ICON_EXT.as_bytes())
}
