use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("build dir not found: {}", .0.display())]
    BuildDirNotFound(PathBuf),
    #[error("PWA dir not found: {}", .0.display())]
    AssetDirNotFound(PathBuf),
    #[error("missing PWA assets in {}: {} not found", dir.display(), missing.join(", "))]
    MissingAssets { dir: PathBuf, missing: Vec<&'static str> },
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),
    #[error("{tag} tag not found")]
    MalformedDocument { tag: &'static str },
    #[error("{action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PatchError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| PatchError::Io { action, path, source }
    }
}

pub type Result<T> = std::result::Result<T, PatchError>;
