use std::collections::TryReserveError;
use std::path::PathBuf;

/// Errors raised while building scenes, rendering, or writing images
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed scene description: {0}")]
    SceneFormat(#[from] serde_json::Error),

    #[error("Failed to allocate {bytes} bytes for a {width}x{height} pixel buffer")]
    Allocation {
        width: usize,
        height: usize,
        bytes: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("Invalid render settings: {0}")]
    InvalidSettings(String),

    #[error("Failed to start render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Error {
        Error::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
