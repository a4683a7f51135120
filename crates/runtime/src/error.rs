//! Errors surfaced by the runtime.
//!
//! Wraps loader failures with the directory they came from so callers can
//! report them with consistent context.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to load content from {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("data directory {} does not exist", .0.display())]
    MissingDataDir(PathBuf),
}
