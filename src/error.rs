//! Error taxonomy for the digest pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by [`digest_dir`](crate::digest_dir). A run either returns
/// a complete report or exactly one of these; partial maps are never returned.
#[derive(Debug, Error)]
pub enum DigestError {
    /// The directory walk itself could not continue (unreadable directory,
    /// broken symlink under `follow_links`). Always fatal.
    #[error("directory walk failed: {message}")]
    Walk {
        path: Option<PathBuf>,
        message: String,
    },

    /// A single file could not be read while digesting. Fatal unless
    /// `keep_going` is set, in which case the file is skipped instead.
    #[error("read failed for {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The run was cancelled from outside the pipeline (caller token, Ctrl+C)
    /// before it completed. Internal aborts report their underlying error
    /// instead of this.
    #[error("digest run cancelled")]
    Cancelled,
}
