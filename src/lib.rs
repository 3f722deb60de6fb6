//! Treesum: concurrent content digests for directory trees.
//!
//! One walk thread enumerates regular files, a bounded pool of workers hashes
//! them, and the calling thread folds the results into a map:
//! walk → path channel → digest workers → result channel → aggregator.
//! A shared [`CancelToken`] stops every stage in bounded time on abort.

pub mod cancel;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod types;
pub mod utils;

pub use cancel::CancelToken;
pub use error::DigestError;
/// Re-export types for API
pub use types::*;

use log::debug;
use std::path::Path;

/// Digest every regular file under `root` and return the path → digest map.
///
/// Returns either a complete [`DigestReport`] or a single [`DigestError`];
/// never a partial map. The first unreadable file fails the run unless
/// [`DigestOpts::keep_going`] is set.
pub fn digest_dir(root: &Path, opts: &DigestOpts) -> Result<DigestReport, DigestError> {
    digest_dir_with_token(root, opts, CancelToken::new())
}

/// Like [`digest_dir`], with a caller-supplied [`CancelToken`] so external
/// shutdown (Ctrl+C, a deadline) can stop the run mid-flight. A run cancelled
/// from outside returns [`DigestError::Cancelled`] rather than a partial map.
pub fn digest_dir_with_token(
    root: &Path,
    opts: &DigestOpts,
    token: CancelToken,
) -> Result<DigestReport, DigestError> {
    debug!(
        "{} CONFIG:{:?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        opts
    );
    let handles = pipeline::run_pipeline(root, opts, token)?;
    pipeline::collect_digests(handles, opts.keep_going)
}
