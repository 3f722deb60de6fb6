//! Walk thread: enumerate regular files under the root and feed the path
//! channel, stopping at the first traversal error or on cancellation.

use crossbeam_channel::{Sender, select};
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

use crate::engine::tools::should_include;
use crate::error::DigestError;

use super::context::PipelineContext;

/// One step of the walk: a regular file to digest, or the walk's terminal
/// error. Directories and other non-file kinds are traversed, never emitted.
pub enum WalkOutcome {
    File(PathBuf),
    Err { msg: String, path: Option<PathBuf> },
}

/// Convert a walkdir result into [`WalkOutcome`], dropping non-file entries.
pub fn to_outcome(r: Result<walkdir::DirEntry, walkdir::Error>) -> Option<WalkOutcome> {
    match r {
        Ok(entry) if entry.file_type().is_file() => Some(WalkOutcome::File(entry.into_path())),
        Ok(_) => None,
        Err(err) => Some(WalkOutcome::Err {
            msg: format!("{}", err),
            path: err.path().map(PathBuf::from),
        }),
    }
}

pub fn spawn_walk_thread(path_tx: Sender<PathBuf>, ctx: PipelineContext) -> JoinHandle<usize> {
    thread::spawn(move || {
        let exclude = ctx.exclude.clone();
        let iter = walkdir::WalkDir::new(&ctx.root)
            .follow_links(ctx.follow_links)
            .into_iter()
            // filter_entry prunes an excluded directory's whole subtree.
            .filter_entry(move |entry| should_include(entry.path(), &exclude))
            .filter_map(to_outcome);
        run_walk_loop(path_tx, ctx, iter)
    })
}

/// Drive the walk: send each file to `path_tx`, stop at the first walk error
/// (parked in the context, first error wins) or once the token is cancelled.
/// Every hand-off is a race between `send` and the token so a full channel
/// can never wedge the walk after an abort. Drops `path_tx` on the way out,
/// closing the path channel so workers drain and exit. Returns the number of
/// paths sent.
pub fn run_walk_loop<I>(path_tx: Sender<PathBuf>, ctx: PipelineContext, iter: I) -> usize
where
    I: Iterator<Item = WalkOutcome>,
{
    let mut count = 0_usize;
    for outcome in iter {
        if ctx.token.is_cancelled() {
            // Graceful shutdown, not a filesystem failure.
            ctx.record_walk_error(DigestError::Cancelled);
            break;
        }
        match outcome {
            WalkOutcome::File(path) => {
                let sent = select! {
                    send(path_tx, path) -> res => res.is_ok(),
                    recv(ctx.token.observed()) -> _ => false,
                };
                if !sent {
                    // Either the token fired or every worker already exited;
                    // both mean the run is shutting down.
                    if ctx.token.is_cancelled() {
                        ctx.record_walk_error(DigestError::Cancelled);
                    }
                    break;
                }
                count += 1;
            }
            WalkOutcome::Err { msg, path } => {
                ctx.record_walk_error(DigestError::Walk { path, message: msg });
                break;
            }
        }
    }
    drop(path_tx);
    count
}
