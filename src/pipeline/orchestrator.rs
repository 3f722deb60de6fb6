//! Pipeline orchestration: wire walk, workers, and aggregation together, and
//! guarantee every thread is joined before a run returns.

use log::debug;
use std::path::Path;
use std::thread::JoinHandle;

use crate::cancel::CancelToken;
use crate::error::DigestError;
use crate::pipeline;
use crate::types::{DigestOpts, DigestReport, DigestResult};
use crate::utils::config::WorkerLimits;

/// Start the walk + digest pipeline. The caller receives from `result_rx`
/// and must join `walk_handle` and `worker_handles` when done (or hand the
/// whole bundle to [`collect_digests`]).
pub fn run_pipeline(
    root: &Path,
    opts: &DigestOpts,
    token: CancelToken,
) -> Result<pipeline::PipelineHandles, DigestError> {
    let meta = std::fs::metadata(root).map_err(|e| DigestError::Walk {
        path: Some(root.to_path_buf()),
        message: e.to_string(),
    })?;
    if !meta.is_dir() {
        return Err(DigestError::Walk {
            path: Some(root.to_path_buf()),
            message: "not a directory".to_string(),
        });
    }

    let workers = WorkerLimits::current().effective(opts.workers);
    debug!("digesting {} with {} workers", root.display(), workers);

    let channels = pipeline::create_pipeline_channels(root, opts, token.clone());

    let walk_handle = pipeline::spawn_walk_thread(channels.path_tx, channels.ctx);

    let worker_handles =
        pipeline::spawn_digest_workers(channels.path_rx, &channels.result_tx, &token, workers);

    // Dropping the orchestrator's sender leaves the workers as the only
    // producers; the result channel closes once the last worker exits.
    drop(channels.result_tx);

    Ok(pipeline::PipelineHandles {
        result_rx: channels.result_rx,
        walk_handle,
        worker_handles,
        walk_error: channels.walk_error,
        token,
    })
}

/// Aggregator: drain the result stream into a report on the calling thread.
///
/// The report map has a single writer (this thread); workers only ever talk
/// through the channel. An error record is fatal unless `keep_going`: the
/// drain stops, the token fires, and the error is returned once every thread
/// has been joined. A walk error discovered after the stream ends still fails
/// the run. Precedence: read error seen while draining, then traversal error,
/// then external cancellation.
pub fn collect_digests(
    handles: pipeline::PipelineHandles,
    keep_going: bool,
) -> Result<DigestReport, DigestError> {
    let pipeline::PipelineHandles {
        result_rx,
        walk_handle,
        worker_handles,
        walk_error,
        token,
    } = handles;

    let mut report = DigestReport::default();
    let mut fatal: Option<DigestError> = None;
    while let Ok(DigestResult { path, digest }) = result_rx.recv() {
        match digest {
            Ok(d) => {
                // Duplicate paths overwrite silently; an acyclic walk does
                // not produce them.
                report.files.insert(path, d);
            }
            Err(err) if keep_going => {
                log::warn!("skipping {}: {}", path.display(), err);
                report.skipped.push((path, err.to_string()));
            }
            Err(err) => {
                fatal = Some(DigestError::Read { path, source: err });
                break;
            }
        }
    }

    // Cancel before joining, on every exit path: stops the walk, unblocks any
    // worker still parked on a send, and on the success path makes sure no
    // thread outlives the call.
    let externally_cancelled = token.is_cancelled();
    token.cancel();
    let walked = shutdown_pipeline_handles(walk_handle, worker_handles)?;
    debug!(
        "walk sent {} paths, {} digested, {} skipped",
        walked,
        report.files.len(),
        report.skipped.len()
    );

    if let Some(err) = fatal {
        return Err(err);
    }
    if externally_cancelled {
        return Err(DigestError::Cancelled);
    }
    match walk_error.lock().unwrap().take() {
        None => Ok(report),
        Some(err) => Err(err),
    }
}

/// Join walk and worker threads after the result stream is drained.
pub fn shutdown_pipeline_handles(
    walk_handle: JoinHandle<usize>,
    worker_handles: Vec<JoinHandle<()>>,
) -> Result<usize, DigestError> {
    let walked = walk_handle.join().map_err(|_| DigestError::Walk {
        path: None,
        message: "walk thread panicked".to_string(),
    })?;
    for h in worker_handles {
        let _ = h.join();
    }
    Ok(walked)
}
