//! Pipeline context and channel plumbing shared by the walk thread, the digest
//! workers, and the aggregator.

use crossbeam_channel::{Receiver, Sender, bounded};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use crate::cancel::CancelToken;
use crate::error::DigestError;
use crate::types::{DigestOpts, DigestResult};
use crate::utils::config::ChannelCaps;

/// Shared context for the walk thread: root, filters, the run's token, and
/// the slot where the walk parks its terminal error for the aggregator.
pub struct PipelineContext {
    pub root: PathBuf,
    pub follow_links: bool,
    pub exclude: Vec<String>,
    pub token: CancelToken,
    pub walk_error: Arc<Mutex<Option<DigestError>>>,
}

impl PipelineContext {
    /// Park the walk's terminal error. First error wins; later ones are
    /// dropped so a real failure is never overwritten by the shutdown noise
    /// that follows it.
    pub fn record_walk_error(&self, err: DigestError) {
        let _ = self.walk_error.lock().unwrap().get_or_insert(err);
    }
}

/// Handles returned by [`run_pipeline`](crate::pipeline::run_pipeline): the
/// caller drains `result_rx`, then joins the walk and worker threads.
pub struct PipelineHandles {
    pub result_rx: Receiver<DigestResult>,
    pub walk_handle: JoinHandle<usize>,
    pub worker_handles: Vec<JoinHandle<()>>,
    pub walk_error: Arc<Mutex<Option<DigestError>>>,
    pub token: CancelToken,
}

/// Channels and shared state for one run. The walk thread gets `path_tx` and
/// `ctx`; workers get `path_rx` and clones of `result_tx`.
pub struct PipelineChannels {
    pub path_tx: Sender<PathBuf>,
    pub path_rx: Receiver<PathBuf>,
    pub result_tx: Sender<DigestResult>,
    pub result_rx: Receiver<DigestResult>,
    pub walk_error: Arc<Mutex<Option<DigestError>>>,
    pub ctx: PipelineContext,
}

pub fn create_pipeline_channels(
    root: &Path,
    opts: &DigestOpts,
    token: CancelToken,
) -> PipelineChannels {
    let (path_tx, path_rx) = bounded::<PathBuf>(ChannelCaps::PATHS);
    let (result_tx, result_rx) = bounded::<DigestResult>(ChannelCaps::RESULTS);
    let walk_error: Arc<Mutex<Option<DigestError>>> = Arc::new(Mutex::new(None));

    let ctx = PipelineContext {
        root: root.to_path_buf(),
        follow_links: opts.follow_links,
        exclude: opts.exclude.clone(),
        token,
        walk_error: Arc::clone(&walk_error),
    };

    PipelineChannels {
        path_tx,
        path_rx,
        result_tx,
        result_rx,
        walk_error,
        ctx,
    }
}
