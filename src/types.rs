//! Public types for the treesum API and pipeline.

use std::collections::HashMap;
use std::path::PathBuf;

/// Fixed-size content digest (blake3, 32 bytes).
pub type Digest = [u8; 32];

/// One record from a digest worker: the file's digest, or the read error that
/// prevented it. Errors ride the stream so the aggregator decides their fate;
/// the worker that saw one keeps going.
#[derive(Debug)]
pub struct DigestResult {
    pub path: PathBuf,
    pub digest: std::io::Result<Digest>,
}

/// Map of path → digest for every file hashed in a run. Keys are the paths
/// exactly as walked (rooted at the directory passed in).
pub type DigestMap = HashMap<PathBuf, Digest>;

/// Result of a full run: digests for every readable file, plus the paths that
/// were skipped when [`DigestOpts::keep_going`] is set (empty otherwise).
#[derive(Debug, Default)]
pub struct DigestReport {
    pub files: DigestMap,
    pub skipped: Vec<(PathBuf, String)>,
}

/// Options for [`digest_dir`](crate::digest_dir).
#[derive(Clone, Debug, Default)]
pub struct DigestOpts {
    /// Worker thread count. When None, derived from available threads (capped).
    pub workers: Option<usize>,
    /// Follow symbolic links during the walk.
    pub follow_links: bool,
    /// Exclude patterns (glob syntax, e.g. `node_modules`, `*.log`). A
    /// matching directory is pruned along with its subtree.
    pub exclude: Vec<String>,
    /// Skip unreadable files instead of failing the whole run on the first one.
    pub keep_going: bool,
}
