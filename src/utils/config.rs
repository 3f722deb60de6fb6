//! Application configuration constants.
//! Tuning and thresholds in one place.

// ---- Worker pool ----

/// Worker pool limits. Use [`WorkerLimits::current()`] to fill `available`
/// from rayon; the rest are const.
#[derive(Clone, Copy, Debug)]
pub struct WorkerLimits {
    /// Available threads (from rayon); set by [`WorkerLimits::current()`].
    pub available: usize,
    /// Minimum worker count.
    pub floor: usize,
    /// Ceiling for the derived default; more workers than this mostly adds
    /// file-descriptor pressure on local disks.
    pub cap: usize,
}

impl Default for WorkerLimits {
    fn default() -> Self {
        Self {
            available: 0, // use current() to set from rayon
            floor: Self::FLOOR_WORKERS,
            cap: Self::MAX_WORKERS,
        }
    }
}

impl WorkerLimits {
    pub const FLOOR_WORKERS: usize = 1;
    pub const MAX_WORKERS: usize = 20;

    /// Build limits with `available` set from `rayon::current_num_threads()`.
    pub fn current() -> Self {
        Self {
            available: rayon::current_num_threads(),
            ..Self::default()
        }
    }

    /// Effective worker count: an explicit request is honored (held at the
    /// floor); otherwise available threads clamped to [floor, cap].
    pub fn effective(&self, requested: Option<usize>) -> usize {
        match requested {
            Some(n) => n.max(self.floor),
            None => self.available.clamp(self.floor, self.cap),
        }
    }
}

// ---- Hashing ----

/// Hashing I/O thresholds and buffer sizes.
pub struct HashingConsts;

impl HashingConsts {
    /// File size above which digesting uses memory-mapped I/O (bytes). 100 MB.
    pub const MMAP_THRESHOLD: u64 = 100 * 1024 * 1024;
    /// Chunk size for reading files below the mmap threshold (bytes). 1 MB.
    pub const READ_CHUNK_SIZE: usize = 1024 * 1024;
}

// ---- Channels ----

/// Capacities for the path and result hand-offs. Bounded so a stalled stage
/// exerts backpressure instead of buffering the whole tree; cancellation
/// keeps a blocked send from ever wedging shutdown.
pub struct ChannelCaps;

impl ChannelCaps {
    pub const PATHS: usize = 1024;
    pub const RESULTS: usize = 1024;
}
