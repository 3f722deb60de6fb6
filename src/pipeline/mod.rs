//! Pipeline components: cancellation-aware walk, digest workers, aggregation.

pub mod context;
pub mod digest;
pub mod orchestrator;
pub mod walk;

pub use context::{
    PipelineChannels, PipelineContext, PipelineHandles, create_pipeline_channels,
};
pub use digest::spawn_digest_workers;
pub use orchestrator::{collect_digests, run_pipeline, shutdown_pipeline_handles};
pub use walk::{WalkOutcome, run_walk_loop, spawn_walk_thread, to_outcome};
