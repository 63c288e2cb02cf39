mod chunk_aggregator;
mod chunk_classification;
mod guard_service;
mod verdict_fusion;

pub use chunk_aggregator::aggregate;
pub use chunk_classification::classify_chunks;
pub use guard_service::{GuardError, GuardService};
pub use verdict_fusion::{MEDIA_DETECTED_MARKER, decide, fuse};
