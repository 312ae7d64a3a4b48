#![deny(missing_docs)]

//! # Cross-Reference Tracking
//!
//! File naming, link construction, the registry of produced pages and the
//! per-run counters.

pub mod counters;
pub mod naming;
pub mod registry;

pub use counters::RunCounters;
pub use registry::{ArtifactRegistry, OutputArtifact, OutputFolder};
