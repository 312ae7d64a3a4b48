#![deny(missing_docs)]

//! # Restdoc Core
//!
//! Turns resource-description JSON files into Markdown API reference pages:
//! one overview page per resource, one page per operation, a service root and
//! an enumeration page.

/// Shared error types.
pub mod error;

/// Resource description data model.
pub mod model;

/// Enumeration registry.
pub mod enums;

/// Primitive type classification.
pub mod type_mapping;

/// Lookup of resource descriptions by type name.
pub mod source;

/// Run settings.
pub mod config;

/// Request line construction.
pub mod paths;

/// Example payload synthesis.
pub mod samples;

/// Operation classification.
pub mod affordances;

/// Output naming, page registry and counters.
pub mod tracker;

/// Markdown page renderers.
pub mod render;

/// Carry-over of hand-edited text from a previous run.
pub mod prior;

/// Run orchestration.
pub mod session;

pub use affordances::{classify_affordances, Affordance, AffordanceSet, RelationshipTarget};
pub use config::RunConfig;
pub use enums::{EnumDefinition, EnumMember, EnumRegistry};
pub use error::{AppError, AppResult};
pub use model::{Method, Parameter, Property, ResourceDescription, RestPaths};
pub use paths::{request_lines, OperationKind, RequestSpec, PATH_SENTINEL};
pub use samples::ExampleSynthesizer;
pub use session::Session;
pub use source::{DirectorySource, MemorySource, ResourceSource};
pub use tracker::{ArtifactRegistry, OutputArtifact, OutputFolder, RunCounters};
pub use type_mapping::{TypeCategory, TypeRegistry};
