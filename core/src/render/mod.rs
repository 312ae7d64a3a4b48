#![deny(missing_docs)]

//! # Document Rendering
//!
//! Turns a resource description into Markdown pages. Every page function takes
//! an explicit [`RenderEnv`] plus the resource it renders for; nothing is read
//! from ambient state, so a relationship list page is rendered against a
//! shadow copy of its owner without touching the owner itself.

pub mod blocks;
pub mod collections;
mod examples;
pub mod get;
pub mod method;
pub mod patch;
pub mod resource;

use crate::config::RunConfig;
use crate::enums::EnumRegistry;
use crate::samples::ExampleSynthesizer;
use crate::source::ResourceSource;
use crate::type_mapping::TypeRegistry;

pub use collections::{render_enums, render_service_root};
pub use get::render_get;
pub use method::render_method;
pub use patch::render_patch;
pub use resource::render_resource;

/// Run-wide, read-only inputs shared by every page.
#[derive(Clone, Copy)]
pub struct RenderEnv<'a> {
    /// Run settings.
    pub config: &'a RunConfig,
    /// Enum definitions for description suffixes and the enum page.
    pub enums: &'a EnumRegistry,
    /// Type classifier.
    pub types: &'a TypeRegistry,
    /// Sibling resources, for examples and create descriptions.
    pub source: &'a dyn ResourceSource,
}

impl<'a> RenderEnv<'a> {
    /// Bundles the run inputs.
    pub fn new(
        config: &'a RunConfig,
        enums: &'a EnumRegistry,
        types: &'a TypeRegistry,
        source: &'a dyn ResourceSource,
    ) -> Self {
        Self {
            config,
            enums,
            types,
            source,
        }
    }

    /// Example synthesizer over this environment's source.
    pub fn samples(&self) -> ExampleSynthesizer<'a> {
        ExampleSynthesizer::new(self.source, self.types, self.enums)
    }
}
