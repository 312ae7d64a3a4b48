#![deny(missing_docs)]

//! # Resource Sources
//!
//! Lookup of sibling resource descriptions by name. Used by example synthesis
//! (to expand complex types), by create pages (to read the element type's
//! `createDescription`) and by the previous-run merge.
//!
//! Lookups never fail loudly: a missing or unreadable file is `None`, and the
//! caller degrades locally.

use crate::error::{AppError, AppResult};
use crate::model::ResourceDescription;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Interface for resolving a resource description by (case-insensitive) name.
///
/// Abstracted so tests and embedders can serve descriptions from memory.
pub trait ResourceSource {
    /// Returns the description for `name`, or `None` if it cannot be located.
    fn load(&self, name: &str) -> Option<Rc<ResourceDescription>>;
}

/// File-backed source: `<root>/<lower-cased name>.json`.
///
/// Parsed files are cached for the lifetime of the source, including misses.
pub struct DirectorySource {
    root: PathBuf,
    cache: RefCell<HashMap<String, Option<Rc<ResourceDescription>>>>,
}

impl DirectorySource {
    /// Opens a source over `root`. A missing folder is `AppError::MissingInput`.
    pub fn open(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(AppError::MissingInput(root));
        }
        Ok(Self {
            root,
            cache: RefCell::new(HashMap::new()),
        })
    }

    /// The folder this source reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a resource named `name` is expected at.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.json", name.to_lowercase()))
    }

    fn read(&self, name: &str) -> Option<Rc<ResourceDescription>> {
        let path = self.path_for(name);
        if !path.is_file() {
            tracing::debug!(resource = name, path = %path.display(), "resource file not found");
            return None;
        }
        match ResourceDescription::from_path(&path) {
            Ok(resource) => Some(Rc::new(resource)),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable resource file");
                None
            }
        }
    }
}

impl ResourceSource for DirectorySource {
    fn load(&self, name: &str) -> Option<Rc<ResourceDescription>> {
        let key = name.to_lowercase();
        if let Some(hit) = self.cache.borrow().get(&key) {
            return hit.clone();
        }
        let loaded = self.read(name);
        self.cache.borrow_mut().insert(key, loaded.clone());
        loaded
    }
}

/// In-memory source keyed by lower-cased resource name.
#[derive(Default)]
pub struct MemorySource {
    resources: HashMap<String, Rc<ResourceDescription>>,
}

impl MemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a resource under its own name.
    pub fn insert(&mut self, resource: ResourceDescription) {
        self.resources
            .insert(resource.name.to_lowercase(), Rc::new(resource));
    }

    /// Builder-style variant of [`MemorySource::insert`].
    pub fn with(mut self, resource: ResourceDescription) -> Self {
        self.insert(resource);
        self
    }
}

impl ResourceSource for MemorySource {
    fn load(&self, name: &str) -> Option<Rc<ResourceDescription>> {
        self.resources.get(&name.to_lowercase()).cloned()
    }
}
