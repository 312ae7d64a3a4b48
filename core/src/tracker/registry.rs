#![deny(missing_docs)]

//! # Artifact Registry
//!
//! Write-once store of rendered pages keyed by (folder, file name).
//!
//! Pages that already exist on disk from a previous run can be registered up
//! front; [`ArtifactRegistry::exists`] then lets the renderer skip pages that
//! must not be clobbered.

use crate::error::AppResult;
use crate::tracker::naming::{API_FOLDER, RESOURCES_FOLDER};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

/// Output folder of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutputFolder {
    /// Resource overview pages, service root and enums.
    Resources,
    /// Operation pages.
    Api,
}

impl OutputFolder {
    /// Folder name relative to the output root.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFolder::Resources => RESOURCES_FOLDER,
            OutputFolder::Api => API_FOLDER,
        }
    }
}

impl Display for OutputFolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One rendered page: ordered Markdown blocks bound to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    /// Destination folder.
    pub folder: OutputFolder,
    /// Sanitized file name.
    pub file_name: String,
    /// Page content in order.
    pub blocks: Vec<String>,
}

impl OutputArtifact {
    /// Creates an artifact.
    pub fn new(folder: OutputFolder, file_name: impl Into<String>, blocks: Vec<String>) -> Self {
        Self {
            folder,
            file_name: file_name.into(),
            blocks,
        }
    }

    /// `resources/message.md`
    pub fn relative_path(&self) -> PathBuf {
        Path::new(self.folder.as_str()).join(&self.file_name)
    }

    /// Concatenated page text.
    pub fn contents(&self) -> String {
        self.blocks.concat()
    }
}

type ArtifactKey = (OutputFolder, String);

/// Registry of pages produced by a run.
#[derive(Debug, Default)]
pub struct ArtifactRegistry {
    artifacts: BTreeMap<ArtifactKey, OutputArtifact>,
    existing: BTreeSet<ArtifactKey>,
}

impl ArtifactRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry aware of pages already on disk.
    pub fn with_existing<I, S>(existing: I) -> Self
    where
        I: IntoIterator<Item = (OutputFolder, S)>,
        S: Into<String>,
    {
        Self {
            artifacts: BTreeMap::new(),
            existing: existing
                .into_iter()
                .map(|(folder, name)| (folder, name.into()))
                .collect(),
        }
    }

    /// True if the page was rendered this run or pre-exists on disk.
    pub fn exists(&self, folder: OutputFolder, file_name: &str) -> bool {
        let key = (folder, file_name.to_string());
        self.artifacts.contains_key(&key) || self.existing.contains(&key)
    }

    /// Records a page. A second page with the same identity is dropped.
    ///
    /// Returns `true` if the artifact was stored.
    pub fn record(&mut self, artifact: OutputArtifact) -> bool {
        let key = (artifact.folder, artifact.file_name.clone());
        if self.artifacts.contains_key(&key) {
            tracing::warn!(
                path = %artifact.relative_path().display(),
                "duplicate page ignored"
            );
            return false;
        }
        self.artifacts.insert(key, artifact);
        true
    }

    /// Looks up a recorded page.
    pub fn get(&self, folder: OutputFolder, file_name: &str) -> Option<&OutputArtifact> {
        self.artifacts.get(&(folder, file_name.to_string()))
    }

    /// Recorded pages in (folder, file name) order.
    pub fn iter(&self) -> impl Iterator<Item = &OutputArtifact> {
        self.artifacts.values()
    }

    /// Number of recorded pages.
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// True when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Writes every recorded page below `root`. Returns the number written.
    pub fn persist(&self, root: &Path) -> AppResult<usize> {
        for folder in [OutputFolder::Resources, OutputFolder::Api] {
            fs::create_dir_all(root.join(folder.as_str()))?;
        }
        for artifact in self.artifacts.values() {
            let path = root.join(artifact.relative_path());
            fs::write(&path, artifact.contents())?;
            tracing::trace!(path = %path.display(), "page written");
        }
        Ok(self.artifacts.len())
    }
}
