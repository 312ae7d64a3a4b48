#![deny(missing_docs)]

//! # Generate Command
//!
//! Renders the Markdown reference for a folder of resource descriptions.
//!
//! 1. **Settings**: optional YAML file, then flag and environment overrides.
//! 2. **Inputs**: opens the resource folder (fatal if absent), the enum file and
//!    the optional previous-run folder.
//! 3. **Existing output**: either wiped (`--clean`) or registered so existing
//!    create pages are not overwritten.
//! 4. **Render**: every `*.json` file in the input folder, in file-name order.
//! 5. **Persist** and report.

use crate::error::CliResult;
use restdoc_core::tracker::naming::{API_FOLDER, RESOURCES_FOLDER};
use restdoc_core::{
    ArtifactRegistry, DirectorySource, EnumRegistry, OutputFolder, ResourceDescription,
    ResourceSource, RunConfig, RunCounters, Session,
};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Folder of resource description files (`<name>.json`).
    #[clap(long, default_value = "jsonFiles/rest")]
    pub input: PathBuf,

    /// Enum definitions file.
    #[clap(long, default_value = "jsonFiles/settings/restenums.json")]
    pub enums: PathBuf,

    /// Resource descriptions from the previous run; hand-edited text is kept.
    #[clap(long, default_value = "jsonFiles/rest_previous")]
    pub previous: PathBuf,

    /// Output root; pages go to `resources/` and `api/` below it.
    #[clap(long, default_value = "markdown")]
    pub output: PathBuf,

    /// Optional YAML settings file.
    #[clap(long)]
    pub settings: Option<PathBuf>,

    /// API version label (e.g. `v1.0`, `beta`).
    #[clap(long, env = "RESTDOC_API_VERSION")]
    pub api_version: Option<String>,

    /// Author written into each page's metadata header.
    #[clap(long, env = "RESTDOC_AUTHOR")]
    pub author: Option<String>,

    /// Product written into each page's metadata header.
    #[clap(long, env = "RESTDOC_PRODUCT")]
    pub product: Option<String>,

    /// Delete existing `resources/` and `api/` output before rendering.
    #[clap(long)]
    pub clean: bool,
}

/// Outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Input files rendered.
    pub processed: usize,
    /// Input files skipped because they could not be parsed.
    pub skipped: usize,
    /// Pages written.
    pub written: usize,
    /// Engine counters.
    pub counters: RunCounters,
}

/// Executes the generate command.
pub fn execute(args: &GenerateArgs) -> CliResult<RunReport> {
    let config = load_config(args)?;
    let source = DirectorySource::open(&args.input)?;
    let enums = load_enums(&args.enums)?;
    let prior = open_previous(&args.previous);

    let existing = if args.clean {
        clean_output(&args.output)?;
        ArtifactRegistry::new()
    } else {
        scan_output(&args.output)
    };

    let inputs = input_files(source.root());
    let mut session =
        Session::new(config, enums, Box::new(source), prior)?.with_artifacts(existing);

    let mut processed = 0;
    let mut skipped = 0;
    for path in &inputs {
        match ResourceDescription::from_path(path) {
            Ok(resource) => {
                session.process(resource);
                processed += 1;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable resource file");
                skipped += 1;
            }
        }
    }
    session.finish();

    let counters = session.counters();
    let written = session.into_artifacts().persist(&args.output)?;

    println!("*** OK. Processed {} input files", processed);
    println!("{}", counters);

    Ok(RunReport {
        processed,
        skipped,
        written,
        counters,
    })
}

fn load_config(args: &GenerateArgs) -> CliResult<RunConfig> {
    let mut config = match &args.settings {
        Some(path) => RunConfig::from_yaml(&fs::read_to_string(path)?)?,
        None => RunConfig::default(),
    };
    if let Some(version) = &args.api_version {
        config.version = version.clone();
    }
    if let Some(author) = &args.author {
        config.author = author.clone();
    }
    if let Some(product) = &args.product {
        config.product = product.clone();
    }
    Ok(config)
}

fn load_enums(path: &Path) -> CliResult<EnumRegistry> {
    if !path.is_file() {
        tracing::warn!(path = %path.display(), "enum file not found; no enum values will be listed");
        return Ok(EnumRegistry::new());
    }
    Ok(EnumRegistry::from_path(path)?)
}

fn open_previous(path: &Path) -> Option<Box<dyn ResourceSource>> {
    match DirectorySource::open(path) {
        Ok(source) => Some(Box::new(source)),
        Err(_) => {
            tracing::debug!(path = %path.display(), "no previous-run folder");
            None
        }
    }
}

/// `*.json` files directly inside `dir`, sorted by file name.
fn input_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect()
}

fn clean_output(root: &Path) -> CliResult<()> {
    for folder in [RESOURCES_FOLDER, API_FOLDER] {
        let dir = root.join(folder);
        if dir.is_dir() {
            tracing::info!(path = %dir.display(), "removing previous output");
            fs::remove_dir_all(&dir)?;
        }
    }
    Ok(())
}

/// Registers every page already present under the output root.
fn scan_output(root: &Path) -> ArtifactRegistry {
    let mut existing = Vec::new();
    for folder in [OutputFolder::Resources, OutputFolder::Api] {
        let dir = root.join(folder.as_str());
        if !dir.is_dir() {
            continue;
        }
        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            existing.push((folder, entry.file_name().to_string_lossy().to_string()));
        }
    }
    tracing::debug!(count = existing.len(), "existing pages registered");
    ArtifactRegistry::with_existing(existing)
}
