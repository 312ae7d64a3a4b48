//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! Only boundary operations return errors: opening the input folder, parsing a
//! resource or enum file, validating the run configuration and persisting the
//! rendered pages. Everything inside a single resource's render degrades locally.

use derive_more::{Display, From};
use std::path::PathBuf;

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// A resource or enum file is not valid JSON for the expected shape.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// A settings file is not valid YAML for the expected shape.
    #[display("YAML Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// The required input folder is absent. Fatal for the whole run.
    #[from(ignore)]
    #[display("Input folder not found: {}", _0.display())]
    MissingInput(PathBuf),

    /// The run configuration is unusable (e.g. a malformed server origin).
    #[from(ignore)]
    #[display("Configuration Error: {_0}")]
    Config(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
