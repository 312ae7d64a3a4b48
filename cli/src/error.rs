#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate, and their process exit codes.

use derive_more::{Display, From};
use restdoc_core::AppError;

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// IO Error wrapper.
    #[display("IO Error: {}", _0)]
    Io(std::io::Error),

    /// Error raised by the generation engine.
    #[display("{}", _0)]
    Core(AppError),

    /// General failure message.
    #[display("Operation failed: {}", _0)]
    General(String),
}

impl CliError {
    /// Process exit code: 2 for a missing input folder, 3 for bad settings, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Core(AppError::MissingInput(_)) => 2,
            CliError::Core(AppError::Config(_)) | CliError::Core(AppError::Yaml(_)) => 3,
            _ => 1,
        }
    }
}

/// Manual implementation of the standard Error trait.
///
/// We implement this manually (instead of `derive(Error)`) because the `General(String)`
/// variant contains a `String`, which does not implement `std::error::Error`, causing
/// auto-derived `source()` implementations to fail compilation.
impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        let missing: CliError = AppError::MissingInput(PathBuf::from("jsonFiles/rest")).into();
        assert_eq!(missing.exit_code(), 2);
        assert_eq!(
            missing.to_string(),
            "Input folder not found: jsonFiles/rest"
        );

        let config: CliError = AppError::Config("bad origin".into()).into();
        assert_eq!(config.exit_code(), 3);

        let io: CliError = std::io::Error::new(std::io::ErrorKind::Other, "disk").into();
        assert_eq!(io.exit_code(), 1);
        assert_eq!(CliError::General("x".into()).exit_code(), 1);
    }
}
