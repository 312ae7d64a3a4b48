#![deny(missing_docs)]

//! # Run Configuration
//!
//! Settings folded into every rendered page: API version label, author and
//! product identifiers, the example server origin, and the fixed page-end marker.
//! Deserializable from the YAML settings file; every field has a default.

use crate::error::{AppError, AppResult};
use serde::Deserialize;
use url::Url;

/// Version label that switches on the preview disclaimer.
pub const BETA_VERSION: &str = "beta";

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// API version label (e.g. `v1.0`, `beta`).
    pub version: String,
    /// Author identifier for the page metadata header.
    pub author: String,
    /// Product identifier for the page metadata header.
    pub product: String,
    /// Origin the example requests are addressed to; the version is appended.
    pub server_base: String,
    /// Namespace prefixed to `@odata.type` annotations.
    pub namespace: String,
    /// Fixed uuid written into the page-end marker.
    pub page_uuid: String,
    /// Fixed timestamp written into the page-end marker.
    pub page_timestamp: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            version: "v1.0".to_string(),
            author: String::new(),
            product: String::new(),
            server_base: "https://graph.microsoft.com".to_string(),
            namespace: "microsoft.graph".to_string(),
            page_uuid: "16cd6b66-4b1a-43a1-adaf-3a886856ed98".to_string(),
            page_timestamp: "2019-02-04 14:57:30 UTC".to_string(),
        }
    }
}

impl RunConfig {
    /// Parses settings from YAML; absent keys keep their defaults.
    pub fn from_yaml(yaml: &str) -> AppResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Checks the settings that cannot be defaulted sensibly.
    pub fn validate(&self) -> AppResult<()> {
        let url = Url::parse(&self.server_base).map_err(|e| {
            AppError::Config(format!("invalid server_base '{}': {}", self.server_base, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "server_base must be http(s), got '{}'",
                url.scheme()
            )));
        }
        if self.version.trim().is_empty() {
            return Err(AppError::Config("version label must not be empty".into()));
        }
        Ok(())
    }

    /// True when the version label is `beta` (any case).
    pub fn is_beta(&self) -> bool {
        self.version.eq_ignore_ascii_case(BETA_VERSION)
    }

    /// Example request origin: `<server_base>/<version>`.
    pub fn server_origin(&self) -> String {
        format!("{}/{}", self.server_base.trim_end_matches('/'), self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = RunConfig::default();
        assert!(cfg.validate().is_ok());
        assert!(!cfg.is_beta());
        assert_eq!(cfg.server_origin(), "https://graph.microsoft.com/v1.0");
    }

    #[test]
    fn test_yaml_overrides_subset() {
        let cfg = RunConfig::from_yaml("version: Beta\nauthor: jdoe\nserver_base: https://example.org/\n")
            .unwrap();
        assert!(cfg.is_beta());
        assert_eq!(cfg.author, "jdoe");
        assert_eq!(cfg.namespace, "microsoft.graph");
        assert_eq!(cfg.server_origin(), "https://example.org/Beta");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(RunConfig::from_yaml("  \n").unwrap(), RunConfig::default());
    }

    #[test]
    fn test_invalid_server_base() {
        let cfg = RunConfig {
            server_base: "graph.microsoft.com".into(),
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(AppError::Config(_))));

        let cfg = RunConfig {
            server_base: "ftp://graph.microsoft.com".into(),
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(AppError::Config(_))));
    }
}
