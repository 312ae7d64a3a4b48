#![deny(missing_docs)]

//! # Enum Registry
//!
//! Enumeration definitions loaded once per run from the settings file
//! (`{ "<enum>": { "options": { "<member>": { "value": ... } } } }`).
//! Member order is the file's order.

use crate::error::AppResult;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// A single enumeration member.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EnumMember {
    /// Member value; string, number or null upstream.
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

impl EnumMember {
    /// Value as rendered in the enum table (empty for null).
    pub fn display_value(&self) -> String {
        match &self.value {
            None | Some(serde_json::Value::Null) => String::new(),
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// One enumeration type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EnumDefinition {
    /// Members keyed by name. `None` when the upstream entry has no options block.
    #[serde(default)]
    pub options: Option<IndexMap<String, EnumMember>>,
}

impl EnumDefinition {
    /// Member names in declaration order.
    pub fn member_names(&self) -> Vec<&str> {
        self.options
            .iter()
            .flat_map(|opts| opts.keys().map(String::as_str))
            .collect()
    }
}

/// Mapping from enum type name to its definition. Read-only after load.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct EnumRegistry {
    enums: IndexMap<String, EnumDefinition>,
}

impl EnumRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the registry from JSON text.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses the registry file.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Adds or replaces a definition.
    pub fn insert(&mut self, name: impl Into<String>, definition: EnumDefinition) {
        self.enums.insert(name.into(), definition);
    }

    /// Exact-name lookup.
    pub fn get(&self, name: &str) -> Option<&EnumDefinition> {
        self.enums.get(name)
    }

    /// Case-insensitive lookup, used when classifying data types.
    pub fn find(&self, name: &str) -> Option<&EnumDefinition> {
        self.get(name).or_else(|| {
            self.enums
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v)
        })
    }

    /// All definitions in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &EnumDefinition)> {
        self.enums.iter()
    }

    /// Names of every registered enum.
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.enums.keys()
    }

    /// Number of registered enums.
    pub fn len(&self) -> usize {
        self.enums.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.enums.is_empty()
    }

    /// The `` Possible values are: `a`, `b`.`` suffix for a known enum.
    ///
    /// Unknown names yield `None`; callers append nothing.
    pub fn possible_values(&self, enum_name: Option<&str>) -> Option<String> {
        let definition = self.get(enum_name?)?;
        Some(format!(
            " Possible values are: `{}`.",
            definition.member_names().join("`, `")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> EnumRegistry {
        EnumRegistry::from_json(
            r#"{
                "importance": {"options": {"low": {"value": "0"}, "normal": {"value": "1"}, "high": {"value": null}}},
                "bodyType": {"options": {"text": {"value": 0}, "html": {"value": 1}}},
                "broken": {}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_possible_values_known_enum() {
        let reg = registry();
        assert_eq!(
            reg.possible_values(Some("importance")).as_deref(),
            Some(" Possible values are: `low`, `normal`, `high`.")
        );
    }

    #[test]
    fn test_possible_values_unknown_enum_is_silent() {
        let reg = registry();
        assert_eq!(reg.possible_values(Some("colour")), None);
        assert_eq!(reg.possible_values(None), None);
    }

    #[test]
    fn test_member_values() {
        let reg = registry();
        let body = reg.get("bodyType").unwrap();
        let opts = body.options.as_ref().unwrap();
        assert_eq!(opts["html"].display_value(), "1");
        let importance = reg.get("importance").unwrap();
        assert_eq!(importance.options.as_ref().unwrap()["high"].display_value(), "");
        assert!(reg.get("broken").unwrap().options.is_none());
    }

    #[test]
    fn test_find_ignores_case() {
        let reg = registry();
        assert!(reg.find("BODYTYPE").is_some());
        assert!(reg.get("BODYTYPE").is_none());
        assert_eq!(reg.names().count(), 3);
    }
}
