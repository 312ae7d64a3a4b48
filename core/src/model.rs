#![deny(missing_docs)]

//! # Resource Model
//!
//! Typed records for the per-resource JSON descriptions produced upstream from
//! the CSDL metadata document.
//!
//! Input files are camelCase JSON. Optional fields are validated here, at the
//! input boundary: `null` strings become empty, missing flags become `false`,
//! a missing `httpSuccessCode` becomes `"200"`, and a return type of `None`
//! (any case) or the empty string becomes [`Option::None`].

use crate::error::AppResult;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use std::path::Path;

/// REST path templates mapped to their "canonical" (displayable) flag.
pub type RestPaths = IndexMap<String, bool>;

/// Names of the methods the engine synthesizes itself.
pub mod synthetic {
    /// Create a resource by posting to a collection.
    pub const POST: &str = "auto_post";
    /// Delete a resource.
    pub const DELETE: &str = "auto_delete";
}

/// One schema entity or complex type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceDescription {
    /// Resource name as declared in the schema.
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    /// Free-text description.
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    /// Element type name when this resource is a collection / entity set.
    #[serde(deserialize_with = "non_empty")]
    pub collection_of: Option<String>,
    /// Complex types get no Methods or Relationships sections.
    #[serde(deserialize_with = "nullable")]
    pub is_complex_type: bool,
    /// Top-level collection exposed at the service root.
    #[serde(deserialize_with = "nullable")]
    pub is_entity_set: bool,
    /// Instances may carry undeclared properties.
    #[serde(deserialize_with = "nullable")]
    pub is_open_type: bool,
    /// Whether the resource accepts PATCH.
    #[serde(deserialize_with = "nullable")]
    pub allow_patch: bool,
    /// Whether the resource accepts DELETE.
    #[serde(deserialize_with = "nullable")]
    pub allow_delete: bool,
    /// Base type name, used in the resource annotation comment.
    #[serde(deserialize_with = "nullable")]
    pub base_type: String,
    /// Declared properties and relationships, in schema order.
    #[serde(deserialize_with = "nullable")]
    pub properties: Vec<Property>,
    /// Declared actions and functions, in schema order.
    #[serde(deserialize_with = "nullable")]
    pub methods: Vec<Method>,
    /// REST path templates for this resource.
    #[serde(deserialize_with = "nullable")]
    pub rest_path: RestPaths,
    /// Callout rendered after the Methods table.
    #[serde(deserialize_with = "nullable")]
    pub method_notes: String,
    /// Callout rendered after the Properties table.
    #[serde(deserialize_with = "nullable")]
    pub property_notes: String,
    /// Callout rendered after the Relationships table.
    #[serde(deserialize_with = "nullable")]
    pub relationship_notes: String,
    /// Overrides the generated title and description of the update page.
    #[serde(deserialize_with = "nullable")]
    pub update_description: String,
    /// Overrides the generated description of the delete page.
    #[serde(deserialize_with = "nullable")]
    pub delete_description: String,
    /// Used by create pages whose element type is this resource.
    #[serde(deserialize_with = "nullable")]
    pub create_description: String,
}

/// A property or relationship of a resource.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Property {
    /// Property name.
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    /// Primitive type name or another resource's name.
    #[serde(deserialize_with = "nullable")]
    pub data_type: String,
    /// Whether the value is a collection of `data_type`.
    #[serde(deserialize_with = "nullable")]
    pub is_collection: bool,
    /// Navigation property (rendered under Relationships).
    #[serde(deserialize_with = "nullable")]
    pub is_relationship: bool,
    /// Part of the entity key.
    #[serde(deserialize_with = "nullable")]
    pub is_key: bool,
    /// Not writable by clients.
    #[serde(deserialize_with = "nullable")]
    pub is_read_only: bool,
    /// May be null.
    #[serde(deserialize_with = "nullable")]
    pub is_nullable: bool,
    /// Enum type backing this property's values, if any.
    #[serde(deserialize_with = "non_empty")]
    pub enum_name: Option<String>,
    /// Clients may create members by POSTing to this collection relationship.
    #[serde(deserialize_with = "nullable")]
    pub allow_post_to_collection: bool,
    /// Free-text description.
    #[serde(deserialize_with = "nullable")]
    pub description: String,
}

/// A declared action or function, or one of the engine's synthetic operations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Method {
    /// Method name as used in the URL.
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    /// Functions are invoked with GET; actions with POST.
    #[serde(deserialize_with = "nullable")]
    pub is_function: bool,
    /// Page title override.
    #[serde(deserialize_with = "nullable")]
    pub display_name: String,
    /// Free-text description.
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    /// Return type name; `None` when the method returns nothing.
    #[serde(deserialize_with = "return_type")]
    pub return_type: Option<String>,
    /// Whether the method returns a collection of `return_type`.
    #[serde(deserialize_with = "nullable")]
    pub is_return_type_collection: bool,
    /// Status code returned on success (e.g. `"200"`).
    #[serde(deserialize_with = "status_code")]
    pub http_success_code: String,
    /// Ordered parameter list.
    #[serde(deserialize_with = "nullable")]
    pub parameters: Vec<Parameter>,
    /// Hand-written prerequisites, usually carried over from a previous run.
    #[serde(deserialize_with = "nullable")]
    pub prerequisites: String,
}

/// A parameter of an action or function.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Parameter {
    /// Parameter name.
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    /// Primitive type name or another resource's name.
    #[serde(deserialize_with = "nullable")]
    pub data_type: String,
    /// Whether the value is a collection of `data_type`.
    #[serde(deserialize_with = "nullable")]
    pub is_collection: bool,
    /// Optional parameters get an `Optional.` prefix in tables.
    #[serde(deserialize_with = "nullable")]
    pub is_required: bool,
    /// Enum type backing this parameter's values, if any.
    #[serde(deserialize_with = "non_empty")]
    pub enum_name: Option<String>,
    /// Free-text description.
    #[serde(deserialize_with = "nullable")]
    pub description: String,
}

/// Default success code for declared methods.
pub const DEFAULT_SUCCESS_CODE: &str = "200";

impl Default for Method {
    fn default() -> Self {
        Self {
            name: String::new(),
            is_function: false,
            display_name: String::new(),
            description: String::new(),
            return_type: None,
            is_return_type_collection: false,
            http_success_code: DEFAULT_SUCCESS_CODE.to_string(),
            parameters: Vec::new(),
            prerequisites: String::new(),
        }
    }
}

impl Method {
    /// Builds one of the engine's synthetic operations.
    pub fn synthetic(
        name: &str,
        display_name: impl Into<String>,
        description: impl Into<String>,
        return_type: Option<String>,
        http_success_code: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            display_name: display_name.into(),
            description: description.into(),
            return_type,
            http_success_code: http_success_code.to_string(),
            ..Self::default()
        }
    }
}

impl ResourceDescription {
    /// Parses a resource description from JSON text.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a resource description file.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Properties in ascending name order (schema order is kept for a single entry).
    pub fn sorted_properties(&self) -> Vec<&Property> {
        let mut props: Vec<&Property> = self.properties.iter().collect();
        props.sort_by(|a, b| a.name.cmp(&b.name));
        props
    }

    /// Methods in ascending name order.
    pub fn sorted_methods(&self) -> Vec<&Method> {
        let mut methods: Vec<&Method> = self.methods.iter().collect();
        methods.sort_by(|a, b| a.name.cmp(&b.name));
        methods
    }

    /// A view of this resource relabelled as the collection behind one of its
    /// relationships: named after the relationship, listing `data_type`, and
    /// keeping this resource's REST paths.
    pub fn relationship_collection(&self, relationship: &str, data_type: &str) -> Self {
        Self {
            name: relationship.to_string(),
            collection_of: Some(data_type.to_string()),
            ..self.clone()
        }
    }
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.trim().is_empty()))
}

fn return_type<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(non_empty(deserializer)?.filter(|s| !s.eq_ignore_ascii_case("none")))
}

fn status_code<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    // Upstream files carry either "201" or 201.
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) if !s.is_empty() => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => DEFAULT_SUCCESS_CODE.to_string(),
    })
}
