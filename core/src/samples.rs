#![deny(missing_docs)]

//! # Example Synthesis
//!
//! Fabricates representative JSON payloads from type information alone.
//!
//! Primitive types map to fixed placeholders; complex types are expanded by
//! loading the referenced resource and recursing into its first
//! [`MAX_EXAMPLE_PROPERTIES`] eligible properties. Self-referential schemas are
//! cut off with [`recursion_marker`] instead of recursing without bound.

use crate::enums::EnumRegistry;
use crate::model::{Parameter, Property, ResourceDescription};
use crate::source::ResourceSource;
use crate::type_mapping::{is_boolean, is_url, TypeCategory, TypeRegistry};
use serde_json::{json, Map, Value};

/// Properties per synthesized object, at every nesting level.
pub const MAX_EXAMPLE_PROPERTIES: usize = 6;

/// Nesting depth at which expansion stops even without a cycle.
pub const MAX_EXAMPLE_DEPTH: usize = 8;

/// Placeholder for numeric types.
pub const NUMERIC_PLACEHOLDER: i64 = 99;

/// Placeholder for date/time types.
pub const DATETIME_PLACEHOLDER: &str = "datetime-value";

/// Placeholder for URL types.
pub const URL_PLACEHOLDER: &str = "url-value";

const EXTENSION_PREFIX: &str = "extension";

/// Value substituted for a branch that would recurse forever.
pub fn recursion_marker() -> Value {
    json!({ "err": "RecursionLimit" })
}

/// Synthesizes example values against a resource source.
pub struct ExampleSynthesizer<'a> {
    source: &'a dyn ResourceSource,
    types: &'a TypeRegistry,
    enums: &'a EnumRegistry,
}

impl<'a> ExampleSynthesizer<'a> {
    /// Creates a synthesizer. `source` resolves complex type names.
    pub fn new(
        source: &'a dyn ResourceSource,
        types: &'a TypeRegistry,
        enums: &'a EnumRegistry,
    ) -> Self {
        Self {
            source,
            types,
            enums,
        }
    }

    /// Example value for a single property or parameter.
    pub fn value_for(&self, data_type: &str, name: &str, is_relationship: bool) -> Value {
        let mut trail = Vec::new();
        self.value_in(data_type, name, is_relationship, &mut trail)
    }

    /// Pretty-printed example body for a method's return type.
    ///
    /// * `is_collection` wraps the model as `{"value": [model]}`.
    /// * `include_key` keeps key properties (responses) or drops them (request bodies).
    /// * `wrap_open_type` nests the model under the type name when the type is open.
    pub fn model_for_return_type(
        &self,
        type_name: &str,
        is_collection: bool,
        include_key: bool,
        wrap_open_type: bool,
    ) -> String {
        if self.types.classify(type_name) != TypeCategory::Complex {
            let value = self.value_for(type_name, type_name, false);
            let value = if is_collection {
                Value::Array(vec![value])
            } else {
                value
            };
            return to_pretty(&json!({ "value": value }));
        }

        match self.source.load(type_name) {
            Some(resource) => {
                self.model_for_resource(&resource, is_collection, include_key, wrap_open_type)
            }
            None => {
                tracing::debug!(type_name, "return type not found; empty example body");
                let body = Value::Object(Map::new());
                to_pretty(&wrap_value(body, is_collection))
            }
        }
    }

    /// Like [`ExampleSynthesizer::model_for_return_type`] for an already loaded resource.
    pub fn model_for_resource(
        &self,
        resource: &ResourceDescription,
        is_collection: bool,
        include_key: bool,
        wrap_open_type: bool,
    ) -> String {
        let mut trail = vec![resource.name.to_ascii_lowercase()];
        let mut model = Map::new();
        let eligible = resource
            .properties
            .iter()
            .filter(|p| !p.is_relationship)
            .filter(|p| include_key || !p.is_key)
            .take(MAX_EXAMPLE_PROPERTIES);
        for prop in eligible {
            let value = if is_extension(&prop.name) {
                Value::Object(Map::new())
            } else {
                self.value_in(&prop.data_type, &prop.name, false, &mut trail)
            };
            model.insert(prop.name.clone(), wrap_collection(value, prop.is_collection));
        }

        let mut body = wrap_value(Value::Object(model), is_collection);
        if resource.is_open_type && wrap_open_type {
            let mut wrapper = Map::new();
            wrapper.insert(resource.name.clone(), body);
            body = Value::Object(wrapper);
        }
        to_pretty(&body)
    }

    /// Pretty-printed example body for an action's parameters.
    pub fn model_for_parameters(&self, parameters: &[Parameter]) -> String {
        let mut model = Map::new();
        for param in parameters {
            let value = self.value_for(&param.data_type, &param.name, false);
            model.insert(
                param.name.clone(),
                wrap_collection(value, param.is_collection),
            );
        }
        to_pretty(&Value::Object(model))
    }

    fn value_in(
        &self,
        data_type: &str,
        name: &str,
        is_relationship: bool,
        trail: &mut Vec<String>,
    ) -> Value {
        if is_relationship || is_extension(name) || is_extension(data_type) {
            return Value::Object(Map::new());
        }
        match self.types.classify(data_type) {
            TypeCategory::Numeric => json!(NUMERIC_PLACEHOLDER),
            TypeCategory::DateTime => json!(DATETIME_PLACEHOLDER),
            _ if is_url(data_type) => json!(URL_PLACEHOLDER),
            _ if is_boolean(data_type) => json!(true),
            TypeCategory::Simple => json!(format!("{}-value", name)),
            TypeCategory::Enum => {
                let first = self
                    .enums
                    .find(data_type)
                    .and_then(|e| e.member_names().first().map(|m| m.to_string()));
                json!(first.unwrap_or_else(|| format!("{}-value", name)))
            }
            TypeCategory::Complex => self.expand_complex(data_type, trail),
        }
    }

    fn expand_complex(&self, type_name: &str, trail: &mut Vec<String>) -> Value {
        let key = type_name.to_ascii_lowercase();
        if trail.contains(&key) || trail.len() >= MAX_EXAMPLE_DEPTH {
            tracing::warn!(type_name, depth = trail.len(), "example recursion truncated");
            return recursion_marker();
        }
        let Some(resource) = self.source.load(type_name) else {
            tracing::debug!(type_name, "referenced type not found; empty example value");
            return Value::Object(Map::new());
        };

        trail.push(key);
        let mut model = Map::new();
        for prop in eligible_properties(&resource.properties) {
            let value = self.value_in(&prop.data_type, &prop.name, false, trail);
            model.insert(prop.name.clone(), wrap_collection(value, prop.is_collection));
        }
        trail.pop();
        Value::Object(model)
    }
}

fn eligible_properties(properties: &[Property]) -> impl Iterator<Item = &Property> {
    properties
        .iter()
        .filter(|p| !p.is_relationship && !is_extension(&p.name))
        .take(MAX_EXAMPLE_PROPERTIES)
}

fn is_extension(name: &str) -> bool {
    name.get(..EXTENSION_PREFIX.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(EXTENSION_PREFIX))
}

/// `{"value": [model]}` for collection responses.
fn wrap_value(model: Value, is_collection: bool) -> Value {
    if is_collection {
        json!({ "value": [model] })
    } else {
        model
    }
}

fn wrap_collection(value: Value, is_collection: bool) -> Value {
    if is_collection {
        Value::Array(vec![value])
    } else {
        value
    }
}

fn to_pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
