#![deny(missing_docs)]

//! # Type Mapping
//!
//! Classifies schema type names into the categories the renderer cares about.
//! Handles the OData primitive catalog (numeric, date/time and the remaining
//! simple types), registered enums, and everything else (another resource).
//!
//! Matching is case-insensitive: upstream data mixes `Int32` and `int32`.

use crate::enums::EnumRegistry;
use std::collections::HashSet;
use std::fmt::Display;

/// Every primitive the upstream converter may emit.
pub const ODATA_TYPES: &[&str] = &[
    "Binary",
    "Boolean",
    "Byte",
    "Date",
    "DateTimeOffset",
    "Decimal",
    "Double",
    "Duration",
    "Guid",
    "Int",
    "Int16",
    "Int32",
    "Int64",
    "SByte",
    "Single",
    "Stream",
    "String",
    "TimeOfDay",
    "Geography",
    "GeographyPoint",
    "GeographyLineString",
    "GeographyPolygon",
    "GeographyMultiPoint",
    "GeographyMultiLineString",
    "GeographyMultiPolygon",
    "GeographyCollection",
    "Geometry",
    "GeometryPoint",
    "GeometryLineString",
    "GeometryPolygon",
    "GeometryMultiPoint",
    "GeometryMultiLineString",
    "GeometryMultiPolygon",
    "GeometryCollection",
    "Octet-Stream",
    "Octet",
    "Url",
    "Json",
];

/// Numeric subset of the catalog.
pub const NUMERIC_TYPES: &[&str] = &["Byte", "Decimal", "Double", "Int", "Int16", "Int32", "Int64"];

/// Date/time subset of the catalog.
pub const DATETIME_TYPES: &[&str] = &["Date", "DateTimeOffset", "Duration", "TimeOfDay"];

/// Category of a type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCategory {
    /// Any other catalog primitive (strings, booleans, binary, geo types, streams).
    Simple,
    /// Integral or decimal primitive.
    Numeric,
    /// Date, time or duration primitive.
    DateTime,
    /// A name registered in the enum registry.
    Enum,
    /// Anything else: the name of another resource.
    Complex,
}

impl TypeCategory {
    /// True for the three catalog categories.
    pub fn is_primitive(self) -> bool {
        matches!(
            self,
            TypeCategory::Simple | TypeCategory::Numeric | TypeCategory::DateTime
        )
    }
}

impl Display for TypeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeCategory::Simple => write!(f, "simple"),
            TypeCategory::Numeric => write!(f, "numeric"),
            TypeCategory::DateTime => write!(f, "datetime"),
            TypeCategory::Enum => write!(f, "enum"),
            TypeCategory::Complex => write!(f, "complex"),
        }
    }
}

/// Classifier over the fixed primitive catalog plus the run's enum names.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    enums: HashSet<String>,
}

impl TypeRegistry {
    /// Builds a registry that also recognises every enum in `enums`.
    pub fn new(enums: &EnumRegistry) -> Self {
        Self {
            enums: enums.names().map(|n| n.to_ascii_lowercase()).collect(),
        }
    }

    /// Classifies `type_name`. Total: unknown names are `Complex`.
    pub fn classify(&self, type_name: &str) -> TypeCategory {
        if in_catalog(NUMERIC_TYPES, type_name) {
            TypeCategory::Numeric
        } else if in_catalog(DATETIME_TYPES, type_name) {
            TypeCategory::DateTime
        } else if in_catalog(ODATA_TYPES, type_name) {
            TypeCategory::Simple
        } else if self.enums.contains(&type_name.to_ascii_lowercase()) {
            TypeCategory::Enum
        } else {
            TypeCategory::Complex
        }
    }

    /// True for any catalog primitive.
    pub fn is_simple(&self, type_name: &str) -> bool {
        self.classify(type_name).is_primitive()
    }

    /// True for the numeric subset.
    pub fn is_numeric(&self, type_name: &str) -> bool {
        self.classify(type_name) == TypeCategory::Numeric
    }

    /// True for the date/time subset.
    pub fn is_datetime(&self, type_name: &str) -> bool {
        self.classify(type_name) == TypeCategory::DateTime
    }

    /// True for registered enum names.
    pub fn is_enum(&self, type_name: &str) -> bool {
        self.classify(type_name) == TypeCategory::Enum
    }
}

/// Boolean spellings seen upstream (`Boolean`, `bool`, ...).
pub fn is_boolean(type_name: &str) -> bool {
    type_name.eq_ignore_ascii_case("boolean") || type_name.eq_ignore_ascii_case("bool")
}

/// URL-like types.
pub fn is_url(type_name: &str) -> bool {
    type_name.eq_ignore_ascii_case("url")
}

fn in_catalog(catalog: &[&str], type_name: &str) -> bool {
    catalog.iter().any(|t| t.eq_ignore_ascii_case(type_name))
}
