#![deny(missing_docs)]

//! # Markdown Blocks
//!
//! Fixed page fragments and the helpers shared by every page type: front
//! matter, annotation comments, type links, description suffixes and the
//! page-end markers downstream tooling parses.

use crate::config::RunConfig;
use crate::model::{Parameter, Property, ResourceDescription};
use crate::render::RenderEnv;
use crate::tracker::naming;
use crate::tracker::{OutputArtifact, OutputFolder};
use crate::type_mapping::TypeCategory;
use serde::Serialize;
use serde_json::{json, Map, Value};

pub(crate) const NEWLINE: &str = "\n";
pub(crate) const TWO_NEWLINES: &str = "\n\n";

/// Note callout prefix.
pub const ALERT_NOTE: &str = "> **Note:** ";
/// Important callout prefix.
pub const ALERT_IMPORTANT: &str = "> **Important:** ";

/// Separator row of three-column tables.
pub const TABLE_2ND_LINE: &str = "|:-------------|:------------|:------------|\n";
/// Properties table header.
pub const PROPERTY_HEADER: &str = "| Property     | Type        | Description |\n";
/// Parameters table header.
pub const PARAM_HEADER: &str = "| Parameter    | Type        | Description |\n";
/// Relationships table header.
pub const RELATIONSHIP_HEADER: &str = "| Relationship | Type        | Description |\n";
/// Methods table header.
pub const TASKS_HEADER: &str = "| Method       | Return Type | Description |\n";

/// Separator row of two-column tables.
pub const TABLE_2ND_LINE_2COL: &str = "|:--------------|:--------------|\n";
/// Request headers table header.
pub const HTTP_HEADER: &str = "| Name          | Description   |\n";
/// The single request header row.
pub const HTTP_HEADER_SAMPLE: &str = "| Authorization | Bearer {code} |";
/// Enumeration table header.
pub const ENUM_HEADER: &str = "| Member       | Value       |\n";

/// Permissions placeholder block.
pub const PREREQ: &str = "## Permissions\n\n\
One of the following permissions is required to call this API. To learn more, including how to choose permissions, see [Permissions](/graph/permissions-reference).\n\n\
|Permission type                        | Permissions (from least to most privileged) |\n\
|:--------------------------------------|:--------------------------------------------|\n\
|Delegated (work or school account)     | Not supported. |\n\
|Delegated (personal Microsoft account) | Not supported. |\n\
|Application                            | Not supported. |\n\n";

/// Marks the syntax block as not executable.
pub const IGNORED_BLOCK: &str = "<!-- { \"blockType\": \"ignored\" } -->";

/// Shown before truncated example responses.
pub const TRUNCATION_NOTE: &str = "The response object shown here may be truncated for brevity. All of the properties will be returned from an actual call.";

/// Appended to `DateTimeOffset` property descriptions.
pub const TIMESTAMP_DESC: &str = "The Timestamp type represents date and time information using ISO 8601 format and is always in UTC time. For example, midnight UTC on Jan 1, 2014 would look like this: `'2014-01-01T00:00:00Z'`";

/// Included on every page when the version label is `beta`.
pub const BETA_DISCLAIMER: &str = "[!INCLUDE [beta-disclaimer](../../includes/beta-disclaimer.md)]";

/// Placeholder for resources and methods without a description.
pub const MISSING_DESCRIPTION: &str = "PROVIDE DESCRIPTION HERE";

/// Prose of the optional query parameters section.
pub const QUERY_PARAMETERS_TEXT: &str = "This method supports some of the OData query parameters to help customize the response. For general information, see [OData Query Parameters](/graph/query-parameters).";

/// Prose for methods without a body.
pub const NO_REQUEST_BODY: &str = "Do not supply a request body for this method.";

const HTTP_CODES: &[(&str, &str)] = &[
    ("200", "OK"),
    ("201", "Created"),
    ("202", "Accepted"),
    ("203", "Non-Authoritative Information"),
    ("204", "No Content"),
    ("205", "Reset Content"),
    ("206", "Partial Content"),
    ("300", "Multiple Choices"),
    ("301", "Moved Permanently"),
    ("302", "Found"),
    ("303", "See Other"),
    ("304", "Not Modified"),
    ("306", "Switch Proxy"),
    ("307", "Temporary Redirect"),
    ("308", "Resume Incomplete"),
];

/// `doc_type` of a page's front matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageType {
    /// Resource, service root and enum pages.
    Resource,
    /// Operation pages.
    Api,
}

impl PageType {
    fn as_str(self) -> &'static str {
        match self {
            PageType::Resource => "resourcePageType",
            PageType::Api => "apiPageType",
        }
    }
}

#[derive(Serialize)]
struct FrontMatter<'a> {
    title: &'a str,
    description: &'a str,
    author: &'a str,
    localization_priority: &'a str,
    #[serde(rename = "ms.prod")]
    ms_prod: &'a str,
    doc_type: &'a str,
}

/// Ordered blocks of one page.
#[derive(Debug, Default)]
pub(crate) struct Page {
    blocks: Vec<String>,
}

impl Page {
    /// Starts a page with front matter, the H1 title and the beta notice.
    pub(crate) fn start(env: &RenderEnv<'_>, title: &str, description: &str, kind: PageType) -> Self {
        let mut page = Self::default();
        page.push(front_matter(env.config, title, description, kind));
        page.heading(1, title);
        if env.config.is_beta() {
            page.push(format!("{}{}", BETA_DISCLAIMER, TWO_NEWLINES));
        }
        page
    }

    pub(crate) fn push(&mut self, block: impl Into<String>) {
        self.blocks.push(block.into());
    }

    pub(crate) fn heading(&mut self, level: usize, text: &str) {
        self.push(format!("{} {}{}", "#".repeat(level), text, TWO_NEWLINES));
    }

    pub(crate) fn note(&mut self, text: &str) {
        if !text.is_empty() {
            self.push(format!("{}{}{}{}", NEWLINE, ALERT_NOTE, text, TWO_NEWLINES));
        }
    }

    pub(crate) fn fenced(&mut self, lang: &str, lines: &[String]) {
        self.push(format!("```{}\n{}\n```{}", lang, lines.join(NEWLINE), TWO_NEWLINES));
    }

    /// Appends the uuid marker and page annotation and binds the page to a file.
    pub(crate) fn finish(
        mut self,
        config: &RunConfig,
        annotation: &str,
        folder: OutputFolder,
        file_name: impl Into<String>,
    ) -> OutputArtifact {
        self.push(format!("{}{}", uuid_marker(config), NEWLINE));
        self.push(page_annotation(annotation));
        OutputArtifact::new(folder, file_name, self.blocks)
    }
}

/// YAML metadata header, fenced by `---` lines.
pub fn front_matter(config: &RunConfig, title: &str, description: &str, kind: PageType) -> String {
    let header = FrontMatter {
        title,
        description,
        author: &config.author,
        localization_priority: "Normal",
        ms_prod: &config.product,
        doc_type: kind.as_str(),
    };
    let yaml = serde_yaml::to_string(&header).unwrap_or_default();
    format!("---\n{}---{}", yaml, TWO_NEWLINES)
}

/// `<!-- uuid: ...\n<timestamp> -->`
pub fn uuid_marker(config: &RunConfig) -> String {
    format!(
        "<!-- uuid: {}\n{} -->",
        config.page_uuid, config.page_timestamp
    )
}

/// Closing page annotation comment.
pub fn page_annotation(description: &str) -> String {
    let model = json!({
        "type": "#page.annotation",
        "description": description,
        "keywords": "",
        "section": "documentation",
        "tocPath": ""
    });
    format!("<!-- {}-->", pretty(&model))
}

/// Annotation preceding an example request.
pub fn request_pretext(name: &str) -> String {
    let model = json!({ "blockType": "request", "name": name });
    format!("<!-- {}-->", pretty(&model))
}

/// Annotation preceding an example response.
pub fn response_pretext(env: &RenderEnv<'_>, type_name: Option<&str>, is_collection: bool) -> String {
    let mut model = Map::new();
    model.insert("blockType".into(), json!("response"));
    model.insert("truncated".into(), json!(true));
    if let Some(type_name) = type_name {
        let odata_type = if env.types.is_simple(type_name) {
            type_name.to_string()
        } else {
            format!("{}.{}", env.config.namespace, type_name)
        };
        model.insert("@odata.type".into(), json!(odata_type));
        if is_collection {
            model.insert("isCollection".into(), json!(true));
        }
    }
    format!("<!-- {} -->", pretty(&Value::Object(model)))
}

/// Annotation preceding the JSON representation on a resource page.
pub fn resource_pretext(config: &RunConfig, resource: &ResourceDescription) -> String {
    let mut optional = Vec::new();
    let mut key = None;
    for prop in resource.sorted_properties() {
        if prop.is_relationship {
            continue;
        }
        if prop.is_nullable {
            optional.push(json!(prop.name));
        }
        if prop.is_key {
            key = Some(prop.name.clone());
        }
    }

    let mut model = Map::new();
    model.insert("blockType".into(), json!("resource"));
    model.insert("optionalProperties".into(), Value::Array(optional));
    if let Some(key) = key {
        model.insert("keyProperty".into(), json!(key));
    }
    model.insert(
        "@odata.type".into(),
        json!(format!("{}.{}", config.namespace, resource.name)),
    );
    if !resource.base_type.is_empty() {
        model.insert("baseType".into(), json!(resource.base_type));
    }
    format!("<!-- {}-->", pretty(&Value::Object(model)))
}

/// Markdown text for a type: plain for primitives, otherwise a link.
///
/// `from_api` selects links relative to the operation folder.
pub fn type_link(env: &RenderEnv<'_>, data_type: &str, is_collection: bool, from_api: bool) -> String {
    let link = match env.types.classify(data_type) {
        category if category.is_primitive() => data_type.to_string(),
        TypeCategory::Enum => format!("[{}]({})", data_type, naming::enum_link(data_type, from_api)),
        _ if from_api => format!(
            "[{}]({})",
            data_type,
            naming::resource_link_from_api(data_type)
        ),
        _ => format!("[{}]({})", data_type, naming::resource_link(data_type)),
    };
    if is_collection {
        format!("{} collection", link)
    } else {
        link
    }
}

/// Property description with the timestamp, enum, read-only and nullable suffixes.
pub fn property_description(env: &RenderEnv<'_>, prop: &Property) -> String {
    let mut desc = prop.description.clone();
    if prop.data_type == "DateTimeOffset" {
        desc.push_str(TIMESTAMP_DESC);
    }
    if let Some(values) = env.enums.possible_values(prop.enum_name.as_deref()) {
        desc.push_str(&values);
    }
    if prop.is_read_only || prop.is_key {
        desc.push_str(" Read-only.");
    }
    if prop.is_nullable {
        desc.push_str(" Nullable.");
    }
    desc
}

/// Parameter description with the `Optional.` prefix and enum suffix.
pub fn parameter_description(env: &RenderEnv<'_>, param: &Parameter) -> String {
    let mut desc = if param.is_required {
        param.description.clone()
    } else {
        format!("Optional. {}", param.description)
    };
    if let Some(values) = env.enums.possible_values(param.enum_name.as_deref()) {
        desc.push_str(&values);
    }
    desc
}

/// `|name|type|description|` table rows.
pub fn parameter_rows(env: &RenderEnv<'_>, params: &[Parameter]) -> String {
    params
        .iter()
        .map(|p| {
            format!(
                "|{}|{}|{}|\n",
                p.name,
                p.data_type,
                parameter_description(env, p)
            )
        })
        .collect()
}

/// Reason phrase for a status code; empty when unknown.
pub fn http_reason(code: &str) -> &'static str {
    HTTP_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, reason)| *reason)
        .unwrap_or("")
}

/// `HTTP/1.1 201 Created`
pub fn status_line(code: &str) -> String {
    format!("HTTP/1.1 {} {}", code, http_reason(code))
        .trim_end()
        .to_string()
}

/// Collapses everything nested below a top-level key onto that key's line.
pub fn compact_json(input: &str) -> String {
    let mut output = String::new();
    let mut pending = String::new();
    for line in input.split('\n') {
        let bytes = line.as_bytes();
        match bytes.first() {
            Some(b'{') => {
                output.push_str(line);
                continue;
            }
            Some(b'}') => {
                output.push_str(&pending);
                output.push_str(NEWLINE);
                output.push_str(line);
                pending.clear();
                continue;
            }
            _ => {}
        }
        if bytes.get(2) == Some(&b'"') {
            output.push_str(&pending);
            output.push_str(NEWLINE);
            output.push_str(line);
            pending.clear();
        } else {
            pending.push_str(line.trim());
        }
    }
    output
}

pub(crate) fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_lines() {
        assert_eq!(status_line("201"), "HTTP/1.1 201 Created");
        assert_eq!(status_line("204"), "HTTP/1.1 204 No Content");
        assert_eq!(status_line("299"), "HTTP/1.1 299");
    }

    #[test]
    fn test_compact_json_collapses_nested_values() {
        let input = serde_json::to_string_pretty(&json!({
            "subject": "String",
            "from": {"@odata.type": "microsoft.graph.recipient"},
            "categories": ["String"]
        }))
        .unwrap();
        assert_eq!(
            compact_json(&input),
            "{\n  \"subject\": \"String\",\n  \"from\": {\"@odata.type\": \"microsoft.graph.recipient\"},\n  \"categories\": [\"String\"]\n}"
        );
        assert_eq!(compact_json("{}"), "{}");
    }

    #[test]
    fn test_front_matter_is_fenced_yaml() {
        let config = RunConfig {
            author: "jdoe".into(),
            product: "outlook".into(),
            ..Default::default()
        };
        let header = front_matter(&config, "message resource type", "A message.", PageType::Resource);
        assert!(header.starts_with("---\ntitle: message resource type\n"));
        assert!(header.contains("author: jdoe\n"));
        assert!(header.contains("ms.prod: outlook\n"));
        assert!(header.ends_with("doc_type: resourcePageType\n---\n\n"));
    }

    #[test]
    fn test_annotations() {
        assert_eq!(
            request_pretext("get_message"),
            "<!-- {\n  \"blockType\": \"request\",\n  \"name\": \"get_message\"\n}-->"
        );
        let end = page_annotation("message resource");
        assert!(end.starts_with("<!-- {\n  \"type\": \"#page.annotation\",\n  \"description\": \"message resource\","));
        assert!(end.ends_with("}-->"));
    }

    #[test]
    fn test_timestamp_suffix_is_appended_verbatim() {
        let config = RunConfig::default();
        let enums = crate::enums::EnumRegistry::new();
        let types = crate::type_mapping::TypeRegistry::new(&enums);
        let source = crate::source::MemorySource::new();
        let env = RenderEnv::new(&config, &enums, &types, &source);

        let created = Property {
            name: "createdDateTime".into(),
            data_type: "DateTimeOffset".into(),
            description: "Created.".into(),
            is_read_only: true,
            ..Default::default()
        };
        assert_eq!(
            property_description(&env, &created),
            format!("Created.{} Read-only.", TIMESTAMP_DESC)
        );

        let lower = Property {
            data_type: "datetimeoffset".into(),
            ..created.clone()
        };
        assert_eq!(property_description(&env, &lower), "Created. Read-only.");
    }
}
