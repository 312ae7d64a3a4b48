#![deny(missing_docs)]

//! # Resource Pages
//!
//! The overview page of a resource: Methods table (one row per affordance),
//! Properties and Relationships tables, and the JSON representation.

use crate::affordances::{Affordance, AffordanceSet, RelationshipTarget};
use crate::model::{Method, Property, ResourceDescription};
use crate::render::blocks::{
    compact_json, pretty, property_description, resource_pretext, type_link, PageType, Page,
    MISSING_DESCRIPTION, NEWLINE, PROPERTY_HEADER, RELATIONSHIP_HEADER, TABLE_2ND_LINE,
    TASKS_HEADER, TWO_NEWLINES,
};
use crate::render::RenderEnv;
use crate::tracker::naming::{self, capitalize, uncapitalize};
use crate::tracker::{OutputArtifact, OutputFolder};
use crate::type_mapping::{is_boolean, is_url, TypeCategory};
use serde_json::{json, Map, Value};

/// Renders the overview page of `resource`.
pub fn render_resource(
    env: &RenderEnv<'_>,
    resource: &ResourceDescription,
    affordances: &AffordanceSet,
) -> OutputArtifact {
    let title = format!("{} resource type", resource.name);
    let description = if resource.description.is_empty() {
        MISSING_DESCRIPTION
    } else {
        resource.description.as_str()
    };

    let mut page = Page::start(env, &title, description, PageType::Resource);
    page.push(format!("{}{}", description, TWO_NEWLINES));

    if !resource.is_complex_type {
        page.heading(2, "Methods");
        if affordances.is_empty() {
            page.push(format!("None{}", TWO_NEWLINES));
        } else {
            let mut table = format!("{}{}", TASKS_HEADER, TABLE_2ND_LINE);
            for op in &affordances.operations {
                table.push_str(&method_row(env, resource, op));
            }
            table.push_str(NEWLINE);
            page.push(table);
        }
        page.note(&resource.method_notes);
    }

    let properties = resource.sorted_properties();

    page.heading(2, "Properties");
    if affordances.has_property {
        page.push(property_table(
            env,
            PROPERTY_HEADER,
            properties.iter().filter(|p| !p.is_relationship).copied(),
        ));
        page.note(&resource.property_notes);
    } else {
        page.push(format!("None{}", TWO_NEWLINES));
    }

    if !resource.is_complex_type {
        page.heading(2, "Relationships");
        if affordances.has_relationship {
            page.push(property_table(
                env,
                RELATIONSHIP_HEADER,
                properties.iter().filter(|p| p.is_relationship).copied(),
            ));
            page.note(&resource.relationship_notes);
        } else {
            page.push(format!("None{}", TWO_NEWLINES));
        }
    }

    if affordances.has_property && !resource.is_entity_set {
        page.heading(2, "JSON representation");
        page.push(format!(
            "The following is a JSON representation of the resource.{}",
            TWO_NEWLINES
        ));
        page.push(format!(
            "{}{}",
            resource_pretext(env.config, resource),
            TWO_NEWLINES
        ));
        let model = json_representation(env, &properties);
        page.push(format!(
            "```json\n{}\n```{}",
            compact_json(&pretty(&model)),
            TWO_NEWLINES
        ));
    }

    page.finish(
        env.config,
        &format!("{} resource", resource.name),
        OutputFolder::Resources,
        naming::resource_file(&resource.name, resource.is_entity_set),
    )
}

fn method_row(env: &RenderEnv<'_>, resource: &ResourceDescription, op: &Affordance) -> String {
    let name = &resource.name;
    match op {
        Affordance::List { element } => format!(
            "|[List]({}) | [{}]({}) collection |Get {} object collection. |\n",
            naming::api_link(&naming::list_file(element)),
            element,
            naming::resource_link(element),
            uncapitalize(element)
        ),
        Affordance::Get => format!(
            "| [Get {}]({}) | [{}]({}) | Read properties and relationships of {} object. |\n",
            name,
            naming::api_link(&naming::get_file(name)),
            name,
            naming::resource_link(name),
            uncapitalize(name)
        ),
        Affordance::Create(target) => create_row(env, target),
        Affordance::ListRelationship(target) => format!(
            "| [List {}]({}) | {} collection | Get a {} object collection. |\n",
            target.relationship,
            naming::api_link(target.list_file.as_deref().unwrap_or_default()),
            type_link(env, &target.data_type, false, false),
            target.use_name
        ),
        Affordance::Update => format!(
            "| [Update]({}) | [{}]({}) | Update {} object. |\n",
            naming::api_link(&naming::update_file(name)),
            name,
            naming::resource_link(name),
            name
        ),
        Affordance::Delete => format!(
            "| [Delete]({}) | None | Delete {} object. |\n",
            naming::api_link(&naming::delete_file(name)),
            name
        ),
        Affordance::Custom(method) => custom_row(env, name, method),
    }
}

/// `Create` row; also used by the service root.
pub(crate) fn create_row(env: &RenderEnv<'_>, target: &RelationshipTarget) -> String {
    format!(
        "| [{}]({}) | {} | Create a new {} by posting to the {} collection. |\n",
        target.display_name,
        naming::api_link(&target.post_file),
        type_link(env, &target.data_type, false, false),
        target.use_name,
        target.relationship
    )
}

fn custom_row(env: &RenderEnv<'_>, resource: &str, method: &Method) -> String {
    let returns = match &method.return_type {
        Some(ret) => type_link(env, ret, method.is_return_type_collection, false),
        None => "None".to_string(),
    };
    format!(
        "|[{}]({})|{}|{}|\n",
        capitalize(method.name.trim()),
        naming::api_link(&naming::method_file(resource, &method.name)),
        returns,
        method.description
    )
}

fn property_table<'p>(
    env: &RenderEnv<'_>,
    header: &str,
    properties: impl Iterator<Item = &'p Property>,
) -> String {
    let mut table = format!("{}{}", header, TABLE_2ND_LINE);
    for prop in properties {
        table.push_str(&format!(
            "|{}|{}|{}|\n",
            prop.name,
            type_link(env, &prop.data_type, prop.is_collection, false),
            property_description(env, prop)
        ));
    }
    table.push_str(NEWLINE);
    table
}

/// Full (uncapped) instance shape with type placeholders.
fn json_representation(env: &RenderEnv<'_>, properties: &[&Property]) -> Value {
    let namespace = &env.config.namespace;
    let mut model = Map::new();
    for prop in properties.iter().filter(|p| !p.is_relationship) {
        let data_type = prop.data_type.as_str();
        let mut value = match env.types.classify(data_type) {
            TypeCategory::Numeric => json!(1024),
            TypeCategory::DateTime => json!("String (timestamp)"),
            _ if is_url(data_type) => json!("url"),
            _ if is_boolean(data_type) => json!(true),
            TypeCategory::Simple => json!(data_type),
            _ => json!({ "@odata.type": format!("{}.{}", namespace, data_type) }),
        };
        if let Value::String(text) = &mut value {
            if prop.is_key {
                text.push_str(" (identifier)");
            }
            if matches!(prop.name.as_str(), "eTag" | "cTag" | "etag" | "ctag") {
                text.push_str(" (etag)");
            }
        }
        if prop.is_collection {
            value = Value::Array(vec![value]);
        }
        model.insert(prop.name.clone(), value);
    }
    Value::Object(model)
}
