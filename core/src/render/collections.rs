#![deny(missing_docs)]

//! # Run-wide Pages
//!
//! The service root (create and list rows for every entity set) and the
//! enumeration page. Both are rendered once, after all resources.

use crate::affordances::entity_set_target;
use crate::model::ResourceDescription;
use crate::render::blocks::{
    PageType, Page, ENUM_HEADER, NEWLINE, TABLE_2ND_LINE, TABLE_2ND_LINE_2COL, TASKS_HEADER,
    TWO_NEWLINES,
};
use crate::render::resource::create_row;
use crate::render::RenderEnv;
use crate::tracker::naming::{self, uncapitalize, ENUMS_FILE, SERVICE_ROOT_FILE};
use crate::tracker::{OutputArtifact, OutputFolder};

const SERVICE_ROOT_TITLE: &str = "Service root";
const ENUMS_TITLE: &str = "Enum values";

/// Renders `service-root.md`.
pub fn render_service_root(
    env: &RenderEnv<'_>,
    entity_sets: &[ResourceDescription],
) -> OutputArtifact {
    let mut page = Page::start(env, SERVICE_ROOT_TITLE, SERVICE_ROOT_TITLE, PageType::Resource);
    page.push(NEWLINE);
    page.heading(2, "Methods");

    let mut rows = String::new();
    for target in entity_sets.iter().filter_map(entity_set_target) {
        rows.push_str(&create_row(env, &target));
        rows.push_str(&format!(
            "|[List {}]({}) | [{}]({}) collection |Get {} object collection. |\n",
            target.data_type,
            naming::api_link(&naming::list_file(&target.data_type)),
            target.data_type,
            naming::resource_link(&target.data_type),
            uncapitalize(&target.data_type)
        ));
    }
    if rows.is_empty() {
        page.push(format!("None{}", TWO_NEWLINES));
    } else {
        page.push(format!("{}{}{}{}", TASKS_HEADER, TABLE_2ND_LINE, rows, NEWLINE));
    }

    page.finish(
        env.config,
        SERVICE_ROOT_TITLE,
        OutputFolder::Resources,
        SERVICE_ROOT_FILE,
    )
}

/// Renders `enums.md`, one table per enum in registry order.
pub fn render_enums(env: &RenderEnv<'_>) -> OutputArtifact {
    let mut page = Page::start(env, ENUMS_TITLE, ENUMS_TITLE, PageType::Resource);
    for (name, definition) in env.enums.iter() {
        page.heading(3, name);
        let mut table = format!("{}{}", ENUM_HEADER, TABLE_2ND_LINE_2COL);
        match &definition.options {
            Some(options) => {
                for (member, value) in options {
                    table.push_str(&format!("|{}|{}|\n", member, value.display_value()));
                }
            }
            None => table.push_str("|EMPTY ENUM?||\n"),
        }
        table.push_str(NEWLINE);
        page.push(table);
    }
    page.finish(env.config, ENUMS_TITLE, OutputFolder::Resources, ENUMS_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunConfig;
    use crate::enums::EnumRegistry;
    use crate::source::MemorySource;
    use crate::type_mapping::TypeRegistry;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_service_root_rows() {
        let config = RunConfig::default();
        let enums = EnumRegistry::new();
        let types = TypeRegistry::new(&enums);
        let source = MemorySource::new();
        let env = RenderEnv::new(&config, &enums, &types, &source);

        let sets = vec![
            ResourceDescription {
                name: "users".into(),
                is_entity_set: true,
                collection_of: Some("User".into()),
                ..Default::default()
            },
            ResourceDescription {
                name: "orphans".into(),
                is_entity_set: true,
                ..Default::default()
            },
        ];
        let page = render_service_root(&env, &sets);
        assert_eq!(page.file_name, "service-root.md");
        let text = page.contents();
        assert!(text.contains(
            "| [Create User](../api/user-post-users.md) | [User](user.md) | Create a new User by posting to the users collection. |\n"
        ));
        assert!(text.contains(
            "|[List User](../api/user-list.md) | [User](user.md) collection |Get user object collection. |\n"
        ));
        assert!(!text.contains("orphans"));
    }

    #[test]
    fn test_enum_tables() {
        let config = RunConfig::default();
        let enums = EnumRegistry::from_json(
            r#"{"bodyType": {"options": {"text": {"value": "0"}, "html": {"value": "1"}}}, "odd": {}}"#,
        )
        .unwrap();
        let types = TypeRegistry::new(&enums);
        let source = MemorySource::new();
        let env = RenderEnv::new(&config, &enums, &types, &source);

        let text = render_enums(&env).contents();
        let body = text.split("# Enum values\n\n").nth(1).unwrap();
        let tables = body.split("<!-- uuid").next().unwrap();
        assert_eq!(
            tables,
            "### bodyType\n\n| Member       | Value       |\n|:--------------|:--------------|\n|text|0|\n|html|1|\n\n### odd\n\n| Member       | Value       |\n|:--------------|:--------------|\n|EMPTY ENUM?||\n\n"
        );
    }
}
