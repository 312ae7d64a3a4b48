#![deny(missing_docs)]

//! # Update Pages

use crate::model::{Property, ResourceDescription};
use crate::paths::{request_lines, OperationKind, RequestSpec};
use crate::render::blocks::{
    PageType, Page, HTTP_HEADER, HTTP_HEADER_SAMPLE, IGNORED_BLOCK, PREREQ, PROPERTY_HEADER,
    TABLE_2ND_LINE, TABLE_2ND_LINE_2COL, TWO_NEWLINES,
};
use crate::render::examples::patch_example;
use crate::render::RenderEnv;
use crate::tracker::naming;
use crate::tracker::{OutputArtifact, OutputFolder};

const REQUEST_BODY_TEXT: &str = "In the request body, supply the values for relevant fields that should be updated. Existing properties that are not included in the request body will maintain their previous values or be recalculated based on changes to other property values. For best performance you shouldn't include existing values that haven't changed.";

/// Properties a client may send in an update body.
pub fn updatable_properties(resource: &ResourceDescription) -> Vec<&Property> {
    resource
        .sorted_properties()
        .into_iter()
        .filter(|p| !p.is_relationship && !p.is_read_only && !p.is_key)
        .collect()
}

/// Renders `<name>-update.md`.
pub fn render_patch(env: &RenderEnv<'_>, resource: &ResourceDescription) -> OutputArtifact {
    let (title, description) = if resource.update_description.is_empty() {
        (
            format!("Update {}", resource.name.to_lowercase()),
            format!(
                "Update the properties of {} object.",
                resource.name.to_lowercase()
            ),
        )
    } else {
        (
            resource.update_description.clone(),
            resource.update_description.clone(),
        )
    };

    let mut page = Page::start(env, &title, &description, PageType::Api);
    page.push(format!("{}{}", description, TWO_NEWLINES));
    page.push(PREREQ);

    page.heading(2, "HTTP request");
    page.push(format!("{}{}", IGNORED_BLOCK, TWO_NEWLINES));
    let lines = request_lines(&resource.rest_path, &RequestSpec::new(OperationKind::Patch));
    page.fenced("http", &lines);

    page.heading(2, "Request headers");
    page.push(format!(
        "{}{}{}{}",
        HTTP_HEADER, TABLE_2ND_LINE_2COL, HTTP_HEADER_SAMPLE, TWO_NEWLINES
    ));

    page.heading(2, "Request body");
    page.push(format!("{}{}", REQUEST_BODY_TEXT, TWO_NEWLINES));
    let mut table = format!("{}{}", PROPERTY_HEADER, TABLE_2ND_LINE);
    for prop in updatable_properties(resource) {
        let mut desc = prop.description.clone();
        if let Some(values) = env.enums.possible_values(prop.enum_name.as_deref()) {
            desc.push_str(&values);
        }
        table.push_str(&format!("|{}|{}|{}|\n", prop.name, prop.data_type, desc));
    }
    table.push('\n');
    page.push(table);

    page.heading(2, "Response");
    page.push(format!(
        "If successful, this method returns a `200 OK` response code and updated [{}]({}) object in the response body.{}",
        resource.name,
        naming::resource_link_from_api(&resource.name),
        TWO_NEWLINES
    ));

    patch_example(&mut page, env, resource);
    page.push("\n");
    page.finish(
        env.config,
        &title,
        OutputFolder::Api,
        naming::update_file(&resource.name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunConfig;
    use crate::enums::EnumRegistry;
    use crate::source::MemorySource;
    use crate::type_mapping::TypeRegistry;

    #[test]
    fn test_update_table_skips_read_only_and_keys() {
        let config = RunConfig::default();
        let enums = EnumRegistry::new();
        let types = TypeRegistry::new(&enums);
        let source = MemorySource::new();
        let env = RenderEnv::new(&config, &enums, &types, &source);

        let mut message = ResourceDescription {
            name: "message".into(),
            allow_patch: true,
            properties: vec![
                Property {
                    name: "isRead".into(),
                    data_type: "Boolean".into(),
                    description: "Read flag.".into(),
                    ..Default::default()
                },
                Property {
                    name: "id".into(),
                    data_type: "String".into(),
                    is_key: true,
                    ..Default::default()
                },
                Property {
                    name: "createdDateTime".into(),
                    data_type: "DateTimeOffset".into(),
                    is_read_only: true,
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        message.rest_path.insert("/me/messages/{id}".into(), true);
        let page = render_patch(&env, &message);
        assert_eq!(page.file_name, "message-update.md");

        let text = page.contents();
        assert!(text.contains("# Update message\n\n"));
        assert!(text.contains("|isRead|Boolean|Read flag.|\n"));
        assert!(!text.contains("|id|"));
        assert!(!text.contains("|createdDateTime|"));
        assert!(text.contains("```http\nPATCH /me/messages/{id}\n```"));
        assert!(text.contains("PATCH https://graph.microsoft.com/v1.0/me/messages/{id}\nContent-type"));
    }
}
