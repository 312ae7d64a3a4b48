#![deny(missing_docs)]

//! # Method Pages
//!
//! Pages for declared actions and functions, and for the synthetic create
//! (`auto_post`) and delete (`auto_delete`) operations, which share the
//! method page layout.

use crate::model::{synthetic, Method, ResourceDescription};
use crate::paths::{request_lines, OperationKind, RequestSpec};
use crate::render::blocks::{
    http_reason, parameter_rows, type_link, PageType, Page, ALERT_IMPORTANT, HTTP_HEADER,
    HTTP_HEADER_SAMPLE, IGNORED_BLOCK, MISSING_DESCRIPTION, NEWLINE, NO_REQUEST_BODY,
    PARAM_HEADER, PREREQ, TABLE_2ND_LINE, TABLE_2ND_LINE_2COL, TWO_NEWLINES,
};
use crate::render::examples::{create_example, delete_example, invoke_example};
use crate::render::RenderEnv;
use crate::tracker::naming;
use crate::tracker::{OutputArtifact, OutputFolder};

/// Renders the page for `method` of `resource`.
///
/// `file_name` overrides `<resource>-<method>.md`; `sub_path` is the
/// collection segment a create request posts to.
pub fn render_method(
    env: &RenderEnv<'_>,
    resource: &ResourceDescription,
    method: &Method,
    file_name: Option<String>,
    sub_path: Option<&str>,
) -> OutputArtifact {
    let title = if method.display_name.is_empty() {
        format!("{}: {}", resource.name, method.name)
    } else {
        method.display_name.clone()
    };
    let description = if method.description.is_empty() {
        MISSING_DESCRIPTION
    } else {
        method.description.as_str()
    };

    let mut page = Page::start(env, &title, description, PageType::Api);
    page.push(format!("{}{}", description, TWO_NEWLINES));
    page.push(PREREQ);
    if !method.prerequisites.is_empty() {
        page.push(format!(
            "{}{}{}",
            ALERT_IMPORTANT, method.prerequisites, TWO_NEWLINES
        ));
    }

    page.heading(2, "HTTP request");
    page.push(format!("{}{}", IGNORED_BLOCK, TWO_NEWLINES));
    let spec = match method.name.as_str() {
        synthetic::POST => RequestSpec::new(OperationKind::Post).sub_path(sub_path),
        synthetic::DELETE => RequestSpec::new(OperationKind::Delete),
        _ => RequestSpec::new(OperationKind::Invoke).method(method),
    };
    page.fenced("http", &request_lines(&resource.rest_path, &spec));

    if method.is_function && !method.parameters.is_empty() {
        page.heading(2, "Function parameters");
        page.push(format!(
            "In the request URL, provide following query parameters with values.{}",
            TWO_NEWLINES
        ));
        page.push(format!(
            "{}{}{}{}",
            PARAM_HEADER,
            TABLE_2ND_LINE,
            parameter_rows(env, &method.parameters),
            NEWLINE
        ));
    }

    page.heading(2, "Request headers");
    page.push(format!(
        "{}{}{}{}",
        HTTP_HEADER, TABLE_2ND_LINE_2COL, HTTP_HEADER_SAMPLE, TWO_NEWLINES
    ));

    page.heading(2, "Request body");
    if !method.is_function && !method.parameters.is_empty() {
        page.push(format!(
            "In the request body, provide a JSON object with the following parameters.{}",
            TWO_NEWLINES
        ));
        page.push(format!(
            "{}{}{}{}",
            PARAM_HEADER,
            TABLE_2ND_LINE,
            parameter_rows(env, &method.parameters),
            NEWLINE
        ));
    } else if method.name == synthetic::POST {
        let element = method.return_type.as_deref().unwrap_or_default();
        page.push(format!(
            "In the request body, supply a JSON representation of [{}]({}) object.{}",
            element,
            naming::resource_link_from_api(element),
            TWO_NEWLINES
        ));
    } else {
        page.push(format!("{}{}", NO_REQUEST_BODY, TWO_NEWLINES));
    }

    page.heading(2, "Response");
    page.push(response_sentence(env, method));
    page.push(NEWLINE);

    match method.name.as_str() {
        synthetic::POST => create_example(&mut page, env, resource, method, sub_path),
        synthetic::DELETE => delete_example(&mut page, env, resource, method),
        _ => invoke_example(&mut page, env, resource, method),
    }
    page.push(NEWLINE);

    let file_name =
        file_name.unwrap_or_else(|| naming::method_file(&resource.name, &method.name));
    page.finish(env.config, &title, OutputFolder::Api, file_name)
}

fn response_sentence(env: &RenderEnv<'_>, method: &Method) -> String {
    let code = &method.http_success_code;
    let reason = http_reason(code);
    match &method.return_type {
        None => format!(
            "If successful, this method returns `{}, {}` response code. It does not return anything in the response body.{}",
            code, reason, NEWLINE
        ),
        Some(ret) => format!(
            "If successful, this method returns `{}, {}` response code and {} object in the response body.{}",
            code,
            reason,
            type_link(env, ret, method.is_return_type_collection, true),
            NEWLINE
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunConfig;
    use crate::enums::EnumRegistry;
    use crate::model::Parameter;
    use crate::source::MemorySource;
    use crate::type_mapping::TypeRegistry;

    fn calendar() -> ResourceDescription {
        let mut res = ResourceDescription {
            name: "calendar".into(),
            ..Default::default()
        };
        res.rest_path.insert("/me/calendar".into(), true);
        res
    }

    #[test]
    fn test_function_page() {
        let config = RunConfig::default();
        let enums = EnumRegistry::new();
        let types = TypeRegistry::new(&enums);
        let source = MemorySource::new();
        let env = RenderEnv::new(&config, &enums, &types, &source);

        let method = Method {
            name: "getSchedule".into(),
            is_function: true,
            return_type: Some("String".into()),
            is_return_type_collection: true,
            parameters: vec![
                Parameter {
                    name: "startDateTime".into(),
                    data_type: "String".into(),
                    is_required: true,
                    ..Default::default()
                },
                Parameter {
                    name: "endDateTime".into(),
                    data_type: "String".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let page = render_method(&env, &calendar(), &method, None, None);
        assert_eq!(page.file_name, "calendar-getschedule.md");

        let text = page.contents();
        assert!(text.contains("# calendar: getSchedule\n\n"));
        assert!(text.contains("PROVIDE DESCRIPTION HERE\n\n"));
        assert!(text.contains(
            "GET /me/calendar/getSchedule(startDateTime=startDateTime-value, endDateTime=endDateTime-value)\n"
        ));
        assert!(text.contains("## Function parameters"));
        assert!(text.contains("|endDateTime|String|Optional. |\n"));
        assert!(text.contains("Do not supply a request body for this method."));
        assert!(text.contains("returns `200, OK` response code and String collection object"));
        assert!(text.contains("\"value\": [\n    \"String-value\"\n  ]"));
    }

    #[test]
    fn test_delete_page_has_no_body() {
        let config = RunConfig::default();
        let enums = EnumRegistry::new();
        let types = TypeRegistry::new(&enums);
        let source = MemorySource::new();
        let env = RenderEnv::new(&config, &enums, &types, &source);

        let method = Method::synthetic(synthetic::DELETE, "Delete calendar", "Delete calendar.", None, "204");
        let page = render_method(&env, &calendar(), &method, Some("calendar-delete.md".into()), None);
        let text = page.contents();
        assert!(text.contains("DELETE /me/calendar\n"));
        assert!(text.contains(
            "returns `204, No Content` response code. It does not return anything in the response body."
        ));
        assert!(text.contains("```http\nHTTP/1.1 204 No Content\n```\n"));
        assert!(!text.contains("Content-type"));
    }
}
