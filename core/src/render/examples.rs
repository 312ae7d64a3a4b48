//! # Examples Section
//!
//! The fabricated request/response pair at the end of every operation page.
//! Requests address the shortest canonical path on the configured server.

use crate::model::{Method, ResourceDescription};
use crate::paths::{primary_request_lines, OperationKind, RequestSpec};
use crate::render::blocks::{
    request_pretext, response_pretext, status_line, Page, ALERT_NOTE, NEWLINE, TRUNCATION_NOTE,
    TWO_NEWLINES,
};
use crate::render::RenderEnv;

const JSON_CONTENT: &str = "Content-type: application/json";

/// Get or list example; `sub_path` is the relationship segment of a relationship list.
pub(crate) fn get_example(
    page: &mut Page,
    env: &RenderEnv<'_>,
    resource: &ResourceDescription,
    sub_path: Option<&str>,
) {
    let samples = env.samples();
    let kind = if resource.collection_of.is_some() {
        OperationKind::List
    } else {
        OperationKind::Get
    };
    page.heading(2, "Examples");
    request(page, &format!("get_{}", resource.name));
    let server = env.config.server_origin();
    let lines = primary_request_lines(
        &resource.rest_path,
        &RequestSpec::new(kind).sub_path(sub_path).server(&server),
    );
    page.push(format!("```http\n{}\n```{}", lines.join(NEWLINE), TWO_NEWLINES));

    response_heading(page, true);
    let (pretext, model) = match &resource.collection_of {
        Some(element) => (
            response_pretext(env, Some(element), true),
            samples.model_for_return_type(element, true, true, false),
        ),
        None => (
            response_pretext(env, Some(&resource.name), false),
            samples.model_for_resource(resource, false, true, false),
        ),
    };
    page.push(format!("{}{}", pretext, TWO_NEWLINES));
    response_block(page, "200", Some(&model));
}

/// Update example: the body omits key properties.
pub(crate) fn patch_example(page: &mut Page, env: &RenderEnv<'_>, resource: &ResourceDescription) {
    let samples = env.samples();
    page.heading(2, "Examples");
    request(page, &format!("update_{}", resource.name));
    let server = env.config.server_origin();
    let lines = primary_request_lines(
        &resource.rest_path,
        &RequestSpec::new(OperationKind::Patch).server(&server),
    );
    let body = samples.model_for_resource(resource, false, false, false);
    request_block(page, &lines, Some(&body));

    response_heading(page, true);
    page.push(format!(
        "{}{}",
        response_pretext(env, Some(&resource.name), false),
        TWO_NEWLINES
    ));
    let model = samples.model_for_resource(resource, false, true, false);
    response_block(page, "200", Some(&model));
}

/// Create example: posts the element type to the collection at `sub_path`.
pub(crate) fn create_example(
    page: &mut Page,
    env: &RenderEnv<'_>,
    resource: &ResourceDescription,
    method: &Method,
    sub_path: Option<&str>,
) {
    let samples = env.samples();
    let element = method.return_type.as_deref().unwrap_or_default();
    page.heading(2, "Examples");
    request(page, &format!("create_{}_from_{}", element, resource.name));
    let server = env.config.server_origin();
    let lines = primary_request_lines(
        &resource.rest_path,
        &RequestSpec::new(OperationKind::Post)
            .sub_path(sub_path)
            .server(&server),
    );
    let body = samples.model_for_return_type(element, false, false, true);
    request_block(page, &lines, Some(&body));

    response_heading(page, true);
    page.push(format!(
        "{}{}",
        response_pretext(env, Some(element), false),
        TWO_NEWLINES
    ));
    let model = samples.model_for_return_type(element, false, true, true);
    response_block(page, &method.http_success_code, Some(&model));
}

/// Delete example: no bodies.
pub(crate) fn delete_example(
    page: &mut Page,
    env: &RenderEnv<'_>,
    resource: &ResourceDescription,
    method: &Method,
) {
    page.heading(2, "Examples");
    request(page, &format!("delete_{}", resource.name));
    let server = env.config.server_origin();
    let lines = primary_request_lines(
        &resource.rest_path,
        &RequestSpec::new(OperationKind::Delete).server(&server),
    );
    request_block(page, &lines, None);

    response_heading(page, false);
    page.push(format!("{}{}", response_pretext(env, None, false), TWO_NEWLINES));
    response_block(page, &method.http_success_code, None);
}

/// Declared action or function.
pub(crate) fn invoke_example(
    page: &mut Page,
    env: &RenderEnv<'_>,
    resource: &ResourceDescription,
    method: &Method,
) {
    let samples = env.samples();
    page.heading(2, "Examples");
    page.push(format!(
        "The following is an example of how to call this API.{}",
        TWO_NEWLINES
    ));
    request(page, &format!("{}_{}", resource.name, method.name));
    let server = env.config.server_origin();
    let lines = primary_request_lines(
        &resource.rest_path,
        &RequestSpec::new(OperationKind::Invoke)
            .method(method)
            .server(&server),
    );
    let body = (!method.is_function && !method.parameters.is_empty())
        .then(|| samples.model_for_parameters(&method.parameters));
    request_block(page, &lines, body.as_deref());

    let return_type = method.return_type.as_deref();
    response_heading(page, return_type.is_some());
    page.push(format!(
        "{}{}",
        response_pretext(env, return_type, method.is_return_type_collection),
        TWO_NEWLINES
    ));
    let model = return_type.map(|ret| {
        samples.model_for_return_type(ret, method.is_return_type_collection, true, false)
    });
    response_block(page, &method.http_success_code, model.as_deref());
}

fn request(page: &mut Page, name: &str) {
    page.heading(3, "Request");
    page.push(format!("The following is an example of the request.{}", NEWLINE));
    page.push(format!(
        "{}{}",
        request_pretext(&name.to_lowercase()),
        TWO_NEWLINES
    ));
}

fn request_block(page: &mut Page, lines: &[String], body: Option<&str>) {
    let mut block = format!("```http\n{}\n", lines.join(NEWLINE));
    if let Some(body) = body {
        block.push_str(&format!("{}{}{}\n", JSON_CONTENT, TWO_NEWLINES, body));
    }
    block.push_str("```");
    block.push_str(TWO_NEWLINES);
    page.push(block);
}

fn response_heading(page: &mut Page, truncated: bool) {
    page.heading(3, "Response");
    page.push("The following is an example of the response.");
    if truncated {
        page.push(format!(
            "{}{}{}{}",
            TWO_NEWLINES, ALERT_NOTE, TRUNCATION_NOTE, TWO_NEWLINES
        ));
    } else {
        page.push(TWO_NEWLINES);
    }
}

fn response_block(page: &mut Page, code: &str, body: Option<&str>) {
    let mut block = format!("```http\n{}\n", status_line(code));
    if let Some(body) = body {
        block.push_str(&format!("{}{}{}\n", JSON_CONTENT, TWO_NEWLINES, body));
    }
    block.push_str("```\n");
    page.push(block);
}
