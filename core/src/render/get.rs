#![deny(missing_docs)]

//! # Get and List Pages
//!
//! A resource with `collectionOf` renders as a list page named after its
//! element type; anything else renders as a get page named after itself.

use crate::model::ResourceDescription;
use crate::paths::{request_lines, OperationKind, RequestSpec};
use crate::render::blocks::{
    PageType, Page, HTTP_HEADER, HTTP_HEADER_SAMPLE, IGNORED_BLOCK, NO_REQUEST_BODY, PREREQ,
    QUERY_PARAMETERS_TEXT, TABLE_2ND_LINE_2COL, TWO_NEWLINES,
};
use crate::render::examples::get_example;
use crate::render::RenderEnv;
use crate::tracker::naming;
use crate::tracker::{OutputArtifact, OutputFolder};

/// Renders the get or list page of `resource`.
///
/// `sub_path` is appended to each request path (relationship lists);
/// `file_name` overrides the derived page name.
pub fn render_get(
    env: &RenderEnv<'_>,
    resource: &ResourceDescription,
    sub_path: Option<&str>,
    file_name: Option<String>,
) -> OutputArtifact {
    let (title, description, kind) = match &resource.collection_of {
        Some(element) => (
            format!("List {}", resource.name),
            format!("Retrieve a list of {} objects.", element.to_lowercase()),
            OperationKind::List,
        ),
        None => (
            format!("Get {}", resource.name),
            format!(
                "Retrieve the properties and relationships of {} object.",
                resource.name.to_lowercase()
            ),
            OperationKind::Get,
        ),
    };

    let mut page = Page::start(env, &title, &description, PageType::Api);
    page.push(format!("{}{}", description, TWO_NEWLINES));
    page.push(PREREQ);

    page.heading(2, "HTTP request");
    page.push(format!("{}{}", IGNORED_BLOCK, TWO_NEWLINES));
    let lines = request_lines(
        &resource.rest_path,
        &RequestSpec::new(kind).sub_path(sub_path),
    );
    page.fenced("http", &lines);

    page.heading(2, "Optional query parameters");
    page.push(format!("{}{}", QUERY_PARAMETERS_TEXT, TWO_NEWLINES));

    page.heading(2, "Request headers");
    page.push(format!(
        "{}{}{}{}",
        HTTP_HEADER, TABLE_2ND_LINE_2COL, HTTP_HEADER_SAMPLE, TWO_NEWLINES
    ));

    page.heading(2, "Request body");
    page.push(format!("{}{}", NO_REQUEST_BODY, TWO_NEWLINES));

    page.heading(2, "Response");
    let sentence = match &resource.collection_of {
        Some(element) => format!(
            "If successful, this method returns a `200 OK` response code and collection of [{}]({}) objects in the response body.",
            element,
            naming::resource_link_from_api(element)
        ),
        None => format!(
            "If successful, this method returns a `200 OK` response code and [{}]({}) object in the response body.",
            resource.name,
            naming::resource_link_from_api(&resource.name)
        ),
    };
    page.push(format!("{}{}", sentence, TWO_NEWLINES));

    get_example(&mut page, env, resource, sub_path);
    page.push("\n");

    let file_name = file_name.unwrap_or_else(|| match &resource.collection_of {
        Some(element) => naming::list_file(element),
        None => naming::get_file(&resource.name),
    });
    page.finish(env.config, &title, OutputFolder::Api, file_name)
}
