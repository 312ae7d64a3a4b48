#![deny(missing_docs)]

//! # Path Resolution
//!
//! Builds the one-line HTTP request strings shown in the "HTTP request" block
//! and the example requests.
//!
//! Only canonical paths (flag `true` in `restPath`) are used, shortest first.
//! When none remain, the result is the single [`PATH_SENTINEL`] line so the gap
//! is visible in the rendered page.

use crate::model::{Method, RestPaths};

/// Rendered in place of request lines when no canonical path exists.
pub const PATH_SENTINEL: &str = "JSON2MD ERROR: COULD NOT DETERMINE API PATH";

/// The operation a request line is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// GET a single resource.
    Get,
    /// GET a collection.
    List,
    /// POST to a collection.
    Post,
    /// DELETE a resource.
    Delete,
    /// PUT a resource.
    Put,
    /// PATCH a resource.
    Patch,
    /// Invoke a declared function (GET) or action (POST).
    Invoke,
}

/// Inputs besides the path set.
#[derive(Debug, Clone, Copy)]
pub struct RequestSpec<'a> {
    /// Operation being rendered.
    pub kind: OperationKind,
    /// Segment appended for list/post (the relationship name).
    pub sub_path: Option<&'a str>,
    /// Needed for `Invoke`: decides the verb and the call syntax.
    pub method: Option<&'a Method>,
    /// Prefix such as `https://graph.microsoft.com/v1.0`; empty for syntax blocks.
    pub server: &'a str,
}

impl<'a> RequestSpec<'a> {
    /// A spec with no sub-path, method or server.
    pub fn new(kind: OperationKind) -> Self {
        Self {
            kind,
            sub_path: None,
            method: None,
            server: "",
        }
    }

    /// Sets the appended sub-path segment.
    pub fn sub_path(mut self, sub_path: Option<&'a str>) -> Self {
        self.sub_path = sub_path;
        self
    }

    /// Sets the invoked method.
    pub fn method(mut self, method: &'a Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Sets the server origin.
    pub fn server(mut self, server: &'a str) -> Self {
        self.server = server;
        self
    }
}

/// Canonical paths in ascending length order. Ties keep declaration order.
pub fn canonical_paths(rest: &RestPaths) -> Vec<&str> {
    let mut paths: Vec<&str> = rest
        .iter()
        .filter(|(_, canonical)| **canonical)
        .map(|(path, _)| path.as_str())
        .collect();
    paths.sort_by_key(|p| p.len());
    paths
}

/// The shortest canonical path, used for examples.
pub fn primary_path(rest: &RestPaths) -> Option<&str> {
    canonical_paths(rest).into_iter().next()
}

/// Request lines for every canonical path. Never empty.
pub fn request_lines(rest: &RestPaths, spec: &RequestSpec<'_>) -> Vec<String> {
    build_lines(&canonical_paths(rest), spec)
}

/// Request line for the shortest canonical path only. Never empty.
pub fn primary_request_lines(rest: &RestPaths, spec: &RequestSpec<'_>) -> Vec<String> {
    let primary: Vec<&str> = primary_path(rest).into_iter().collect();
    build_lines(&primary, spec)
}

fn build_lines(paths: &[&str], spec: &RequestSpec<'_>) -> Vec<String> {
    let server = spec.server;
    let mut lines: Vec<String> = Vec::with_capacity(paths.len());
    for path in paths {
        let line = match spec.kind {
            OperationKind::Get | OperationKind::List => {
                format!("GET {}{}", server, append_segment(path, spec.sub_path))
            }
            OperationKind::Post => {
                format!("POST {}{}", server, append_segment(path, spec.sub_path))
            }
            OperationKind::Delete => format!("DELETE {}{}", server, path),
            OperationKind::Put => format!("PUT {}{}", server, path),
            OperationKind::Patch => format!("PATCH {}{}", server, path),
            OperationKind::Invoke => invoke_line(path, spec),
        };
        if !lines.contains(&line) {
            lines.push(line);
        }
    }

    if lines.is_empty() {
        tracing::warn!(kind = ?spec.kind, "no canonical REST path");
        lines.push(PATH_SENTINEL.to_string());
    }
    lines
}

fn invoke_line(path: &str, spec: &RequestSpec<'_>) -> String {
    let is_function = spec.method.is_some_and(|m| m.is_function);
    let verb = if is_function { "GET" } else { "POST" };
    let name = spec.method.map(|m| m.name.as_str()).unwrap_or_default();

    let mut call = name.to_string();
    if let Some(method) = spec.method.filter(|m| m.is_function && !m.parameters.is_empty()) {
        let args: Vec<String> = method
            .parameters
            .iter()
            .map(|p| format!("{}={}-value", p.name, p.name))
            .collect();
        call.push_str(&format!("({})", args.join(", ")));
    }
    format!(
        "{} {}{}",
        verb,
        spec.server,
        append_segment(path, Some(&call))
    )
}

/// `path` + `/segment`; an absent or empty segment leaves `path` untouched.
fn append_segment(path: &str, segment: Option<&str>) -> String {
    match segment.filter(|s| !s.is_empty()) {
        Some(seg) => format!("{}/{}", path.trim_end_matches('/'), seg),
        None => path.to_string(),
    }
}
