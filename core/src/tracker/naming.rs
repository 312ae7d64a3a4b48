#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Output file names and relative links. Every cross-page link is derived from
//! these functions, so a page and the links pointing at it always agree.

/// Folder holding resource overview pages.
pub const RESOURCES_FOLDER: &str = "resources";

/// Folder holding operation pages.
pub const API_FOLDER: &str = "api";

/// File name of the service root page.
pub const SERVICE_ROOT_FILE: &str = "service-root.md";

/// File name of the enumeration page.
pub const ENUMS_FILE: &str = "enums.md";

/// Replaces the `_` separator with `-`.
pub fn sanitize_file_name(name: &str) -> String {
    name.replace('_', "-")
}

fn stem(name: &str) -> String {
    sanitize_file_name(&name.to_lowercase())
}

/// `message` -> `message.md`; entity sets get a `-collection` suffix.
pub fn resource_file(name: &str, is_entity_set: bool) -> String {
    if is_entity_set {
        format!("{}-collection.md", stem(name))
    } else {
        format!("{}.md", stem(name))
    }
}

/// `message` -> `message-get.md`
pub fn get_file(name: &str) -> String {
    format!("{}-get.md", stem(name))
}

/// Named after the element type: `event` -> `event-list.md`
pub fn list_file(element: &str) -> String {
    format!("{}-list.md", stem(element))
}

/// `message` -> `message-update.md`
pub fn update_file(name: &str) -> String {
    format!("{}-update.md", stem(name))
}

/// `message` -> `message-delete.md`
pub fn delete_file(name: &str) -> String {
    format!("{}-delete.md", stem(name))
}

/// `calendar`, `get_schedule` -> `calendar-get-schedule.md`
pub fn method_file(resource: &str, method: &str) -> String {
    sanitize_file_name(&format!(
        "{}-{}.md",
        resource.to_lowercase(),
        method.to_lowercase()
    ))
}

/// `user`, `events` -> `user-post-events.md`
pub fn create_file(owner: &str, relationship: &str) -> String {
    sanitize_file_name(&format!(
        "{}-post-{}.md",
        owner.to_lowercase(),
        relationship.to_lowercase()
    ))
}

/// `user`, `events` -> `user-list-events.md`
pub fn relationship_list_file(owner: &str, relationship: &str) -> String {
    sanitize_file_name(&format!("{}-list-{}.md", owner, relationship).to_lowercase())
}

/// Link from a resource page to another resource page.
pub fn resource_link(type_name: &str) -> String {
    resource_file(type_name, false)
}

/// Link from an operation page to a resource page.
pub fn resource_link_from_api(type_name: &str) -> String {
    format!("../{}/{}", RESOURCES_FOLDER, resource_file(type_name, false))
}

/// Link from a resource page to an operation page file.
pub fn api_link(file_name: &str) -> String {
    format!("../{}/{}", API_FOLDER, file_name)
}

/// Link to an enum's anchor on the enumeration page.
pub fn enum_link(enum_name: &str, from_api: bool) -> String {
    let anchor = enum_name.to_lowercase();
    if from_api {
        format!("../{}/{}#{}", RESOURCES_FOLDER, ENUMS_FILE, anchor)
    } else {
        format!("{}#{}", ENUMS_FILE, anchor)
    }
}

/// Ruby-style capitalize: first character upper-cased, the rest lower-cased.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Lower-cases only the first character.
pub fn uncapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_files() {
        assert_eq!(resource_file("Message", false), "message.md");
        assert_eq!(resource_file("users", true), "users-collection.md");
        assert_eq!(get_file("Message"), "message-get.md");
        assert_eq!(list_file("Event"), "event-list.md");
        assert_eq!(update_file("mail_folder"), "mail-folder-update.md");
        assert_eq!(delete_file("Message"), "message-delete.md");
        assert_eq!(method_file("calendar", "get_Schedule"), "calendar-get-schedule.md");
        assert_eq!(create_file("User", "events"), "user-post-events.md");
        assert_eq!(relationship_list_file("User", "Events"), "user-list-events.md");
    }

    #[test]
    fn test_links() {
        assert_eq!(resource_link("emailAddress"), "emailaddress.md");
        assert_eq!(
            resource_link_from_api("emailAddress"),
            "../resources/emailaddress.md"
        );
        assert_eq!(api_link("message-get.md"), "../api/message-get.md");
        assert_eq!(enum_link("bodyType", false), "enums.md#bodytype");
        assert_eq!(enum_link("bodyType", true), "../resources/enums.md#bodytype");
    }

    #[test]
    fn test_capitalization() {
        assert_eq!(capitalize("getSchedule"), "Getschedule");
        assert_eq!(capitalize(""), "");
        assert_eq!(uncapitalize("EmailAddress"), "emailAddress");
    }
}
