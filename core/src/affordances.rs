#![deny(missing_docs)]

//! # Affordance Classification
//!
//! Decides which operations a resource exposes and the order their rows and
//! pages are produced in: get or list, create (plus list) per postable
//! relationship, update, delete, then declared methods.

use crate::model::{Method, Property, ResourceDescription};
use crate::tracker::naming;
use crate::type_mapping::TypeRegistry;

/// Element types too generic to name a create operation after.
/// For these the relationship name is used instead (`owners` -> `Create owner`).
pub const POST_NAME_MAPPING: &[&str] = &[
    "recipient",
    "directoryobject",
    "photo",
    "conversationthread",
    "privilegedroleassignment",
    "item",
];

/// A collection relationship that accepts POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipTarget {
    /// Relationship (navigation property) name; also the URL segment.
    pub relationship: String,
    /// Element type of the collection.
    pub data_type: String,
    /// Row and page title, e.g. `Create event`.
    pub display_name: String,
    /// Noun used in descriptions.
    pub use_name: String,
    /// Create page file name.
    pub post_file: String,
    /// Relationship list page file name; `None` for primitive element types.
    pub list_file: Option<String>,
}

/// An operation available on a resource.
#[derive(Debug, Clone, PartialEq)]
pub enum Affordance {
    /// Read a single instance.
    Get,
    /// Read the collection of `element`.
    List {
        /// Element type name.
        element: String,
    },
    /// Create by posting to a relationship or entity set.
    Create(RelationshipTarget),
    /// List the members of a relationship.
    ListRelationship(RelationshipTarget),
    /// Update the resource.
    Update,
    /// Delete the resource.
    Delete,
    /// A declared action or function.
    Custom(Method),
}

/// Flags and ordered operations for one resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AffordanceSet {
    /// At least one non-relationship property.
    pub has_property: bool,
    /// At least one relationship.
    pub has_relationship: bool,
    /// At least one collection relationship accepting POST.
    pub has_postable_collection: bool,
    /// A writable property on a resource that allows PATCH.
    pub has_patchable_property: bool,
    /// At least one declared method.
    pub has_methods: bool,
    /// A get or list page is produced, even when the Methods table has no row for it.
    pub has_read_page: bool,
    /// Operations in row order.
    pub operations: Vec<Affordance>,
}

impl AffordanceSet {
    /// True when no operation applies; the Methods section shows `None`.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// Classifies the operations of `resource`.
pub fn classify_affordances(resource: &ResourceDescription, types: &TypeRegistry) -> AffordanceSet {
    let mut set = AffordanceSet::default();
    for prop in &resource.properties {
        if prop.is_relationship {
            set.has_relationship = true;
            if is_postable(prop) {
                set.has_postable_collection = true;
            }
        } else {
            set.has_property = true;
            if !prop.is_read_only && resource.allow_patch {
                set.has_patchable_property = true;
            }
        }
    }
    set.has_methods = !resource.methods.is_empty();

    if resource.is_complex_type {
        return set;
    }
    if resource.is_entity_set {
        set.operations = entity_set_operations(resource);
        return set;
    }
    set.has_read_page = true;

    if let Some(element) = &resource.collection_of {
        set.operations.push(Affordance::List {
            element: element.clone(),
        });
    } else if set.has_property {
        set.operations.push(Affordance::Get);
    }

    for prop in resource.sorted_properties() {
        if !(prop.is_relationship && is_postable(prop)) {
            continue;
        }
        let target = relationship_target(&resource.name, prop, types);
        let has_list = target.list_file.is_some();
        set.operations.push(Affordance::Create(target.clone()));
        if has_list {
            set.operations.push(Affordance::ListRelationship(target));
        }
    }

    if set.has_patchable_property {
        set.operations.push(Affordance::Update);
    }
    if resource.allow_delete {
        set.operations.push(Affordance::Delete);
    }
    for method in resource.sorted_methods() {
        set.operations.push(Affordance::Custom(method.clone()));
    }
    set
}

/// An entity set lists and creates its element type at the service root.
fn entity_set_operations(resource: &ResourceDescription) -> Vec<Affordance> {
    let Some(target) = entity_set_target(resource) else {
        return Vec::new();
    };
    vec![
        Affordance::List {
            element: target.data_type.clone(),
        },
        Affordance::Create(target),
    ]
}

/// Create target of an entity set: posts `collectionOf` to the set itself.
pub fn entity_set_target(entity_set: &ResourceDescription) -> Option<RelationshipTarget> {
    let element = entity_set.collection_of.as_ref()?;
    Some(RelationshipTarget {
        relationship: entity_set.name.clone(),
        data_type: element.clone(),
        display_name: format!("Create {}", element),
        use_name: element.clone(),
        post_file: naming::create_file(element, &entity_set.name),
        list_file: Some(naming::list_file(element)),
    })
}

fn is_postable(prop: &Property) -> bool {
    prop.is_collection && prop.allow_post_to_collection
}

fn relationship_target(owner: &str, prop: &Property, types: &TypeRegistry) -> RelationshipTarget {
    let is_simple = types.is_simple(&prop.data_type);
    let generic = POST_NAME_MAPPING.contains(&prop.data_type.to_lowercase().as_str());
    let use_name = if is_simple || generic {
        prop.name.strip_suffix('s').unwrap_or(&prop.name).to_string()
    } else {
        prop.data_type.clone()
    };
    RelationshipTarget {
        relationship: prop.name.clone(),
        data_type: prop.data_type.clone(),
        display_name: format!("Create {}", use_name),
        use_name,
        post_file: naming::create_file(owner, &prop.name),
        list_file: (!is_simple).then(|| naming::relationship_list_file(owner, &prop.name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relationship(name: &str, data_type: &str, postable: bool) -> Property {
        Property {
            name: name.into(),
            data_type: data_type.into(),
            is_relationship: true,
            is_collection: postable,
            allow_post_to_collection: postable,
            ..Default::default()
        }
    }

    #[test]
    fn test_message_is_patchable() {
        let message = ResourceDescription {
            name: "message".into(),
            allow_patch: true,
            properties: vec![Property {
                name: "isRead".into(),
                data_type: "Boolean".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let set = classify_affordances(&message, &TypeRegistry::default());
        assert!(set.has_property);
        assert!(set.has_patchable_property);
        assert_eq!(set.operations, vec![Affordance::Get, Affordance::Update]);
    }

    #[test]
    fn test_single_relationship_is_not_postable() {
        let user = ResourceDescription {
            name: "user".into(),
            properties: vec![relationship("manager", "user", false)],
            ..Default::default()
        };
        let set = classify_affordances(&user, &TypeRegistry::default());
        assert!(set.has_relationship);
        assert!(!set.has_postable_collection);
        assert!(set.is_empty());
        assert!(set.has_read_page);
    }

    #[test]
    fn test_create_and_list_rows_in_order() {
        let user = ResourceDescription {
            name: "user".into(),
            allow_delete: true,
            properties: vec![
                relationship("owners", "directoryObject", true),
                relationship("events", "event", true),
                relationship("tags", "String", true),
            ],
            methods: vec![
                Method {
                    name: "sendMail".into(),
                    ..Default::default()
                },
                Method {
                    name: "assignLicense".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let set = classify_affordances(&user, &TypeRegistry::default());
        let kinds: Vec<String> = set
            .operations
            .iter()
            .map(|op| match op {
                Affordance::Create(t) => format!("create:{}", t.display_name),
                Affordance::ListRelationship(t) => format!("list:{}", t.relationship),
                Affordance::Delete => "delete".into(),
                Affordance::Custom(m) => format!("method:{}", m.name),
                other => format!("{:?}", other),
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                "create:Create event",
                "list:events",
                "create:Create owner",
                "list:owners",
                "create:Create tag",
                "delete",
                "method:assignLicense",
                "method:sendMail",
            ]
        );

        let Affordance::Create(events) = &set.operations[0] else {
            panic!("expected create");
        };
        assert_eq!(events.post_file, "user-post-events.md");
        assert_eq!(events.list_file.as_deref(), Some("user-list-events.md"));
    }

    #[test]
    fn test_complex_type_has_no_operations() {
        let address = ResourceDescription {
            name: "emailAddress".into(),
            is_complex_type: true,
            allow_patch: true,
            properties: vec![Property {
                name: "address".into(),
                data_type: "String".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let set = classify_affordances(&address, &TypeRegistry::default());
        assert!(set.has_patchable_property);
        assert!(set.is_empty());
        assert!(!set.has_read_page);
    }

    #[test]
    fn test_entity_set_lists_and_creates() {
        let users = ResourceDescription {
            name: "users".into(),
            is_entity_set: true,
            collection_of: Some("user".into()),
            ..Default::default()
        };
        let set = classify_affordances(&users, &TypeRegistry::default());
        assert_eq!(set.operations.len(), 2);
        assert!(!set.has_read_page);
        let Affordance::Create(target) = &set.operations[1] else {
            panic!("expected create");
        };
        assert_eq!(target.post_file, "user-post-users.md");
        assert_eq!(target.display_name, "Create user");
    }
}
