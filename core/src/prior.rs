#![deny(missing_docs)]

//! # Previous-Run Preservation
//!
//! Hand-edited text from the previous run's resource descriptions wins over
//! freshly generated text. Only descriptive fields are carried over; structure
//! always comes from the current input.

use crate::model::ResourceDescription;
use crate::source::ResourceSource;

/// Copies non-empty descriptive text from the prior-run copy of `resource`.
///
/// Returns `true` when a prior-run description was found.
pub fn preserve_descriptions(resource: &mut ResourceDescription, prior: &dyn ResourceSource) -> bool {
    let Some(previous) = prior.load(&resource.name) else {
        tracing::debug!(resource = %resource.name, "no previous-run description");
        return false;
    };

    keep(&mut resource.description, &previous.description);

    for prop in &mut resource.properties {
        if let Some(old) = previous.properties.iter().find(|p| p.name == prop.name) {
            keep(&mut prop.description, &old.description);
        }
    }

    for method in &mut resource.methods {
        let Some(old) = previous.methods.iter().find(|m| m.name == method.name) else {
            continue;
        };
        keep(&mut method.description, &old.description);
        keep(&mut method.display_name, &old.display_name);
        keep(&mut method.prerequisites, &old.prerequisites);
        for param in &mut method.parameters {
            if let Some(old_param) = old.parameters.iter().find(|p| p.name == param.name) {
                keep(&mut param.description, &old_param.description);
            }
        }
    }
    true
}

fn keep(current: &mut String, previous: &str) {
    if !previous.is_empty() {
        *current = previous.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Method, Parameter, Property};
    use crate::source::MemorySource;

    fn user(description: &str, prop_desc: &str, method_desc: &str) -> ResourceDescription {
        ResourceDescription {
            name: "user".into(),
            description: description.into(),
            properties: vec![Property {
                name: "displayName".into(),
                data_type: "String".into(),
                description: prop_desc.into(),
                ..Default::default()
            }],
            methods: vec![Method {
                name: "assignLicense".into(),
                description: method_desc.into(),
                parameters: vec![Parameter {
                    name: "addLicenses".into(),
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_prior_text_wins_when_present() {
        let mut previous = user("Hand-written.", "", "Adds licenses.");
        previous.methods[0].prerequisites = "Requires a license.".into();
        previous.methods[0].parameters[0].description = "Licenses to add.".into();
        let prior = MemorySource::new().with(previous);

        let mut current = user("Generated.", "The name.", "");
        assert!(preserve_descriptions(&mut current, &prior));

        assert_eq!(current.description, "Hand-written.");
        assert_eq!(current.properties[0].description, "The name.");
        assert_eq!(current.methods[0].description, "Adds licenses.");
        assert_eq!(current.methods[0].prerequisites, "Requires a license.");
        assert_eq!(
            current.methods[0].parameters[0].description,
            "Licenses to add."
        );
    }

    #[test]
    fn test_missing_prior_is_noop() {
        let mut current = user("Generated.", "", "");
        let before = current.clone();
        assert!(!preserve_descriptions(&mut current, &MemorySource::new()));
        assert_eq!(current, before);
    }
}
