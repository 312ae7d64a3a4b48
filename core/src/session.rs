#![deny(missing_docs)]

//! # Session
//!
//! One generation run. A [`Session`] owns the run inputs (settings, enums,
//! resource source and optional previous-run source), the service root
//! collected across resources, the produced pages and the counters.
//!
//! Resources are processed strictly one at a time. Nothing a single resource
//! does can fail the run: anomalies degrade locally and are logged.

use crate::affordances::{classify_affordances, entity_set_target, Affordance, RelationshipTarget};
use crate::config::RunConfig;
use crate::enums::EnumRegistry;
use crate::error::AppResult;
use crate::model::{synthetic, Method, ResourceDescription};
use crate::prior::preserve_descriptions;
use crate::render::{
    render_enums, render_get, render_method, render_patch, render_resource, render_service_root,
    RenderEnv,
};
use crate::source::ResourceSource;
use crate::tracker::naming;
use crate::tracker::{ArtifactRegistry, OutputArtifact, OutputFolder, RunCounters};
use crate::type_mapping::TypeRegistry;

/// Success code of synthetic create operations.
pub const CREATED_CODE: &str = "201";
/// Success code of synthetic delete operations.
pub const NO_CONTENT_CODE: &str = "204";

/// The engine object for one run.
pub struct Session {
    config: RunConfig,
    enums: EnumRegistry,
    types: TypeRegistry,
    source: Box<dyn ResourceSource>,
    prior: Option<Box<dyn ResourceSource>>,
    service_root: Vec<ResourceDescription>,
    artifacts: ArtifactRegistry,
    counters: RunCounters,
}

impl Session {
    /// Creates a session. Fails only on invalid settings.
    pub fn new(
        config: RunConfig,
        enums: EnumRegistry,
        source: Box<dyn ResourceSource>,
        prior: Option<Box<dyn ResourceSource>>,
    ) -> AppResult<Self> {
        config.validate()?;
        let types = TypeRegistry::new(&enums);
        Ok(Self {
            config,
            enums,
            types,
            source,
            prior,
            service_root: Vec::new(),
            artifacts: ArtifactRegistry::new(),
            counters: RunCounters::default(),
        })
    }

    /// Starts from a registry that knows about pages already on disk.
    pub fn with_artifacts(mut self, artifacts: ArtifactRegistry) -> Self {
        self.artifacts = artifacts;
        self
    }

    /// Renders every page of one resource.
    ///
    /// Entity sets only get their overview page here; their operation pages
    /// are produced by [`Session::finish`].
    pub fn process(&mut self, mut resource: ResourceDescription) {
        if let Some(prior) = &self.prior {
            preserve_descriptions(&mut resource, prior.as_ref());
        }
        tracing::info!(resource = %resource.name, "processing resource");

        let env = RenderEnv::new(&self.config, &self.enums, &self.types, self.source.as_ref());
        let affordances = classify_affordances(&resource, &self.types);
        let mut out = Output {
            artifacts: &mut self.artifacts,
            counters: &mut self.counters,
        };

        if out.record(render_resource(&env, &resource, &affordances)) {
            out.counters.resources += 1;
        }
        if resource.is_entity_set {
            out.counters.entity_sets += 1;
            self.service_root.push(resource);
            return;
        }

        if affordances.has_read_page && out.record(render_get(&env, &resource, None, None)) {
            out.counters.get_list += 1;
        }

        for op in &affordances.operations {
            match op {
                // Row only; the page is rendered above.
                Affordance::Get | Affordance::List { .. } => {}
                Affordance::Create(target) => {
                    out.create_page(&env, &resource, target, Some(&target.relationship));
                }
                Affordance::ListRelationship(target) => {
                    let view = resource.relationship_collection(&target.relationship, &target.data_type);
                    let page = render_get(
                        &env,
                        &view,
                        Some(&target.relationship),
                        target.list_file.clone(),
                    );
                    if out.record(page) {
                        out.counters.get_list += 1;
                        out.counters.list_from_relationship += 1;
                    }
                }
                Affordance::Update => {
                    if out.record(render_patch(&env, &resource)) {
                        out.counters.patch += 1;
                    }
                }
                Affordance::Delete => {
                    let description = if resource.delete_description.is_empty() {
                        format!("Delete {}.", resource.name)
                    } else {
                        resource.delete_description.clone()
                    };
                    let method = Method::synthetic(
                        synthetic::DELETE,
                        format!("Delete {}", resource.name),
                        description,
                        None,
                        NO_CONTENT_CODE,
                    );
                    let file = naming::delete_file(&resource.name);
                    if out.record(render_method(&env, &resource, &method, Some(file), None)) {
                        out.counters.methods += 1;
                    }
                }
                Affordance::Custom(method) => {
                    if out.record(render_method(&env, &resource, method, None, None)) {
                        out.counters.methods += 1;
                    }
                }
            }
        }
    }

    /// Renders the entity-set operation pages, the service root and the enum page.
    pub fn finish(&mut self) {
        let env = RenderEnv::new(&self.config, &self.enums, &self.types, self.source.as_ref());
        let mut out = Output {
            artifacts: &mut self.artifacts,
            counters: &mut self.counters,
        };

        for entity_set in &self.service_root {
            let Some(target) = entity_set_target(entity_set) else {
                tracing::debug!(entity_set = %entity_set.name, "entity set without element type");
                continue;
            };
            out.create_page(&env, entity_set, &target, None);
            if out.record(render_get(&env, entity_set, None, None)) {
                out.counters.get_list += 1;
            }
        }

        out.record(render_service_root(&env, &self.service_root));
        out.record(render_enums(&env));

        let c = &self.counters;
        tracing::info!(
            resources = c.resources,
            get_list = c.get_list,
            patch = c.patch,
            methods = c.methods,
            list_from_relationship = c.list_from_relationship,
            entity_sets = c.entity_sets,
            "run finished"
        );
    }

    /// Counters so far.
    pub fn counters(&self) -> RunCounters {
        self.counters
    }

    /// Pages produced so far.
    pub fn artifacts(&self) -> &ArtifactRegistry {
        &self.artifacts
    }

    /// Entity sets collected for the service root.
    pub fn service_root(&self) -> &[ResourceDescription] {
        &self.service_root
    }

    /// Consumes the session, returning the produced pages.
    pub fn into_artifacts(self) -> ArtifactRegistry {
        self.artifacts
    }
}

struct Output<'s> {
    artifacts: &'s mut ArtifactRegistry,
    counters: &'s mut RunCounters,
}

impl Output<'_> {
    fn record(&mut self, artifact: OutputArtifact) -> bool {
        self.artifacts.record(artifact)
    }

    /// Create page for `target`, unless a page of that name already exists.
    fn create_page(
        &mut self,
        env: &RenderEnv<'_>,
        owner: &ResourceDescription,
        target: &RelationshipTarget,
        sub_path: Option<&str>,
    ) {
        if self.artifacts.exists(OutputFolder::Api, &target.post_file) {
            tracing::debug!(file = %target.post_file, "create page already exists; skipped");
            return;
        }
        let method = Method::synthetic(
            synthetic::POST,
            target.display_name.clone(),
            create_description(env.source, &target.data_type, &target.use_name),
            Some(target.data_type.clone()),
            CREATED_CODE,
        );
        let page = render_method(env, owner, &method, Some(target.post_file.clone()), sub_path);
        if self.record(page) {
            self.counters.methods += 1;
        }
    }
}

/// The element type's own `createDescription`, else a generated sentence.
fn create_description(source: &dyn ResourceSource, element: &str, use_name: &str) -> String {
    source
        .load(element)
        .map(|r| r.create_description.clone())
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| format!("Use this API to create a new {}.", use_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Property;
    use crate::source::MemorySource;

    fn user() -> ResourceDescription {
        let mut res = ResourceDescription {
            name: "user".into(),
            allow_patch: true,
            allow_delete: true,
            properties: vec![
                Property {
                    name: "displayName".into(),
                    data_type: "String".into(),
                    ..Default::default()
                },
                Property {
                    name: "events".into(),
                    data_type: "event".into(),
                    is_relationship: true,
                    is_collection: true,
                    allow_post_to_collection: true,
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        res.rest_path.insert("/users/{id}".into(), true);
        res
    }

    fn event() -> ResourceDescription {
        ResourceDescription {
            name: "event".into(),
            create_description: "Create an event in a calendar.".into(),
            properties: vec![Property {
                name: "subject".into(),
                data_type: "String".into(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn session(existing: ArtifactRegistry) -> Session {
        let source = MemorySource::new().with(user()).with(event());
        Session::new(RunConfig::default(), EnumRegistry::new(), Box::new(source), None)
            .unwrap()
            .with_artifacts(existing)
    }

    #[test]
    fn test_process_renders_every_affordance() {
        let mut session = session(ArtifactRegistry::new());
        session.process(user());

        let files: Vec<String> = session
            .artifacts()
            .iter()
            .map(|a| a.relative_path().display().to_string())
            .collect();
        for expected in [
            "resources/user.md",
            "api/user-get.md",
            "api/user-post-events.md",
            "api/user-list-events.md",
            "api/user-update.md",
            "api/user-delete.md",
        ] {
            assert!(files.iter().any(|f| f == expected), "missing {}", expected);
        }

        let c = session.counters();
        assert_eq!((c.resources, c.get_list, c.patch, c.methods), (1, 2, 1, 2));
        assert_eq!(c.list_from_relationship, 1);

        let create = session
            .artifacts()
            .get(OutputFolder::Api, "user-post-events.md")
            .unwrap()
            .contents();
        assert!(create.contains("Create an event in a calendar."));
        assert!(create.contains("POST /users/{id}/events\n"));
        assert!(create.contains("HTTP/1.1 201 Created"));

        let list = session
            .artifacts()
            .get(OutputFolder::Api, "user-list-events.md")
            .unwrap()
            .contents();
        assert!(list.contains("# List events\n\n"));
        assert!(list.contains("GET /users/{id}/events\n"));
    }

    #[test]
    fn test_existing_create_page_is_skipped() {
        let existing = ArtifactRegistry::with_existing([(OutputFolder::Api, "user-post-events.md")]);
        let mut session = session(existing);
        session.process(user());

        assert!(session
            .artifacts()
            .get(OutputFolder::Api, "user-post-events.md")
            .is_none());
        assert_eq!(session.counters().methods, 1);
    }

    #[test]
    fn test_entity_sets_are_deferred_to_finish() {
        let mut session = session(ArtifactRegistry::new());
        session.process(ResourceDescription {
            name: "users".into(),
            is_entity_set: true,
            collection_of: Some("user".into()),
            ..Default::default()
        });
        assert_eq!(session.service_root().len(), 1);
        assert!(session
            .artifacts()
            .get(OutputFolder::Resources, "users-collection.md")
            .is_some());
        assert!(session.artifacts().get(OutputFolder::Api, "user-list.md").is_none());

        session.finish();
        let reg = session.into_artifacts();
        assert!(reg.get(OutputFolder::Api, "user-post-users.md").is_some());
        assert!(reg.get(OutputFolder::Api, "user-list.md").is_some());
        assert!(reg.get(OutputFolder::Resources, "service-root.md").is_some());
        assert!(reg.get(OutputFolder::Resources, "enums.md").is_some());
    }

    #[test]
    fn test_get_page_without_methods_row() {
        let mut session = session(ArtifactRegistry::new());
        let mut folder = ResourceDescription {
            name: "folder".into(),
            properties: vec![Property {
                name: "parent".into(),
                data_type: "folder".into(),
                is_relationship: true,
                ..Default::default()
            }],
            ..Default::default()
        };
        folder.rest_path.insert("/folders/{id}".into(), true);
        session.process(folder);

        let reg = session.artifacts();
        let get = reg.get(OutputFolder::Api, "folder-get.md").unwrap().contents();
        assert!(get.contains("GET /folders/{id}\n"));
        let overview = reg
            .get(OutputFolder::Resources, "folder.md")
            .unwrap()
            .contents();
        assert!(!overview.contains("folder-get.md"));
        assert_eq!(session.counters().get_list, 1);
    }

    #[test]
    fn test_colliding_list_pages_keep_the_first() {
        let mut session = session(ArtifactRegistry::new());
        let mut user_collection = ResourceDescription {
            name: "userCollection".into(),
            collection_of: Some("user".into()),
            ..Default::default()
        };
        user_collection.rest_path.insert("/groups/{id}/members".into(), true);
        session.process(user_collection);
        session.process(ResourceDescription {
            name: "users".into(),
            is_entity_set: true,
            collection_of: Some("user".into()),
            ..Default::default()
        });
        session.finish();

        let list = session
            .artifacts()
            .get(OutputFolder::Api, "user-list.md")
            .unwrap()
            .contents();
        assert!(list.contains("# List userCollection"));
        assert!(!list.contains("# List users"));
        assert_eq!(session.counters().get_list, 1);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = RunConfig {
            server_base: "not a url".into(),
            ..Default::default()
        };
        let result = Session::new(config, EnumRegistry::new(), Box::new(MemorySource::new()), None);
        assert!(result.is_err());
    }
}
