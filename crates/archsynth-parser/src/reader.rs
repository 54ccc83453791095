//! Normalization of a JSON system description into an [`EntityModel`].
//!
//! The reader is the only place that knows the mapping's key names and the
//! defaults of absent fields. Each top-level section is read independently;
//! a malformed section is reported and the remaining sections are still read,
//! so one pass surfaces every structural problem in the input.

use archsynth_core::{
    api::{
        ApiDescription, ApiInfo, AuthMode, DEFAULT_BASE_URL, DEFAULT_CONTACT_EMAIL,
        DEFAULT_CONTACT_NAME, DEFAULT_SERVER_DESCRIPTION, DEFAULT_TAG, Endpoint, HttpMethod, Tag,
    },
    model::{
        Actor, Component, Container, ContainerView, DataFlow, DeployedContainer, Deployment,
        DeploymentNode, Dependency, EntityModel, ExternalSystem, FlowNode, Relationship, System,
    },
};
use indexmap::IndexMap;
use log::{debug, trace};
use serde_json::Value;

use crate::{
    classify::classify,
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError, Result},
    fields::Fields,
};

/// Default maximum number of deployment node levels.
pub const DEFAULT_MAX_DEPLOYMENT_DEPTH: usize = 16;

/// Deepest deployment node level a description can reach.
///
/// The JSON decoder refuses documents nested more than 127 levels. The root
/// object and `deployment_nodes` take two, every node level takes two more
/// (the node and the array holding it) and the deepest node's `containers`
/// take a final two. A tree at this depth always decodes, so nesting beyond
/// it is reported as `E004` rather than as a JSON error.
pub const MAX_SUPPORTED_DEPLOYMENT_DEPTH: usize = 62;

/// Settings that affect how a description is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    max_deployment_depth: usize,
}

impl ReaderConfig {
    /// Create a reader configuration.
    ///
    /// # Arguments
    ///
    /// * `max_deployment_depth` - Deepest allowed deployment node level; a
    ///   top-level node is level 1. Values above
    ///   [`MAX_SUPPORTED_DEPLOYMENT_DEPTH`] are capped to it.
    pub fn new(max_deployment_depth: usize) -> Self {
        Self {
            max_deployment_depth: max_deployment_depth.min(MAX_SUPPORTED_DEPLOYMENT_DEPTH),
        }
    }

    pub fn max_deployment_depth(&self) -> usize {
        self.max_deployment_depth
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPLOYMENT_DEPTH)
    }
}

/// Read a JSON value into an [`EntityModel`].
///
/// Every malformed section is reported; the error carries all of them.
pub(crate) fn read_model(
    value: &Value,
    config: &ReaderConfig,
) -> std::result::Result<EntityModel, ParseError> {
    let root = Fields::root(value)?;
    let mut reader = ModelReader {
        config,
        collector: DiagnosticCollector::new(),
    };
    let model = reader.read(&root);
    reader.collector.finish()?;

    debug!(
        actors = model.actors().len(),
        containers = model.containers().len(),
        components = model.components().len(),
        endpoints = model.api().endpoints().len(),
        deployment_depth = model.deployment().depth();
        "System description read"
    );
    Ok(model)
}

struct ModelReader<'c> {
    config: &'c ReaderConfig,
    collector: DiagnosticCollector,
}

impl ModelReader<'_> {
    fn read(&mut self, root: &Fields) -> EntityModel {
        let system = self.collector.recover(read_system(root));
        let main_container = self
            .collector
            .recover(root.text("main_container_name", "API Service"));

        let actors = self.collector.recover(read_actors(root));
        let external_systems = self.collector.recover(read_external_systems(root));
        let containers = self.collector.recover(read_containers(root));
        let container_relationships = self.collector.recover(read_relationships(
            root,
            "container_relationships",
            "interacts",
        ));
        let components = self.collector.recover(read_components(root));
        let dependencies = self.collector.recover(read_dependencies(root));
        let component_relationships =
            self.collector
                .recover(read_relationships(root, "component_relationships", "uses"));
        let data_flow = self.read_data_flow(root);
        let deployment = self.read_deployment(root);
        let api = self.read_api(root);

        EntityModel::new(system)
            .with_main_container(main_container)
            .with_actors(actors)
            .with_external_systems(external_systems)
            .with_containers(containers)
            .with_container_relationships(container_relationships)
            .with_components(components)
            .with_dependencies(dependencies)
            .with_component_relationships(component_relationships)
            .with_data_flow(data_flow)
            .with_deployment(deployment)
            .with_api(api)
    }

    fn read_data_flow(&mut self, root: &Fields) -> DataFlow {
        let sources = self
            .collector
            .recover(read_flow_nodes(root, "data_sources", "source", "Source"));
        let processes = self
            .collector
            .recover(read_flow_nodes(root, "data_processes", "process", "Process"));
        let storage = self
            .collector
            .recover(read_flow_nodes(root, "data_storage", "store", "Storage"));
        let outputs = self
            .collector
            .recover(read_flow_nodes(root, "data_outputs", "output", "Output"));
        let flows = self.collector.recover(read_data_flows(root));

        DataFlow::new(sources, processes, storage, outputs, flows)
    }

    fn read_deployment(&mut self, root: &Fields) -> Deployment {
        let nodes = self
            .collector
            .recover(root.objects("deployment_nodes").and_then(|nodes| {
                nodes
                    .iter()
                    .map(|node| read_deployment_node(node, 1, self.config))
                    .collect::<Result<Vec<_>>>()
            }));
        let relationships = self.collector.recover(read_relationships(
            root,
            "deployment_relationships",
            "connects",
        ));

        Deployment::new(nodes, relationships)
    }

    fn read_api(&mut self, root: &Fields) -> ApiDescription {
        let info = self.collector.recover(read_api_info(root));
        let auth = self.collector.recover(
            root.opt_text("authentication")
                .map(|mode| mode.as_deref().map(AuthMode::from_declared).unwrap_or_default()),
        );
        let tags = self.collector.recover(read_tags(root));
        let schemas = self.collector.recover(read_schemas(root));
        let endpoints = self.collector.recover(read_endpoints(root));

        ApiDescription::new(info)
            .with_auth(auth)
            .with_tags(tags)
            .with_schemas(schemas)
            .with_endpoints(endpoints)
    }
}

fn read_system(root: &Fields) -> Result<System> {
    Ok(System::new(
        root.text("system_name", "System")?,
        root.text("description", "Core system functionality")?,
    ))
}

fn read_actors(root: &Fields) -> Result<Vec<Actor>> {
    root.objects("users")?
        .iter()
        .enumerate()
        .map(|(i, user)| {
            Ok(Actor::new(
                user.text_or_else("id", || format!("user{i}"))?,
                user.text_or_else("name", || format!("User {i}"))?,
                user.text("description", "System user")?,
                user.text("relationship", "uses")?,
            ))
        })
        .collect()
}

fn read_external_systems(root: &Fields) -> Result<Vec<ExternalSystem>> {
    root.objects("external_systems")?
        .iter()
        .enumerate()
        .map(|(i, ext)| {
            let container_view = ContainerView::new(
                ext.text("id", "ext")?,
                ext.text("name", "External System")?,
                ext.text("description", "External service")?,
            );
            Ok(ExternalSystem::new(
                ext.text_or_else("id", || format!("ext{i}"))?,
                ext.text_or_else("name", || format!("External System {i}"))?,
                ext.text("description", "Third-party service")?,
                ext.text("relationship", "integrates with")?,
            )
            .with_container_view(container_view))
        })
        .collect()
}

fn read_containers(root: &Fields) -> Result<Vec<Container>> {
    root.objects("containers")?
        .iter()
        .map(|container| {
            Ok(Container::new(
                container.text("id", "container")?,
                container.text("name", "Container")?,
                container.text("technology", "Technology")?,
                container.text("description", "Container description")?,
            ))
        })
        .collect()
}

fn read_components(root: &Fields) -> Result<Vec<Component>> {
    root.objects("components")?
        .iter()
        .map(|component| {
            Ok(Component::new(
                component.text("id", "component")?,
                component.text("name", "Component")?,
                component.text("technology", "Technology")?,
                component.text("description", "Component description")?,
            ))
        })
        .collect()
}

fn read_dependencies(root: &Fields) -> Result<Vec<Dependency>> {
    root.objects("component_dependencies")?
        .iter()
        .map(|dep| {
            let type_label = dep.text("type", "Database")?;
            let kind = classify(&type_label);
            Ok(Dependency::new(
                dep.text("id", "dep")?,
                dep.text("name", "Dependency")?,
                type_label,
                dep.text("technology", "Technology")?,
                kind,
            ))
        })
        .collect()
}

/// Read the relationship list under `key`. An empty protocol counts as none.
fn read_relationships(
    root: &Fields,
    key: &str,
    default_description: &str,
) -> Result<Vec<Relationship>> {
    root.objects(key)?
        .iter()
        .map(|rel| {
            let relationship = Relationship::new(
                rel.text("from", "")?,
                rel.text("to", "")?,
                rel.text("description", default_description)?,
            );
            Ok(match rel.non_empty_text("protocol")? {
                Some(protocol) => relationship.with_protocol(protocol),
                None => relationship,
            })
        })
        .collect()
}

fn read_flow_nodes(
    root: &Fields,
    key: &str,
    default_id: &str,
    default_name: &str,
) -> Result<Vec<FlowNode>> {
    root.objects(key)?
        .iter()
        .map(|node| {
            let flow_node = FlowNode::new(
                node.text("id", default_id)?,
                node.text("name", default_name)?,
            );
            Ok(match node.non_empty_text("technology")? {
                Some(technology) => flow_node.with_technology(technology),
                None => flow_node,
            })
        })
        .collect()
}

fn read_data_flows(root: &Fields) -> Result<Vec<Relationship>> {
    root.objects("data_flows")?
        .iter()
        .map(|flow| {
            Ok(Relationship::new(
                flow.text("from", "")?,
                flow.text("to", "")?,
                flow.text("label", "data")?,
            ))
        })
        .collect()
}

/// Read one deployment node at `level` (top level is 1) and its subtree.
///
/// Recursion is bounded by the configured maximum depth, which is checked
/// before descending.
fn read_deployment_node(
    node: &Fields,
    level: usize,
    config: &ReaderConfig,
) -> Result<DeploymentNode> {
    let (default_id, default_technology) = if level == 1 {
        ("node", "Technology")
    } else {
        ("nested", "Tech")
    };

    let nested = node.objects("nested_nodes")?;
    if !nested.is_empty() && level >= config.max_deployment_depth() {
        return Err(Diagnostic::error(format!(
            "deployment nodes are nested deeper than {} levels",
            config.max_deployment_depth()
        ))
        .with_code(ErrorCode::E004)
        .with_pointer(node.pointer_to("nested_nodes"))
        .with_help("flatten the deployment tree or raise `max_deployment_depth`"));
    }

    trace!(pointer = node.pointer(), level = level; "Reading deployment node");

    let containers = node
        .objects("containers")?
        .iter()
        .map(read_deployed_container)
        .collect::<Result<Vec<_>>>()?;
    let children = nested
        .iter()
        .map(|child| read_deployment_node(child, level + 1, config))
        .collect::<Result<Vec<_>>>()?;

    Ok(DeploymentNode::new(
        node.text("id", default_id)?,
        node.text("name", "Node")?,
        node.text("technology", default_technology)?,
    )
    .with_containers(containers)
    .with_children(children))
}

fn read_deployed_container(container: &Fields) -> Result<DeployedContainer> {
    let name = container.text("name", "Container")?;
    let kind = classify(&name);
    Ok(DeployedContainer::new(
        container.text("id", "cont")?,
        name,
        container.text("technology", "Tech")?,
        container.text("description", "Description")?,
        kind,
    ))
}

fn read_api_info(root: &Fields) -> Result<ApiInfo> {
    let name = root.text("system_name", "API")?;
    let description = root.text_or_else("description", || format!("API for {name}"))?;
    Ok(ApiInfo::new(name, root.text("version", "1.0.0")?, description)
        .with_contact(
            root.text("contact_name", DEFAULT_CONTACT_NAME)?,
            root.text("contact_email", DEFAULT_CONTACT_EMAIL)?,
        )
        .with_server(
            root.text("base_url", DEFAULT_BASE_URL)?,
            root.text("server_description", DEFAULT_SERVER_DESCRIPTION)?,
        ))
}

fn read_tags(root: &Fields) -> Result<Vec<Tag>> {
    root.objects("tags")?
        .iter()
        .map(|tag| {
            Ok(Tag::new(
                tag.text("name", DEFAULT_TAG)?,
                tag.text("description", "")?,
            ))
        })
        .collect()
}

fn read_schemas(root: &Fields) -> Result<IndexMap<String, Value>> {
    Ok(root
        .object("schemas")?
        .map(|schemas| {
            schemas
                .iter()
                .map(|(name, schema)| (name.clone(), schema.clone()))
                .collect()
        })
        .unwrap_or_default())
}

fn read_endpoints(root: &Fields) -> Result<Vec<Endpoint>> {
    root.objects("endpoints")?
        .iter()
        .map(read_endpoint)
        .collect()
}

fn read_endpoint(endpoint: &Fields) -> Result<Endpoint> {
    let path = endpoint.text("path", "/")?;
    let method = HttpMethod::new(&endpoint.text("method", "get")?);
    let mut result = Endpoint::new(path, method)
        .with_summary(endpoint.text("summary", "")?)
        .with_description(endpoint.text("description", "")?);

    if let Some(operation_id) = endpoint.opt_text("operation_id")? {
        result = result.with_operation_id(operation_id);
    }
    if let Some(tags) = endpoint.texts("tags")? {
        result = result.with_tags(tags);
    }

    let parameters = endpoint.array("parameters")?;
    if !parameters.is_empty() {
        result = result.with_parameters(parameters.to_vec());
    }
    if let Some(body) = endpoint.value("request_body").filter(|body| is_truthy(body)) {
        result = result.with_request_body(body.clone());
    }
    if let Some(responses) = endpoint.object("responses")?.filter(|map| !map.is_empty()) {
        result = result.with_responses(
            responses
                .iter()
                .map(|(status, response)| (status.clone(), response.clone()))
                .collect(),
        );
    }
    Ok(result)
}

/// Whether a request body counts as given: `false`, zero, empty text and
/// empty containers do not.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
