//! Typed entity model.
//!
//! These types are the fully defaulted form of a system description. The
//! reader builds them in a single normalization pass; every renderer consumes
//! them read-only.
//!
//! # Pipeline Position
//!
//! ```text
//! JSON mapping
//!     ↓ reader (defaults, node-kind classification, depth check)
//! EntityModel (these types)
//!     ↓ renderers
//! OpenAPI contract / Mermaid diagrams
//! ```
//!
//! # Organization
//!
//! - [`element`] - [`System`], [`Actor`], [`ExternalSystem`], [`Container`],
//!   [`Component`], [`Dependency`], [`Relationship`], [`NodeKind`]
//! - [`flow`] - [`FlowNode`], [`DataFlow`]
//! - [`deployment`] - [`DeploymentNode`], [`DeployedContainer`], [`Deployment`]

pub mod deployment;
pub mod element;
pub mod flow;

pub use deployment::*;
pub use element::*;
pub use flow::*;

use crate::api::ApiDescription;

/// A complete, normalized system description.
///
/// Built with [`EntityModel::new`] and the `with_*` methods; all collections
/// default to empty.
///
/// # Example
///
/// ```
/// use archsynth_core::model::{Actor, EntityModel, System};
///
/// let model = EntityModel::new(System::new("Shop", "Online shop"))
///     .with_actors(vec![Actor::new("buyer", "Buyer", "Buys things", "uses")]);
///
/// assert_eq!(model.system().name(), "Shop");
/// assert_eq!(model.actors().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityModel {
    system: System,
    main_container: String,
    actors: Vec<Actor>,
    external_systems: Vec<ExternalSystem>,
    containers: Vec<Container>,
    container_relationships: Vec<Relationship>,
    components: Vec<Component>,
    dependencies: Vec<Dependency>,
    component_relationships: Vec<Relationship>,
    data_flow: DataFlow,
    deployment: Deployment,
    api: ApiDescription,
}

impl EntityModel {
    /// Create a model for `system` with every collection empty.
    pub fn new(system: System) -> Self {
        Self {
            system,
            ..Self::default()
        }
    }

    pub fn with_main_container(mut self, name: impl Into<String>) -> Self {
        self.main_container = name.into();
        self
    }

    pub fn with_actors(mut self, actors: Vec<Actor>) -> Self {
        self.actors = actors;
        self
    }

    pub fn with_external_systems(mut self, external_systems: Vec<ExternalSystem>) -> Self {
        self.external_systems = external_systems;
        self
    }

    pub fn with_containers(mut self, containers: Vec<Container>) -> Self {
        self.containers = containers;
        self
    }

    pub fn with_container_relationships(mut self, relationships: Vec<Relationship>) -> Self {
        self.container_relationships = relationships;
        self
    }

    pub fn with_components(mut self, components: Vec<Component>) -> Self {
        self.components = components;
        self
    }

    pub fn with_dependencies(mut self, dependencies: Vec<Dependency>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn with_component_relationships(mut self, relationships: Vec<Relationship>) -> Self {
        self.component_relationships = relationships;
        self
    }

    pub fn with_data_flow(mut self, data_flow: DataFlow) -> Self {
        self.data_flow = data_flow;
        self
    }

    pub fn with_deployment(mut self, deployment: Deployment) -> Self {
        self.deployment = deployment;
        self
    }

    pub fn with_api(mut self, api: ApiDescription) -> Self {
        self.api = api;
        self
    }

    /// The described system.
    pub fn system(&self) -> &System {
        &self.system
    }

    /// Name of the container the component view zooms into.
    pub fn main_container(&self) -> &str {
        &self.main_container
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn external_systems(&self) -> &[ExternalSystem] {
        &self.external_systems
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn container_relationships(&self) -> &[Relationship] {
        &self.container_relationships
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    pub fn component_relationships(&self) -> &[Relationship] {
        &self.component_relationships
    }

    pub fn data_flow(&self) -> &DataFlow {
        &self.data_flow
    }

    pub fn deployment(&self) -> &Deployment {
        &self.deployment
    }

    /// The API side of the description, consumed by the contract renderer.
    pub fn api(&self) -> &ApiDescription {
        &self.api
    }
}
