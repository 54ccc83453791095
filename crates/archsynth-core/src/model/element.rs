//! Architecture elements: the system itself, the people and systems around it,
//! and the containers and components inside it.

use std::fmt;

use crate::identifier::Id;

/// The system being described.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct System {
    name: String,
    description: String,
}

impl System {
    /// Create a new System.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Get the system name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the system description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A person or role that uses the system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    id: Id,
    name: String,
    description: String,
    relationship: String,
}

impl Actor {
    /// Create a new Actor.
    ///
    /// `relationship` is the verb on the edge from the actor to the system,
    /// e.g. `"uses"`.
    pub fn new(
        id: impl Into<Id>,
        name: impl Into<String>,
        description: impl Into<String>,
        relationship: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            relationship: relationship.into(),
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn relationship(&self) -> &str {
        &self.relationship
    }
}

/// A third-party system the described system integrates with.
///
/// The context and container diagrams label an external system
/// independently: fields left out of the description get different
/// placeholders in each. The container-diagram view defaults to the
/// context-diagram values until set with
/// [`with_container_view`](Self::with_container_view).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalSystem {
    id: Id,
    name: String,
    description: String,
    relationship: String,
    container_view: ContainerView,
}

/// How an external system is labelled in the container diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerView {
    id: Id,
    name: String,
    description: String,
}

impl ContainerView {
    pub fn new(
        id: impl Into<Id>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl ExternalSystem {
    /// Create a new ExternalSystem.
    ///
    /// `relationship` is the verb on the edge from the system to this one,
    /// e.g. `"integrates with"`.
    pub fn new(
        id: impl Into<Id>,
        name: impl Into<String>,
        description: impl Into<String>,
        relationship: impl Into<String>,
    ) -> Self {
        let id = id.into();
        let name = name.into();
        let description = description.into();
        let container_view = ContainerView::new(id.clone(), name.as_str(), description.as_str());
        Self {
            id,
            name,
            description,
            relationship: relationship.into(),
            container_view,
        }
    }

    /// Replace the labels used by the container diagram.
    pub fn with_container_view(mut self, view: ContainerView) -> Self {
        self.container_view = view;
        self
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn relationship(&self) -> &str {
        &self.relationship
    }

    pub fn container_view(&self) -> &ContainerView {
        &self.container_view
    }
}

/// A deployable unit inside the system boundary (C4 level 2).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    id: Id,
    name: String,
    technology: String,
    description: String,
}

impl Container {
    /// Create a new Container.
    pub fn new(
        id: impl Into<Id>,
        name: impl Into<String>,
        technology: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            technology: technology.into(),
            description: description.into(),
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn technology(&self) -> &str {
        &self.technology
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A building block inside the main container (C4 level 3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    id: Id,
    name: String,
    technology: String,
    description: String,
}

impl Component {
    /// Create a new Component.
    pub fn new(
        id: impl Into<Id>,
        name: impl Into<String>,
        technology: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            technology: technology.into(),
            description: description.into(),
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn technology(&self) -> &str {
        &self.technology
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Shape family of a node, decided once while reading the model.
///
/// Renderers choose node shapes from this kind only; they never inspect the
/// free-form type or name text the kind was derived from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A data store; rendered with a database shape.
    Database,
    /// A message queue or broker.
    Queue,
    /// A networked service.
    Service,
    #[default]
    Generic,
}

impl NodeKind {
    /// Returns `true` if nodes of this kind render with a database shape.
    pub fn is_database(&self) -> bool {
        matches!(self, NodeKind::Database)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Database => write!(f, "database"),
            NodeKind::Queue => write!(f, "queue"),
            NodeKind::Service => write!(f, "service"),
            NodeKind::Generic => write!(f, "generic"),
        }
    }
}

/// Something the main container's components depend on.
///
/// `type_label` is the caller's free-form type text (e.g. `"PostgreSQL
/// Database"`), rendered as a label; `kind` is its normalized shape family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    id: Id,
    name: String,
    type_label: String,
    technology: String,
    kind: NodeKind,
}

impl Dependency {
    /// Create a new Dependency.
    pub fn new(
        id: impl Into<Id>,
        name: impl Into<String>,
        type_label: impl Into<String>,
        technology: impl Into<String>,
        kind: NodeKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            type_label: type_label.into(),
            technology: technology.into(),
            kind,
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_label(&self) -> &str {
        &self.type_label
    }

    pub fn technology(&self) -> &str {
        &self.technology
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }
}

/// A directed edge between two entities, referenced by identifier only.
///
/// Neither endpoint is required to name a declared entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    from: Id,
    to: Id,
    description: String,
    protocol: Option<String>,
}

impl Relationship {
    /// Create a new Relationship without a protocol.
    pub fn new(from: impl Into<Id>, to: impl Into<Id>, description: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            description: description.into(),
            protocol: None,
        }
    }

    /// Set the protocol carried by this edge (e.g. `"HTTPS"`).
    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    /// Get the source identifier.
    pub fn from(&self) -> &Id {
        &self.from
    }

    /// Get the target identifier.
    pub fn to(&self) -> &Id {
        &self.to
    }

    /// Get the edge text. For data flows this is the flow label.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the protocol, if any.
    pub fn protocol(&self) -> Option<&str> {
        self.protocol.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_protocol() {
        let rel = Relationship::new("web", "api", "calls");
        assert_eq!(rel.protocol(), None);

        let rel = rel.with_protocol("HTTPS");
        assert_eq!(rel.from(), "web");
        assert_eq!(rel.to(), "api");
        assert_eq!(rel.protocol(), Some("HTTPS"));
    }

    #[test]
    fn test_external_system_container_view() {
        let ext = ExternalSystem::new("stripe", "Stripe", "Payments", "charges via");
        assert_eq!(ext.container_view().id(), "stripe");
        assert_eq!(ext.container_view().name(), "Stripe");

        let ext = ext.with_container_view(ContainerView::new("ext", "External System", "Payments"));
        assert_eq!(ext.id(), "stripe");
        assert_eq!(ext.container_view().id(), "ext");
        assert_eq!(ext.container_view().name(), "External System");
    }

    #[test]
    fn test_node_kind_database() {
        assert!(NodeKind::Database.is_database());
        assert!(!NodeKind::Queue.is_database());
        assert!(!NodeKind::default().is_database());
    }
}
