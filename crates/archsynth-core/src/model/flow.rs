//! Data flow model: where data comes from, how it is processed, where it is
//! stored and where it goes.

use crate::{identifier::Id, model::Relationship};

/// A node of the data flow view.
///
/// Only storage nodes usually carry a technology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowNode {
    id: Id,
    name: String,
    technology: Option<String>,
}

impl FlowNode {
    /// Create a new FlowNode without technology.
    pub fn new(id: impl Into<Id>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            technology: None,
        }
    }

    /// Set the technology shown as a sub-label.
    pub fn with_technology(mut self, technology: impl Into<String>) -> Self {
        self.technology = Some(technology.into());
        self
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn technology(&self) -> Option<&str> {
        self.technology.as_deref()
    }
}

/// The four node groups of the data flow view plus the flows between them.
///
/// Flows are [`Relationship`]s whose description is the flow label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataFlow {
    sources: Vec<FlowNode>,
    processes: Vec<FlowNode>,
    storage: Vec<FlowNode>,
    outputs: Vec<FlowNode>,
    flows: Vec<Relationship>,
}

impl DataFlow {
    /// Create a new DataFlow.
    pub fn new(
        sources: Vec<FlowNode>,
        processes: Vec<FlowNode>,
        storage: Vec<FlowNode>,
        outputs: Vec<FlowNode>,
        flows: Vec<Relationship>,
    ) -> Self {
        Self {
            sources,
            processes,
            storage,
            outputs,
            flows,
        }
    }

    pub fn sources(&self) -> &[FlowNode] {
        &self.sources
    }

    pub fn processes(&self) -> &[FlowNode] {
        &self.processes
    }

    pub fn storage(&self) -> &[FlowNode] {
        &self.storage
    }

    pub fn outputs(&self) -> &[FlowNode] {
        &self.outputs
    }

    pub fn flows(&self) -> &[Relationship] {
        &self.flows
    }

    /// Iterate over every node of the four groups, in group order.
    pub fn nodes(&self) -> impl Iterator<Item = &FlowNode> {
        self.sources
            .iter()
            .chain(&self.processes)
            .chain(&self.storage)
            .chain(&self.outputs)
    }
}
