//! Deployment topology as an explicit tree of nodes.
//!
//! A [`DeploymentNode`] owns its containers and its nested nodes. Nesting has
//! no structural limit here; the reader enforces a maximum depth before a
//! tree reaches the renderers.

use crate::{
    identifier::Id,
    model::{NodeKind, Relationship},
};

/// A container deployed onto a [`DeploymentNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedContainer {
    id: Id,
    name: String,
    technology: String,
    description: String,
    kind: NodeKind,
}

impl DeployedContainer {
    /// Create a new DeployedContainer.
    pub fn new(
        id: impl Into<Id>,
        name: impl Into<String>,
        technology: impl Into<String>,
        description: impl Into<String>,
        kind: NodeKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            technology: technology.into(),
            description: description.into(),
            kind,
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

    pub fn kind(&self) -> NodeKind {
        self.kind
    }
}

/// An infrastructure node (cloud region, cluster, VM, ...) that may contain
/// containers and further nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentNode {
    id: Id,
    name: String,
    technology: String,
    containers: Vec<DeployedContainer>,
    children: Vec<DeploymentNode>,
}

impl DeploymentNode {
    /// Create a new DeploymentNode with no containers and no nested nodes.
    pub fn new(
        id: impl Into<Id>,
        name: impl Into<String>,
        technology: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            technology: technology.into(),
            containers: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set the containers deployed directly on this node.
    pub fn with_containers(mut self, containers: Vec<DeployedContainer>) -> Self {
        self.containers = containers;
        self
    }

    /// Set the nodes nested inside this node.
    pub fn with_children(mut self, children: Vec<DeploymentNode>) -> Self {
        self.children = children;
        self
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

    /// Containers deployed directly on this node (not on nested nodes).
    pub fn containers(&self) -> &[DeployedContainer] {
        &self.containers
    }

    /// Nodes nested directly inside this node.
    pub fn children(&self) -> &[DeploymentNode] {
        &self.children
    }

    /// Number of node levels in this subtree; a leaf node has depth 1.
    pub fn depth(&self) -> usize {
        self.walk().map(|(level, _)| level + 1).max().unwrap_or(1)
    }

    /// Pre-order traversal of this subtree, yielding each node with its level
    /// relative to `self` (which is level 0).
    ///
    /// The traversal keeps an explicit stack, so arbitrarily deep trees do
    /// not grow the call stack.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(0, self)],
        }
    }
}

/// Iterator returned by [`DeploymentNode::walk`].
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<(usize, &'a DeploymentNode)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a DeploymentNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (level, node) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|child| (level + 1, child)));
        Some((level, node))
    }
}

/// The deployment view: top-level nodes plus the edges between deployed things.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deployment {
    nodes: Vec<DeploymentNode>,
    relationships: Vec<Relationship>,
}

impl Deployment {
    /// Create a new Deployment.
    pub fn new(nodes: Vec<DeploymentNode>, relationships: Vec<Relationship>) -> Self {
        Self {
            nodes,
            relationships,
        }
    }

    /// Top-level deployment nodes.
    pub fn nodes(&self) -> &[DeploymentNode] {
        &self.nodes
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Deepest nesting over all top-level nodes; 0 when there are no nodes.
    pub fn depth(&self) -> usize {
        self.nodes.iter().map(DeploymentNode::depth).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> DeploymentNode {
        let db = DeployedContainer::new("db", "Postgres DB", "PostgreSQL", "", NodeKind::Database);
        let api = DeployedContainer::new("api", "API", "Rust", "", NodeKind::Generic);

        DeploymentNode::new("aws", "AWS", "Cloud")
            .with_children(vec![
                DeploymentNode::new("rds", "RDS", "Managed").with_containers(vec![db]),
                DeploymentNode::new("eks", "EKS", "Kubernetes").with_children(vec![
                    DeploymentNode::new("pod", "Pod", "Docker").with_containers(vec![api]),
                ]),
            ])
    }

    #[test]
    fn test_walk_is_pre_order() {
        let tree = sample_tree();

        let visited: Vec<_> = tree
            .walk()
            .map(|(level, node)| (level, node.id().to_string()))
            .collect();

        assert_eq!(
            visited,
            vec![
                (0, "aws".to_string()),
                (1, "rds".to_string()),
                (1, "eks".to_string()),
                (2, "pod".to_string()),
            ]
        );
    }

    #[test]
    fn test_depth() {
        assert_eq!(DeploymentNode::new("n", "N", "T").depth(), 1);
        assert_eq!(sample_tree().depth(), 3);

        let deployment = Deployment::new(vec![sample_tree()], vec![]);
        assert_eq!(deployment.depth(), 3);
        assert_eq!(Deployment::default().depth(), 0);
    }

    #[test]
    fn test_deep_tree_walk_does_not_recurse() {
        let mut node = DeploymentNode::new("leaf", "Leaf", "T");
        for level in 0..10_000 {
            node = DeploymentNode::new(format!("n{level}"), "Node", "T").with_children(vec![node]);
        }

        assert_eq!(node.walk().count(), 10_001);
        assert_eq!(node.depth(), 10_001);

        // Dropping a deep tree is recursive in std; unwind it by hand.
        let mut current = Some(node);
        while let Some(mut next) = current {
            current = next.children.pop();
        }
    }
}
