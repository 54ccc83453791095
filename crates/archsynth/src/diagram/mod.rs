//! Mermaid diagram rendering.
//!
//! Five independent renderers turn an [`EntityModel`] into Mermaid sources:
//!
//! - [`DiagramKind::Context`] - C4 level 1, actors and external systems
//! - [`DiagramKind::Container`] - C4 level 2, containers in the system boundary
//! - [`DiagramKind::Component`] - C4 level 3, components of the main container
//! - [`DiagramKind::DataFlow`] - sources, processing, storage and outputs
//! - [`DiagramKind::Deployment`] - nested deployment nodes
//!
//! Relationship ids are written as given; nothing checks that they resolve.

mod component;
mod container;
mod context;
mod data_flow;
mod deployment;
mod writer;

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use log::{debug, info};

use archsynth_core::model::EntityModel;

use crate::config::DiagramConfig;

/// The five diagrams of a system description, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramKind {
    Context,
    Container,
    Component,
    DataFlow,
    Deployment,
}

impl DiagramKind {
    /// All kinds in document order.
    pub const ALL: [DiagramKind; 5] = [
        DiagramKind::Context,
        DiagramKind::Container,
        DiagramKind::Component,
        DiagramKind::DataFlow,
        DiagramKind::Deployment,
    ];

    /// Heading title in the Markdown document.
    pub fn title(&self) -> &'static str {
        match self {
            DiagramKind::Context => "System Context (C4 Level 1)",
            DiagramKind::Container => "Container Diagram (C4 Level 2)",
            DiagramKind::Component => "Component Diagram (C4 Level 3)",
            DiagramKind::DataFlow => "Data Flow Diagram",
            DiagramKind::Deployment => "Deployment Diagram",
        }
    }

    /// One-line description in the Markdown document.
    pub fn description(&self) -> &'static str {
        match self {
            DiagramKind::Context => "Shows the system in context with external users and systems",
            DiagramKind::Container => "Shows the main technical components and their relationships",
            DiagramKind::Component => "Shows internal components of the main container",
            DiagramKind::DataFlow => "Shows how data moves through the system",
            DiagramKind::Deployment => "Shows infrastructure and deployment topology",
        }
    }

    /// File name of the unfenced source when diagrams are split into files.
    pub fn file_name(&self) -> &'static str {
        match self {
            DiagramKind::Context => "c4_context.mmd",
            DiagramKind::Container => "c4_container.mmd",
            DiagramKind::Component => "c4_component.mmd",
            DiagramKind::DataFlow => "data_flow.mmd",
            DiagramKind::Deployment => "deployment.mmd",
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DiagramKind::Context => "context",
            DiagramKind::Container => "container",
            DiagramKind::Component => "component",
            DiagramKind::DataFlow => "data-flow",
            DiagramKind::Deployment => "deployment",
        };
        f.write_str(name)
    }
}

/// One rendered diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    kind: DiagramKind,
    source: String,
}

impl Diagram {
    pub fn kind(&self) -> DiagramKind {
        self.kind
    }

    /// The Mermaid source, without code fences.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The source as a fenced ```` ```mermaid ```` Markdown block.
    pub fn fenced(&self) -> String {
        format!("```mermaid\n{}```", self.source)
    }
}

/// All five diagrams of one model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramSet {
    diagrams: Vec<Diagram>,
}

impl DiagramSet {
    /// Diagrams in document order.
    pub fn diagrams(&self) -> &[Diagram] {
        &self.diagrams
    }

    /// The diagram of `kind`.
    pub fn get(&self, kind: DiagramKind) -> Option<&Diagram> {
        self.diagrams.iter().find(|diagram| diagram.kind == kind)
    }

    /// The Markdown document embedding every diagram.
    ///
    /// Each diagram gets a `### Diagram N: <title>` heading and a
    /// `**Description**:` line; diagrams are separated by `---`.
    pub fn to_markdown(&self) -> String {
        self.diagrams
            .iter()
            .enumerate()
            .map(|(index, diagram)| {
                format!(
                    "### Diagram {}: {}\n\n**Description**: {}\n\n{}\n",
                    index + 1,
                    diagram.kind.title(),
                    diagram.kind.description(),
                    diagram.fenced()
                )
            })
            .collect::<Vec<_>>()
            .join("\n---\n\n")
    }

    /// Write each diagram's unfenced source to its own file in `dir`.
    ///
    /// The directory is created if needed. Returns the written paths.
    pub fn write_split(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        fs::create_dir_all(dir)?;
        self.diagrams
            .iter()
            .map(|diagram| {
                let path = dir.join(diagram.kind.file_name());
                fs::write(&path, &diagram.source)?;
                debug!(path:? = path, kind:% = diagram.kind; "Diagram source written");
                Ok(path)
            })
            .collect()
    }
}

/// Render all five diagrams of `model`.
pub fn render_diagrams(model: &EntityModel, config: &DiagramConfig) -> DiagramSet {
    let diagrams = DiagramKind::ALL
        .into_iter()
        .map(|kind| Diagram {
            kind,
            source: render_diagram(model, kind, config),
        })
        .collect();
    info!(system = model.system().name(); "Diagrams rendered");
    DiagramSet { diagrams }
}

/// Render the single diagram of `kind`.
pub fn render_diagram(model: &EntityModel, kind: DiagramKind, config: &DiagramConfig) -> String {
    match kind {
        DiagramKind::Context => context::render(model),
        DiagramKind::Container => container::render(model, config.container_external_limit()),
        DiagramKind::Component => component::render(model),
        DiagramKind::DataFlow => data_flow::render(model),
        DiagramKind::Deployment => deployment::render(model),
    }
}

#[cfg(test)]
mod tests {
    use archsynth_core::model::System;

    use super::*;

    fn diagrams() -> DiagramSet {
        render_diagrams(
            &EntityModel::new(System::new("Shop", "Online shop")),
            &DiagramConfig::default(),
        )
    }

    #[test]
    fn test_all_kinds_rendered_in_order() {
        let set = diagrams();

        let kinds: Vec<_> = set.diagrams().iter().map(Diagram::kind).collect();
        assert_eq!(kinds, DiagramKind::ALL);
        assert!(set.get(DiagramKind::DataFlow).unwrap().source().starts_with("flowchart LR\n"));
    }

    #[test]
    fn test_fenced() {
        let set = diagrams();
        let fenced = set.get(DiagramKind::Context).unwrap().fenced();

        assert!(fenced.starts_with("```mermaid\nC4Context\n"));
        assert!(fenced.ends_with("\n```"));
    }

    #[test]
    fn test_markdown_layout() {
        let markdown = diagrams().to_markdown();

        assert!(markdown.starts_with(
            "### Diagram 1: System Context (C4 Level 1)\n\n**Description**: Shows the system in context with external users and systems\n\n```mermaid\nC4Context\n"
        ));
        assert_eq!(markdown.matches("\n---\n\n### Diagram").count(), 4);
        assert!(markdown.contains("### Diagram 5: Deployment Diagram\n"));
        assert!(markdown.ends_with("```\n"));
    }

    #[test]
    fn test_write_split() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("diagrams");

        let paths = diagrams().write_split(&target).unwrap();

        assert_eq!(paths.len(), 5);
        let context = fs::read_to_string(target.join("c4_context.mmd")).unwrap();
        assert!(context.starts_with("C4Context\n"));
        assert!(!context.contains("```"));
        assert!(target.join("deployment.mmd").exists());
    }
}
