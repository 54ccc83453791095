//! Deployment topology as nested `Deployment_Node` blocks.

use archsynth_core::model::{DeployedContainer, DeploymentNode, EntityModel};

use super::writer::{MermaidWriter, quote};

enum Step<'a> {
    Open(&'a DeploymentNode),
    Close(&'a DeploymentNode),
}

/// Render the `C4Deployment` diagram.
///
/// Inside each node, nested nodes come first and the node's own containers
/// after them. The tree is walked with an explicit stack.
pub(crate) fn render(model: &EntityModel) -> String {
    let deployment = model.deployment();
    let mut writer = MermaidWriter::new("C4Deployment");
    writer.line(format_args!(
        "title Deployment Diagram - {}",
        model.system().name()
    ));
    writer.blank();

    for top in deployment.nodes() {
        let mut stack = vec![Step::Open(top)];
        while let Some(step) = stack.pop() {
            match step {
                Step::Open(node) => {
                    writer.open_block(format_args!(
                        "Deployment_Node({}, {}, {})",
                        node.id(),
                        quote(node.name()),
                        quote(node.technology())
                    ));
                    stack.push(Step::Close(node));
                    stack.extend(node.children().iter().rev().map(Step::Open));
                }
                Step::Close(node) => {
                    for container in node.containers() {
                        write_container(&mut writer, container);
                    }
                    writer.close_block();
                }
            }
        }
        writer.blank();
    }

    for relationship in deployment.relationships() {
        match relationship.protocol() {
            Some(protocol) => writer.line(format_args!(
                "Rel({}, {}, {}, {})",
                relationship.from(),
                relationship.to(),
                quote(relationship.description()),
                quote(protocol)
            )),
            None => writer.line(format_args!(
                "Rel({}, {}, {})",
                relationship.from(),
                relationship.to(),
                quote(relationship.description())
            )),
        }
    }

    writer.finish()
}

fn write_container(writer: &mut MermaidWriter, container: &DeployedContainer) {
    let shape = if container.kind().is_database() {
        "ContainerDb"
    } else {
        "Container"
    };
    writer.line(format_args!(
        "{shape}({}, {}, {}, {})",
        container.id(),
        quote(container.name()),
        quote(container.technology()),
        quote(container.description())
    ));
}
