//! C4 level 3: components of the main container.

use archsynth_core::model::EntityModel;

use super::writer::{MermaidWriter, quote};

/// Render the `C4Component` diagram.
///
/// Database dependencies become `ContainerDb` nodes; every other kind is a
/// `System_Ext` labelled with its type.
pub(crate) fn render(model: &EntityModel) -> String {
    let container = model.main_container();
    let mut writer = MermaidWriter::new("C4Component");
    writer.line(format_args!("title Component Diagram - {container}"));
    writer.blank();

    writer.open_block(format_args!(
        "Container_Boundary(container, {})",
        quote(container)
    ));
    for component in model.components() {
        writer.line(format_args!(
            "Component({}, {}, {}, {})",
            component.id(),
            quote(component.name()),
            quote(component.technology()),
            quote(component.description())
        ));
    }
    writer.close_block();
    writer.blank();

    for dependency in model.dependencies() {
        if dependency.kind().is_database() {
            writer.line(format_args!(
                "ContainerDb({}, {}, {}, {})",
                dependency.id(),
                quote(dependency.name()),
                quote(dependency.technology()),
                quote(dependency.type_label())
            ));
        } else {
            writer.line(format_args!(
                "System_Ext({}, {}, {})",
                dependency.id(),
                quote(dependency.name()),
                quote(dependency.type_label())
            ));
        }
    }
    writer.blank();

    for relationship in model.component_relationships() {
        writer.line(format_args!(
            "Rel({}, {}, {})",
            relationship.from(),
            relationship.to(),
            quote(relationship.description())
        ));
    }

    writer.finish()
}

#[cfg(test)]
mod tests {
    use archsynth_core::model::{Component, Dependency, NodeKind, Relationship, System};

    use super::*;

    #[test]
    fn test_render_component() {
        let model = EntityModel::new(System::default())
            .with_main_container("Order Service")
            .with_components(vec![Component::new(
                "orders",
                "Orders",
                "axum",
                "Order handling",
            )])
            .with_dependencies(vec![
                Dependency::new("pg", "Orders DB", "Database", "PostgreSQL", NodeKind::Database),
                Dependency::new("events", "Events", "Queue", "Kafka", NodeKind::Queue),
            ])
            .with_component_relationships(vec![Relationship::new("orders", "pg", "uses")]);

        let expected = "\
C4Component
    title Component Diagram - Order Service

    Container_Boundary(container, \"Order Service\") {
        Component(orders, \"Orders\", \"axum\", \"Order handling\")
    }

    ContainerDb(pg, \"Orders DB\", \"PostgreSQL\", \"Database\")
    System_Ext(events, \"Events\", \"Queue\")

    Rel(orders, pg, \"uses\")
";
        assert_eq!(render(&model), expected);
    }

    #[test]
    fn test_render_empty_component() {
        let model = EntityModel::new(System::default()).with_main_container("API Service");

        assert_eq!(
            render(&model),
            "C4Component\n    title Component Diagram - API Service\n\n    Container_Boundary(container, \"API Service\") {\n    }\n\n\n"
        );
    }
}
