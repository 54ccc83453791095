//! C4 level 2: containers inside the system boundary.

use archsynth_core::model::{EntityModel, Relationship};

use super::writer::{MermaidWriter, quote};

/// Render the `C4Container` diagram.
///
/// The diagram always shows a generic `user` person. Only the first
/// `external_limit` external systems are drawn, with their container-diagram
/// labels.
pub(crate) fn render(model: &EntityModel, external_limit: usize) -> String {
    let name = model.system().name();
    let mut writer = MermaidWriter::new("C4Container");
    writer.line(format_args!("title Container Diagram - {name}"));
    writer.blank();
    writer.line("Person(user, \"User\", \"System user\")");
    writer.blank();

    writer.open_block(format_args!("System_Boundary(system, {})", quote(name)));
    for container in model.containers() {
        writer.line(format_args!(
            "Container({}, {}, {}, {})",
            container.id(),
            quote(container.name()),
            quote(container.technology()),
            quote(container.description())
        ));
    }
    writer.close_block();
    writer.blank();

    for ext in model.external_systems().iter().take(external_limit) {
        let view = ext.container_view();
        writer.line(format_args!(
            "System_Ext({}, {}, {})",
            view.id(),
            quote(view.name()),
            quote(view.description())
        ));
    }
    writer.blank();

    for relationship in model.container_relationships() {
        writer.line(format_args!(
            "Rel({}, {}, {})",
            relationship.from(),
            relationship.to(),
            quote(&label(relationship))
        ));
    }

    writer.finish()
}

/// `description [protocol]`, or just the description.
fn label(relationship: &Relationship) -> String {
    match relationship.protocol() {
        Some(protocol) => format!("{} [{protocol}]", relationship.description()),
        None => relationship.description().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use archsynth_core::model::{Container, ContainerView, ExternalSystem, System};

    use super::*;

    fn model() -> EntityModel {
        EntityModel::new(System::new("Shop", "Online shop"))
            .with_containers(vec![
                Container::new("web", "Web App", "React", "Storefront"),
                Container::new("api", "API", "Rust", "Orders API"),
            ])
            .with_external_systems(vec![
                ExternalSystem::new("stripe", "Stripe", "Payments", "charges via"),
                ExternalSystem::new("mail", "Mailer", "Email", "sends with"),
                ExternalSystem::new("erp", "ERP", "Accounting", "books in"),
            ])
            .with_container_relationships(vec![
                Relationship::new("web", "api", "calls").with_protocol("HTTPS"),
                Relationship::new("api", "ghost", "writes"),
            ])
    }

    #[test]
    fn test_render_container() {
        let expected = "\
C4Container
    title Container Diagram - Shop

    Person(user, \"User\", \"System user\")

    System_Boundary(system, \"Shop\") {
        Container(web, \"Web App\", \"React\", \"Storefront\")
        Container(api, \"API\", \"Rust\", \"Orders API\")
    }

    System_Ext(stripe, \"Stripe\", \"Payments\")
    System_Ext(mail, \"Mailer\", \"Email\")

    Rel(web, api, \"calls [HTTPS]\")
    Rel(api, ghost, \"writes\")
";
        assert_eq!(render(&model(), 2), expected);
    }

    #[test]
    fn test_external_system_uses_container_labels() {
        let model = EntityModel::new(System::new("Shop", "Online shop")).with_external_systems(
            vec![
                ExternalSystem::new("ext0", "External System 0", "Third-party service", "uses")
                    .with_container_view(ContainerView::new(
                        "ext",
                        "External System",
                        "External service",
                    )),
            ],
        );

        let source = render(&model, 2);
        assert!(source.contains("    System_Ext(ext, \"External System\", \"External service\")\n"));
        assert!(!source.contains("ext0"));
    }

    #[test]
    fn test_external_limit() {
        let source = render(&model(), 3);
        assert_eq!(source.matches("System_Ext(").count(), 3);

        let source = render(&model(), 0);
        assert!(!source.contains("System_Ext("));
    }
}
