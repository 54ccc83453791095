//! C4 level 1: the system in context.

use archsynth_core::model::EntityModel;

use super::writer::{MermaidWriter, quote};

/// Render the `C4Context` diagram.
///
/// Every actor is a `Person` with a `Rel` to the system, every external
/// system a `System_Ext` with a `Rel` from the system, in declaration order.
pub(crate) fn render(model: &EntityModel) -> String {
    let system = model.system();
    let mut writer = MermaidWriter::new("C4Context");
    writer.line(format_args!("title System Context - {}", system.name()));

    for actor in model.actors() {
        writer.line(format_args!(
            "Person({}, {}, {})",
            actor.id(),
            quote(actor.name()),
            quote(actor.description())
        ));
    }
    writer.line(format_args!(
        "System(system, {}, {})",
        quote(system.name()),
        quote(system.description())
    ));
    for ext in model.external_systems() {
        writer.line(format_args!(
            "System_Ext({}, {}, {})",
            ext.id(),
            quote(ext.name()),
            quote(ext.description())
        ));
    }
    writer.blank();

    for actor in model.actors() {
        writer.line(format_args!(
            "Rel({}, system, {})",
            actor.id(),
            quote(actor.relationship())
        ));
    }
    for ext in model.external_systems() {
        writer.line(format_args!(
            "Rel(system, {}, {})",
            ext.id(),
            quote(ext.relationship())
        ));
    }

    writer.finish()
}

#[cfg(test)]
mod tests {
    use archsynth_core::model::{Actor, ExternalSystem, System};

    use super::*;

    #[test]
    fn test_render_context() {
        let model = EntityModel::new(System::new("Shop", "Online shop"))
            .with_actors(vec![Actor::new("buyer", "Buyer", "Buys things", "orders from")])
            .with_external_systems(vec![ExternalSystem::new(
                "stripe",
                "Stripe",
                "Payments",
                "charges via",
            )]);

        let expected = "\
C4Context
    title System Context - Shop
    Person(buyer, \"Buyer\", \"Buys things\")
    System(system, \"Shop\", \"Online shop\")
    System_Ext(stripe, \"Stripe\", \"Payments\")

    Rel(buyer, system, \"orders from\")
    Rel(system, stripe, \"charges via\")
";
        assert_eq!(render(&model), expected);
    }

    #[test]
    fn test_render_empty_context() {
        let model = EntityModel::new(System::new("System", "Core system functionality"));

        assert_eq!(
            render(&model),
            "C4Context\n    title System Context - System\n    System(system, \"System\", \"Core system functionality\")\n\n"
        );
    }
}
