//! Data-flow diagram as a left-to-right flowchart.

use archsynth_core::model::{EntityModel, FlowNode};

use super::writer::{MermaidWriter, quote};

/// Render the `flowchart LR` data-flow diagram.
///
/// The four node groups are always emitted as subgraphs, even when empty.
pub(crate) fn render(model: &EntityModel) -> String {
    let flow = model.data_flow();
    let groups: [(&str, &str, &[FlowNode]); 4] = [
        ("sources", "📥 Data Sources", flow.sources()),
        ("processes", "⚙️ Data Processing", flow.processes()),
        ("storage", "💾 Data Storage", flow.storage()),
        ("outputs", "📤 Data Outputs", flow.outputs()),
    ];

    let mut writer = MermaidWriter::new("flowchart LR");
    for (id, label, nodes) in groups {
        writer.open_subgraph(id, label);
        for node in nodes {
            writer.line(format_args!("{}[{}]", node.id(), quote(&node_label(node))));
        }
        writer.close_subgraph();
        writer.blank();
    }

    for edge in flow.flows() {
        writer.line(format_args!(
            "{} -->|{}| {}",
            edge.from(),
            quote(edge.description()),
            edge.to()
        ));
    }

    writer.finish()
}

fn node_label(node: &FlowNode) -> String {
    match node.technology() {
        Some(technology) => format!("{}<br/>({technology})", node.name()),
        None => node.name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use archsynth_core::model::{DataFlow, Relationship, System};

    use super::*;

    #[test]
    fn test_render_data_flow() {
        let model = EntityModel::new(System::default()).with_data_flow(DataFlow::new(
            vec![FlowNode::new("checkout", "Checkout")],
            vec![FlowNode::new("billing", "Billing")],
            vec![
                FlowNode::new("ledger", "Ledger").with_technology("PostgreSQL"),
                FlowNode::new("cache", "Cache"),
            ],
            vec![],
            vec![
                Relationship::new("checkout", "billing", "orders"),
            ],
        ));

        let expected = "\
flowchart LR
    subgraph sources[\"📥 Data Sources\"]
        checkout[\"Checkout\"]
    end

    subgraph processes[\"⚙️ Data Processing\"]
        billing[\"Billing\"]
    end

    subgraph storage[\"💾 Data Storage\"]
        ledger[\"Ledger<br/>(PostgreSQL)\"]
        cache[\"Cache\"]
    end

    subgraph outputs[\"📤 Data Outputs\"]
    end

    checkout -->|\"orders\"| billing
";
        assert_eq!(render(&model), expected);
    }

    #[test]
    fn test_dangling_edge_is_verbatim() {
        let model = EntityModel::new(System::default()).with_data_flow(DataFlow::new(
            vec![],
            vec![],
            vec![],
            vec![],
            vec![Relationship::new("billing", "", "data")],
        ));

        assert!(render(&model).ends_with("\n    billing -->|\"data\"| \n"));
    }
}
