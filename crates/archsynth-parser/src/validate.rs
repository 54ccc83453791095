//! Reference checking over a read [`EntityModel`].
//!
//! Renderers emit relationship ids verbatim whether or not they resolve.
//! This pass reports the ones that don't, and ids declared twice, as
//! warnings. It never fails.

use std::collections::{HashMap, HashSet, hash_map::Entry};

use archsynth_core::{
    identifier::Id,
    model::{EntityModel, Relationship},
};
use log::warn;

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    fields::child_pointer,
};

/// Ids the diagrams declare on their own: the system itself, the fixed
/// container-diagram user and the main container boundary.
const IMPLICIT_IDS: [&str; 3] = ["system", "user", "container"];

/// Check every relationship endpoint against the declared ids.
///
/// Returns one `W100` warning per endpoint that names no declared entity and
/// one `W101` warning per id declared more than once within a collection.
///
/// # Example
///
/// ```
/// # use archsynth_parser::{ReaderConfig, check_references, parse};
/// let model = parse(
///     r#"{"users": [{"id": "buyer"}], "data_flows": [{"from": "buyer", "to": "nowhere"}]}"#,
///     ReaderConfig::default(),
/// )
/// .unwrap();
///
/// let warnings = check_references(&model);
/// assert_eq!(warnings.len(), 1);
/// assert_eq!(warnings[0].pointer(), Some("/data_flows/0/to"));
/// ```
pub fn check_references(model: &EntityModel) -> Vec<Diagnostic> {
    let mut collector = DiagnosticCollector::new();
    let mut declared: HashSet<&str> = IMPLICIT_IDS.into_iter().collect();

    let collections: [(&str, Vec<&Id>); 9] = [
        ("users", model.actors().iter().map(|a| a.id()).collect()),
        (
            "external_systems",
            model.external_systems().iter().map(|e| e.id()).collect(),
        ),
        ("containers", model.containers().iter().map(|c| c.id()).collect()),
        ("components", model.components().iter().map(|c| c.id()).collect()),
        (
            "component_dependencies",
            model.dependencies().iter().map(|d| d.id()).collect(),
        ),
        (
            "data_sources",
            model.data_flow().sources().iter().map(|n| n.id()).collect(),
        ),
        (
            "data_processes",
            model.data_flow().processes().iter().map(|n| n.id()).collect(),
        ),
        (
            "data_storage",
            model.data_flow().storage().iter().map(|n| n.id()).collect(),
        ),
        (
            "data_outputs",
            model.data_flow().outputs().iter().map(|n| n.id()).collect(),
        ),
    ];

    for (key, ids) in &collections {
        report_duplicates(&mut collector, key, ids);
        declared.extend(ids.iter().map(|id| id.as_str()));
    }
    // The container diagram may label an external system differently.
    declared.extend(
        model
            .external_systems()
            .iter()
            .map(|ext| ext.container_view().id().as_str()),
    );

    let mut deployed_ids = Vec::new();
    for top in model.deployment().nodes() {
        for (_, node) in top.walk() {
            deployed_ids.push(node.id());
            deployed_ids.extend(node.containers().iter().map(|c| c.id()));
        }
    }
    report_duplicates(&mut collector, "deployment_nodes", &deployed_ids);
    declared.extend(deployed_ids.iter().map(|id| id.as_str()));

    let edges: [(&str, &[Relationship]); 4] = [
        ("container_relationships", model.container_relationships()),
        ("component_relationships", model.component_relationships()),
        ("data_flows", model.data_flow().flows()),
        ("deployment_relationships", model.deployment().relationships()),
    ];
    for (key, relationships) in edges {
        for (index, relationship) in relationships.iter().enumerate() {
            let pointer = child_pointer(&format!("/{key}"), &index.to_string());
            for (end, id) in [("from", relationship.from()), ("to", relationship.to())] {
                if !declared.contains(id.as_str()) {
                    collector.emit(unknown_reference(id, child_pointer(&pointer, end)));
                }
            }
        }
    }

    let diagnostics = collector.into_diagnostics();
    for diagnostic in &diagnostics {
        warn!(pointer = diagnostic.pointer().unwrap_or_default(); "{}", diagnostic.message());
    }
    diagnostics
}

fn report_duplicates(collector: &mut DiagnosticCollector, key: &str, ids: &[&Id]) {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (index, id) in ids.iter().enumerate() {
        match seen.entry(id.as_str()) {
            Entry::Vacant(entry) => {
                entry.insert(index);
            }
            Entry::Occupied(entry) => collector.emit(
                Diagnostic::warning(format!("identifier `{id}` is declared more than once"))
                    .with_code(ErrorCode::W101)
                    .with_pointer(format!("/{key}"))
                    .with_help(format!(
                        "entry {index} repeats the id of entry {}; relationships to it are ambiguous",
                        entry.get()
                    )),
            ),
        }
    }
}

fn unknown_reference(id: &Id, pointer: String) -> Diagnostic {
    let message = if id.is_empty() {
        "relationship endpoint is empty".to_string()
    } else {
        format!("relationship references unknown identifier `{id}`")
    };
    Diagnostic::warning(message)
        .with_code(ErrorCode::W100)
        .with_pointer(pointer)
        .with_help(format!(
            "declare an entity with id `{id}` or fix the reference"
        ))
}
