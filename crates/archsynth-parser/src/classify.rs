//! Node-kind classification.
//!
//! The only place where free-form type or name text decides a node's shape.
//! Renderers read the resulting [`NodeKind`] and never look at the text.

use archsynth_core::model::NodeKind;

/// Classify free-form text into a [`NodeKind`], ignoring case.
///
/// - contains `db` or `database` → [`NodeKind::Database`]
/// - contains `queue` → [`NodeKind::Queue`]
/// - contains `service` → [`NodeKind::Service`]
/// - anything else → [`NodeKind::Generic`]
///
/// This is a plain substring test: `"Feedback"` contains `db`.
pub fn classify(text: &str) -> NodeKind {
    let text = text.to_lowercase();
    if text.contains("db") || text.contains("database") {
        NodeKind::Database
    } else if text.contains("queue") {
        NodeKind::Queue
    } else if text.contains("service") {
        NodeKind::Service
    } else {
        NodeKind::Generic
    }
}
