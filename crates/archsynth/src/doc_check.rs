//! Section structure check for architecture Markdown documents.
//!
//! The check looks for the eleven numbered `## ` sections of an architecture
//! document, flags sections that are nearly empty, counts leftover
//! placeholders and verifies that the project identification fields exist.
//! Only missing sections fail the check; everything else is a warning.

use log::{debug, info};
use regex::Regex;

/// Headings every architecture document must contain, in order.
pub const REQUIRED_SECTIONS: [&str; 11] = [
    "1. Project Structure",
    "2. High-Level System Diagram",
    "3. Core Components",
    "4. Data Stores",
    "5. External Integrations / APIs",
    "6. Deployment & Infrastructure",
    "7. Security Considerations",
    "8. Development & Testing Environment",
    "9. Future Considerations / Roadmap",
    "10. Project Identification",
    "11. Glossary / Acronyms",
];

/// Fields expected in the project identification section.
pub const IDENTIFICATION_FIELDS: [&str; 4] = [
    "Project Name:",
    "Repository URL:",
    "Primary Contact",
    "Date of Last Update:",
];

const PLACEHOLDERS: [&str; 4] = ["[TODO]", "[FILL IN]", "[INSERT", "[e.g.,"];
const PLACEHOLDER_LIMIT: usize = 10;
const MIN_SECTION_LINES: usize = 3;
const LISTED_SPARSE_SECTIONS: usize = 3;

/// Outcome of [`check_document`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentReport {
    issues: Vec<String>,
    warnings: Vec<String>,
}

impl DocumentReport {
    /// Problems that fail the check.
    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Whether the document has every required section.
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check the section structure of an architecture document.
///
/// # Examples
///
/// ```
/// use archsynth::doc_check::check_document;
///
/// let report = check_document("# Architecture\n\n## 1. Project Structure\n");
/// assert!(!report.passed());
/// ```
pub fn check_document(text: &str) -> DocumentReport {
    let mut report = DocumentReport::default();

    let missing = missing_sections(text);
    if !missing.is_empty() {
        report
            .issues
            .push(format!("Missing required sections: {}", missing.join(", ")));
    }

    let sparse = sparse_sections(text);
    if !sparse.is_empty() {
        let listed: Vec<&str> = sparse
            .iter()
            .take(LISTED_SPARSE_SECTIONS)
            .map(String::as_str)
            .collect();
        report.warnings.push(format!(
            "Sections with minimal content: {}",
            listed.join(", ")
        ));
    }

    let placeholders: usize = PLACEHOLDERS
        .iter()
        .map(|marker| text.matches(marker).count())
        .sum();
    if placeholders > PLACEHOLDER_LIMIT {
        report.warnings.push(format!(
            "Found {placeholders} placeholders - consider filling them in"
        ));
    }

    let missing_fields: Vec<&str> = IDENTIFICATION_FIELDS
        .into_iter()
        .filter(|field| !text.contains(field))
        .collect();
    if !missing_fields.is_empty() {
        report.warnings.push(format!(
            "Missing project identification fields: {}",
            missing_fields.join(", ")
        ));
    }

    info!(
        passed = report.passed(),
        issues = report.issues.len(),
        warnings = report.warnings.len();
        "Architecture document checked"
    );
    report
}

fn missing_sections(text: &str) -> Vec<&'static str> {
    REQUIRED_SECTIONS
        .into_iter()
        .filter(|section| {
            let pattern = format!(r"(?m)^##\s+{}", regex::escape(section));
            match Regex::new(&pattern) {
                Ok(heading) => !heading.is_match(text),
                Err(err) => {
                    debug!(section = *section, err:% = err; "Section pattern rejected");
                    !text.contains(section)
                }
            }
        })
        .collect()
}

/// Sections with fewer than three content lines and no placeholder marker.
///
/// Content lines are non-blank lines that are not headings. Subheadings
/// (`### `) count towards neither. A heading with no title is never reported.
fn sparse_sections(text: &str) -> Vec<String> {
    let mut sparse = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in text.split('\n') {
        if line.starts_with("## ") {
            if let Some((title, content)) = current.take() {
                if !title.is_empty() && is_sparse(&content) {
                    sparse.push(title);
                }
            }
            let title = line.trim_matches(|c| c == '#' || c == ' ').trim();
            current = Some((title.to_string(), Vec::new()));
        } else if !line.trim().is_empty() && !line.starts_with('#') {
            if let Some((_, content)) = current.as_mut() {
                content.push(line);
            }
        }
    }
    if let Some((title, content)) = current {
        if !title.is_empty() && is_sparse(&content) {
            sparse.push(title);
        }
    }

    sparse
}

fn is_sparse(content: &[&str]) -> bool {
    content.len() < MIN_SECTION_LINES
        && !content
            .iter()
            .any(|line| line.contains('[') || line.to_uppercase().contains("TODO"))
}
