//! Line writer for Mermaid sources.

use std::fmt::Display;

const INDENT: &str = "    ";

/// Builds Mermaid source text line by line.
///
/// Tracks the nesting level of `{ ... }` blocks and `subgraph ... end`
/// sections and indents every line by four spaces per level.
#[derive(Debug, Default)]
pub(crate) struct MermaidWriter {
    out: String,
    level: usize,
}

impl MermaidWriter {
    /// Start a diagram with its header line (e.g. `C4Context`).
    pub(crate) fn new(header: &str) -> Self {
        let mut writer = Self::default();
        writer.line(header);
        writer.level = 1;
        writer
    }

    /// Write one line at the current level.
    pub(crate) fn line(&mut self, text: impl Display) {
        for _ in 0..self.level {
            self.out.push_str(INDENT);
        }
        self.out.push_str(&text.to_string());
        self.out.push('\n');
    }

    /// Write an empty line.
    pub(crate) fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Write `text {` and nest the following lines.
    pub(crate) fn open_block(&mut self, text: impl Display) {
        self.line(format_args!("{text} {{"));
        self.level += 1;
    }

    /// Close the innermost `{` block.
    pub(crate) fn close_block(&mut self) {
        self.level = self.level.saturating_sub(1);
        self.line("}");
    }

    /// Write `subgraph <id>["<label>"]` and nest the following lines.
    pub(crate) fn open_subgraph(&mut self, id: &str, label: &str) {
        self.line(format_args!("subgraph {id}[{}]", quote(label)));
        self.level += 1;
    }

    /// Close the innermost subgraph with `end`.
    pub(crate) fn close_subgraph(&mut self) {
        self.level = self.level.saturating_sub(1);
        self.line("end");
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}

/// Double-quote a Mermaid label, writing `"` as the `#quot;` entity.
pub(crate) fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "#quot;"))
}
