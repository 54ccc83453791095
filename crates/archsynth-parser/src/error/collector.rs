//! Collector for accumulating diagnostics during a processing phase.
//!
//! The [`DiagnosticCollector`] lets the reader report every malformed
//! section of a description instead of stopping at the first one, and lets
//! the reference checker gather warnings.

use crate::error::{Diagnostic, ParseError, Result};

/// A collector for accumulating diagnostics during a processing phase.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    ///
    /// The diagnostic is added to the collection and if it's an error,
    /// the collector is marked as having errors.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Unwrap `result`, or emit its diagnostic and fall back to the default.
    ///
    /// Lets independent sections keep reading after one of them failed.
    pub fn recover<T: Default>(&mut self, result: Result<T>) -> T {
        result.unwrap_or_else(|diagnostic| {
            self.emit(diagnostic);
            T::default()
        })
    }

    /// Finish collection and return a result.
    ///
    /// - If there are errors, returns `Err(ParseError)` with all diagnostics.
    /// - If there are no errors, returns `Ok(())`; warnings are discarded.
    pub fn finish(self) -> std::result::Result<(), ParseError> {
        if self.has_errors {
            Err(ParseError::new(self.diagnostics))
        } else {
            Ok(())
        }
    }

    /// Finish collection and return every diagnostic, whatever its severity.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_collector_new_finish_ok() {
        let collector = DiagnosticCollector::new();
        assert!(collector.finish().is_ok());
    }

    #[test]
    fn test_collector_emit_error_finish_err() {
        let mut collector = DiagnosticCollector::new();

        collector.emit(Diagnostic::error("test error"));

        assert!(collector.finish().is_err());
    }

    #[test]
    fn test_collector_emit_warning_finish_ok() {
        let mut collector = DiagnosticCollector::new();

        collector.emit(Diagnostic::warning("test warning"));

        assert!(collector.finish().is_ok());
    }

    #[test]
    fn test_collector_recover() {
        let mut collector = DiagnosticCollector::new();

        let ok: Vec<u8> = collector.recover(Ok(vec![1, 2]));
        let failed: Vec<u8> =
            collector.recover(Err(Diagnostic::error("bad list").with_code(ErrorCode::E003)));

        assert_eq!(ok, vec![1, 2]);
        assert!(failed.is_empty());

        let err = collector.finish().unwrap_err();
        assert_eq!(err.diagnostics().len(), 1);
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E003));
    }

    #[test]
    fn test_collector_into_diagnostics_keeps_warnings() {
        let mut collector = DiagnosticCollector::new();

        collector.emit(Diagnostic::warning("warning 1"));
        collector.emit(Diagnostic::warning("warning 2"));

        assert_eq!(collector.into_diagnostics().len(), 2);
    }
}
