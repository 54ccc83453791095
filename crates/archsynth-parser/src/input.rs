//! Decoding of raw input text into a JSON value.

use archsynth_core::model::EntityModel;
use log::debug;
use serde_json::{Value, error::Category};

use crate::{
    error::{Diagnostic, ErrorCode, ParseError},
    reader::{MAX_SUPPORTED_DEPLOYMENT_DEPTH, ReaderConfig, read_model},
    span::Span,
};

/// What an input text turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// A system description mapping, already read.
    Model(Box<EntityModel>),
    /// A bare resource name, to be expanded into a CRUD API.
    Resource(String),
}

/// Decode `source` as JSON, reporting syntax errors with their location.
pub(crate) fn decode(source: &str) -> Result<Value, ParseError> {
    serde_json::from_str(source).map_err(|err| syntax_error(source, &err).into())
}

/// Interpret `source` as either a system description or a resource name.
///
/// Text that parses as JSON is read as a description. Text that does not is
/// taken as a resource name after trimming, unless it opens like a JSON
/// document (`{` or `[`), in which case the syntax error is reported.
pub(crate) fn classify_source(source: &str, config: ReaderConfig) -> Result<Source, ParseError> {
    let trimmed = source.trim();
    if trimmed.is_empty() {
        return Err(Diagnostic::error("input is empty")
            .with_code(ErrorCode::E005)
            .with_help("pass a JSON system description or a resource name such as `Order`")
            .into());
    }

    match serde_json::from_str::<Value>(source) {
        Ok(value) => read_model(&value, &config).map(|model| Source::Model(Box::new(model))),
        Err(err) if trimmed.starts_with(['{', '[']) => Err(syntax_error(source, &err).into()),
        Err(_) => {
            debug!(resource = trimmed; "Input is not JSON, using it as a resource name");
            Ok(Source::Resource(trimmed.to_string()))
        }
    }
}

fn syntax_error(source: &str, err: &serde_json::Error) -> Diagnostic {
    let span = Span::at_line_column(source, err.line(), err.column());
    let mut diagnostic = Diagnostic::error(format!("invalid JSON: {err}"))
        .with_code(ErrorCode::E001)
        .with_label(span, "here");
    if err.classify() == Category::Eof {
        if let Some(open) = unclosed_bracket(source) {
            diagnostic = diagnostic.with_secondary_label(open, "opened here and never closed");
        }
    }
    if err.to_string().starts_with("recursion limit exceeded") {
        return diagnostic.with_help(format!(
            "JSON documents may nest at most 127 levels; deployment trees support at most {MAX_SUPPORTED_DEPLOYMENT_DEPTH} node levels"
        ));
    }
    diagnostic
}

/// The innermost `{` or `[` of `source` that has no matching close,
/// skipping brackets inside strings.
fn unclosed_bracket(source: &str) -> Option<Span> {
    let mut open = Vec::new();
    let mut in_string = false;
    let mut escaped = false;
    for (offset, c) in source.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' | '[' => open.push(offset),
            '}' | ']' => {
                open.pop();
            }
            _ => {}
        }
    }
    open.pop().map(|offset| Span::new(offset..offset + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_name_is_trimmed() {
        let source = classify_source("  Order \n", ReaderConfig::default()).unwrap();
        assert_eq!(source, Source::Resource("Order".to_string()));
    }

    #[test]
    fn test_mapping_is_read() {
        let source = classify_source(r#"{"system_name": "Shop"}"#, ReaderConfig::default()).unwrap();
        let Source::Model(model) = source else {
            panic!("expected a model");
        };
        assert_eq!(model.system().name(), "Shop");
    }

    #[test]
    fn test_blank_input_is_rejected() {
        let err = classify_source(" \t", ReaderConfig::default()).unwrap_err();
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E005));
    }

    #[test]
    fn test_broken_json_is_not_a_resource() {
        let err = classify_source("{\"users\": [}", ReaderConfig::default()).unwrap_err();

        let diag = &err.diagnostics()[0];
        assert_eq!(diag.code(), Some(ErrorCode::E001));
        assert_eq!(diag.labels().len(), 1);
        assert_eq!(diag.labels()[0].span().start(), 11);
    }

    #[test]
    fn test_truncated_json_points_at_open_bracket() {
        let source = "{\"users\": [{\"id\": \"a]\"}";
        let err = classify_source(source, ReaderConfig::default()).unwrap_err();

        let labels = err.diagnostics()[0].labels();
        assert_eq!(labels.len(), 2);
        assert!(labels[0].is_primary());
        assert!(!labels[1].is_primary());
        assert_eq!(labels[1].span(), Span::new(10..11));
    }

    #[test]
    fn test_unclosed_bracket() {
        assert_eq!(unclosed_bracket("{\"a\": [1, 2]"), Some(Span::new(0..1)));
        assert_eq!(unclosed_bracket("{\"a\": \"{\\\"\", \"b\": ["), Some(Span::new(18..19)));
        assert_eq!(unclosed_bracket("{}"), None);
    }

    #[test]
    fn test_nesting_past_json_limit_has_help() {
        let source = format!("{}{}", "[".repeat(200), "]".repeat(200));
        let err = classify_source(&source, ReaderConfig::default()).unwrap_err();

        let diag = &err.diagnostics()[0];
        assert_eq!(diag.code(), Some(ErrorCode::E001));
        assert!(diag.help().unwrap().contains("at most 62 node levels"));
    }

    #[test]
    fn test_json_scalar_is_not_a_mapping() {
        let err = classify_source("42", ReaderConfig::default()).unwrap_err();
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E002));
    }
}
