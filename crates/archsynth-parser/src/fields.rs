//! Lookup-with-defaults over untyped JSON mappings.
//!
//! [`Fields`] wraps one JSON object together with its JSON pointer, so every
//! shape error the reader reports says exactly where in the input it is.
//! A `null` value is treated the same as an absent key.

use serde_json::{Map, Value};

use crate::error::{Diagnostic, ErrorCode, Result};

/// A JSON object being read, with the pointer that locates it in the input.
#[derive(Debug, Clone)]
pub(crate) struct Fields<'a> {
    map: &'a Map<String, Value>,
    pointer: String,
}

impl<'a> Fields<'a> {
    /// Wrap the top-level value, which must be an object.
    pub(crate) fn root(value: &'a Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self {
                map,
                pointer: String::new(),
            }),
            other => Err(Diagnostic::error(format!(
                "a system description must be a mapping, found {}",
                kind_of(other)
            ))
            .with_code(ErrorCode::E002)
            .with_pointer("")
            .with_help("wrap the description in `{ ... }`")),
        }
    }

    /// Pointer of this object.
    pub(crate) fn pointer(&self) -> &str {
        &self.pointer
    }

    /// Pointer of `key` inside this object.
    pub(crate) fn pointer_to(&self, key: &str) -> String {
        child_pointer(&self.pointer, key)
    }

    /// Non-null value of `key`.
    pub(crate) fn value(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|value| !value.is_null())
    }

    /// Text of `key`, if present.
    ///
    /// Numbers and booleans are accepted and rendered as their JSON text.
    pub(crate) fn opt_text(&self, key: &str) -> Result<Option<String>> {
        self.value(key)
            .map(|value| text_of(value, &self.pointer_to(key)))
            .transpose()
    }

    /// Text of `key`, or `default` when absent.
    pub(crate) fn text(&self, key: &str, default: &str) -> Result<String> {
        Ok(self.opt_text(key)?.unwrap_or_else(|| default.to_string()))
    }

    /// Text of `key`, or the lazily built `default` when absent.
    pub(crate) fn text_or_else(
        &self,
        key: &str,
        default: impl FnOnce() -> String,
    ) -> Result<String> {
        Ok(self.opt_text(key)?.unwrap_or_else(default))
    }

    /// Text of `key` when present and non-empty.
    pub(crate) fn non_empty_text(&self, key: &str) -> Result<Option<String>> {
        Ok(self.opt_text(key)?.filter(|text| !text.is_empty()))
    }

    /// The list of mappings under `key`; empty when absent.
    pub(crate) fn objects(&self, key: &str) -> Result<Vec<Fields<'a>>> {
        let pointer = self.pointer_to(key);
        self.array(key)?
            .iter()
            .enumerate()
            .map(|(index, value)| {
                let item_pointer = child_pointer(&pointer, &index.to_string());
                match value {
                    Value::Object(map) => Ok(Fields {
                        map,
                        pointer: item_pointer,
                    }),
                    other => Err(Diagnostic::error(format!(
                        "entries of `{key}` must be mappings, found {}",
                        kind_of(other)
                    ))
                    .with_code(ErrorCode::E003)
                    .with_pointer(item_pointer)),
                }
            })
            .collect()
    }

    /// The list of texts under `key`, if present.
    pub(crate) fn texts(&self, key: &str) -> Result<Option<Vec<String>>> {
        if self.value(key).is_none() {
            return Ok(None);
        }
        let pointer = self.pointer_to(key);
        self.array(key)?
            .iter()
            .enumerate()
            .map(|(index, value)| text_of(value, &child_pointer(&pointer, &index.to_string())))
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }

    /// The list of arbitrary values under `key`; empty when absent.
    pub(crate) fn array(&self, key: &str) -> Result<&'a [Value]> {
        match self.value(key) {
            None => Ok(&[]),
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(Diagnostic::error(format!(
                "`{key}` must be a list, found {}",
                kind_of(other)
            ))
            .with_code(ErrorCode::E003)
            .with_pointer(self.pointer_to(key))
            .with_help(format!("write `\"{key}\": [ ... ]`"))),
        }
    }

    /// The mapping under `key`, if present.
    pub(crate) fn object(&self, key: &str) -> Result<Option<&'a Map<String, Value>>> {
        match self.value(key) {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(other) => Err(Diagnostic::error(format!(
                "`{key}` must be a mapping, found {}",
                kind_of(other)
            ))
            .with_code(ErrorCode::E003)
            .with_pointer(self.pointer_to(key))),
        }
    }
}

/// Append `key` to `pointer`, escaping it as RFC 6901 requires.
pub(crate) fn child_pointer(pointer: &str, key: &str) -> String {
    format!("{pointer}/{}", key.replace('~', "~0").replace('/', "~1"))
}

fn text_of(value: &Value, pointer: &str) -> Result<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        other => Err(Diagnostic::error(format!(
            "expected text, found {}",
            kind_of(other)
        ))
        .with_code(ErrorCode::E003)
        .with_pointer(pointer)),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "text",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
