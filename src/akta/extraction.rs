//! Cleanup of replies from the document extraction model.
//!
//! The model is asked for a flat JSON object but often wraps it in a
//! markdown code fence or adds a sentence before/after it.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

use super::fields::{AktaField, ExtractedFields};

lazy_static! {
    static ref CODE_FENCE: Regex =
        Regex::new(r"(?s)```[A-Za-z]*\s*(.*?)\s*```").expect("code fence pattern is valid");
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("respons ekstraksi kosong")]
    Empty,
    #[error("respons ekstraksi tidak memuat objek JSON")]
    NoObject,
    #[error("JSON ekstraksi tidak valid: {0}")]
    InvalidJson(#[source] serde_json::Error),
    #[error("JSON ekstraksi harus berupa objek, bukan {0}")]
    NotAnObject(&'static str),
}

/// Parse a raw model reply into extracted fields.
pub fn parse_extraction_response(raw: &str) -> Result<ExtractedFields, ExtractionError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ExtractionError::Empty);
    }

    let body = CODE_FENCE
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(trimmed);

    let json = outer_object(body).ok_or(ExtractionError::NoObject)?;
    let value: Value = serde_json::from_str(json).map_err(ExtractionError::InvalidJson)?;
    fields_from_value(value)
}

/// Convert an already-parsed JSON value into extracted fields.
pub fn fields_from_value(value: Value) -> Result<ExtractedFields, ExtractionError> {
    let object = match value {
        Value::Object(map) => map,
        other => return Err(ExtractionError::NotAnObject(kind(&other))),
    };

    let mut fields = ExtractedFields::new();
    for (key, value) in object {
        match stringify(&value) {
            Some(text) => fields.insert(key, text),
            None => {
                if AktaField::from_key(&key).is_some() {
                    log::debug!("extraction field '{}' has no usable value", key);
                }
            }
        }
    }
    Ok(fields)
}

fn outer_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(stringify).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        Value::Null | Value::Object(_) => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "angka",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "objek",
    }
}
