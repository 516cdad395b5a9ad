//! # sdvpack Document Parsing
//!
//! File: cli/src/core/document.rs
//!
//! ## Overview
//!
//! The override document (`ConfigOverride.sdvextension`) and the ignore
//! document (`IgnoreFiles.sdvextension`) are hand-edited JSON files. Users
//! leave `//` and `/* */` comments in them and trailing commas after the last
//! element, so both documents pass through [`sanitize`] before being handed
//! to `serde_json`.
//!
//! Sanitizing is purely textual: a `//` inside a string literal (for example
//! a URL) is treated as a comment as well.
//!
use crate::core::error::PackError;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

/// File name of the override document in the workspace root.
pub const CONFIG_DOCUMENT: &str = "ConfigOverride.sdvextension";
/// File name of the ignore document in the workspace root.
pub const IGNORE_DOCUMENT: &str = "IgnoreFiles.sdvextension";

static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)//.*$").expect("valid line comment regex"));
static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("valid block comment regex"));
static TRAILING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*([\]}])").expect("valid trailing comma regex"));

/// Removes line comments, block comments and trailing commas.
///
/// Line comments are stripped first, so a `//` inside a block comment takes
/// the rest of that line with it before block comments are matched.
pub fn sanitize(content: &str) -> String {
    let without_lines = LINE_COMMENT.replace_all(content, "");
    let without_blocks = BLOCK_COMMENT.replace_all(&without_lines, "");
    TRAILING_COMMA
        .replace_all(&without_blocks, "$1")
        .into_owned()
}

/// Sanitizes and parses a document whose top level must be a JSON object.
pub fn parse_object(document: &str, content: &str) -> Result<Map<String, Value>, PackError> {
    match parse_value(document, content)? {
        Value::Object(map) => Ok(map),
        other => Err(malformed(
            document,
            format!("expected an object, found {}", kind_of(&other)),
        )),
    }
}

/// Sanitizes and parses a document whose top level must be an array of strings.
pub fn parse_string_list(document: &str, content: &str) -> Result<Vec<String>, PackError> {
    let items = match parse_value(document, content)? {
        Value::Array(items) => items,
        other => {
            return Err(malformed(
                document,
                format!("expected an array, found {}", kind_of(&other)),
            ))
        }
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(s) => Ok(s),
            other => Err(malformed(
                document,
                format!("element {} is {}, expected a string", index, kind_of(&other)),
            )),
        })
        .collect()
}

fn parse_value(document: &str, content: &str) -> Result<Value, PackError> {
    serde_json::from_str(&sanitize(content)).map_err(|e| malformed(document, e.to_string()))
}

fn malformed(document: &str, message: String) -> PackError {
    PackError::MalformedDocument {
        document: document.to_string(),
        message,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
