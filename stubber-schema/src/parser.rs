//! YAML schema loader.
//!
//! This module decodes class schema documents into [`SchemaRecord`]s. Only
//! decoding happens here; required-field checks live in
//! [`crate::validation`].

use crate::error::ParseError;
use crate::record::SchemaRecord;
use serde_yaml::Value;
use std::path::Path;

/// Parses a class schema from a YAML string.
///
/// # Arguments
/// * `yaml` - YAML schema content
///
/// # Returns
/// Decoded schema record or parse error.
///
/// # Errors
/// Returns `ParseError` if the YAML is malformed, empty, or not a mapping.
pub fn parse_schema(yaml: &str) -> Result<SchemaRecord, ParseError> {
    let document: Value = serde_yaml::from_str(yaml)?;
    decode_document(document)
}

/// Parses a class schema from a YAML file.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read or decoded. Both cases
/// carry the offending path.
pub fn parse_schema_file(path: &Path) -> Result<SchemaRecord, ParseError> {
    let yaml = std::fs::read_to_string(path).map_err(|e| ParseError::io(path, e))?;
    let document: Value =
        serde_yaml::from_str(&yaml).map_err(|e| ParseError::yaml_file(path, e))?;
    match decode_document(document) {
        Err(ParseError::Yaml(e)) => Err(ParseError::yaml_file(path, e)),
        other => other,
    }
}

fn decode_document(document: Value) -> Result<SchemaRecord, ParseError> {
    match document {
        Value::Null => Err(ParseError::invalid_structure("empty schema document")),
        Value::Mapping(_) => Ok(serde_yaml::from_value(document)?),
        _ => Err(ParseError::invalid_structure(
            "schema document must be a mapping",
        )),
    }
}
