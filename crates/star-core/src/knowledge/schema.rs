//! JSON Schema validation for knowledge artifacts.
//!
//! Artifact files are checked against `schema/knowledge_artifact.schema.json`
//! before they are deserialized, so a hand-edited or truncated file is
//! reported with every violation at once.

use std::sync::OnceLock;

/// Embedded artifact schema (loaded at compile time).
const ARTIFACT_SCHEMA_JSON: &str = include_str!("../../schema/knowledge_artifact.schema.json");

/// Compiled JSON Schema validator (initialized once, reused).
static COMPILED_SCHEMA: OnceLock<Result<jsonschema::Validator, String>> = OnceLock::new();

fn get_validator() -> Result<&'static jsonschema::Validator, String> {
    let result = COMPILED_SCHEMA.get_or_init(|| {
        let schema_value: serde_json::Value = serde_json::from_str(ARTIFACT_SCHEMA_JSON)
            .map_err(|e| format!("Invalid schema JSON: {}", e))?;

        jsonschema::options()
            .build(&schema_value)
            .map_err(|e| format!("Failed to compile schema: {}", e))
    });

    result.as_ref().map_err(Clone::clone)
}

/// Validate an artifact JSON value against the schema.
///
/// Returns every violation as `"<message> at <path>"`.
pub fn validate_artifact_schema(artifact_json: &serde_json::Value) -> Result<(), Vec<String>> {
    let validator = get_validator().map_err(|e| vec![e])?;

    let errors: Vec<String> = validator
        .iter_errors(artifact_json)
        .map(|e| format!("{} at {}", e, e.instance_path))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
