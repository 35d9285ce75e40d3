//! Tool-invocation boundary.
//!
//! Describes the single `validate_star` operation and checks the shape of
//! incoming arguments before handing the text to the validator. The
//! transport that carries these calls lives outside this crate.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use crate::knowledge::KnowledgeArtifact;
use crate::scorer::StarValidator;
use crate::types::ValidationResult;

/// Name of the only exposed operation.
pub const TOOL_NAME: &str = "validate_star";

/// Errors for structurally invalid invocations. Never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvocationError {
    #[error("Tool not found: {0}")]
    UnknownTool(String),

    #[error("Arguments are not valid JSON: {0}")]
    MalformedArguments(String),

    #[error("Arguments must be an object, got {0}")]
    ArgumentsNotObject(&'static str),

    #[error("Missing required argument: text")]
    MissingText,

    #[error("Argument `text` must be a string, got {0}")]
    InvalidText(&'static str),
}

/// Tool definition as advertised to callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolDefinition {
    /// Unique tool name
    pub name: String,

    /// Human-readable description of what the tool does
    pub description: String,

    /// JSON Schema defining the tool's input parameters
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Describe `validate_star` for the loaded artifact.
///
/// A mined artifact is disclosed as learned corpus data, with the corpus
/// size. The seed artifact is disclosed as the built-in starter vocabulary.
pub fn tool_definition(artifact: &KnowledgeArtifact) -> ToolDefinition {
    let provenance = match artifact.stats {
        Some(stats) => format!(
            "Action verbs and result metrics come from real data learned from {} successful \
             cover letters ({} distinct verb roots), not a fixed dictionary.",
            stats.files_processed, stats.verbs_found
        ),
        None => "No learned corpus is loaded yet, so action verbs and result metrics come \
                 from the built-in seed vocabulary until one is trained."
            .to_string(),
    };

    ToolDefinition {
        name: TOOL_NAME.to_string(),
        description: format!(
            "Validates a self-introduction text against the STAR method (Situation, Task, \
             Action, Result). {} Returns a score, component breakdown, weaknesses, \
             strengths and advice.",
            provenance
        ),
        input_schema: json!({
            "type": "object",
            "properties": {
                "text": {
                    "type": "string",
                    "description": "The text to validate."
                }
            },
            "required": ["text"]
        }),
    }
}

/// Decode raw JSON arguments as received from a caller.
pub fn decode_arguments(raw: &str) -> Result<Value, InvocationError> {
    serde_json::from_str(raw).map_err(|e| InvocationError::MalformedArguments(e.to_string()))
}

/// Extract the `text` argument, rejecting malformed invocations.
pub fn parse_arguments(arguments: &Value) -> Result<&str, InvocationError> {
    let object = arguments
        .as_object()
        .ok_or(InvocationError::ArgumentsNotObject(json_type(arguments)))?;

    match object.get("text") {
        None => Err(InvocationError::MissingText),
        Some(Value::String(text)) => Ok(text.as_str()),
        Some(other) => Err(InvocationError::InvalidText(json_type(other))),
    }
}

/// Run `validate_star` on raw invocation arguments.
pub fn invoke(validator: &StarValidator, arguments: &Value) -> Result<ValidationResult, InvocationError> {
    let text = parse_arguments(arguments)?;
    Ok(validator.validate(text))
}

/// Dispatch a call by tool name.
pub fn call_tool(
    validator: &StarValidator,
    name: &str,
    arguments: &Value,
) -> Result<ValidationResult, InvocationError> {
    if name != TOOL_NAME {
        return Err(InvocationError::UnknownTool(name.to_string()));
    }
    invoke(validator, arguments)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::CorpusStats;

    #[test]
    fn test_definition_discloses_learned_data() {
        let mut artifact = KnowledgeArtifact::seed();
        artifact.stats = Some(CorpusStats {
            files_processed: 82,
            verbs_found: 410,
        });

        let definition = tool_definition(&artifact);
        assert_eq!(definition.name, TOOL_NAME);
        assert!(definition.description.contains("learned from 82"));
        assert!(definition.description.contains("not a fixed dictionary"));
        assert_eq!(definition.input_schema["required"], json!(["text"]));
    }

    #[test]
    fn test_seed_definition_does_not_claim_learned_data() {
        let definition = tool_definition(&KnowledgeArtifact::seed());

        assert!(definition.description.contains("built-in seed vocabulary"));
        assert!(!definition.description.contains("learned from"));
        assert!(!definition.description.contains("not a fixed dictionary"));
    }

    #[test]
    fn test_definition_serializes_input_schema_key() {
        let value = serde_json::to_value(tool_definition(&KnowledgeArtifact::seed())).unwrap();
        assert!(value.get("inputSchema").is_some());
    }

    #[test]
    fn test_invoke_with_text() {
        let validator = StarValidator::default();
        let result = invoke(&validator, &json!({ "text": "" })).unwrap();
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_missing_text_rejected() {
        let validator = StarValidator::default();
        assert_eq!(
            invoke(&validator, &json!({ "body": "hello" })),
            Err(InvocationError::MissingText)
        );
    }

    #[test]
    fn test_non_string_text_rejected() {
        let validator = StarValidator::default();
        assert_eq!(
            invoke(&validator, &json!({ "text": 42 })),
            Err(InvocationError::InvalidText("number"))
        );
        assert_eq!(
            invoke(&validator, &json!({ "text": null })),
            Err(InvocationError::InvalidText("null"))
        );
    }

    #[test]
    fn test_non_object_arguments_rejected() {
        let validator = StarValidator::default();
        assert_eq!(
            invoke(&validator, &json!(["text"])),
            Err(InvocationError::ArgumentsNotObject("array"))
        );
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            decode_arguments("not json"),
            Err(InvocationError::MalformedArguments(_))
        ));
        assert_eq!(decode_arguments(r#"{"text": "a"}"#), Ok(json!({ "text": "a" })));
    }

    #[test]
    fn test_unknown_tool() {
        let validator = StarValidator::default();
        assert_eq!(
            call_tool(&validator, "validate_resume", &json!({ "text": "" })),
            Err(InvocationError::UnknownTool("validate_resume".to_string()))
        );
        assert!(call_tool(&validator, TOOL_NAME, &json!({ "text": "" })).is_ok());
    }
}
