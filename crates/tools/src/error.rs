//! Error types for `larkmcp-tools`.

use larkmcp_schema::Violation;
use rmcp::model::ErrorData;
use serde_json::json;
use thiserror::Error;

/// Main error type for registry construction and tool argument handling.
#[derive(Error, Debug)]
pub enum LarkToolsError {
    /// Configuration errors (invalid config file, duplicate tool names, bad schemas).
    #[error("Configuration error: {0}")]
    Config(String),

    /// No descriptor matches the requested tool name.
    #[error("Unknown tool '{name}'{}", did_you_mean(.suggestions))]
    UnknownTool {
        name: String,
        suggestions: Vec<String>,
    },

    /// Caller-supplied arguments failed schema validation.
    #[error("Invalid arguments for tool '{tool}': validation failed with {} error(s)", .violations.len())]
    InvalidArguments {
        tool: String,
        violations: Vec<Violation>,
    },

    /// A validated call could not be rendered into a request.
    #[error("Render error: {0}")]
    Render(String),

    /// IO errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

fn did_you_mean(suggestions: &[String]) -> String {
    suggestions
        .first()
        .map(|s| format!(" (did you mean '{s}'?)"))
        .unwrap_or_default()
}

impl LarkToolsError {
    /// MCP error payload for the `tools/call` response.
    #[must_use]
    pub fn to_error_data(&self) -> ErrorData {
        match self {
            LarkToolsError::InvalidArguments { violations, .. } => ErrorData::invalid_params(
                self.to_string(),
                Some(json!({
                    "type": "validation-errors",
                    "violations": violations,
                })),
            ),
            LarkToolsError::UnknownTool { name, suggestions } => ErrorData::invalid_params(
                self.to_string(),
                Some(json!({
                    "type": "unknown-tool",
                    "tool": name,
                    "suggestions": suggestions,
                })),
            ),
            other => ErrorData::internal_error(other.to_string(), None),
        }
    }
}

/// Result type alias for `larkmcp-tools` operations.
pub type Result<T> = std::result::Result<T, LarkToolsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tool_message_includes_first_suggestion() {
        let e = LarkToolsError::UnknownTool {
            name: "hire.v1.jobs.get".to_string(),
            suggestions: vec!["hire.v1.job.get".to_string()],
        };
        assert_eq!(
            e.to_string(),
            "Unknown tool 'hire.v1.jobs.get' (did you mean 'hire.v1.job.get'?)"
        );

        let e = LarkToolsError::UnknownTool {
            name: "x".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(e.to_string(), "Unknown tool 'x'");
    }

    #[test]
    fn invalid_arguments_map_to_invalid_params_with_violations() {
        let e = LarkToolsError::InvalidArguments {
            tool: "hire.v1.job.get".to_string(),
            violations: vec![Violation::MissingRequiredField {
                field: "path.job_id".to_string(),
            }],
        };
        let data = e.to_error_data();
        assert_eq!(data.code, rmcp::model::ErrorCode::INVALID_PARAMS);
        let details = data.data.expect("data");
        assert_eq!(details["type"], "validation-errors");
        assert_eq!(details["violations"][0]["field"], "path.job_id");
        assert_eq!(details["violations"][0]["type"], "missing-required-field");
    }
}
