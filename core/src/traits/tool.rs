use crate::error::{BuddyError, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    pub parameters_schema: serde_json::Value,
}

/// A named helper the model may ask to run. Every tool takes exactly one
/// string parameter and always produces a reply.
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn parameter_name(&self) -> &str;

    fn advise(&self, input: &str) -> String;

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                self.parameter_name(): {
                    "type": "string"
                }
            },
            "required": [self.parameter_name()]
        })
    }

    /// Validates the raw JSON arguments sent by the model, then dispatches.
    fn execute(&self, arguments: &str) -> Result<String> {
        let args: serde_json::Value = serde_json::from_str(arguments).map_err(|e| {
            BuddyError::MalformedResponse(format!(
                "Failed to parse tool arguments for {}: {}",
                self.name(),
                e
            ))
        })?;
        let input = crate::tools::extract_string_arg(&args, self.parameter_name()).map_err(
            |e| BuddyError::MalformedResponse(format!("{} for tool {}", e, self.name())),
        )?;
        Ok(self.advise(&input))
    }

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters_schema: self.parameters_schema(),
        }
    }
}
