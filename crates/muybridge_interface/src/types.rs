//! Shared interface types.

use serde::{Deserialize, Serialize};

/// Definition of a tool/function the model may call.
///
/// # Examples
///
/// ```
/// use muybridge_interface::ToolDefinition;
/// use serde_json::json;
///
/// let tool = ToolDefinition::new(
///     "generate_manim_code",
///     "Generate Manim code for a chapter",
///     json!({"type": "object", "properties": {"code": {"type": "string"}}}),
/// );
/// assert_eq!(tool.name, "generate_manim_code");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Name of the tool/function
    pub name: String,
    /// Human-readable description of what the tool does
    pub description: String,
    /// JSON Schema defining the parameters this tool accepts
    pub parameters: serde_json::Value,
}

impl ToolDefinition {
    /// Create a tool definition.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }
}
