//! Output types from LLM responses.

use serde::{Deserialize, Serialize};

/// Supported output types from chat backends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output.
    Text(String),

    /// Tool/function calls requested by the model.
    ToolCalls(Vec<ToolCall>),
}

/// A tool/function call made by the model.
///
/// Structured generation in Muybridge is always expressed as a forced tool
/// call; the call's arguments are the structured payload.
///
/// # Examples
///
/// ```
/// use muybridge_core::ToolCall;
/// use serde_json::json;
///
/// let call = ToolCall {
///     id: "call_123".to_string(),
///     name: "generate_manim_code".to_string(),
///     arguments: json!({"code": "from manim import *"}),
/// };
///
/// assert_eq!(call.name, "generate_manim_code");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Unique identifier for this tool call
    pub id: String,
    /// Name of the tool/function to call
    pub name: String,
    /// Arguments to pass to the tool (as JSON)
    pub arguments: serde_json::Value,
}
