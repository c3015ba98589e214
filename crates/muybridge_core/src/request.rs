//! Request and response types for LLM generation.

use crate::{Message, Output, ToolCall};
use serde::{Deserialize, Serialize};

/// Chat generation request.
///
/// # Examples
///
/// ```
/// use muybridge_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::system("Be brief."), Message::user("Hello!")])
///     .temperature(Some(0.7_f32))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages.len(), 2);
/// assert_eq!(request.max_tokens, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    #[builder(default)]
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    #[builder(default)]
    pub temperature: Option<f32>,
    /// Model identifier overriding the driver's default
    #[builder(default)]
    pub model: Option<String>,
}

impl GenerateRequest {
    /// Creates a new builder for `GenerateRequest`.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use muybridge_core::{GenerateResponse, Output};
///
/// let response = GenerateResponse {
///     outputs: vec![Output::Text("Hello!".to_string())],
/// };
///
/// assert_eq!(response.outputs.len(), 1);
/// assert!(response.tool_calls().next().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated outputs from the model
    pub outputs: Vec<Output>,
}

impl GenerateResponse {
    /// Iterate over every tool call across all outputs, in order.
    pub fn tool_calls(&self) -> impl Iterator<Item = &ToolCall> {
        self.outputs.iter().flat_map(|output| match output {
            Output::ToolCalls(calls) => calls.as_slice(),
            Output::Text(_) => &[][..],
        })
    }
}
