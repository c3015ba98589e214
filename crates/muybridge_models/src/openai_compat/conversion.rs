//! Conversions between Muybridge request types and chat-completions DTOs.

use super::dto::{ChatMessage, ChatRequest, ChatResponse, ChatTool};
use muybridge_core::{GenerateRequest, GenerateResponse, Output, ToolCall};
use muybridge_error::{BuilderError, BuilderErrorKind, JsonError, MuybridgeResult};
use muybridge_interface::ToolDefinition;
use serde_json::json;

/// Build a chat-completions body from a generation request.
///
/// `req.model` overrides `default_model`. When exactly one tool is supplied
/// the model is forced to call it.
///
/// # Errors
///
/// Returns a [`BuilderError`] if the request cannot be assembled.
pub fn to_chat_request(
    req: &GenerateRequest,
    default_model: &str,
    tools: &[ToolDefinition],
) -> MuybridgeResult<ChatRequest> {
    let messages: Vec<ChatMessage> = req
        .messages
        .iter()
        .map(|message| ChatMessage::new(message.role.as_str(), message.content.clone()))
        .collect();

    let model = req
        .model
        .clone()
        .unwrap_or_else(|| default_model.to_string());

    let mut builder = ChatRequest::builder();
    builder
        .model(model)
        .messages(messages)
        .temperature(req.temperature)
        .max_tokens(req.max_tokens);

    if !tools.is_empty() {
        let chat_tools: Vec<ChatTool> = tools
            .iter()
            .map(|tool| {
                ChatTool::function(
                    tool.name.clone(),
                    tool.description.clone(),
                    tool.parameters.clone(),
                )
            })
            .collect();
        builder.tools(Some(chat_tools));
    }

    if let [only] = tools {
        builder.tool_choice(Some(json!({
            "type": "function",
            "function": { "name": only.name }
        })));
    }

    builder.build().map_err(|e| {
        BuilderError::new(BuilderErrorKind::ValidationFailed(format!(
            "Failed to build chat request: {}",
            e
        )))
        .into()
    })
}

/// Convert the first choice of a chat-completions response.
///
/// Text content becomes [`Output::Text`]; tool calls become
/// [`Output::ToolCalls`] with their argument strings parsed as JSON.
///
/// # Errors
///
/// Returns a [`JsonError`] when the response has no choices or a tool call's
/// arguments are not valid JSON.
pub fn from_chat_response(response: &ChatResponse) -> MuybridgeResult<GenerateResponse> {
    let choice = response
        .choices()
        .first()
        .ok_or_else(|| JsonError::new("Chat response contained no choices"))?;
    let message = choice.message();

    let mut outputs = Vec::new();

    if let Some(text) = message.content() {
        if !text.is_empty() {
            outputs.push(Output::Text(text.clone()));
        }
    }

    if let Some(calls) = message.tool_calls() {
        let mut converted = Vec::with_capacity(calls.len());
        for call in calls {
            let function = call.function();
            let arguments: serde_json::Value = serde_json::from_str(function.arguments())
                .map_err(|e| {
                    JsonError::new(format!(
                        "Arguments of tool call '{}' are not valid JSON: {}",
                        function.name(),
                        e
                    ))
                })?;
            converted.push(ToolCall {
                id: call.id().clone(),
                name: function.name().clone(),
                arguments,
            });
        }
        if !converted.is_empty() {
            outputs.push(Output::ToolCalls(converted));
        }
    }

    Ok(GenerateResponse { outputs })
}
