//! OpenAI-compatible chat-completions integration.

mod client;
mod conversion;
mod dto;

pub use client::{DEFAULT_BASE_URL, DEFAULT_MODEL, OpenAICompatibleClient};
pub use conversion::{from_chat_response, to_chat_request};
pub use dto::{
    ChatChoice, ChatFunction, ChatFunctionCall, ChatMessage, ChatRequest, ChatRequestBuilder,
    ChatResponse, ChatResponseMessage, ChatTool, ChatToolCall,
};
