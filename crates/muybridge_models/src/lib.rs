//! LLM provider integrations for Muybridge.
//!
//! Structured generation goes through any endpoint that speaks the OpenAI
//! chat-completions protocol with function calling.
//!
//! ```no_run
//! use muybridge_models::OpenAICompatibleClient;
//! use muybridge_interface::MuybridgeDriver;
//! use muybridge_core::{GenerateRequest, Message};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAICompatibleClient::from_env()?;
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::user("Hello")])
//!     .build()?;
//! let response = client.generate(&request).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openai_compat;

pub use openai_compat::{
    ChatChoice, ChatFunction, ChatFunctionCall, ChatMessage, ChatRequest, ChatRequestBuilder,
    ChatResponse, ChatResponseMessage, ChatTool, ChatToolCall, DEFAULT_BASE_URL, DEFAULT_MODEL,
    OpenAICompatibleClient, from_chat_response, to_chat_request,
};
