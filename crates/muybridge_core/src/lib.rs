//! Core data types for the Muybridge pipeline.
//!
//! This crate holds the values that flow between the generative service, the
//! render adapters and the orchestrators: outlines, scene sources, per-chapter
//! and per-run results, the immutable run configuration, and the chat request
//! types spoken to language-model backends.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod message;
mod outline;
mod output;
mod request;
mod result;
mod role;
mod run_config;
mod scene;

pub use message::Message;
pub use outline::{ChapterSpec, Outline};
pub use output::{Output, ToolCall};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use result::{ChapterResult, VideoGenerationResult};
pub use role::Role;
pub use run_config::{
    MAX_CHAPTERS, RunConfig, RunConfigBuilder, DEFAULT_MAX_RETRIES, DEFAULT_RENDER_TIMEOUT_SECS,
};
pub use scene::{SceneSource, extract_scene_name};
