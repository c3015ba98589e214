//! Trait definitions for the Muybridge pipeline.
//!
//! The orchestrators only ever talk to their collaborators through these
//! traits: a chat backend that can call tools, a generative service that
//! turns prompts into outlines and scene source, a renderer, and a muxer.
//! Production adapters live in `muybridge_models`, `muybridge_agents` and
//! `muybridge_render`; tests substitute hand-written doubles.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{GenerativeService, MuybridgeDriver, Muxer, Renderer, ToolUse};
pub use types::ToolDefinition;
