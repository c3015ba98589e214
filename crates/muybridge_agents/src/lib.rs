//! Generative service backed by a tool-calling chat model.
//!
//! Three agents share one driver:
//!
//! - the **outline** agent splits a concept into at most
//!   `max_outline_chapters` chapters (tool `generate_video_outline`),
//! - the **scene** agent writes Manim source for one chapter
//!   (tool `generate_manim_code`),
//! - the **fixer** agent repairs source given the renderer's error
//!   (tool `fix_manim_code`).
//!
//! Every request forces its single tool, so the structured payload is always
//! the call's arguments.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod parse;
mod prompts;
mod service;
mod tools;

pub use parse::{expect_tool_call, parse_outline, parse_scene};
pub use prompts::{
    FIXER_SYSTEM_PROMPT, SCENE_SYSTEM_PROMPT, chapter_payload, fix_payload, outline_payload,
    outline_system_prompt,
};
pub use service::{AgentConfig, AgentConfigBuilder, AgentService};
pub use tools::{FIX_TOOL, OUTLINE_TOOL, SCENE_TOOL, fixer_tool, outline_tool, scene_tool};
