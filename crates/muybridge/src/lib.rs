//! Muybridge - concept to explainer video.
//!
//! A concept goes to a tool-calling language model for an outline, each
//! chapter becomes a Manim scene that is rendered and, when rendering fails,
//! repaired with the renderer's error text. Rendered chapters are joined with
//! ffmpeg into one video.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use muybridge::{MuybridgeConfig, RunConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = MuybridgeConfig::load()?;
//!     let run = RunConfig::builder()
//!         .concept("derivatives")
//!         .output_dir(settings.output.dir.clone())
//!         .build()?;
//!
//!     let result = settings.pipeline()?.run(&run).await;
//!     println!("{}", muybridge::summary(&result));
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `muybridge-error` - Error types
//! - `muybridge-core` - Data model and run configuration
//! - `muybridge-interface` - Driver, generative service, renderer and muxer traits
//! - `muybridge-models` - OpenAI-compatible chat client
//! - `muybridge-agents` - Outline, scene and fixer agents
//! - `muybridge-render` - `manim` and `ffmpeg` adapters
//! - `muybridge-pipeline` - Chapter retry loop and whole-run orchestration
//!
//! This crate (`muybridge`) re-exports everything and adds configuration
//! loading, logging setup and the command-line binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cli;
mod config;
mod logging;
mod report;

pub use cli::Cli;
pub use config::{
    DefaultPipeline, GenerationSettings, MuxSettings, MuybridgeConfig, OutputSettings,
    RenderSettings,
};
pub use logging::{default_directive, init_tracing};
pub use report::{summary, to_json};

pub use muybridge_agents::{AgentConfig, AgentConfigBuilder, AgentService};
pub use muybridge_core::*;
pub use muybridge_error::*;
pub use muybridge_interface::*;
pub use muybridge_models::{DEFAULT_BASE_URL, DEFAULT_MODEL, OpenAICompatibleClient};
pub use muybridge_pipeline::{ChapterOrchestrator, NO_SUCCESSFUL_CHAPTERS, PipelineOrchestrator};
pub use muybridge_render::{FfmpegMuxer, ManimRenderer, ScratchFile};
