//! Trait definitions for chat backends and pipeline collaborators.

use crate::ToolDefinition;
use async_trait::async_trait;
use muybridge_core::{GenerateRequest, GenerateResponse, Outline, SceneSource};
use muybridge_error::MuybridgeResult;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Core trait that all chat backends must implement.
#[async_trait]
pub trait MuybridgeDriver: Send + Sync {
    /// Generate model output for a chat request.
    async fn generate(&self, req: &GenerateRequest) -> MuybridgeResult<GenerateResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-4o-mini").
    fn model_name(&self) -> &str;
}

/// Backends that support function/tool calling.
#[async_trait]
pub trait ToolUse: MuybridgeDriver {
    /// Generate with available tools.
    ///
    /// When exactly one tool is supplied the backend must force the model to
    /// call it; the call then appears in `Output::ToolCalls`.
    async fn generate_with_tools(
        &self,
        req: &GenerateRequest,
        tools: &[ToolDefinition],
    ) -> MuybridgeResult<GenerateResponse>;
}

/// Turns prompts into outlines and renderable scene source.
///
/// Each operation is one request/response pair with no state kept between
/// calls. Failures are `GenerationError`s.
#[async_trait]
pub trait GenerativeService: Send + Sync {
    /// Split a concept into a titled, ordered list of chapters.
    async fn produce_outline(&self, concept: &str) -> MuybridgeResult<Outline>;

    /// Write scene source for one chapter.
    async fn produce_chapter_code(
        &self,
        chapter_title: &str,
        explanation: &str,
    ) -> MuybridgeResult<SceneSource>;

    /// Repair `current` given the failure text its last render produced.
    async fn produce_fixed_code(
        &self,
        error_text: &str,
        current: &SceneSource,
    ) -> MuybridgeResult<SceneSource>;
}

/// Renders one scene to a media file.
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Render `source` as chapter `chapter_number` within `timeout`.
    ///
    /// Returns the path of the produced media file. Failures are
    /// `RenderError`s; execution failures carry the tool diagnostics.
    async fn render(
        &self,
        source: &SceneSource,
        chapter_number: usize,
        timeout: Duration,
    ) -> MuybridgeResult<PathBuf>;
}

/// Concatenates media files into one output.
#[async_trait]
pub trait Muxer: Send + Sync {
    /// Combine `inputs` in the given order into `output`.
    ///
    /// Returns the written output path. Failures are `MuxError`s.
    async fn combine(&self, inputs: &[PathBuf], output: &Path) -> MuybridgeResult<PathBuf>;
}
