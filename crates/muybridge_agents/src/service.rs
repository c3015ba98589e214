//! The agent-backed generative service.

use crate::{
    FIX_TOOL, FIXER_SYSTEM_PROMPT, OUTLINE_TOOL, SCENE_SYSTEM_PROMPT, SCENE_TOOL, chapter_payload,
    expect_tool_call, fix_payload, fixer_tool, outline_payload, outline_system_prompt,
    outline_tool, parse_outline, parse_scene, scene_tool,
};
use async_trait::async_trait;
use derive_getters::Getters;
use muybridge_core::{GenerateRequest, GenerateResponse, Message, Outline, SceneSource};
use muybridge_error::{
    BuilderError, BuilderErrorKind, GenerationError, GenerationErrorKind, MuybridgeResult,
};
use muybridge_interface::{GenerativeService, ToolDefinition, ToolUse};
use tracing::{debug, info, instrument};

/// Sampling and policy settings shared by the three agents.
///
/// # Examples
///
/// ```
/// use muybridge_agents::AgentConfig;
///
/// let config = AgentConfig::builder()
///     .temperature(0.2_f32)
///     .max_outline_chapters(2_usize)
///     .build()
///     .unwrap();
/// assert_eq!(*config.max_outline_chapters(), 2);
/// assert_eq!(*AgentConfig::default().temperature(), 0.7);
/// ```
#[derive(Debug, Clone, PartialEq, derive_builder::Builder, Getters)]
#[builder(setter(into))]
pub struct AgentConfig {
    /// Sampling temperature for every request
    #[builder(default = "0.7")]
    temperature: f32,
    /// Chapters kept from an outline
    #[builder(default = "muybridge_core::MAX_CHAPTERS")]
    max_outline_chapters: usize,
    /// Optional completion limit
    #[builder(default)]
    max_tokens: Option<u32>,
}

impl AgentConfig {
    /// Creates a new builder for `AgentConfig`.
    pub fn builder() -> AgentConfigBuilder {
        AgentConfigBuilder::default()
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_outline_chapters: muybridge_core::MAX_CHAPTERS,
            max_tokens: None,
        }
    }
}

/// Outline, scene and fixer agents over one tool-calling driver.
#[derive(Debug, Clone)]
pub struct AgentService<D> {
    driver: D,
    config: AgentConfig,
}

impl<D: ToolUse> AgentService<D> {
    /// Create a service with default settings.
    pub fn new(driver: D) -> Self {
        Self::with_config(driver, AgentConfig::default())
    }

    /// Create a service with explicit settings.
    pub fn with_config(driver: D, config: AgentConfig) -> Self {
        Self { driver, config }
    }

    /// The underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// The agent settings.
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    fn request(&self, system: &str, user: String) -> MuybridgeResult<GenerateRequest> {
        GenerateRequest::builder()
            .messages(vec![Message::system(system), Message::user(user)])
            .temperature(Some(self.config.temperature))
            .max_tokens(self.config.max_tokens)
            .build()
            .map_err(|e| BuilderError::new(BuilderErrorKind::ValidationFailed(e.to_string())).into())
    }

    async fn call_tool(
        &self,
        system: &str,
        user: String,
        tool: ToolDefinition,
    ) -> MuybridgeResult<GenerateResponse> {
        let request = self.request(system, user)?;
        self.driver
            .generate_with_tools(&request, std::slice::from_ref(&tool))
            .await
            .map_err(|e| GenerationError::new(GenerationErrorKind::Backend(e.diagnostic())).into())
    }

    async fn scene_call(
        &self,
        system: &str,
        user: String,
        tool: ToolDefinition,
        name: &str,
    ) -> MuybridgeResult<SceneSource> {
        let response = self.call_tool(system, user, tool).await?;
        let call = expect_tool_call(&response, name)?;
        let source = parse_scene(name, &call.arguments)?;
        debug!(
            tool = name,
            scene_name = ?source.scene_name(),
            code = %source.code(),
            "Received scene source"
        );
        Ok(source)
    }
}

#[async_trait]
impl<D: ToolUse> GenerativeService for AgentService<D> {
    #[instrument(skip(self), fields(model = %self.driver.model_name()))]
    async fn produce_outline(&self, concept: &str) -> MuybridgeResult<Outline> {
        let system = outline_system_prompt(self.config.max_outline_chapters);
        let response = self
            .call_tool(&system, outline_payload(concept), outline_tool())
            .await?;
        let call = expect_tool_call(&response, OUTLINE_TOOL)?;
        let outline = parse_outline(&call.arguments, self.config.max_outline_chapters)?;
        info!(
            title = %outline.title(),
            chapters = outline.chapters().len(),
            "Generated outline"
        );
        Ok(outline)
    }

    #[instrument(skip(self, explanation), fields(model = %self.driver.model_name()))]
    async fn produce_chapter_code(
        &self,
        chapter_title: &str,
        explanation: &str,
    ) -> MuybridgeResult<SceneSource> {
        self.scene_call(
            SCENE_SYSTEM_PROMPT,
            chapter_payload(chapter_title, explanation),
            scene_tool(),
            SCENE_TOOL,
        )
        .await
    }

    #[instrument(skip(self, error_text, current), fields(model = %self.driver.model_name()))]
    async fn produce_fixed_code(
        &self,
        error_text: &str,
        current: &SceneSource,
    ) -> MuybridgeResult<SceneSource> {
        self.scene_call(
            FIXER_SYSTEM_PROMPT,
            fix_payload(error_text, current.code()),
            fixer_tool(),
            FIX_TOOL,
        )
        .await
    }
}
