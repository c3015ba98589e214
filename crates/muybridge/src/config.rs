//! Layered configuration for the `muybridge` binary.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat};
use muybridge_agents::{AgentConfig, AgentService};
use muybridge_core::MAX_CHAPTERS;
use muybridge_error::{BuilderError, BuilderErrorKind, ConfigError, MuybridgeResult};
use muybridge_models::OpenAICompatibleClient;
use muybridge_pipeline::PipelineOrchestrator;
use muybridge_render::{FfmpegMuxer, ManimRenderer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, instrument};

/// Bundled defaults shipped with the binary.
const DEFAULT_CONFIG: &str = include_str!("../muybridge.toml");

/// Pipeline wired to the production collaborators.
pub type DefaultPipeline =
    PipelineOrchestrator<AgentService<OpenAICompatibleClient>, ManimRenderer, FfmpegMuxer>;

/// Language model endpoint and agent sampling settings.
#[derive(Clone, PartialEq, Deserialize, Serialize)]
pub struct GenerationSettings {
    /// API root; `/chat/completions` is appended
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Sampling temperature for every agent
    pub temperature: f32,
    /// Upper bound on chapters kept from an outline
    pub max_outline_chapters: usize,
    /// Transport retries for rate limits and server errors
    pub http_retries: usize,
    /// Bearer token, normally from `OPENAI_API_KEY`
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
}

impl fmt::Debug for GenerationSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationSettings")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_outline_chapters", &self.max_outline_chapters)
            .field("http_retries", &self.http_retries)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Scene renderer settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RenderSettings {
    /// Renderer executable
    pub program: PathBuf,
    /// Directory for per-chapter scene files
    pub scratch_dir: PathBuf,
    /// Media tree the renderer writes into
    pub media_dir: PathBuf,
    /// Wall-clock limit for one render
    pub timeout_secs: u64,
}

/// Concatenation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MuxSettings {
    /// Muxer executable
    pub program: PathBuf,
}

/// Output location and per-chapter retry budget.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputSettings {
    /// Directory relative output names resolve against
    pub dir: PathBuf,
    /// Repair attempts per chapter after the first
    pub max_retries: u32,
}

/// Complete configuration for a run.
///
/// Sources in order of precedence (later sources override earlier):
/// 1. Bundled defaults (`muybridge.toml` shipped with the binary)
/// 2. `~/.config/muybridge/muybridge.toml`
/// 3. `./muybridge.toml`
/// 4. Environment: `OPENAI_API_KEY`, `OPENAI_BASE_URL`, `OPENAI_MODEL`,
///    `OUTPUT_DIR`, `MAX_RETRIES`, `MANIM_TIMEOUT`
///
/// Command-line flags are applied on top when the run is assembled.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MuybridgeConfig {
    /// `[generation]` table
    pub generation: GenerationSettings,
    /// `[render]` table
    pub render: RenderSettings,
    /// `[mux]` table
    pub mux: MuxSettings,
    /// `[output]` table
    pub output: OutputSettings,
}

/// Environment variables and the keys they override.
const STRING_OVERRIDES: [(&str, &str); 4] = [
    ("OPENAI_API_KEY", "generation.api_key"),
    ("OPENAI_BASE_URL", "generation.base_url"),
    ("OPENAI_MODEL", "generation.model"),
    ("OUTPUT_DIR", "output.dir"),
];

const INTEGER_OVERRIDES: [(&str, &str); 2] = [
    ("MAX_RETRIES", "output.max_retries"),
    ("MANIM_TIMEOUT", "render.timeout_secs"),
];

impl MuybridgeConfig {
    /// Load configuration from every source, reading the process environment.
    ///
    /// User config files are optional and silently skipped when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a file cannot be parsed, an environment
    /// value is malformed, or a setting is out of range.
    ///
    /// ```no_run
    /// use muybridge::MuybridgeConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = MuybridgeConfig::load()?;
    /// println!("rendering with {}", config.render.program.display());
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub fn load() -> MuybridgeResult<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load configuration from every source with a custom environment lookup.
    pub fn load_with<F>(lookup: F) -> MuybridgeResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled");

        let mut builder = bundled();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/muybridge/muybridge.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("muybridge").required(false));

        Self::finish(builder, lookup)
    }

    /// Layer a TOML document over the bundled defaults, then apply the
    /// environment from `lookup`.
    ///
    /// # Examples
    ///
    /// ```
    /// use muybridge::MuybridgeConfig;
    ///
    /// let config = MuybridgeConfig::from_toml_str("[output]\nmax_retries = 5", |_| None).unwrap();
    /// assert_eq!(config.output.max_retries, 5);
    /// assert_eq!(config.generation.model, "gpt-4o-mini");
    /// ```
    pub fn from_toml_str<F>(overlay: &str, lookup: F) -> MuybridgeResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let builder = bundled().add_source(File::from_str(overlay, FileFormat::Toml));
        Self::finish(builder, lookup)
    }

    fn finish<F>(builder: ConfigBuilder<DefaultState>, lookup: F) -> MuybridgeResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let builder = apply_environment(builder, lookup)?;

        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings no run could use.
    pub fn validate(&self) -> MuybridgeResult<()> {
        let generation = &self.generation;
        if !(0.0..=2.0).contains(&generation.temperature) {
            return Err(ConfigError::new(format!(
                "generation.temperature must be between 0 and 2, got {}",
                generation.temperature
            ))
            .into());
        }
        if !(1..=MAX_CHAPTERS).contains(&generation.max_outline_chapters) {
            return Err(ConfigError::new(format!(
                "generation.max_outline_chapters must be between 1 and {}, got {}",
                MAX_CHAPTERS, generation.max_outline_chapters
            ))
            .into());
        }
        if self.render.timeout_secs == 0 {
            return Err(ConfigError::new("render.timeout_secs must be positive").into());
        }
        Ok(())
    }

    /// The configured API key.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when no non-blank key is configured.
    pub fn api_key(&self) -> MuybridgeResult<&str> {
        match self.generation.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(ConfigError::new(
                "OPENAI_API_KEY is required (set it in the environment, .env, or generation.api_key)",
            )
            .into()),
        }
    }

    /// Wall-clock limit for one render.
    pub fn render_timeout(&self) -> Duration {
        Duration::from_secs(self.render.timeout_secs)
    }

    /// Chat-completions client for the configured endpoint.
    pub fn client(&self) -> MuybridgeResult<OpenAICompatibleClient> {
        let generation = &self.generation;
        Ok(OpenAICompatibleClient::new(
            self.api_key()?,
            generation.model.clone(),
            generation.base_url.clone(),
        )
        .with_http_retries(generation.http_retries))
    }

    /// Agent sampling settings.
    pub fn agent_config(&self) -> MuybridgeResult<AgentConfig> {
        AgentConfig::builder()
            .temperature(self.generation.temperature)
            .max_outline_chapters(self.generation.max_outline_chapters)
            .build()
            .map_err(|e| BuilderError::new(BuilderErrorKind::ValidationFailed(e.to_string())).into())
    }

    /// Outline, scene and fixer agents over the configured client.
    pub fn agent_service(&self) -> MuybridgeResult<AgentService<OpenAICompatibleClient>> {
        Ok(AgentService::with_config(self.client()?, self.agent_config()?))
    }

    /// Scene renderer.
    pub fn renderer(&self) -> MuybridgeResult<ManimRenderer> {
        ManimRenderer::builder()
            .program(self.render.program.clone())
            .scratch_dir(self.render.scratch_dir.clone())
            .media_dir(self.render.media_dir.clone())
            .build()
            .map_err(|e| BuilderError::new(BuilderErrorKind::ValidationFailed(e.to_string())).into())
    }

    /// Chapter concatenator.
    pub fn muxer(&self) -> MuybridgeResult<FfmpegMuxer> {
        FfmpegMuxer::builder()
            .program(self.mux.program.clone())
            .build()
            .map_err(|e| BuilderError::new(BuilderErrorKind::ValidationFailed(e.to_string())).into())
    }

    /// Pipeline over the production collaborators.
    ///
    /// # Errors
    ///
    /// Fails before any work starts when the API key is missing.
    pub fn pipeline(&self) -> MuybridgeResult<DefaultPipeline> {
        Ok(PipelineOrchestrator::new(
            self.agent_service()?,
            self.renderer()?,
            self.muxer()?,
        ))
    }
}

fn bundled() -> ConfigBuilder<DefaultState> {
    Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
}

fn apply_environment<F>(
    mut builder: ConfigBuilder<DefaultState>,
    lookup: F,
) -> MuybridgeResult<ConfigBuilder<DefaultState>>
where
    F: Fn(&str) -> Option<String>,
{
    let present = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

    for (var, key) in STRING_OVERRIDES {
        if let Some(value) = present(var) {
            debug!(var, key, "Environment override");
            builder = builder
                .set_override(key, value)
                .map_err(|e| ConfigError::new(format!("Failed to apply {}: {}", var, e)))?;
        }
    }

    for (var, key) in INTEGER_OVERRIDES {
        if let Some(value) = present(var) {
            let parsed: u32 = value.trim().parse().map_err(|e| {
                ConfigError::new(format!(
                    "{} must be a non-negative integer, got '{}': {}",
                    var, value, e
                ))
            })?;
            debug!(var, key, value = parsed, "Environment override");
            builder = builder
                .set_override(key, i64::from(parsed))
                .map_err(|e| ConfigError::new(format!("Failed to apply {}: {}", var, e)))?;
        }
    }

    Ok(builder)
}
