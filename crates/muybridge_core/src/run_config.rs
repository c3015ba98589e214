//! Immutable configuration for one concept-to-video run.

use derive_getters::Getters;
use muybridge_error::{BuilderError, BuilderErrorKind, MuybridgeResult};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Upper bound on chapters per video.
pub const MAX_CHAPTERS: usize = 3;

/// Repair attempts per chapter when none are configured.
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Render wall-clock budget when none is configured.
pub const DEFAULT_RENDER_TIMEOUT_SECS: u64 = 60;

/// Everything a run needs to know, fixed before the run starts.
///
/// Built once and passed by reference to every orchestrator call, so no stage
/// can change the retry budget or timeout of another.
///
/// # Examples
///
/// ```
/// use muybridge_core::RunConfig;
/// use std::path::Path;
///
/// let config = RunConfig::builder()
///     .concept("derivatives")
///     .output("calculus.mp4")
///     .output_dir("./output")
///     .chapter_count(2_usize)
///     .max_retries(1_u32)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.output_path(), Path::new("./output/calculus.mp4"));
/// assert_eq!(*config.chapter_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_builder::Builder, Getters)]
#[builder(
    pattern = "owned",
    setter(into),
    build_fn(private, name = "build_internal")
)]
pub struct RunConfig {
    /// Topic of the video
    concept: String,
    /// Output file; relative paths are placed under `output_dir`
    #[builder(default = "PathBuf::from(\"output.mp4\")")]
    output: PathBuf,
    /// Directory for relative outputs
    #[builder(default = "PathBuf::from(\"./output\")")]
    output_dir: PathBuf,
    /// Chapters requested, 1 through [`MAX_CHAPTERS`]
    #[builder(default = "MAX_CHAPTERS")]
    chapter_count: usize,
    /// Repair attempts allowed per chapter after the first attempt
    #[builder(default = "DEFAULT_MAX_RETRIES")]
    max_retries: u32,
    /// Wall-clock budget for one render
    #[builder(default = "Duration::from_secs(DEFAULT_RENDER_TIMEOUT_SECS)")]
    render_timeout: Duration,
}

impl RunConfig {
    /// Creates a new builder for `RunConfig`.
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }

    /// Where the combined video is written.
    ///
    /// An absolute `output` is used verbatim; a relative one is joined onto
    /// `output_dir`.
    pub fn output_path(&self) -> PathBuf {
        if self.output.is_absolute() {
            self.output.clone()
        } else {
            self.output_dir.join(&self.output)
        }
    }

    /// Directory that must exist before the combined video is written.
    pub fn output_parent(&self) -> PathBuf {
        self.output_path()
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn validate(&self) -> Result<(), BuilderError> {
        if self.concept.trim().is_empty() {
            return Err(invalid("concept", "must not be empty"));
        }
        if self.chapter_count == 0 || self.chapter_count > MAX_CHAPTERS {
            return Err(invalid(
                "chapter_count",
                format!("must be between 1 and {}", MAX_CHAPTERS),
            ));
        }
        if self.render_timeout.is_zero() {
            return Err(invalid("render_timeout", "must be greater than zero"));
        }
        if self.output.as_os_str().is_empty() {
            return Err(invalid("output", "must not be empty"));
        }
        Ok(())
    }
}

impl RunConfigBuilder {
    /// Build and validate the run configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`BuilderError`] when `concept` is missing or blank, the
    /// chapter count is outside `1..=MAX_CHAPTERS`, the timeout is zero, or
    /// the output path is empty.
    pub fn build(self) -> MuybridgeResult<RunConfig> {
        let config = self
            .build_internal()
            .map_err(|e| BuilderError::new(BuilderErrorKind::MissingField(e.to_string())))?;
        config.validate()?;
        Ok(config)
    }
}

fn invalid(field: &str, reason: impl Into<String>) -> BuilderError {
    BuilderError::new(BuilderErrorKind::InvalidField {
        field: field.to_string(),
        reason: reason.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_cli_defaults() {
        let config = RunConfig::builder().concept("entropy").build().unwrap();
        assert_eq!(*config.chapter_count(), 3);
        assert_eq!(*config.max_retries(), 2);
        assert_eq!(*config.render_timeout(), Duration::from_secs(60));
        assert_eq!(config.output_path(), PathBuf::from("./output/output.mp4"));
    }

    #[test]
    fn test_absolute_output_ignores_output_dir() {
        let config = RunConfig::builder()
            .concept("entropy")
            .output("/tmp/final.mp4")
            .output_dir("./elsewhere")
            .build()
            .unwrap();
        assert_eq!(config.output_path(), PathBuf::from("/tmp/final.mp4"));
        assert_eq!(config.output_parent(), PathBuf::from("/tmp"));
    }

    #[test]
    fn test_rejects_blank_concept() {
        assert!(RunConfig::builder().concept("   ").build().is_err());
    }

    #[test]
    fn test_rejects_missing_concept() {
        assert!(RunConfig::builder().build().is_err());
    }

    #[test]
    fn test_rejects_chapter_count_out_of_range() {
        for count in [0_usize, 4, 10] {
            let result = RunConfig::builder()
                .concept("entropy")
                .chapter_count(count)
                .build();
            assert!(result.is_err(), "count {} should be rejected", count);
        }
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let result = RunConfig::builder()
            .concept("entropy")
            .render_timeout(Duration::ZERO)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_retries_is_valid() {
        let config = RunConfig::builder()
            .concept("entropy")
            .max_retries(0_u32)
            .build()
            .unwrap();
        assert_eq!(*config.max_retries(), 0);
    }
}
