//! Scene rendering through the `manim` command-line tool.

use crate::ScratchFile;
use crate::process::{describe_status, diagnostics};
use async_trait::async_trait;
use derive_getters::Getters;
use muybridge_core::SceneSource;
use muybridge_error::{MuybridgeResult, RenderError, RenderErrorKind};
use muybridge_interface::Renderer;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, info, instrument, warn};

/// Quality flag for the low-fidelity profile.
const QUALITY_FLAG: &str = "-ql";

/// Directory manim writes low-fidelity renders into.
const QUALITY_DIR: &str = "480p15";

/// Renders scene source by invoking `manim` on a scratch file.
///
/// Chapter `n` is written to `<scratch_dir>/chapter_<n>.py` and rendered into
/// `<media_dir>/videos/chapter_<n>/480p15/<Entry>.mp4`.
///
/// # Examples
///
/// ```
/// use muybridge_render::ManimRenderer;
/// use std::path::PathBuf;
///
/// let renderer = ManimRenderer::builder()
///     .media_dir("work/media")
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     renderer.expected_output(2, "Limits"),
///     PathBuf::from("work/media/videos/chapter_2/480p15/Limits.mp4")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_builder::Builder, Getters)]
#[builder(setter(into))]
pub struct ManimRenderer {
    /// Program to invoke
    #[builder(default = "PathBuf::from(\"manim\")")]
    program: PathBuf,
    /// Where scene source is written before rendering
    #[builder(default = "PathBuf::from(\".\")")]
    scratch_dir: PathBuf,
    /// Root of the media tree manim writes into
    #[builder(default = "PathBuf::from(\"./media\")")]
    media_dir: PathBuf,
}

impl Default for ManimRenderer {
    fn default() -> Self {
        Self {
            program: PathBuf::from("manim"),
            scratch_dir: PathBuf::from("."),
            media_dir: PathBuf::from("./media"),
        }
    }
}

impl ManimRenderer {
    /// Creates a new builder for `ManimRenderer`.
    pub fn builder() -> ManimRendererBuilder {
        ManimRendererBuilder::default()
    }

    /// File stem used for chapter `chapter_number`.
    pub fn stem(chapter_number: usize) -> String {
        format!("chapter_{}", chapter_number)
    }

    /// Scratch source path for chapter `chapter_number`.
    pub fn scratch_path(&self, chapter_number: usize) -> PathBuf {
        self.scratch_dir
            .join(format!("{}.py", Self::stem(chapter_number)))
    }

    /// Media file manim produces for `entry_name` in chapter `chapter_number`.
    pub fn expected_output(&self, chapter_number: usize, entry_name: &str) -> PathBuf {
        self.media_dir
            .join("videos")
            .join(Self::stem(chapter_number))
            .join(QUALITY_DIR)
            .join(format!("{}.mp4", entry_name))
    }

    fn command(&self, script: &Path, entry_name: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(script)
            .arg(entry_name)
            .arg(QUALITY_FLAG)
            .arg("--disable_caching")
            .arg("--media_dir")
            .arg(&self.media_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }
}

fn ensure_dir(path: &Path) -> Result<(), RenderError> {
    std::fs::create_dir_all(path).map_err(|e| {
        RenderError::new(RenderErrorKind::ScratchIo {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    })
}

#[async_trait]
impl Renderer for ManimRenderer {
    #[instrument(skip(self, source), fields(chapter = chapter_number, timeout_secs = timeout.as_secs()))]
    async fn render(
        &self,
        source: &SceneSource,
        chapter_number: usize,
        timeout: Duration,
    ) -> MuybridgeResult<PathBuf> {
        let entry_name = source.entry_name()?;

        ensure_dir(&self.scratch_dir)?;
        ensure_dir(&self.media_dir)?;

        let script_path = self.scratch_path(chapter_number);
        let script = ScratchFile::create(&script_path, source.code()).map_err(|e| {
            RenderError::new(RenderErrorKind::ScratchIo {
                path: script_path.display().to_string(),
                message: e.to_string(),
            })
        })?;

        info!(entry = %entry_name, "Rendering chapter scene");

        let output = match tokio::time::timeout(
            timeout,
            self.command(script.path(), &entry_name).output(),
        )
        .await
        {
            Err(_) => {
                warn!("Renderer timed out, child process killed");
                return Err(RenderError::new(RenderErrorKind::Timeout {
                    seconds: timeout.as_secs(),
                })
                .into());
            }
            Ok(Err(e)) => {
                return Err(RenderError::new(RenderErrorKind::Spawn {
                    program: self.program.display().to_string(),
                    message: e.to_string(),
                })
                .into());
            }
            Ok(Ok(output)) => output,
        };

        debug!(
            stdout = %String::from_utf8_lossy(&output.stdout),
            stderr = %String::from_utf8_lossy(&output.stderr),
            "Renderer finished"
        );

        if !output.status.success() {
            let status = describe_status(&output.status);
            warn!(status = %status, "Renderer exited unsuccessfully");
            return Err(RenderError::new(RenderErrorKind::Execution {
                status,
                diagnostics: diagnostics(&output),
            })
            .into());
        }

        let video = self.expected_output(chapter_number, &entry_name);
        if !tokio::fs::try_exists(&video).await.unwrap_or(false) {
            return Err(RenderError::new(RenderErrorKind::MissingOutput(
                video.display().to_string(),
            ))
            .into());
        }

        info!(path = %video.display(), "Rendered chapter scene");
        Ok(video)
    }
}
