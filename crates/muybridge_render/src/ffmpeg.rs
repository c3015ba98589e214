//! Chapter concatenation through the `ffmpeg` concat demuxer.

use crate::ScratchFile;
use crate::process::{describe_status, diagnostics};
use async_trait::async_trait;
use derive_getters::Getters;
use muybridge_error::{MuxError, MuxErrorKind, MuybridgeResult};
use muybridge_interface::Muxer;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info, instrument, warn};

/// Concatenates chapter videos without re-encoding.
#[derive(Debug, Clone, PartialEq, Eq, derive_builder::Builder, Getters)]
#[builder(setter(into))]
pub struct FfmpegMuxer {
    /// Program to invoke
    #[builder(default = "PathBuf::from(\"ffmpeg\")")]
    program: PathBuf,
}

impl Default for FfmpegMuxer {
    fn default() -> Self {
        Self {
            program: PathBuf::from("ffmpeg"),
        }
    }
}

/// One concat-demuxer manifest entry.
///
/// Single quotes in the path are closed, escaped and reopened.
///
/// # Examples
///
/// ```
/// use muybridge_render::manifest_line;
/// use std::path::Path;
///
/// assert_eq!(manifest_line(Path::new("/tmp/a.mp4")), "file '/tmp/a.mp4'");
/// assert_eq!(
///     manifest_line(Path::new("/tmp/it's.mp4")),
///     r"file '/tmp/it'\''s.mp4'"
/// );
/// ```
pub fn manifest_line(path: &Path) -> String {
    let escaped = path.display().to_string().replace('\'', r"'\''");
    format!("file '{}'", escaped)
}

impl FfmpegMuxer {
    /// Creates a new builder for `FfmpegMuxer`.
    pub fn builder() -> FfmpegMuxerBuilder {
        FfmpegMuxerBuilder::default()
    }

    /// Manifest path written next to `output`.
    pub fn manifest_path(output: &Path) -> PathBuf {
        let name = output
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());
        output.with_file_name(format!("{}.concat.txt", name))
    }

    async fn absolute_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, MuxError> {
        let mut absolute = Vec::with_capacity(inputs.len());
        for input in inputs {
            match tokio::fs::canonicalize(input).await {
                Ok(path) => absolute.push(path),
                Err(_) => {
                    return Err(MuxError::new(MuxErrorKind::MissingArtifact(
                        input.display().to_string(),
                    )));
                }
            }
        }
        Ok(absolute)
    }
}

#[async_trait]
impl Muxer for FfmpegMuxer {
    #[instrument(skip(self, inputs), fields(inputs = inputs.len(), output = %output.display()))]
    async fn combine(&self, inputs: &[PathBuf], output: &Path) -> MuybridgeResult<PathBuf> {
        if inputs.is_empty() {
            return Err(MuxError::new(MuxErrorKind::NoInputs).into());
        }

        let absolute = Self::absolute_inputs(inputs).await?;

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                MuxError::new(MuxErrorKind::OutputDirectory {
                    path: parent.display().to_string(),
                    message: e.to_string(),
                })
            })?;
        }

        let manifest_path = Self::manifest_path(output);
        let mut contents = absolute
            .iter()
            .map(|path| manifest_line(path))
            .collect::<Vec<_>>()
            .join("\n");
        contents.push('\n');
        let manifest = ScratchFile::create(&manifest_path, contents).map_err(|e| {
            MuxError::new(MuxErrorKind::ManifestIo {
                path: manifest_path.display().to_string(),
                message: e.to_string(),
            })
        })?;

        info!("Combining chapter videos");

        let result = Command::new(&self.program)
            .arg("-y")
            .arg("-loglevel")
            .arg("error")
            .arg("-f")
            .arg("concat")
            .arg("-safe")
            .arg("0")
            .arg("-i")
            .arg(manifest.path())
            .arg("-c")
            .arg("copy")
            .arg(output)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                MuxError::new(MuxErrorKind::Spawn {
                    program: self.program.display().to_string(),
                    message: e.to_string(),
                })
            })?;

        debug!(
            stderr = %String::from_utf8_lossy(&result.stderr),
            "Muxer finished"
        );

        if !result.status.success() {
            let status = describe_status(&result.status);
            warn!(status = %status, "Muxer exited unsuccessfully");
            return Err(MuxError::new(MuxErrorKind::Execution {
                status,
                diagnostics: diagnostics(&result),
            })
            .into());
        }

        if !tokio::fs::try_exists(output).await.unwrap_or(false) {
            return Err(MuxError::new(MuxErrorKind::MissingOutput(
                output.display().to_string(),
            ))
            .into());
        }

        info!("Combined chapter videos");
        Ok(output.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_sits_next_to_output() {
        assert_eq!(
            FfmpegMuxer::manifest_path(Path::new("out/final.mp4")),
            PathBuf::from("out/final.mp4.concat.txt")
        );
    }

    #[test]
    fn test_plain_path_is_quoted() {
        assert_eq!(
            manifest_line(Path::new("/media/videos/chapter_1/480p15/Intro.mp4")),
            "file '/media/videos/chapter_1/480p15/Intro.mp4'"
        );
    }
}
