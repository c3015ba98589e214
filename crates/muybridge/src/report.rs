//! Human and JSON renderings of a run result.

use muybridge_core::VideoGenerationResult;
use muybridge_error::{JsonError, MuybridgeResult};
use std::fmt::Write as _;

/// Multi-line summary for a terminal.
///
/// # Examples
///
/// ```
/// use muybridge::summary;
/// use muybridge_core::VideoGenerationResult;
///
/// let result = VideoGenerationResult::failed(None, Vec::new(), "model refused");
/// assert!(summary(&result).contains("model refused"));
/// ```
pub fn summary(result: &VideoGenerationResult) -> String {
    let mut out = String::new();

    match (result.success(), result.output_path()) {
        (true, Some(path)) => {
            let _ = writeln!(out, "Video generated: {}", path.display());
        }
        _ => {
            let _ = writeln!(out, "Video generation failed");
        }
    }

    if let Some(title) = result.title() {
        let _ = writeln!(out, "Title: {}", title);
    }

    if !result.chapters().is_empty() {
        let _ = writeln!(
            out,
            "Chapters: {}/{} rendered",
            result.successful_chapters(),
            result.chapters().len()
        );
    }

    for chapter in result.chapters() {
        let attempts = chapter.attempts();
        let plural = if *attempts == 1 { "" } else { "s" };
        if *chapter.success() {
            let _ = writeln!(
                out,
                "  {}. {} - ok after {} attempt{}",
                chapter.chapter_index() + 1,
                chapter.chapter_title(),
                attempts,
                plural
            );
        } else {
            let _ = writeln!(
                out,
                "  {}. {} - failed after {} attempt{}: {}",
                chapter.chapter_index() + 1,
                chapter.chapter_title(),
                attempts,
                plural,
                first_line(chapter.error().as_deref().unwrap_or("unknown error"))
            );
        }
    }

    if let Some(error) = result.error() {
        let _ = writeln!(out, "Error: {}", error);
    }

    out
}

/// Pretty-printed JSON with camelCase keys.
pub fn to_json(result: &VideoGenerationResult) -> MuybridgeResult<String> {
    serde_json::to_string_pretty(result)
        .map_err(|e| JsonError::new(format!("Failed to serialize result: {}", e)).into())
}

fn first_line(text: &str) -> &str {
    text.lines().find(|line| !line.trim().is_empty()).unwrap_or(text)
}
