//! Per-chapter and per-run outcomes.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome of one chapter's generate/render/repair loop.
///
/// Created once when the loop exits and never modified afterwards.
///
/// # Examples
///
/// ```
/// use muybridge_core::ChapterResult;
///
/// let ok = ChapterResult::succeeded(0, "Slopes", "media/Slopes.mp4".into(), 1);
/// assert!(*ok.success());
/// assert!(ok.error().is_none());
///
/// let failed = ChapterResult::failed(1, "Limits", "SyntaxError", 3);
/// assert!(!*failed.success());
/// assert!(failed.video_file().is_none());
/// assert_eq!(*failed.attempts(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct ChapterResult {
    /// Zero-based position in the outline
    chapter_index: usize,
    /// Chapter title from the outline
    chapter_title: String,
    /// Rendered media file, present only on success
    video_file: Option<PathBuf>,
    /// Whether a render succeeded within the attempt budget
    success: bool,
    /// Last failure text when the budget was exhausted
    error: Option<String>,
    /// Generate/fix + render cycles performed
    attempts: u32,
}

impl ChapterResult {
    /// Result for a chapter whose render succeeded.
    pub fn succeeded(
        chapter_index: usize,
        chapter_title: impl Into<String>,
        video_file: PathBuf,
        attempts: u32,
    ) -> Self {
        Self {
            chapter_index,
            chapter_title: chapter_title.into(),
            video_file: Some(video_file),
            success: true,
            error: None,
            attempts,
        }
    }

    /// Result for a chapter that exhausted its attempt budget.
    pub fn failed(
        chapter_index: usize,
        chapter_title: impl Into<String>,
        error: impl Into<String>,
        attempts: u32,
    ) -> Self {
        Self {
            chapter_index,
            chapter_title: chapter_title.into(),
            video_file: None,
            success: false,
            error: Some(error.into()),
            attempts,
        }
    }
}

/// Single return value of a whole concept-to-video run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct VideoGenerationResult {
    /// Whether a combined video was produced
    success: bool,
    /// Outline title, when an outline was produced
    title: Option<String>,
    /// Combined video path, present only on success
    output_path: Option<PathBuf>,
    /// Every processed chapter, in outline order
    chapters: Vec<ChapterResult>,
    /// Top-level failure reason
    error: Option<String>,
}

impl VideoGenerationResult {
    /// A run that produced `output_path`.
    pub fn completed(
        title: impl Into<String>,
        output_path: PathBuf,
        chapters: Vec<ChapterResult>,
    ) -> Self {
        Self {
            success: true,
            title: Some(title.into()),
            output_path: Some(output_path),
            chapters,
            error: None,
        }
    }

    /// A run that failed before or during combination.
    ///
    /// # Examples
    ///
    /// ```
    /// use muybridge_core::VideoGenerationResult;
    ///
    /// let result = VideoGenerationResult::failed(None, Vec::new(), "outline failed");
    /// assert!(!*result.success());
    /// assert!(result.output_path().is_none());
    /// assert!(result.chapters().is_empty());
    /// ```
    pub fn failed(
        title: Option<String>,
        chapters: Vec<ChapterResult>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            success: false,
            title,
            output_path: None,
            chapters,
            error: Some(error.into()),
        }
    }

    /// Number of chapters that rendered successfully.
    pub fn successful_chapters(&self) -> usize {
        self.chapters.iter().filter(|c| c.success).count()
    }
}
