//! Video outline types.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One chapter of an outline: a title plus a description of what to animate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ChapterSpec {
    /// Chapter title
    title: String,
    /// Detailed explanation of the chapter content and its visualization
    explanation: String,
}

impl ChapterSpec {
    /// Create a chapter specification.
    pub fn new(title: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            explanation: explanation.into(),
        }
    }
}

/// Title plus ordered chapter specifications for one video.
///
/// # Examples
///
/// ```
/// use muybridge_core::{ChapterSpec, Outline};
///
/// let outline = Outline::new(
///     "Derivatives",
///     vec![
///         ChapterSpec::new("Slopes", "Draw secant lines"),
///         ChapterSpec::new("Limits", "Shrink h towards zero"),
///         ChapterSpec::new("Rules", "Show the power rule"),
///     ],
/// );
///
/// let selected = outline.select(2);
/// assert_eq!(selected.len(), 2);
/// assert_eq!(selected[1].title(), "Limits");
/// assert_eq!(outline.select(10).len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Outline {
    /// Title of the whole video
    title: String,
    /// Chapters in presentation order
    chapters: Vec<ChapterSpec>,
}

impl Outline {
    /// Create an outline.
    pub fn new(title: impl Into<String>, chapters: Vec<ChapterSpec>) -> Self {
        Self {
            title: title.into(),
            chapters,
        }
    }

    /// The first `min(count, chapters.len())` chapters, in outline order.
    pub fn select(&self, count: usize) -> &[ChapterSpec] {
        let limit = count.min(self.chapters.len());
        &self.chapters[..limit]
    }

    /// Drop chapters beyond `max`, keeping order.
    pub fn truncate(&mut self, max: usize) {
        self.chapters.truncate(max);
    }
}
