//! Orchestration of a concept-to-video run.
//!
//! [`PipelineOrchestrator`] asks for an outline, hands each selected chapter
//! to a [`ChapterOrchestrator`], combines the chapters that rendered, and
//! removes the intermediate media. [`ChapterOrchestrator`] owns the bounded
//! generate, render and repair loop for a single chapter.
//!
//! Everything runs strictly in order: one chapter at a time, one attempt at
//! a time.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chapter;
mod pipeline;

pub use chapter::ChapterOrchestrator;
pub use pipeline::{NO_SUCCESSFUL_CHAPTERS, PipelineOrchestrator};
