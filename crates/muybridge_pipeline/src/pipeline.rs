//! Whole-run orchestration.

use crate::ChapterOrchestrator;
use muybridge_core::{ChapterResult, RunConfig, VideoGenerationResult};
use muybridge_interface::{GenerativeService, Muxer, Renderer};
use std::path::PathBuf;
use tracing::{debug, error, info, instrument, warn};

/// Error text when no chapter rendered.
pub const NO_SUCCESSFUL_CHAPTERS: &str = "no successful chapters";

/// Runs a concept through outline, chapters, combination and cleanup.
///
/// Owns the chapter results and the intermediate media for the duration of a
/// run. Chapter media is deleted only after a successful combine; when the
/// combine fails it is left in place.
#[derive(Debug, Clone)]
pub struct PipelineOrchestrator<G, R, M> {
    service: G,
    renderer: R,
    muxer: M,
}

impl<G, R, M> PipelineOrchestrator<G, R, M>
where
    G: GenerativeService,
    R: Renderer,
    M: Muxer,
{
    /// Create an orchestrator from its three collaborators.
    pub fn new(service: G, renderer: R, muxer: M) -> Self {
        Self {
            service,
            renderer,
            muxer,
        }
    }

    /// The generative service.
    pub fn service(&self) -> &G {
        &self.service
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The muxer.
    pub fn muxer(&self) -> &M {
        &self.muxer
    }

    /// Turn `config.concept` into a single video.
    ///
    /// Never returns an error; every failure is reported through
    /// [`VideoGenerationResult::error`].
    #[instrument(skip(self, config), fields(concept = %config.concept(), chapters = *config.chapter_count()))]
    pub async fn run(&self, config: &RunConfig) -> VideoGenerationResult {
        let output_path = config.output_path();
        let output_parent = config.output_parent();

        if let Err(e) = tokio::fs::create_dir_all(&output_parent).await {
            error!(path = %output_parent.display(), error = %e, "Failed to create output directory");
            return VideoGenerationResult::failed(
                None,
                Vec::new(),
                format!(
                    "Failed to create output directory {}: {}",
                    output_parent.display(),
                    e
                ),
            );
        }

        let outline = match self.service.produce_outline(config.concept()).await {
            Ok(outline) => outline,
            Err(e) => {
                error!(error = %e, "Outline generation failed");
                return VideoGenerationResult::failed(None, Vec::new(), e.diagnostic());
            }
        };

        let selected = outline.select(*config.chapter_count());
        info!(
            title = %outline.title(),
            outlined = outline.chapters().len(),
            selected = selected.len(),
            "Outline ready"
        );

        let chapter_loop = ChapterOrchestrator::new(&self.service, &self.renderer);
        let mut chapters: Vec<ChapterResult> = Vec::with_capacity(selected.len());
        for (index, spec) in selected.iter().enumerate() {
            chapters.push(chapter_loop.run(index, spec, config).await);
        }

        let videos: Vec<PathBuf> = chapters
            .iter()
            .filter_map(|chapter| chapter.video_file().clone())
            .collect();

        if videos.is_empty() {
            warn!("No chapter rendered successfully");
            return VideoGenerationResult::failed(
                Some(outline.title().clone()),
                chapters,
                NO_SUCCESSFUL_CHAPTERS,
            );
        }

        info!(
            rendered = videos.len(),
            failed = chapters.len() - videos.len(),
            output = %output_path.display(),
            "Combining chapters"
        );

        let combined = match self.muxer.combine(&videos, &output_path).await {
            Ok(path) => path,
            Err(e) => {
                error!(error = %e, "Combining chapters failed, keeping chapter media");
                return VideoGenerationResult::failed(
                    Some(outline.title().clone()),
                    chapters,
                    e.diagnostic(),
                );
            }
        };

        remove_intermediates(&videos).await;

        info!(path = %combined.display(), "Video generation complete");
        VideoGenerationResult::completed(outline.title().clone(), combined, chapters)
    }
}

async fn remove_intermediates(videos: &[PathBuf]) {
    for video in videos {
        match tokio::fs::remove_file(video).await {
            Ok(()) => debug!(path = %video.display(), "Deleted intermediate video"),
            Err(e) => warn!(path = %video.display(), error = %e, "Failed to delete intermediate video"),
        }
    }
}
