//! The per-chapter generate, render and repair loop.

use muybridge_core::{ChapterResult, ChapterSpec, RunConfig, SceneSource};
use muybridge_interface::{GenerativeService, Renderer};
use tracing::{debug, info, instrument, warn};

/// Drives one chapter from description to rendered media.
///
/// Attempt 1 asks for fresh code. Every later attempt asks for a repair of
/// the latest candidate source, passing the failure text that attempt
/// produced. If no candidate exists yet (every earlier attempt failed before
/// yielding code) fresh code is requested again, and the preceding generation
/// error text is not passed on. A failed repair keeps the current candidate,
/// so the next repair receives that failure text with the same source. The
/// loop stops at the first successful render or after `max_retries + 1`
/// attempts.
#[derive(Debug)]
pub struct ChapterOrchestrator<'a, G: ?Sized, R: ?Sized> {
    service: &'a G,
    renderer: &'a R,
}

impl<'a, G, R> ChapterOrchestrator<'a, G, R>
where
    G: GenerativeService + ?Sized,
    R: Renderer + ?Sized,
{
    /// Create an orchestrator over borrowed collaborators.
    pub fn new(service: &'a G, renderer: &'a R) -> Self {
        Self { service, renderer }
    }

    /// Run the loop for the chapter at zero-based `index`.
    ///
    /// Never fails: exhausting the attempt budget yields a failed
    /// [`ChapterResult`] carrying the last failure text.
    #[instrument(skip(self, spec, config), fields(chapter = index + 1, title = %spec.title()))]
    pub async fn run(&self, index: usize, spec: &ChapterSpec, config: &RunConfig) -> ChapterResult {
        let max_attempts = config.max_retries().saturating_add(1);
        let chapter_number = index + 1;

        let mut candidate: Option<SceneSource> = None;
        let mut last_failure: Option<String> = None;
        let mut attempt: u32 = 0;

        info!("Processing chapter");
        debug!(explanation = %spec.explanation(), "Chapter explanation");

        loop {
            attempt += 1;

            let generated = match (&candidate, &last_failure) {
                (Some(current), Some(failure)) => {
                    info!(attempt, "Requesting repaired scene source");
                    self.service.produce_fixed_code(failure, current).await
                }
                _ => {
                    info!(attempt, "Requesting scene source");
                    self.service
                        .produce_chapter_code(spec.title(), spec.explanation())
                        .await
                }
            };

            let failure = match generated {
                Err(e) => {
                    warn!(attempt, error = %e, "Scene generation failed");
                    e.diagnostic()
                }
                Ok(source) => {
                    debug!(attempt, code = %source.code(), "Scene source");
                    let current = candidate.insert(source);
                    match self
                        .renderer
                        .render(current, chapter_number, *config.render_timeout())
                        .await
                    {
                        Ok(video) => {
                            info!(attempt, path = %video.display(), "Chapter rendered");
                            return ChapterResult::succeeded(index, spec.title(), video, attempt);
                        }
                        Err(e) => {
                            warn!(attempt, error = %e, "Chapter render failed");
                            e.diagnostic()
                        }
                    }
                }
            };

            if attempt >= max_attempts {
                warn!(attempts = attempt, "Chapter exhausted its attempts");
                return ChapterResult::failed(index, spec.title(), failure, attempt);
            }
            last_failure = Some(failure);
        }
    }
}
