//! Scripted collaborators for orchestration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use muybridge_core::{ChapterSpec, Outline, RunConfig, SceneSource};
use muybridge_error::{
    GenerationError, GenerationErrorKind, MuxError, MuxErrorKind, MuybridgeResult, RenderError,
    RenderErrorKind,
};
use muybridge_interface::{GenerativeService, Muxer, Renderer};
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Calls the service received, in order.
#[derive(Debug, Clone, Default)]
pub struct ServiceLog {
    pub outline_calls: Vec<String>,
    pub generate_calls: Vec<String>,
    pub fix_calls: Vec<(String, String)>,
}

/// Generative service with a fixed outline and deterministic code.
///
/// Fresh code for chapter "T" is `draft of T`; a repair appends
/// `\n# fixed` to the code it was given.
#[derive(Clone)]
pub struct MockService {
    outline: Result<Outline, String>,
    generation_failures: Arc<Mutex<HashMap<String, usize>>>,
    fix_failures: Arc<Mutex<usize>>,
    log: Arc<Mutex<ServiceLog>>,
}

impl MockService {
    pub fn with_outline(outline: Outline) -> Self {
        Self {
            outline: Ok(outline),
            generation_failures: Arc::new(Mutex::new(HashMap::new())),
            fix_failures: Arc::new(Mutex::new(0)),
            log: Arc::new(Mutex::new(ServiceLog::default())),
        }
    }

    pub fn failing_outline(message: &str) -> Self {
        Self {
            outline: Err(message.to_string()),
            generation_failures: Arc::new(Mutex::new(HashMap::new())),
            fix_failures: Arc::new(Mutex::new(0)),
            log: Arc::new(Mutex::new(ServiceLog::default())),
        }
    }

    /// Fail the first `times` fresh-code requests for `title`.
    pub fn fail_generation(self, title: &str, times: usize) -> Self {
        self.generation_failures
            .lock()
            .unwrap()
            .insert(title.to_string(), times);
        self
    }

    /// Fail the next `times` repair requests with a backend error.
    pub fn fail_fix(self, times: usize) -> Self {
        *self.fix_failures.lock().unwrap() = times;
        self
    }

    pub fn log(&self) -> ServiceLog {
        self.log.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeService for MockService {
    async fn produce_outline(&self, concept: &str) -> MuybridgeResult<Outline> {
        self.log.lock().unwrap().outline_calls.push(concept.to_string());
        match &self.outline {
            Ok(outline) => Ok(outline.clone()),
            Err(message) => Err(GenerationError::new(GenerationErrorKind::Backend(
                message.clone(),
            ))
            .into()),
        }
    }

    async fn produce_chapter_code(
        &self,
        chapter_title: &str,
        _explanation: &str,
    ) -> MuybridgeResult<SceneSource> {
        self.log
            .lock()
            .unwrap()
            .generate_calls
            .push(chapter_title.to_string());

        let mut failures = self.generation_failures.lock().unwrap();
        if let Some(remaining) = failures.get_mut(chapter_title) {
            if *remaining > 0 {
                *remaining -= 1;
                return Err(GenerationError::new(GenerationErrorKind::MissingToolCall(
                    "generate_manim_code".to_string(),
                ))
                .into());
            }
        }

        Ok(SceneSource::new(
            format!("draft of {}", chapter_title),
            Some("ChapterScene".to_string()),
        ))
    }

    async fn produce_fixed_code(
        &self,
        error_text: &str,
        current: &SceneSource,
    ) -> MuybridgeResult<SceneSource> {
        self.log
            .lock()
            .unwrap()
            .fix_calls
            .push((error_text.to_string(), current.code().clone()));

        let mut remaining = self.fix_failures.lock().unwrap();
        if *remaining > 0 {
            *remaining -= 1;
            return Err(GenerationError::new(GenerationErrorKind::Backend(
                "fixer down".to_string(),
            ))
            .into());
        }

        Ok(SceneSource::new(
            format!("{}\n# fixed", current.code()),
            current.scene_name().clone(),
        ))
    }
}

/// One render as seen by [`MockRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderCall {
    pub chapter_number: usize,
    pub code: String,
    pub timeout: Duration,
}

/// Renderer that fails according to a per-chapter plan and otherwise writes a
/// small media file into `media_dir`.
#[derive(Clone)]
pub struct MockRenderer {
    media_dir: PathBuf,
    plan: Arc<Mutex<HashMap<usize, VecDeque<String>>>>,
    always_fail: Arc<Mutex<HashMap<usize, String>>>,
    calls: Arc<Mutex<Vec<RenderCall>>>,
}

impl MockRenderer {
    pub fn new(media_dir: impl Into<PathBuf>) -> Self {
        let media_dir = media_dir.into();
        std::fs::create_dir_all(&media_dir).unwrap();
        Self {
            media_dir,
            plan: Arc::new(Mutex::new(HashMap::new())),
            always_fail: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fail the next renders of `chapter_number` with these diagnostics.
    pub fn fail_with(self, chapter_number: usize, diagnostics: &[&str]) -> Self {
        self.plan.lock().unwrap().insert(
            chapter_number,
            diagnostics.iter().map(|d| d.to_string()).collect(),
        );
        self
    }

    /// Fail every render of `chapter_number`.
    pub fn always_fail(self, chapter_number: usize, diagnostics: &str) -> Self {
        self.always_fail
            .lock()
            .unwrap()
            .insert(chapter_number, diagnostics.to_string());
        self
    }

    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn media_for(&self, chapter_number: usize) -> PathBuf {
        self.media_dir.join(format!("chapter_{}.mp4", chapter_number))
    }
}

#[async_trait]
impl Renderer for MockRenderer {
    async fn render(
        &self,
        source: &SceneSource,
        chapter_number: usize,
        timeout: Duration,
    ) -> MuybridgeResult<PathBuf> {
        self.calls.lock().unwrap().push(RenderCall {
            chapter_number,
            code: source.code().clone(),
            timeout,
        });

        let failure = match self.always_fail.lock().unwrap().get(&chapter_number) {
            Some(diagnostics) => Some(diagnostics.clone()),
            None => self
                .plan
                .lock()
                .unwrap()
                .get_mut(&chapter_number)
                .and_then(VecDeque::pop_front),
        };

        if let Some(diagnostics) = failure {
            return Err(RenderError::new(RenderErrorKind::Execution {
                status: "exit code 1".to_string(),
                diagnostics,
            })
            .into());
        }

        let path = self.media_for(chapter_number);
        std::fs::write(&path, source.code()).unwrap();
        Ok(path)
    }
}

/// Muxer that records its inputs and writes the output file.
#[derive(Clone, Default)]
pub struct MockMuxer {
    failure: Option<String>,
    calls: Arc<Mutex<Vec<(Vec<PathBuf>, PathBuf)>>>,
}

impl MockMuxer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(diagnostics: &str) -> Self {
        Self {
            failure: Some(diagnostics.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<(Vec<PathBuf>, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Muxer for MockMuxer {
    async fn combine(&self, inputs: &[PathBuf], output: &Path) -> MuybridgeResult<PathBuf> {
        self.calls
            .lock()
            .unwrap()
            .push((inputs.to_vec(), output.to_path_buf()));

        if let Some(diagnostics) = &self.failure {
            return Err(MuxError::new(MuxErrorKind::Execution {
                status: "exit code 1".to_string(),
                diagnostics: diagnostics.clone(),
            })
            .into());
        }

        std::fs::write(output, "combined").unwrap();
        Ok(output.to_path_buf())
    }
}

pub fn outline(titles: &[&str]) -> Outline {
    Outline::new(
        "Derivatives",
        titles
            .iter()
            .map(|title| ChapterSpec::new(*title, format!("Explain {}", title)))
            .collect(),
    )
}

pub fn run_config(output_dir: &Path, chapters: usize, max_retries: u32) -> RunConfig {
    RunConfig::builder()
        .concept("derivatives")
        .output("final.mp4")
        .output_dir(output_dir)
        .chapter_count(chapters)
        .max_retries(max_retries)
        .render_timeout(Duration::from_secs(30))
        .build()
        .unwrap()
}
