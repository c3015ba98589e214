//! Scene rendering error types.

/// Failure modes of a single render attempt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RenderErrorKind {
    /// No scene entry point could be derived from the generated source
    #[display("Could not determine scene class name: {}", _0)]
    SourceFormat(String),
    /// The renderer exceeded its wall-clock budget
    #[display("Render timed out after {} seconds", seconds)]
    Timeout {
        /// Configured timeout
        seconds: u64,
    },
    /// The renderer exited unsuccessfully
    #[display("Renderer exited with {}: {}", status, diagnostics)]
    Execution {
        /// Exit status description (code or signal)
        status: String,
        /// Renderer diagnostics, verbatim
        diagnostics: String,
    },
    /// The renderer program could not be started
    #[display("Failed to start renderer '{}': {}", program, message)]
    Spawn {
        /// Program that failed to start
        program: String,
        /// OS error message
        message: String,
    },
    /// The scratch source file could not be written
    #[display("Failed to write scratch source {}: {}", path, message)]
    ScratchIo {
        /// Scratch path
        path: String,
        /// OS error message
        message: String,
    },
    /// The renderer succeeded but the expected media file is absent
    #[display("Video file not found at expected path: {}", _0)]
    MissingOutput(String),
}

impl RenderErrorKind {
    /// Text handed to the code fixer for this failure.
    ///
    /// Execution failures pass the tool diagnostics through untouched; every
    /// other failure is described by its message.
    pub fn diagnostic(&self) -> String {
        match self {
            RenderErrorKind::Execution { diagnostics, .. } => diagnostics.clone(),
            other => other.to_string(),
        }
    }
}

/// Render error with source location tracking.
///
/// # Examples
///
/// ```
/// use muybridge_error::{RenderError, RenderErrorKind};
///
/// let err = RenderError::new(RenderErrorKind::Execution {
///     status: "exit status: 1".to_string(),
///     diagnostics: "NameError: name 'Circl' is not defined".to_string(),
/// });
/// assert_eq!(err.kind.diagnostic(), "NameError: name 'Circl' is not defined");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Render Error: {} at line {} in {}", kind, line, file)]
pub struct RenderError {
    /// The kind of error that occurred
    pub kind: RenderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RenderError {
    /// Create a new RenderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RenderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
