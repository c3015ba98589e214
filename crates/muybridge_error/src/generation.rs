//! Generative service error types.

/// Ways a structured-generation request can fail to yield a usable payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// The model answered without invoking the requested tool
    #[display("Model returned no call to tool '{}'", _0)]
    MissingToolCall(String),
    /// The model invoked a different tool than the one requested
    #[display("Expected a call to tool '{}', model called '{}'", expected, actual)]
    UnexpectedTool {
        /// Tool the request forced
        expected: String,
        /// Tool the model actually called
        actual: String,
    },
    /// Tool arguments did not match the declared schema
    #[display("Malformed arguments for tool '{}': {}", tool, message)]
    MalformedArguments {
        /// Tool whose arguments failed to parse
        tool: String,
        /// Parser message
        message: String,
    },
    /// Outline arrived without any chapters
    #[display("Outline '{}' contains no chapters", _0)]
    EmptyOutline(String),
    /// The generated code field was blank
    #[display("Tool '{}' returned empty code", _0)]
    EmptyCode(String),
    /// The backend request itself failed (transport, status, decoding)
    #[display("Generation backend failed: {}", _0)]
    Backend(String),
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use muybridge_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::MissingToolCall(
///     "generate_video_outline".to_string(),
/// ));
/// assert!(format!("{}", err).contains("generate_video_outline"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
