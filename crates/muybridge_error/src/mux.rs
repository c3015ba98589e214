//! Video concatenation error types.

/// Failure modes of combining chapter videos.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MuxErrorKind {
    /// Nothing to combine
    #[display("No video files to combine")]
    NoInputs,
    /// An input file does not exist
    #[display("Video file not found: {}", _0)]
    MissingArtifact(String),
    /// The concat manifest could not be written
    #[display("Failed to write concat manifest {}: {}", path, message)]
    ManifestIo {
        /// Manifest path
        path: String,
        /// OS error message
        message: String,
    },
    /// The output directory could not be created
    #[display("Failed to create output directory {}: {}", path, message)]
    OutputDirectory {
        /// Directory path
        path: String,
        /// OS error message
        message: String,
    },
    /// The muxer program could not be started
    #[display("Failed to start muxer '{}': {}", program, message)]
    Spawn {
        /// Program that failed to start
        program: String,
        /// OS error message
        message: String,
    },
    /// The muxer exited unsuccessfully
    #[display("Muxer exited with {}: {}", status, diagnostics)]
    Execution {
        /// Exit status description (code or signal)
        status: String,
        /// Muxer diagnostics, verbatim
        diagnostics: String,
    },
    /// The muxer succeeded but produced no output file
    #[display("Combined video not found at {}", _0)]
    MissingOutput(String),
}

/// Mux error with source location tracking.
///
/// # Examples
///
/// ```
/// use muybridge_error::{MuxError, MuxErrorKind};
///
/// let err = MuxError::new(MuxErrorKind::MissingArtifact("/tmp/a.mp4".to_string()));
/// assert!(format!("{}", err).contains("/tmp/a.mp4"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Mux Error: {} at line {} in {}", kind, line, file)]
pub struct MuxError {
    /// The kind of error that occurred
    pub kind: MuxErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl MuxError {
    /// Create a new MuxError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: MuxErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
