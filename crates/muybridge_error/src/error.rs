//! Top-level error wrapper types.

use crate::{
    BuilderError, ConfigError, GenerationError, HttpError, JsonError, MuxError, RenderError,
};

/// Every error condition the workspace can raise.
///
/// # Examples
///
/// ```
/// use muybridge_error::{MuybridgeError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: MuybridgeError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MuybridgeErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Generative service error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Scene rendering error
    #[from(RenderError)]
    Render(RenderError),
    /// Video concatenation error
    #[from(MuxError)]
    Mux(MuxError),
}

/// Muybridge error with kind discrimination.
///
/// # Examples
///
/// ```
/// use muybridge_error::{MuybridgeError, MuybridgeResult, ConfigError};
///
/// fn might_fail() -> MuybridgeResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Muybridge Error: {}", _0)]
pub struct MuybridgeError(Box<MuybridgeErrorKind>);

impl MuybridgeError {
    /// Create a new error from a kind.
    pub fn new(kind: MuybridgeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MuybridgeErrorKind {
        &self.0
    }

    /// Failure text without wrapper prefixes or source locations.
    ///
    /// This is what a code-repair request receives as its error input:
    /// renderer diagnostics verbatim, otherwise the inner kind's message.
    ///
    /// # Examples
    ///
    /// ```
    /// use muybridge_error::{MuybridgeError, RenderError, RenderErrorKind};
    ///
    /// let err: MuybridgeError = RenderError::new(RenderErrorKind::Timeout { seconds: 60 }).into();
    /// assert_eq!(err.diagnostic(), "Render timed out after 60 seconds");
    /// ```
    pub fn diagnostic(&self) -> String {
        match self.kind() {
            MuybridgeErrorKind::Http(e) => e.message.clone(),
            MuybridgeErrorKind::Json(e) => e.message.clone(),
            MuybridgeErrorKind::Config(e) => e.message.clone(),
            MuybridgeErrorKind::Builder(e) => e.kind().to_string(),
            MuybridgeErrorKind::Generation(e) => e.kind.to_string(),
            MuybridgeErrorKind::Render(e) => e.kind.diagnostic(),
            MuybridgeErrorKind::Mux(e) => e.kind.to_string(),
        }
    }
}

// Generic From implementation for any type that converts to MuybridgeErrorKind
impl<T> From<T> for MuybridgeError
where
    T: Into<MuybridgeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Muybridge operations.
///
/// # Examples
///
/// ```
/// use muybridge_error::{MuybridgeResult, HttpError};
///
/// fn fetch_data() -> MuybridgeResult<String> {
///     Err(HttpError::with_status(404, "Not Found"))?
/// }
/// ```
pub type MuybridgeResult<T> = std::result::Result<T, MuybridgeError>;
