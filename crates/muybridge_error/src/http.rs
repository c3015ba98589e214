//! HTTP error types.

/// HTTP error wrapping reqwest failures and non-success statuses with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} at line {} in {}", message, line, file)]
pub struct HttpError {
    /// The underlying error message
    pub message: String,
    /// HTTP status code, when the server answered
    pub status: Option<u16>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create a new HttpError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use muybridge_error::HttpError;
    ///
    /// let err = HttpError::new("Connection refused");
    /// assert!(err.message.contains("Connection refused"));
    /// assert_eq!(err.status, None);
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            status: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create an HttpError for a non-success response status.
    ///
    /// # Examples
    ///
    /// ```
    /// use muybridge_error::HttpError;
    ///
    /// let err = HttpError::with_status(503, "Service unavailable");
    /// assert_eq!(err.status, Some(503));
    /// assert!(err.is_transient());
    /// ```
    #[track_caller]
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: format!("status {}: {}", status, message.into()),
            status: Some(status),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether a retry of the same request could reasonably succeed.
    ///
    /// Connection failures (no status) and 408/429/5xx gateway statuses are
    /// transient; everything else is permanent.
    pub fn is_transient(&self) -> bool {
        match self.status {
            None => true,
            Some(status) => matches!(status, 408 | 429 | 500 | 502 | 503 | 504),
        }
    }
}
