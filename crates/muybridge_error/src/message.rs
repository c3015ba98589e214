//! Errors that carry only a message: JSON handling and configuration.

macro_rules! message_error {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
        #[display("{}: {} at line {} in {}", $label, message, line, file)]
        pub struct $name {
            /// What went wrong
            pub message: String,
            /// Line of the caller that raised it
            pub line: u32,
            /// File of the caller that raised it
            pub file: &'static str,
        }

        impl $name {
            /// Record `message` at the caller's location.
            #[track_caller]
            pub fn new(message: impl Into<String>) -> Self {
                let location = std::panic::Location::caller();
                Self {
                    message: message.into(),
                    line: location.line(),
                    file: location.file(),
                }
            }
        }
    };
}

message_error!(
    /// Malformed tool arguments, response bodies or reports.
    ///
    /// ```
    /// use muybridge_error::JsonError;
    ///
    /// let err = JsonError::new("expected object at column 1");
    /// assert!(err.to_string().starts_with("JSON Error: expected object"));
    /// ```
    JsonError,
    "JSON Error"
);

message_error!(
    /// Missing or out-of-range settings, detected before a run starts.
    ///
    /// ```
    /// use muybridge_error::ConfigError;
    ///
    /// let err = ConfigError::new("OPENAI_API_KEY is required");
    /// assert_eq!(err.message, "OPENAI_API_KEY is required");
    /// ```
    ConfigError,
    "Configuration Error"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_is_the_caller() {
        let line = line!() + 1;
        let err = ConfigError::new("bad timeout");
        assert_eq!(err.line, line);
        assert!(err.file.ends_with("message.rs"));
        assert!(err.to_string().starts_with("Configuration Error: bad timeout at line"));
    }
}
