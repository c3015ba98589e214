//! Error types for the Muybridge pipeline.
//!
//! This crate provides the error taxonomy used throughout the Muybridge workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! The per-chapter retry loop needs the failure text without location noise,
//! so every domain error exposes its kind separately and
//! [`MuybridgeError::diagnostic`] returns the text a repair request should see.
//!
//! # Examples
//!
//! ```
//! use muybridge_error::{MuybridgeResult, HttpError};
//!
//! fn fetch_data() -> MuybridgeResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod error;
mod generation;
mod http;
mod message;
mod mux;
mod render;

pub use builder::{BuilderError, BuilderErrorKind};
pub use error::{MuybridgeError, MuybridgeErrorKind, MuybridgeResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use http::HttpError;
pub use message::{ConfigError, JsonError};
pub use mux::{MuxError, MuxErrorKind};
pub use render::{RenderError, RenderErrorKind};
