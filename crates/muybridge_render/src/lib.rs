//! External-tool adapters: scene rendering with `manim` and chapter
//! concatenation with `ffmpeg`.
//!
//! Both adapters write short-lived files (scene source, concat manifest)
//! through [`ScratchFile`], which removes them on every exit path.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod ffmpeg;
mod manim;
mod process;
mod scratch;

pub use ffmpeg::{FfmpegMuxer, FfmpegMuxerBuilder, manifest_line};
pub use manim::{ManimRenderer, ManimRendererBuilder};
pub use scratch::ScratchFile;
