//! Files that live for the duration of one operation.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A file that is deleted when the guard is dropped.
///
/// # Examples
///
/// ```
/// use muybridge_render::ScratchFile;
///
/// let dir = std::env::temp_dir().join("muybridge-scratch-doc");
/// std::fs::create_dir_all(&dir).unwrap();
/// let path = dir.join("scene.py");
/// {
///     let scratch = ScratchFile::create(&path, "print('hi')").unwrap();
///     assert!(scratch.path().exists());
/// }
/// assert!(!path.exists());
/// ```
#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    /// Write `contents` to `path` and guard it.
    pub fn create(path: impl Into<PathBuf>, contents: impl AsRef<[u8]>) -> std::io::Result<Self> {
        let path = path.into();
        std::fs::write(&path, contents)?;
        debug!(path = %path.display(), "Wrote scratch file");
        Ok(Self { path })
    }

    /// Path of the guarded file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "Removed scratch file"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %self.path.display(), error = %e, "Failed to remove scratch file"),
        }
    }
}
