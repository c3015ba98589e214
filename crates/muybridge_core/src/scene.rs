//! Generated scene source.

use derive_getters::Getters;
use muybridge_error::{MuybridgeResult, RenderError, RenderErrorKind};
use serde::{Deserialize, Serialize};

/// Matches `class Name(...Scene):` where the base list mentions a scene type.
const SCENE_CLASS_PATTERN: &str =
    r"(?m)^\s*class\s+([A-Za-z_][A-Za-z0-9_]*)\s*\(\s*[^)]*Scene[^)]*\)\s*:";

/// Renderable scene source returned by the code producer or fixer.
///
/// The producer is asked to name the scene class explicitly; when it does not,
/// the renderer falls back to reading the class declaration from `code`.
///
/// # Examples
///
/// ```
/// use muybridge_core::SceneSource;
///
/// let source = SceneSource::new("class Intro(Scene):\n    pass", Some("Intro".to_string()));
/// assert_eq!(source.scene_name().as_deref(), Some("Intro"));
///
/// let unnamed = SceneSource::from_code("class Intro(Scene):\n    pass");
/// assert!(unnamed.scene_name().is_none());
/// assert_eq!(unnamed.entry_name().unwrap(), "Intro");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct SceneSource {
    /// Complete Python source for one scene
    code: String,
    /// Declared scene class name
    #[serde(default)]
    scene_name: Option<String>,
}

impl SceneSource {
    /// Create a scene source. A blank `scene_name` is treated as absent.
    pub fn new(code: impl Into<String>, scene_name: Option<String>) -> Self {
        let scene_name = scene_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());
        Self {
            code: code.into(),
            scene_name,
        }
    }

    /// Create a scene source without an explicit scene name.
    pub fn from_code(code: impl Into<String>) -> Self {
        Self::new(code, None)
    }

    /// Name of the scene class the renderer should invoke.
    ///
    /// Uses the explicit `scene_name` when it is a Python identifier,
    /// otherwise the first scene class declared in `code`. The name becomes
    /// a command argument and part of the media path, so nothing else is
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderErrorKind::SourceFormat`] error when neither yields a
    /// name.
    pub fn entry_name(&self) -> MuybridgeResult<String> {
        if let Some(name) = self.scene_name.as_deref().filter(|n| is_identifier(n)) {
            return Ok(name.to_string());
        }
        match extract_scene_name(&self.code)? {
            Some(name) => Ok(name),
            None => Err(RenderError::new(RenderErrorKind::SourceFormat(
                "no scene_name given and no `class <Name>(...Scene):` declaration found"
                    .to_string(),
            ))
            .into()),
        }
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// First scene class name declared in `code`, if any.
///
/// # Examples
///
/// ```
/// use muybridge_core::extract_scene_name;
///
/// let code = "from manim import *\n\nclass Slopes(MovingCameraScene):\n    pass\n";
/// assert_eq!(extract_scene_name(code).unwrap().as_deref(), Some("Slopes"));
/// assert_eq!(extract_scene_name("print('hi')").unwrap(), None);
/// ```
pub fn extract_scene_name(code: &str) -> MuybridgeResult<Option<String>> {
    let re = regex::Regex::new(SCENE_CLASS_PATTERN).map_err(|e| {
        RenderError::new(RenderErrorKind::SourceFormat(format!(
            "invalid scene class pattern: {}",
            e
        )))
    })?;
    Ok(re
        .captures(code)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string()))
}
