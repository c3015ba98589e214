//! Turning tool-call arguments into domain values.

use muybridge_core::{ChapterSpec, GenerateResponse, Outline, SceneSource, ToolCall};
use muybridge_error::{GenerationError, GenerationErrorKind, MuybridgeResult};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct OutlineArgs {
    title: String,
    chapters: Vec<ChapterArgs>,
}

#[derive(Debug, Deserialize)]
struct ChapterArgs {
    title: String,
    explanation: String,
}

#[derive(Debug, Deserialize)]
struct SceneArgs {
    code: String,
    #[serde(default)]
    scene_name: Option<String>,
}

/// The call to `expected` in `response`.
///
/// # Errors
///
/// `MissingToolCall` when the response has no tool calls, `UnexpectedTool`
/// when none of them is named `expected`.
pub fn expect_tool_call<'a>(
    response: &'a GenerateResponse,
    expected: &str,
) -> MuybridgeResult<&'a ToolCall> {
    let mut calls = response.tool_calls().peekable();
    let first_name = match calls.peek() {
        Some(call) => call.name.clone(),
        None => {
            return Err(GenerationError::new(GenerationErrorKind::MissingToolCall(
                expected.to_string(),
            ))
            .into());
        }
    };

    calls.find(|call| call.name == expected).ok_or_else(|| {
        GenerationError::new(GenerationErrorKind::UnexpectedTool {
            expected: expected.to_string(),
            actual: first_name,
        })
        .into()
    })
}

/// Parse outline arguments, keeping at most `max_chapters` chapters.
///
/// # Errors
///
/// `MalformedArguments` when the arguments do not match the schema,
/// `EmptyOutline` when no chapters were returned.
///
/// # Examples
///
/// ```
/// use muybridge_agents::parse_outline;
/// use serde_json::json;
///
/// let args = json!({
///     "title": "Derivatives",
///     "chapters": [
///         {"title": "Slopes", "explanation": "Secant lines"},
///         {"title": "Limits", "explanation": "h to zero"}
///     ]
/// });
/// let outline = parse_outline(&args, 1).unwrap();
/// assert_eq!(outline.chapters().len(), 1);
/// ```
pub fn parse_outline(arguments: &serde_json::Value, max_chapters: usize) -> MuybridgeResult<Outline> {
    let args: OutlineArgs = serde_json::from_value(arguments.clone())
        .map_err(|e| malformed(crate::OUTLINE_TOOL, e))?;

    if args.chapters.is_empty() {
        return Err(GenerationError::new(GenerationErrorKind::EmptyOutline(args.title)).into());
    }

    let chapters = args
        .chapters
        .into_iter()
        .map(|chapter| ChapterSpec::new(chapter.title, chapter.explanation))
        .collect();

    let mut outline = Outline::new(args.title, chapters);
    outline.truncate(max_chapters);
    Ok(outline)
}

/// Parse `{code, scene_name}` arguments of `tool`.
///
/// # Errors
///
/// `MalformedArguments` when the arguments do not match the schema,
/// `EmptyCode` when `code` is blank.
pub fn parse_scene(tool: &str, arguments: &serde_json::Value) -> MuybridgeResult<SceneSource> {
    let args: SceneArgs =
        serde_json::from_value(arguments.clone()).map_err(|e| malformed(tool, e))?;

    if args.code.trim().is_empty() {
        return Err(GenerationError::new(GenerationErrorKind::EmptyCode(tool.to_string())).into());
    }

    Ok(SceneSource::new(args.code, args.scene_name))
}

#[track_caller]
fn malformed(tool: &str, e: serde_json::Error) -> GenerationError {
    GenerationError::new(GenerationErrorKind::MalformedArguments {
        tool: tool.to_string(),
        message: e.to_string(),
    })
}
