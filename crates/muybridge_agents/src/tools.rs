//! Tool definitions the agents force the model to call.

use muybridge_interface::ToolDefinition;
use serde_json::json;

/// Tool name used by the outline agent.
pub const OUTLINE_TOOL: &str = "generate_video_outline";

/// Tool name used by the scene agent.
pub const SCENE_TOOL: &str = "generate_manim_code";

/// Tool name used by the fixer agent.
pub const FIX_TOOL: &str = "fix_manim_code";

/// Outline tool: `{title, chapters: [{title, explanation}]}`.
pub fn outline_tool() -> ToolDefinition {
    ToolDefinition::new(
        OUTLINE_TOOL,
        "Generate a video outline with title and chapters",
        json!({
            "type": "object",
            "properties": {
                "title": {
                    "type": "string",
                    "description": "Title of the entire video"
                },
                "chapters": {
                    "type": "array",
                    "description": "List of chapters for the video",
                    "items": {
                        "type": "object",
                        "properties": {
                            "title": {
                                "type": "string",
                                "description": "Title of the chapter"
                            },
                            "explanation": {
                                "type": "string",
                                "description": "Detailed explanation of the chapter content"
                            }
                        },
                        "required": ["title", "explanation"]
                    }
                }
            },
            "required": ["title", "chapters"]
        }),
    )
}

/// Scene tool: `{code, scene_name}`.
pub fn scene_tool() -> ToolDefinition {
    code_tool(
        SCENE_TOOL,
        "Generate Manim code for a chapter",
        "Complete Manim code for the chapter",
    )
}

/// Fixer tool: `{code, scene_name}`.
pub fn fixer_tool() -> ToolDefinition {
    code_tool(
        FIX_TOOL,
        "Fix Manim code that resulted in an error",
        "Corrected Manim code that fixes the error",
    )
}

fn code_tool(name: &str, description: &str, code_description: &str) -> ToolDefinition {
    ToolDefinition::new(
        name,
        description,
        json!({
            "type": "object",
            "properties": {
                "code": {
                    "type": "string",
                    "description": code_description
                },
                "scene_name": {
                    "type": "string",
                    "description": "Name of the Scene subclass defined in the code"
                }
            },
            "required": ["code", "scene_name"]
        }),
    )
}
