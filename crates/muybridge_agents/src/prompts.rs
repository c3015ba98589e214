//! System prompts and user payloads for the three agents.

/// System prompt for the scene agent.
pub const SCENE_SYSTEM_PROMPT: &str = "You are a Manim code generator. Your job is to create Manim code for a single chapter of a video, given a detailed explanation of the chapter's content and how it should be visualized.
The code should be complete and runnable. Include all necessary imports. The code must define exactly one Scene subclass, and you must report that class name in the scene_name field.
Add comments to explain the code. Do not include any comments that are not valid Python comments. Ensure the code is runnable.";

/// System prompt for the fixer agent.
pub const FIXER_SYSTEM_PROMPT: &str = "You are a Manim code debugging expert. You will receive Manim code that failed to execute and the error message.
Your task is to analyze the code and the error, identify the issue, and provide corrected, runnable Manim code.
Ensure the corrected code addresses the error and still aims to achieve the visualization described in the original code.
Include all necessary imports and ensure the code defines exactly one Scene subclass; report its name in the scene_name field.
Add comments to explain the changes you made. Do not include any comments that are not valid Python comments. Ensure the code is runnable.";

/// System prompt for the outline agent, stating the chapter cap.
///
/// # Examples
///
/// ```
/// use muybridge_agents::outline_system_prompt;
///
/// assert!(outline_system_prompt(3).contains("maximum 3"));
/// ```
pub fn outline_system_prompt(max_chapters: usize) -> String {
    format!(
        "You are a video script writer. Your job is to create a clear and concise outline for an educational video explaining a concept.
The video should have a title and a list of chapters (maximum {}). Each chapter should have a title and a detailed explanation.
The explanation should be very specific about how the concept should be visualized using Manim. Include detailed instructions
for animations, shapes, positions, colors, and timing. Use LaTeX for mathematical formulas. Specify scene transitions.
Do not include code, only explanations.",
        max_chapters
    )
}

/// User payload asking for an outline.
pub fn outline_payload(concept: &str) -> String {
    format!(
        "Generate a video outline for the following concept: {}",
        concept.trim()
    )
}

/// User payload asking for one chapter's scene.
pub fn chapter_payload(chapter_title: &str, explanation: &str) -> String {
    format!(
        "Generate Manim code for the following chapter.\n\nChapter Title: {}\n\nExplanation:\n{}",
        chapter_title, explanation
    )
}

/// User payload asking for a repair.
///
/// The error text and the failing code are kept in separate sections.
///
/// # Examples
///
/// ```
/// use muybridge_agents::fix_payload;
///
/// let payload = fix_payload("NameError: Circl", "class A(Scene): ...");
/// let error_at = payload.find("Error:\nNameError").unwrap();
/// let code_at = payload.find("Current Code:\nclass A").unwrap();
/// assert!(error_at < code_at);
/// ```
pub fn fix_payload(error_text: &str, current_code: &str) -> String {
    format!(
        "Please fix the following Manim code that resulted in an error.\n\nError:\n{}\n\nCurrent Code:\n{}",
        error_text, current_code
    )
}
