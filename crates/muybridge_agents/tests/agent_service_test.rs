use async_trait::async_trait;
use muybridge_agents::{AgentConfig, AgentService};
use muybridge_core::{GenerateRequest, GenerateResponse, Output, Role, SceneSource, ToolCall};
use muybridge_error::{GenerationErrorKind, HttpError, MuybridgeErrorKind, MuybridgeResult};
use muybridge_interface::{GenerativeService, MuybridgeDriver, ToolDefinition, ToolUse};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

/// A single scripted reply.
#[derive(Debug, Clone)]
enum MockReply {
    Tool { name: String, arguments: Value },
    Text(String),
    Failure(u16),
}

/// Driver that replays scripted replies and records what it was asked.
#[derive(Clone)]
struct ScriptedDriver {
    replies: Arc<Mutex<Vec<MockReply>>>,
    seen: Arc<Mutex<Vec<(GenerateRequest, Vec<ToolDefinition>)>>>,
}

impl ScriptedDriver {
    fn new(replies: Vec<MockReply>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies)),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn tool(name: &str, arguments: Value) -> MockReply {
        MockReply::Tool {
            name: name.to_string(),
            arguments,
        }
    }

    fn seen(&self) -> Vec<(GenerateRequest, Vec<ToolDefinition>)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl MuybridgeDriver for ScriptedDriver {
    async fn generate(&self, req: &GenerateRequest) -> MuybridgeResult<GenerateResponse> {
        self.generate_with_tools(req, &[]).await
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}

#[async_trait]
impl ToolUse for ScriptedDriver {
    async fn generate_with_tools(
        &self,
        req: &GenerateRequest,
        tools: &[ToolDefinition],
    ) -> MuybridgeResult<GenerateResponse> {
        self.seen.lock().unwrap().push((req.clone(), tools.to_vec()));
        let reply = self.replies.lock().unwrap().remove(0);
        match reply {
            MockReply::Tool { name, arguments } => Ok(GenerateResponse {
                outputs: vec![Output::ToolCalls(vec![ToolCall {
                    id: "call_0".to_string(),
                    name,
                    arguments,
                }])],
            }),
            MockReply::Text(text) => Ok(GenerateResponse {
                outputs: vec![Output::Text(text)],
            }),
            MockReply::Failure(status) => {
                Err(HttpError::with_status(status, "upstream unavailable").into())
            }
        }
    }
}

fn generation_kind(err: &muybridge_error::MuybridgeError) -> GenerationErrorKind {
    match err.kind() {
        MuybridgeErrorKind::Generation(e) => e.kind.clone(),
        other => panic!("expected generation error, got {:?}", other),
    }
}

fn four_chapter_outline() -> Value {
    json!({
        "title": "Derivatives",
        "chapters": [
            {"title": "Slopes", "explanation": "Draw secant lines on a parabola"},
            {"title": "Limits", "explanation": "Shrink h towards zero"},
            {"title": "Rules", "explanation": "Show the power rule"},
            {"title": "Extra", "explanation": "Should be dropped"}
        ]
    })
}

#[tokio::test]
async fn test_outline_request_forces_outline_tool() {
    let driver = ScriptedDriver::new(vec![ScriptedDriver::tool(
        "generate_video_outline",
        four_chapter_outline(),
    )]);
    let service = AgentService::new(driver.clone());

    let outline = service.produce_outline("derivatives").await.unwrap();

    assert_eq!(outline.title(), "Derivatives");
    assert_eq!(outline.chapters().len(), 3);
    assert_eq!(outline.chapters()[2].title(), "Rules");

    let seen = driver.seen();
    assert_eq!(seen.len(), 1);
    let (request, tools) = &seen[0];
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].name, "generate_video_outline");
    assert_eq!(request.messages.len(), 2);
    assert_eq!(request.messages[0].role, Role::System);
    assert!(request.messages[0].content.contains("maximum 3"));
    assert_eq!(request.messages[1].role, Role::User);
    assert!(request.messages[1].content.ends_with("derivatives"));
    assert_eq!(request.temperature, Some(0.7));
}

#[tokio::test]
async fn test_outline_cap_follows_config() {
    let driver = ScriptedDriver::new(vec![ScriptedDriver::tool(
        "generate_video_outline",
        four_chapter_outline(),
    )]);
    let config = AgentConfig::builder()
        .max_outline_chapters(1_usize)
        .build()
        .unwrap();
    let service = AgentService::with_config(driver.clone(), config);

    let outline = service.produce_outline("derivatives").await.unwrap();
    assert_eq!(outline.chapters().len(), 1);
    assert!(driver.seen()[0].0.messages[0].content.contains("maximum 1"));
}

#[tokio::test]
async fn test_text_reply_is_missing_tool_call() {
    let driver = ScriptedDriver::new(vec![MockReply::Text("Here you go".to_string())]);
    let service = AgentService::new(driver);

    let err = service.produce_outline("derivatives").await.unwrap_err();
    assert_eq!(
        generation_kind(&err),
        GenerationErrorKind::MissingToolCall("generate_video_outline".to_string())
    );
}

#[tokio::test]
async fn test_wrong_tool_is_generation_error() {
    let driver = ScriptedDriver::new(vec![ScriptedDriver::tool(
        "fix_manim_code",
        json!({"code": "class A(Scene):\n    pass"}),
    )]);
    let service = AgentService::new(driver);

    let err = service
        .produce_chapter_code("Slopes", "Draw secant lines")
        .await
        .unwrap_err();
    assert!(matches!(
        generation_kind(&err),
        GenerationErrorKind::UnexpectedTool { .. }
    ));
}

#[tokio::test]
async fn test_malformed_outline_is_generation_error() {
    let driver = ScriptedDriver::new(vec![ScriptedDriver::tool(
        "generate_video_outline",
        json!({"title": "Derivatives", "chapters": "not a list"}),
    )]);
    let service = AgentService::new(driver);

    let err = service.produce_outline("derivatives").await.unwrap_err();
    assert!(matches!(
        generation_kind(&err),
        GenerationErrorKind::MalformedArguments { .. }
    ));
}

#[tokio::test]
async fn test_empty_outline_is_generation_error() {
    let driver = ScriptedDriver::new(vec![ScriptedDriver::tool(
        "generate_video_outline",
        json!({"title": "Derivatives", "chapters": []}),
    )]);
    let service = AgentService::new(driver);

    let err = service.produce_outline("derivatives").await.unwrap_err();
    assert_eq!(
        generation_kind(&err),
        GenerationErrorKind::EmptyOutline("Derivatives".to_string())
    );
}

#[tokio::test]
async fn test_driver_failure_becomes_backend_error() {
    let driver = ScriptedDriver::new(vec![MockReply::Failure(401)]);
    let service = AgentService::new(driver);

    let err = service
        .produce_chapter_code("Slopes", "Draw secant lines")
        .await
        .unwrap_err();
    match generation_kind(&err) {
        GenerationErrorKind::Backend(message) => assert!(message.contains("401")),
        other => panic!("expected backend error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_chapter_code_carries_scene_name() {
    let driver = ScriptedDriver::new(vec![ScriptedDriver::tool(
        "generate_manim_code",
        json!({
            "code": "from manim import *\n\nclass SlopeScene(Scene):\n    pass\n",
            "scene_name": "SlopeScene"
        }),
    )]);
    let service = AgentService::new(driver.clone());

    let source = service
        .produce_chapter_code("Slopes", "Draw secant lines")
        .await
        .unwrap();
    assert_eq!(source.scene_name().as_deref(), Some("SlopeScene"));

    let seen = driver.seen();
    let (request, tools) = &seen[0];
    assert_eq!(tools[0].name, "generate_manim_code");
    assert!(request.messages[1].content.contains("Chapter Title: Slopes"));
    assert!(request.messages[1].content.contains("Draw secant lines"));
}

#[tokio::test]
async fn test_fix_request_separates_error_and_code() {
    let driver = ScriptedDriver::new(vec![ScriptedDriver::tool(
        "fix_manim_code",
        json!({"code": "class Fixed(Scene):\n    pass\n", "scene_name": "Fixed"}),
    )]);
    let service = AgentService::new(driver.clone());
    let broken = SceneSource::new("class Broken(Scene):\n    Circl()\n", Some("Broken".into()));

    let fixed = service
        .produce_fixed_code("NameError: name 'Circl' is not defined", &broken)
        .await
        .unwrap();
    assert_eq!(fixed.scene_name().as_deref(), Some("Fixed"));

    let seen = driver.seen();
    let (request, tools) = &seen[0];
    assert_eq!(tools[0].name, "fix_manim_code");
    let payload = &request.messages[1].content;
    let error_section = payload
        .find("Error:\nNameError: name 'Circl' is not defined")
        .unwrap();
    let code_section = payload.find("Current Code:\nclass Broken(Scene):").unwrap();
    assert!(error_section < code_section);
}
