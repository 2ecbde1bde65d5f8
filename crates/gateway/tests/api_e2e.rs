//! End-to-end gateway tests over an in-memory store and a scripted provider.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use edgepersona_core::error::ProviderError;
use edgepersona_core::{
    ChatMessage, CompletionProvider, CompletionRequest, CompletionResponse,
};
use edgepersona_engine::PersonaService;
use edgepersona_gateway::build_router;
use edgepersona_store::InMemoryStore;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

struct ScriptedProvider {
    reply: Option<&'static str>,
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(
        &self,
        _request: CompletionRequest,
    ) -> Result<CompletionResponse, ProviderError> {
        match self.reply {
            Some(text) => Ok(CompletionResponse {
                message: ChatMessage::assistant(text),
                model: "scripted-model".into(),
                usage: None,
            }),
            None => Err(ProviderError::ApiError {
                status_code: 503,
                message: "upstream unavailable".into(),
            }),
        }
    }
}

fn test_app(reply: Option<&'static str>) -> (Router, Arc<PersonaService>) {
    let service = Arc::new(PersonaService::new(
        Arc::new(InMemoryStore::new()),
        Arc::new(ScriptedProvider { reply }),
        "deepseek-v3",
    ));
    (build_router(service.clone()), service)
}

fn profile_json(user_id: &str) -> Value {
    json!({
        "id": user_id,
        "name": "My Digital Self",
        "coreIdentities": ["founder"],
        "domainExpertise": ["storage engines"],
        "lifeFocus": "Building and expanding",
        "traits": {
            "planningVsSpontaneity": 0.2,
            "rationalityVsEmotion": 0.5,
            "bigPictureVsDetail": 0.5,
            "independenceVsCollaboration": 0.5,
            "riskTaking": 0.5
        },
        "values": {
            "priority": ["Quality"],
            "integrity": "Never, integrity is non-negotiable",
            "trustedSources": ["Data and reports"],
            "admiredTraits": ["candor"]
        },
        "emotional": {
            "stressResponse": "Analyze calmly and look for solutions",
            "achievementDriver": ["Overcoming hard challenges"],
            "preferredTone": "Rational analyst"
        },
        "communication": {
            "verbalTicks": ["to be fair"],
            "sampleAnalysis": "A lever, not a mind.",
            "metaphors": ["Machines and architecture"]
        },
        "knowledge": {
            "influences": "The Mythical Man-Month",
            "futureConcerns": ["AI", "energy"]
        },
        "createdAt": 1_700_000_000_000i64
    })
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, _) = test_app(Some("hello"));
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn persona_save_then_fetch_roundtrips() {
    let (app, _) = test_app(Some("hello"));

    let response = app
        .clone()
        .oneshot(post_json("/api/persona", profile_json("u1")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/persona?userId=u1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, profile_json("u1"));
}

#[tokio::test]
async fn persona_fetch_requires_user_id() {
    let (app, _) = test_app(Some("hello"));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/persona")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn unknown_persona_is_404() {
    let (app, _) = test_app(Some("hello"));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/persona?userId=ghost")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn chat_turn_replies_and_persists_history() {
    let (app, service) = test_app(Some("hello"));

    app.clone()
        .oneshot(post_json("/api/persona", profile_json("u1")))
        .await
        .unwrap();

    let response = app
        .oneshot(post_json("/api/chat", json!({"userId": "u1", "message": "hi"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["role"], "assistant");
    assert_eq!(body["content"], "hello");
    assert!(body["timestamp"].is_number());

    let history = service.history("u1").await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].content, "hi");
    assert_eq!(history[1].content, "hello");
}

#[tokio::test]
async fn chat_without_persona_is_400() {
    let (app, _) = test_app(Some("hello"));
    let response = app
        .oneshot(post_json("/api/chat", json!({"userId": "ghost", "message": "hi"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("not initialized"));
}

#[tokio::test]
async fn upstream_failure_is_500_with_error_body() {
    let (app, service) = test_app(None);

    app.clone()
        .oneshot(post_json("/api/persona", profile_json("u1")))
        .await
        .unwrap();

    let response = app
        .oneshot(post_json("/api/chat", json!({"userId": "u1", "message": "hi"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_json(response).await["error"].is_string());

    // Failed turns persist nothing
    assert!(service.history("u1").await.unwrap().is_empty());
}

#[tokio::test]
async fn event_logging_succeeds() {
    let (app, service) = test_app(Some("hello"));

    app.clone()
        .oneshot(post_json("/api/persona", profile_json("u1")))
        .await
        .unwrap();

    let response = app
        .oneshot(post_json(
            "/api/event",
            json!({
                "userId": "u1",
                "event": {
                    "date": "2026-08-20",
                    "content": "Shipped the launch",
                    "mood": "proud",
                    "weight": 5
                }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);

    let events = service.events("u1").await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].content, "Shipped the launch");
}

#[tokio::test]
async fn reset_wipes_the_persona() {
    let (app, _) = test_app(Some("hello"));

    app.clone()
        .oneshot(post_json("/api/persona", profile_json("u1")))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(post_json("/api/reset", json!({"userId": "u1"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/persona?userId=u1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
