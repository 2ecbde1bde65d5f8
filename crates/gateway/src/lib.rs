//! HTTP API gateway for EdgePersona.
//!
//! Exposes the persona, chat, event, and reset endpoints plus a health
//! check. Every failure is structured JSON with an `error` field so the
//! front-end can render a consistent fallback message.
//!
//! Built on Axum.

use axum::extract::{DefaultBodyLimit, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use edgepersona_core::{ChatMessage, Error, NewLifeEvent, PersonaProfile};
use edgepersona_engine::PersonaService;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

type SharedService = Arc<PersonaService>;

/// Build the Axum router over a persona service.
pub fn build_router(service: SharedService) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/persona",
            get(get_persona_handler).post(save_persona_handler),
        )
        .route("/api/chat", post(chat_handler))
        .route("/api/event", post(event_handler))
        .route("/api/reset", post(reset_handler))
        .layer(DefaultBodyLimit::max(1024 * 1024)) // 1 MB body limit
        .layer(CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(service)
}

/// Start the gateway HTTP server.
///
/// Builds the store and provider from config (failing closed on a missing
/// API key), binds, and serves until shutdown.
pub async fn start(
    config: edgepersona_config::AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);

    let store = edgepersona_store::build_from_config(&config);
    let provider = edgepersona_providers::build_from_config(&config)?;
    let service = Arc::new(PersonaService::new(
        store,
        provider,
        config.provider.model.clone(),
    ));

    let app = build_router(service);

    info!(addr = %addr, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Error mapping ---

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, err: &Error) -> ApiError {
    if status.is_server_error() {
        error!(error = %err, "Request failed");
    }
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

/// Default status mapping. The chat route overrides not-found to 400 so the
/// front-end can branch to onboarding on a missing persona.
fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::InvalidInput { .. } => StatusCode::BAD_REQUEST,
        Error::ProfileNotFound { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// --- Handlers ---

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Deserialize)]
struct PersonaQuery {
    #[serde(rename = "userId")]
    user_id: Option<String>,
}

async fn get_persona_handler(
    State(service): State<SharedService>,
    Query(query): Query<PersonaQuery>,
) -> Result<Json<PersonaProfile>, ApiError> {
    let user_id = query.user_id.unwrap_or_default();
    if user_id.is_empty() {
        let err = Error::InvalidInput {
            message: "Missing userId".into(),
        };
        return Err(api_error(StatusCode::BAD_REQUEST, &err));
    }

    service
        .get_profile(&user_id)
        .await
        .map(Json)
        .map_err(|e| api_error(status_for(&e), &e))
}

#[derive(Serialize)]
struct SuccessResponse {
    success: bool,
}

async fn save_persona_handler(
    State(service): State<SharedService>,
    Json(profile): Json<PersonaProfile>,
) -> Result<Json<SuccessResponse>, ApiError> {
    service
        .save_profile(profile)
        .await
        .map(|()| Json(SuccessResponse { success: true }))
        .map_err(|e| api_error(status_for(&e), &e))
}

#[derive(Deserialize)]
struct ChatRequest {
    #[serde(rename = "userId")]
    user_id: String,
    message: String,
}

async fn chat_handler(
    State(service): State<SharedService>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatMessage>, ApiError> {
    service
        .chat(&request.user_id, &request.message)
        .await
        .map(Json)
        .map_err(|e| match e {
            // An uninitialized persona is a caller problem here, not a 404:
            // the front-end redirects to onboarding.
            Error::ProfileNotFound { .. } => api_error(StatusCode::BAD_REQUEST, &e),
            _ => api_error(status_for(&e), &e),
        })
}

#[derive(Deserialize)]
struct EventRequest {
    #[serde(rename = "userId")]
    user_id: String,
    event: NewLifeEvent,
}

async fn event_handler(
    State(service): State<SharedService>,
    Json(request): Json<EventRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    service
        .log_event(&request.user_id, request.event)
        .await
        .map(|_| Json(SuccessResponse { success: true }))
        .map_err(|e| api_error(status_for(&e), &e))
}

#[derive(Deserialize)]
struct ResetRequest {
    #[serde(rename = "userId")]
    user_id: String,
}

async fn reset_handler(
    State(service): State<SharedService>,
    Json(request): Json<ResetRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    service
        .reset(&request.user_id)
        .await
        .map(|()| Json(SuccessResponse { success: true }))
        .map_err(|e| api_error(status_for(&e), &e))
}
