//! HTTP request handlers

use super::assets::{serve_index, serve_static};
use super::types::{ChatRequest, HealthFeatures, HealthResponse};
use super::AppState;
use crate::relay::Envelope;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Root serves the chat widget
        .route("/", get(serve_index))
        // Static assets (embedded or filesystem fallback)
        .route("/assets/*path", get(serve_static))
        // Chat relay
        .route("/api/chat", post(chat))
        // Health check
        .route("/health", get(health))
        .with_state(state)
}

/// Relay one chat message.
///
/// A malformed body or an empty message is rejected with 400 and the generic
/// error envelope; details stay in the server log. Everything else resolves
/// to a best-effort 200.
async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let message = match payload {
        Ok(Json(req)) => req.message,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "malformed chat request body");
            return (StatusCode::BAD_REQUEST, Json(Envelope::error())).into_response();
        }
    };

    if message.trim().is_empty() {
        tracing::warn!("empty chat message rejected");
        return (StatusCode::BAD_REQUEST, Json(Envelope::error())).into_response();
    }

    tracing::info!(message = %message.trim(), "chat message received");

    let envelope = state.relay.respond(&message).await;
    Json(envelope).into_response()
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "✅ ONLINE",
        name: "Vexus Foundation",
        version: env!("CARGO_PKG_VERSION"),
        author: "Victorino Sérgio",
        timestamp: chrono::Utc::now().to_rfc3339(),
        features: HealthFeatures {
            chat: true,
            fallback: true,
            deepseek: state.relay.remote_configured(),
        },
    })
}
