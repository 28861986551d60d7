//! HTTP routes
//!
//! The chat endpoint relays the widget's conversation to the completion
//! gateway and streams the reply back as plain text chunks. Errors
//! before the first byte map to a 500; a failure mid-stream terminates
//! the body.

use crate::state::AppState;
use axum::{
    Json, Router,
    body::{Body, Bytes},
    extract::State,
    http::{StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
    routing::{get, post},
};
use borderpass_application::{AssistInput, StreamHandle};
use borderpass_domain::{Message, Question, ResponseStore, StreamEvent};
use serde::Deserialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::error;

/// Inbound chat payload, matching the widget's camelCase JSON.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    pub current_question: Question,
    #[serde(default)]
    pub responses: ResponseStore,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/api/catalog", get(catalog))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn catalog(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.questions().to_vec())
}

async fn chat(State(state): State<AppState>, Json(payload): Json<ChatRequest>) -> impl IntoResponse {
    let input = AssistInput {
        messages: payload.messages,
        current_question: payload.current_question,
        responses: payload.responses,
    };

    match state.assist.execute(input).await {
        Ok(handle) => (
            [(CONTENT_TYPE, "text/plain; charset=utf-8")],
            Body::from_stream(stream_text(handle)),
        )
            .into_response(),
        Err(e) => {
            error!("Chat request failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error processing chat request",
            )
                .into_response()
        }
    }
}

/// Turn the gateway's event stream into a byte stream for the response
/// body. An error event aborts the body so the client sees a truncated
/// response rather than silence.
fn stream_text(handle: StreamHandle) -> impl futures::Stream<Item = Result<Bytes, std::io::Error>> {
    futures::stream::unfold(handle.receiver, |mut receiver| async move {
        match receiver.recv().await {
            Some(StreamEvent::Delta(text)) => Some((Ok(Bytes::from(text)), receiver)),
            Some(StreamEvent::Completed(_)) | None => None,
            Some(StreamEvent::Error(e)) => {
                error!("Completion stream failed mid-response: {e}");
                Some((Err(std::io::Error::other(e)), receiver))
            }
        }
    })
}
