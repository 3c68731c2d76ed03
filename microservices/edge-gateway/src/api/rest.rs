//! REST handlers for the edge gateway
//!
//! The gateway's own auth layer (out of scope here) has already established
//! who the caller is; these handlers forward that identity to the dialog
//! service and relay whatever it answers, status and body untouched.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;

use socialite_core::{CallerIdentity, DependencyStatus, DialogError, ReadinessStatus, UserId};

use super::AppState;
use crate::client::UpstreamResponse;

/// `POST /dialog/{user_id}/send` - proxied to the dialog service with the
/// request body forwarded unmodified.
pub async fn send_message(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(recipient): Path<UserId>,
    body: Bytes,
) -> Result<Response, DialogError> {
    let upstream = state
        .dialog_client
        .send_message(&caller, &recipient, body)
        .await?;
    Ok(relay(upstream))
}

/// `GET /dialog/{user_id}/list` - proxied.
pub async fn get_dialog(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(other_party): Path<UserId>,
) -> Result<Response, DialogError> {
    let upstream = state.dialog_client.list_dialog(&caller, &other_party).await?;
    Ok(relay(upstream))
}

/// `GET /dialogs` - proxied.
pub async fn get_user_dialogs(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
) -> Result<Response, DialogError> {
    let upstream = state.dialog_client.list_all_dialogs(&caller).await?;
    Ok(relay(upstream))
}

pub async fn health() -> &'static str {
    "OK"
}

/// Readiness includes the dialog-service dependency, probed live.
pub async fn ready(State(state): State<AppState>) -> Json<ReadinessStatus> {
    let latency_ms = state.dialog_client.health().await;

    Json(ReadinessStatus {
        ready: latency_ms.is_some(),
        dependencies: vec![DependencyStatus {
            name: "dialog-service".to_string(),
            available: latency_ms.is_some(),
            latency_ms,
        }],
    })
}

fn relay(upstream: UpstreamResponse) -> Response {
    (
        upstream.status,
        [(header::CONTENT_TYPE, "application/json")],
        upstream.body,
    )
        .into_response()
}
