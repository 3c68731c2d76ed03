//! REST handlers for the dialog service
//!
//! Authorization precondition: every dialog endpoint requires the caller's
//! identity via the `CallerIdentity` extractor, which rejects with 401
//! before any business logic. `/health` is explicitly exempt.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use std::collections::HashMap;
use tracing::info;

use socialite_core::{
    CallerIdentity, DialogError, DialogMessage, HealthResponse, SendAck, SendMessageRequest, UserId,
};

use super::AppState;
use crate::store::dialog_key;

/// `POST /dialog/{user_id}/send`
///
/// Sender comes from the identity header, recipient from the path. The
/// message timestamp is assigned by the store at append time; clients never
/// supply one.
pub async fn send_message(
    State(state): State<AppState>,
    CallerIdentity(sender): CallerIdentity,
    Path(recipient): Path<UserId>,
    body: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Result<Json<SendAck>, DialogError> {
    let Json(req) =
        body.map_err(|_| DialogError::Validation("Invalid request data".to_string()))?;

    if req.text.is_empty() {
        return Err(DialogError::Validation("Invalid request data".to_string()));
    }

    if sender == recipient {
        return Err(DialogError::Validation(
            "Cannot send message to yourself".to_string(),
        ));
    }

    let key = dialog_key(&sender, &recipient);
    state.store.append(key, &sender, &recipient, req.text.clone());

    info!(from = %sender, to = %recipient, text = %req.text, "Message sent");
    Ok(Json(SendAck::sent()))
}

/// `GET /dialog/{user_id}/list`
///
/// Full ordered history of the dialog between the caller and the other
/// party. Empty array for a dialog that has never existed; no pagination.
pub async fn get_dialog(
    State(state): State<AppState>,
    CallerIdentity(requester): CallerIdentity,
    Path(other_party): Path<UserId>,
) -> Json<Vec<DialogMessage>> {
    let key = dialog_key(&requester, &other_party);
    let messages = state.store.list(&key);

    info!(
        count = messages.len(),
        requester = %requester,
        other_party = %other_party,
        "Retrieved dialog"
    );
    Json(messages)
}

/// `GET /dialogs`
///
/// Every dialog the caller participates in, keyed by conversation key.
pub async fn get_user_dialogs(
    State(state): State<AppState>,
    CallerIdentity(requester): CallerIdentity,
) -> Json<HashMap<String, Vec<DialogMessage>>> {
    Json(state.store.list_for_user(&requester))
}

/// `GET /health`
///
/// Liveness plus store counters. Never fails and needs no identity header.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "dialog-service".to_string(),
        stats: state.store.stats(),
    })
}
