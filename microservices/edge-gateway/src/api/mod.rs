//! API module - REST routes for the edge gateway

pub mod rest;

use axum::{
    routing::{get, post},
    Router,
};

use crate::client::DialogClient;

#[derive(Clone)]
pub struct AppState {
    pub dialog_client: DialogClient,
}

pub fn create_router(dialog_client: DialogClient) -> Router {
    let state = AppState { dialog_client };

    Router::new()
        // Health endpoints
        .route("/health", get(rest::health))
        .route("/ready", get(rest::ready))
        // Dialog proxy endpoints
        .route("/dialog/{user_id}/send", post(rest::send_message))
        .route("/dialog/{user_id}/list", get(rest::get_dialog))
        .route("/dialogs", get(rest::get_user_dialogs))
        .with_state(state)
}
