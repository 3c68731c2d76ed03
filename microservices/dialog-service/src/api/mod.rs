//! API module - REST routes for the dialog service

pub mod rest;

use axum::{
    routing::{get, post},
    Router,
};

use crate::store::DialogStore;

#[derive(Clone)]
pub struct AppState {
    pub store: DialogStore,
}

pub fn create_router(store: DialogStore) -> Router {
    let state = AppState { store };

    Router::new()
        // Health endpoint - no identity header required
        .route("/health", get(rest::health))
        // Dialog endpoints - identity header enforced per handler
        .route("/dialog/{user_id}/send", post(rest::send_message))
        .route("/dialog/{user_id}/list", get(rest::get_dialog))
        .route("/dialogs", get(rest::get_user_dialogs))
        .with_state(state)
}
