//! Dialog wire protocol types
//!
//! Shared by the dialog service (producer) and the edge gateway (consumer) so
//! both sides agree on the JSON contract. Timestamps serialize as RFC 3339.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::UserId;

/// A single direct message. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogMessage {
    pub from: UserId,
    pub to: UserId,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Body of `POST /dialog/{user_id}/send`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub text: String,
}

/// Acknowledgement for a successful send. Messages are not individually
/// addressable, so there is no ID to return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendAck {
    pub message: String,
}

impl SendAck {
    pub fn sent() -> Self {
        Self {
            message: "Message sent successfully".to_string(),
        }
    }
}

/// Aggregate store counters for monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub total_dialogs: usize,
    pub total_messages: usize,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub stats: StoreStats,
}
