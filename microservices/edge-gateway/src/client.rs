//! Edge-to-dialog HTTP client
//!
//! Outbound calls carry the authenticated caller's identity in the trusted
//! header and are bounded by a fixed timeout, so an unresponsive dialog
//! service degrades the edge request to a fast 503 instead of a hang. No
//! retries and no circuit-breaker state; transport failures map to
//! `DialogError::Unavailable` and everything else passes through verbatim.

use axum::body::Bytes;
use axum::http::StatusCode;
use std::time::Duration;
use tracing::warn;

use socialite_core::{DialogError, Result, UserId, USER_ID_HEADER};

/// Upstream status and body, relayed to the gateway's caller unchanged so
/// the dialog service stays the source of truth for business-level outcomes.
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

#[derive(Clone)]
pub struct DialogClient {
    http: reqwest::Client,
    base_url: String,
}

impl DialogClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DialogError::Config(format!("HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// `POST /dialog/{recipient}/send`, forwarding the caller's request body
    /// byte-for-byte.
    pub async fn send_message(
        &self,
        caller: &UserId,
        recipient: &UserId,
        body: Bytes,
    ) -> Result<UpstreamResponse> {
        let url = format!(
            "{}/dialog/{}/send",
            self.base_url,
            urlencoding::encode(recipient.as_str())
        );

        let response = self
            .http
            .post(url)
            .header(USER_ID_HEADER, caller.as_str())
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| self.transport_error("send", e))?;

        Self::relay(response).await
    }

    /// `GET /dialog/{other_party}/list`.
    pub async fn list_dialog(&self, caller: &UserId, other_party: &UserId) -> Result<UpstreamResponse> {
        let url = format!(
            "{}/dialog/{}/list",
            self.base_url,
            urlencoding::encode(other_party.as_str())
        );

        let response = self
            .http
            .get(url)
            .header(USER_ID_HEADER, caller.as_str())
            .send()
            .await
            .map_err(|e| self.transport_error("list", e))?;

        Self::relay(response).await
    }

    /// `GET /dialogs` for every conversation the caller participates in.
    pub async fn list_all_dialogs(&self, caller: &UserId) -> Result<UpstreamResponse> {
        let url = format!("{}/dialogs", self.base_url);

        let response = self
            .http
            .get(url)
            .header(USER_ID_HEADER, caller.as_str())
            .send()
            .await
            .map_err(|e| self.transport_error("list_all", e))?;

        Self::relay(response).await
    }

    /// Dependency probe for the gateway's readiness endpoint.
    pub async fn health(&self) -> Option<u64> {
        let started = std::time::Instant::now();
        let url = format!("{}/health", self.base_url);

        match self.http.get(url).send().await {
            Ok(response) if response.status().is_success() => {
                Some(started.elapsed().as_millis() as u64)
            }
            _ => None,
        }
    }

    async fn relay(response: reqwest::Response) -> Result<UpstreamResponse> {
        let status = StatusCode::from_u16(response.status().as_u16())
            .map_err(|e| DialogError::Internal(format!("Upstream status: {e}")))?;
        let body = response
            .bytes()
            .await
            .map_err(|e| DialogError::Internal(format!("Failed to read dialog service response: {e}")))?;

        Ok(UpstreamResponse { status, body })
    }

    fn transport_error(&self, operation: &str, err: reqwest::Error) -> DialogError {
        warn!(operation, error = %err, "Failed to call dialog service");
        DialogError::Unavailable
    }
}
