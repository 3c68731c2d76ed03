//! Edge gateway configuration

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct EdgeConfig {
    pub http_bind: String,
    pub dialog_service_url: String,
    pub dialog_timeout: Duration,
}

impl EdgeConfig {
    pub fn from_env() -> Self {
        let timeout_secs = std::env::var("DIALOG_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10);

        Self {
            http_bind: std::env::var("HTTP_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            dialog_service_url: std::env::var("DIALOG_SERVICE_URL")
                .unwrap_or_else(|_| "http://dialog-service:8081".to_string()),
            dialog_timeout: Duration::from_secs(timeout_secs),
        }
    }
}
