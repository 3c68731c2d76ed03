//! Dialog service configuration

#[derive(Debug, Clone)]
pub struct DialogConfig {
    pub http_bind: String,
}

impl DialogConfig {
    pub fn from_env() -> Self {
        // PORT keeps parity with the deployed service; HTTP_BIND wins if set.
        let port = std::env::var("PORT").unwrap_or_else(|_| "8081".to_string());
        Self {
            http_bind: std::env::var("HTTP_BIND").unwrap_or_else(|_| format!("0.0.0.0:{port}")),
        }
    }
}
