//! Edge Gateway
//!
//! Dialog-facing surface of the edge service. Authenticated callers' dialog
//! requests are translated into calls against the dialog service, with the
//! caller's identity asserted via the trusted header. The dialog service's
//! answers pass through unchanged; only transport failures are rewritten,
//! into a distinct 503 the original caller can tell apart from validation
//! errors.

pub mod api;
pub mod client;
pub mod config;

use tracing::info;

use socialite_core::{Result, SocialiteService};

pub use api::create_router;
pub use client::{DialogClient, UpstreamResponse};
pub use config::EdgeConfig;

pub struct EdgeGatewayApp {
    config: EdgeConfig,
    dialog_client: DialogClient,
}

impl EdgeGatewayApp {
    pub fn new(config: EdgeConfig) -> Result<Self> {
        let dialog_client =
            DialogClient::new(config.dialog_service_url.clone(), config.dialog_timeout)?;
        Ok(Self {
            config,
            dialog_client,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(EdgeConfig::from_env())
    }
}

#[async_trait::async_trait]
impl SocialiteService for EdgeGatewayApp {
    fn service_id(&self) -> &'static str {
        "edge-gateway"
    }

    async fn start(&self) -> Result<()> {
        info!(
            bind = %self.config.http_bind,
            dialog_service = %self.config.dialog_service_url,
            "Starting edge gateway"
        );

        let app = api::create_router(self.dialog_client.clone());
        let listener = tokio::net::TcpListener::bind(&self.config.http_bind).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    async fn shutdown(&self) -> Result<()> {
        info!("Shutting down edge gateway");
        Ok(())
    }
}
