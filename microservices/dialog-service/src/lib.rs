//! Dialog Service
//!
//! Owns all direct-message conversation state for the platform and exposes
//! it over a small HTTP API. Callers are identified by the trusted
//! `X-User-ID` header the edge gateway attaches; this service performs no
//! further authentication. Storage is in-memory for the process lifetime.

pub mod api;
pub mod config;
pub mod store;

use tracing::info;

use socialite_core::{Result, SocialiteService};

pub use api::create_router;
pub use config::DialogConfig;
pub use store::{dialog_key, DialogKey, DialogStore};

pub struct DialogServiceApp {
    config: DialogConfig,
    store: DialogStore,
}

impl DialogServiceApp {
    pub fn new(config: DialogConfig) -> Self {
        Self {
            config,
            store: DialogStore::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(DialogConfig::from_env())
    }
}

#[async_trait::async_trait]
impl SocialiteService for DialogServiceApp {
    fn service_id(&self) -> &'static str {
        "dialog-service"
    }

    async fn start(&self) -> Result<()> {
        info!(bind = %self.config.http_bind, "Starting dialog service");

        let app = api::create_router(self.store.clone());
        let listener = tokio::net::TcpListener::bind(&self.config.http_bind).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    async fn shutdown(&self) -> Result<()> {
        let stats = self.store.stats();
        info!(
            total_dialogs = stats.total_dialogs,
            total_messages = stats.total_messages,
            "Shutting down dialog service"
        );
        Ok(())
    }
}
