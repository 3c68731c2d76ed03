//! Dialog Service binary

use std::sync::Arc;
use tracing::info;

use dialog_service::DialogServiceApp;
use socialite_core::{Result, ServiceRuntime};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dialog_service=debug".parse().unwrap()),
        )
        .json()
        .init();

    info!("Starting Dialog Service");

    let service = Arc::new(DialogServiceApp::from_env());
    ServiceRuntime::run(service).await
}
