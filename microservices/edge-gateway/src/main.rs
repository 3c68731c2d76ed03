//! Edge Gateway binary

use std::sync::Arc;
use tracing::info;

use edge_gateway::EdgeGatewayApp;
use socialite_core::{Result, ServiceRuntime};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("edge_gateway=debug".parse().unwrap()),
        )
        .json()
        .init();

    info!("Starting Edge Gateway");

    let service = Arc::new(EdgeGatewayApp::from_env()?);
    ServiceRuntime::run(service).await
}
