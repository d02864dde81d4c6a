use std::net::SocketAddr;

use party_core::{Driver, PartyClient, Planner};
use party_web::{HostConfig, HostError, HtmlMount, UreqTransport};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), HostError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = HostConfig::from_env()?;
    info!(endpoint = %config.api.endpoint(), "loading parties");

    let planner = Planner::new(PartyClient::new(&config.api));
    let session = party_web::session(Driver::new(planner, UreqTransport::new(), HtmlMount::default()));
    party_web::start(session.clone()).await?;

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "party planner listening");
    axum::serve(listener, party_web::app(session)).await?;
    Ok(())
}
