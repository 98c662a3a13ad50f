//! Backend entry-point: wires REST endpoints and tracing.

use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::state::HttpState;
use backend::server::{self, ServerConfig};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::parse();
    server::run(config, HttpState::fixture()).await
}
