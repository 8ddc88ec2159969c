//! Backend entry-point: reads settings and serves the CashFlowPro API.

mod server;

use actix_web::web;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use cashflow_backend::inbound::http::health::HealthState;
use server::{create_server, server_settings_from_process};

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

    let settings = server_settings_from_process().map_err(std::io::Error::other)?;
    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, &settings)?.await
}
