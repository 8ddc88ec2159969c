//! Server construction and middleware wiring.

mod config;

pub use config::{ServerSettings, server_settings_from_process};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::info;

use cashflow_backend::domain::ports::RandomSource;
use cashflow_backend::inbound::http::health::HealthState;
use cashflow_backend::inbound::http::routes::configure;
use cashflow_backend::inbound::http::state::HttpState;
use cashflow_backend::middleware::{Cors, Trace};
use cashflow_backend::outbound::random::{EntropyRandomSource, SeededRandomSource};

use std::sync::Arc;

fn build_random_source(seed: Option<u64>) -> Arc<dyn RandomSource> {
    match seed {
        Some(seed) => {
            info!(seed, "using seeded random source");
            Arc::new(SeededRandomSource::new(seed))
        }
        None => Arc::new(EntropyRandomSource::new()),
    }
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    max_body_bytes: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Cors)
        .wrap(Trace)
        .configure(|cfg| configure(cfg, max_body_bytes))
}

/// Construct an Actix HTTP server over a fresh in-memory record store.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    settings: &ServerSettings,
) -> std::io::Result<Server> {
    let random = build_random_source(settings.rng_seed);
    let http_state = web::Data::new(HttpState::in_memory(random, Arc::new(DefaultClock)));
    let server_health_state = health_state.clone();
    let max_body_bytes = settings.max_body_bytes;

    let server = HttpServer::new(move || {
        build_app(
            server_health_state.clone(),
            http_state.clone(),
            max_body_bytes,
        )
    })
    .bind(settings.bind_addr)?
    .run();

    health_state.mark_ready();
    info!(addr = %settings.bind_addr, "CashFlowPro API listening");
    Ok(server)
}
