//! Route table for the HTTP adapter.
//!
//! Every path is registered as a resource whose fallback is the JSON
//! not-found handler, so a known path with the wrong method reports 404 in
//! the same envelope as an unknown path.

use actix_web::{Resource, Route, web};

use crate::inbound::http::error::{json_error_handler, route_not_found};
use crate::inbound::http::{accounts, alerts, dashboard, health, reports, root};

fn endpoint(path: &str, route: Route) -> Resource {
    web::resource(path)
        .route(route)
        .default_service(web::to(route_not_found))
}

/// Register every endpoint plus the JSON body limits and the fallback.
///
/// Shared state (`HttpState`, `HealthState`) must be attached by the caller.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use cashflow_backend::inbound::http::routes::configure;
///
/// let _app = App::new().configure(|cfg| configure(cfg, 64 * 1024));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig, max_body_bytes: usize) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(max_body_bytes)
            .error_handler(json_error_handler),
    )
    .service(endpoint("/", web::get().to(root::banner)))
    .service(endpoint("/api/cashflow", web::get().to(root::cash_flow_sample)))
    .service(endpoint("/api/register", web::post().to(accounts::register)))
    .service(endpoint("/api/login", web::post().to(accounts::login)))
    .service(endpoint(
        "/api/payment/setup",
        web::post().to(accounts::setup_payment),
    ))
    .service(endpoint(
        "/api/dashboard/{user_id}",
        web::get().to(dashboard::dashboard),
    ))
    .service(endpoint("/api/forecast", web::post().to(dashboard::forecast)))
    .service(endpoint(
        "/api/transactions/{user_id}",
        web::get().to(dashboard::transactions),
    ))
    .service(endpoint(
        "/api/insights/{user_id}",
        web::get().to(dashboard::insights),
    ))
    .service(endpoint(
        "/api/health/{user_id}",
        web::get().to(dashboard::health),
    ))
    .service(endpoint("/api/team/{user_id}", web::get().to(dashboard::team)))
    .service(endpoint(
        "/api/alerts/{user_id}",
        web::get().to(alerts::list_alerts),
    ))
    .service(endpoint(
        "/api/alerts/{alert_id}/resolve",
        web::put().to(alerts::resolve_alert),
    ))
    .service(endpoint(
        "/api/reports/export",
        web::post().to(reports::export_report),
    ))
    .service(endpoint("/health/ready", web::get().to(health::ready)))
    .service(endpoint("/health/live", web::get().to(health::live)))
    .default_service(web::to(route_not_found));
}
