//! Alert API handlers.
//!
//! ```text
//! GET /api/alerts/{userId}
//! PUT /api/alerts/{alertId}/resolve
//! ```

use actix_web::web;
use serde::Serialize;

use crate::domain::{Alert, AlertId, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::user_id_from_path;

/// Unresolved alert listing.
#[derive(Debug, Serialize)]
pub struct AlertsResponse {
    pub alerts: Vec<Alert>,
    pub total: usize,
}

/// Alerts a user has not resolved yet.
pub async fn list_alerts(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<AlertsResponse>> {
    let user_id = user_id_from_path(&path)?;
    let alerts = state.cash_flow.unresolved_alerts(user_id).await?;
    Ok(web::Json(AlertsResponse {
        total: alerts.len(),
        alerts,
    }))
}

/// Resolution response.
#[derive(Debug, Serialize)]
pub struct ResolveAlertResponse {
    pub message: &'static str,
    pub alert: Alert,
}

/// Mark an alert resolved; repeating the call is harmless.
pub async fn resolve_alert(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ResolveAlertResponse>> {
    let alert_id = AlertId::parse(&path).ok_or_else(|| Error::not_found("Alert not found"))?;
    let alert = state.alerts.resolve(alert_id).await?;
    Ok(web::Json(ResolveAlertResponse {
        message: "Alert resolved",
        alert,
    }))
}
