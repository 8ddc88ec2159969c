//! Per-user dashboard API handlers.
//!
//! ```text
//! GET  /api/dashboard/{userId}
//! POST /api/forecast               {"userId":1,"monthsAhead":6}
//! GET  /api/transactions/{userId}
//! GET  /api/insights/{userId}
//! GET  /api/health/{userId}
//! GET  /api/team/{userId}
//! ```
//!
//! Path ids that are not positive integers are treated as unknown users.

use actix_web::web;
use serde::{Deserialize, Serialize};

use crate::domain::MissingFields;
use crate::domain::Transaction;
use crate::domain::ports::{
    DashboardView, ForecastReport, ForecastRequest, HealthReport, InsightReport, TeamMember,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{RawUserId, missing_fields_error, user_id_from_path};

/// Summary, series and recent records for one user.
pub async fn dashboard(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DashboardView>> {
    let user_id = user_id_from_path(&path)?;
    let view = state.cash_flow.dashboard(user_id).await?;
    Ok(web::Json(view))
}

/// Forecast body. `monthsAhead` defaults to six.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastBody {
    pub user_id: Option<RawUserId>,
    pub months_ahead: Option<i64>,
}

/// Project the coming months for one user.
pub async fn forecast(
    state: web::Data<HttpState>,
    payload: web::Json<ForecastBody>,
) -> ApiResult<web::Json<ForecastReport>> {
    let ForecastBody {
        user_id,
        months_ahead,
    } = payload.into_inner();
    let Some(raw_user_id) = user_id.filter(RawUserId::is_present) else {
        return Err(missing_fields_error(MissingFields::among([("userId", false)])));
    };
    let request = ForecastRequest::new(raw_user_id.resolve()?, months_ahead);
    let report = state.cash_flow.forecast(request).await?;
    Ok(web::Json(report))
}

/// Transaction listing.
#[derive(Debug, Serialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
    pub total: usize,
}

/// Every stored transaction for one user, newest first.
pub async fn transactions(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<TransactionsResponse>> {
    let user_id = user_id_from_path(&path)?;
    let transactions = state.cash_flow.transactions(user_id).await?;
    Ok(web::Json(TransactionsResponse {
        total: transactions.len(),
        transactions,
    }))
}

/// Stored insights for one user.
pub async fn insights(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<InsightReport>> {
    let user_id = user_id_from_path(&path)?;
    let report = state.cash_flow.insights(user_id).await?;
    Ok(web::Json(report))
}

/// Financial health score for one user.
pub async fn health(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<HealthReport>> {
    let user_id = user_id_from_path(&path)?;
    let report = state.cash_flow.health(user_id).await?;
    Ok(web::Json(report))
}

/// Team listing.
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub team: Vec<TeamMember>,
    pub total: usize,
}

/// The fixed team shown to every account.
pub async fn team(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<TeamResponse>> {
    let user_id = user_id_from_path(&path)?;
    let team = state.cash_flow.team(user_id).await?;
    Ok(web::Json(TeamResponse {
        total: team.len(),
        team,
    }))
}

#[cfg(test)]
mod tests;
