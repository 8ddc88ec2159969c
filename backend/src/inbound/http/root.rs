//! Public endpoints that need no account.
//!
//! ```text
//! GET /               Service banner
//! GET /api/cashflow   Static cash-flow sample
//! ```

use actix_web::web;
use serde::Serialize;

use crate::domain::sample::{SampleCashFlow, sample_cash_flow};

/// Service banner returned by `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct Banner {
    pub message: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub features: [&'static str; 4],
}

const BANNER: Banner = Banner {
    message: "CashFlowPro API is running",
    version: "1.0.0",
    status: "healthy",
    features: [
        "Cash Flow Forecasting",
        "Real-time Dashboards",
        "Financial Insights",
        "Integration Ready",
    ],
};

/// Report that the API is up.
pub async fn banner() -> web::Json<Banner> {
    web::Json(BANNER)
}

/// Serve the fixed four-month sample.
pub async fn cash_flow_sample() -> web::Json<SampleCashFlow> {
    web::Json(sample_cash_flow())
}
