//! Driving port for read-only dashboard queries.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

use crate::domain::aggregation::{
    DEFAULT_MONTHS_AHEAD, DashboardSummary, ForecastPoint, HealthRating, MAX_MONTHS_AHEAD,
};
use crate::domain::{Alert, Error, Insight, MonthlyRecord, Transaction, UserId, UserProfile};

/// Number of trailing months shown as recent data.
pub const RECENT_MONTHS: usize = 3;
/// Number of leading transactions shown on the dashboard.
pub const RECENT_TRANSACTIONS: usize = 5;

/// Everything the dashboard screen renders for one user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub user: UserProfile,
    pub summary: DashboardSummary,
    /// Last [`RECENT_MONTHS`] months of the series.
    pub recent_data: Vec<MonthlyRecord>,
    pub cash_flow_data: Vec<MonthlyRecord>,
    /// First [`RECENT_TRANSACTIONS`] stored transactions, newest first.
    pub recent_transactions: Vec<Transaction>,
    /// Unresolved alerts only.
    pub alerts: Vec<Alert>,
    pub insights: Vec<Insight>,
    pub last_updated: DateTime<Utc>,
}

/// Forecast parameters as received. The horizon is checked by
/// [`ForecastRequest::horizon`] once the user is known to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastRequest {
    pub user_id: UserId,
    /// Requested horizon; `None` selects [`DEFAULT_MONTHS_AHEAD`].
    pub months_ahead: Option<i64>,
}

impl ForecastRequest {
    /// Bundle a user and an unchecked horizon.
    #[must_use]
    pub const fn new(user_id: UserId, months_ahead: Option<i64>) -> Self {
        Self {
            user_id,
            months_ahead,
        }
    }

    /// Months to project.
    ///
    /// # Errors
    /// Returns an invalid-request error when the horizon falls outside
    /// `1..=MAX_MONTHS_AHEAD`.
    ///
    /// # Examples
    /// ```
    /// use cashflow_backend::domain::UserId;
    /// use cashflow_backend::domain::ports::ForecastRequest;
    ///
    /// assert_eq!(ForecastRequest::new(UserId::new(1), None).horizon().ok(), Some(6));
    /// assert!(ForecastRequest::new(UserId::new(1), Some(0)).horizon().is_err());
    /// ```
    pub fn horizon(&self) -> Result<u32, Error> {
        let requested = self
            .months_ahead
            .unwrap_or(i64::from(DEFAULT_MONTHS_AHEAD));
        u32::try_from(requested)
            .ok()
            .filter(|months| (1..=MAX_MONTHS_AHEAD).contains(months))
            .ok_or_else(|| {
                Error::invalid_request(format!(
                    "monthsAhead must be between 1 and {MAX_MONTHS_AHEAD}"
                ))
                .with_details(json!({ "field": "monthsAhead", "code": "out_of_range" }))
            })
    }
}

/// Projected months plus the overall model confidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastReport {
    pub forecast: Vec<ForecastPoint>,
    pub generated_at: DateTime<Utc>,
    pub confidence: f64,
}

/// Health score for one user at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub user_id: UserId,
    pub score: i64,
    pub rating: HealthRating,
    pub calculated_at: DateTime<Utc>,
}

/// Stored insights stamped with the time they were served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightReport {
    pub insights: Vec<Insight>,
    pub generated_at: DateTime<Utc>,
}

/// Member of the fixed demo team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: u32,
    pub name: &'static str,
    pub email: &'static str,
    pub role: &'static str,
}

/// Per-user read models. Every call resolves the user first and fails with
/// not-found before doing any other work.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CashFlowQuery: Send + Sync {
    /// Summary, series and recent records.
    async fn dashboard(&self, user_id: UserId) -> Result<DashboardView, Error>;

    /// Project the coming months. An unknown user is reported before an
    /// out-of-range horizon.
    async fn forecast(&self, request: ForecastRequest) -> Result<ForecastReport, Error>;

    /// All stored transactions, newest first.
    async fn transactions(&self, user_id: UserId) -> Result<Vec<Transaction>, Error>;

    /// Stored insights.
    async fn insights(&self, user_id: UserId) -> Result<InsightReport, Error>;

    /// Alerts not yet resolved.
    async fn unresolved_alerts(&self, user_id: UserId) -> Result<Vec<Alert>, Error>;

    /// Draw a financial health score.
    async fn health(&self, user_id: UserId) -> Result<HealthReport, Error>;

    /// The fixed three-member team.
    async fn team(&self, user_id: UserId) -> Result<Vec<TeamMember>, Error>;
}
