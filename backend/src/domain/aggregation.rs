//! Aggregation engine: dashboard summary, forecast and health score.

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use super::MonthlyRecord;
use super::ports::RandomSource;

/// Growth applied to total inflow for the headline forecast.
pub const FORECAST_GROWTH: f64 = 1.15;
/// Share of total outflow expected to recur.
pub const UPCOMING_EXPENSE_SHARE: f64 = 0.85;

/// Baseline monthly inflow for projections.
pub const BASE_INFLOW: f64 = 45_000.0;
/// Baseline monthly outflow for projections.
pub const BASE_OUTFLOW: f64 = 35_000.0;
/// Total width of the inflow jitter band (±10%).
const INFLOW_JITTER: f64 = 0.2;
/// Total width of the outflow jitter band (±15%).
const OUTFLOW_JITTER: f64 = 0.3;
/// Confidence of the first projected month.
pub const BASE_CONFIDENCE: f64 = 0.95;
/// Confidence lost per month ahead.
pub const CONFIDENCE_DECAY: f64 = 0.02;

/// Months projected when the caller does not ask for a horizon.
pub const DEFAULT_MONTHS_AHEAD: u32 = 6;
/// Largest accepted projection horizon.
pub const MAX_MONTHS_AHEAD: u32 = 24;

const HEALTH_BASE: i64 = 70;
const HEALTH_JITTER: i64 = 30;

/// Summary statistics derived from a user's series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Net cash flow over the whole series.
    pub current_cash: i64,
    pub monthly_average: i64,
    /// `total_inflow / total_outflow` to two decimals; 0 without outflow.
    pub cash_ratio: f64,
    pub forecast: f64,
    pub upcoming_expenses: f64,
    pub total_inflow: i64,
    pub total_outflow: i64,
}

/// Derive summary statistics from an ordered series.
///
/// # Examples
/// ```
/// use cashflow_backend::domain::{aggregation::summarize, MonthlyRecord};
///
/// let month = MonthlyRecord { id: 1, month: "Jan".into(), inflow: 300, outflow: 200, balance: 100 };
/// let summary = summarize(&[month]);
/// assert_eq!(summary.current_cash, 100);
/// assert_eq!(summary.cash_ratio, 1.5);
/// ```
#[must_use]
pub fn summarize(records: &[MonthlyRecord]) -> DashboardSummary {
    let total_inflow: i64 = records.iter().map(|r| r.inflow).sum();
    let total_outflow: i64 = records.iter().map(|r| r.outflow).sum();
    let net = total_inflow - total_outflow;
    let monthly_average = if records.is_empty() {
        0
    } else {
        round_half_up(net as f64 / records.len() as f64)
    };
    let cash_ratio = if total_outflow > 0 {
        round2(total_inflow as f64 / total_outflow as f64)
    } else {
        0.0
    };

    DashboardSummary {
        current_cash: net,
        monthly_average,
        cash_ratio,
        forecast: total_inflow as f64 * FORECAST_GROWTH,
        upcoming_expenses: total_outflow as f64 * UPCOMING_EXPENSE_SHARE,
        total_inflow,
        total_outflow,
    }
}

/// Round to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to the nearest integer, halves towards positive infinity.
#[must_use]
pub fn round_half_up(value: f64) -> i64 {
    // Saturating float-to-int conversion.
    (value + 0.5).floor() as i64
}

/// One projected month.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    /// Label such as `Oct 2026`.
    pub month: String,
    pub predicted_inflow: i64,
    pub predicted_outflow: i64,
    /// Always `predicted_inflow - predicted_outflow`.
    pub predicted_balance: i64,
    pub confidence: f64,
}

/// Confidence for the month `offset` months ahead of the current one.
#[must_use]
pub fn confidence_for(offset: u32) -> f64 {
    round2((BASE_CONFIDENCE - CONFIDENCE_DECAY * f64::from(offset)).max(0.0))
}

/// Project `months_ahead` months starting with the month containing `today`.
///
/// Inflow and outflow are jittered independently around [`BASE_INFLOW`] and
/// [`BASE_OUTFLOW`].
pub fn project(months_ahead: u32, today: NaiveDate, random: &dyn RandomSource) -> Vec<ForecastPoint> {
    let first_of_month = today.with_day(1).unwrap_or(today);
    (0..months_ahead)
        .map_while(|offset| {
            let month = first_of_month.checked_add_months(Months::new(offset))?;
            let inflow_factor = 1.0 + (random.unit() - 0.5) * INFLOW_JITTER;
            let outflow_factor = 1.0 + (random.unit() - 0.5) * OUTFLOW_JITTER;
            let predicted_inflow = round_half_up(BASE_INFLOW * inflow_factor);
            let predicted_outflow = round_half_up(BASE_OUTFLOW * outflow_factor);
            Some(ForecastPoint {
                month: month.format("%b %Y").to_string(),
                predicted_inflow,
                predicted_outflow,
                predicted_balance: predicted_inflow - predicted_outflow,
                confidence: confidence_for(offset),
            })
        })
        .collect()
}

/// Health bucket derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HealthRating {
    /// Bucket a score: excellent ≥ 80, good ≥ 60, fair ≥ 40, poor below.
    #[must_use]
    pub const fn from_score(score: i64) -> Self {
        match score {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            _ => Self::Poor,
        }
    }
}

/// Financial health score with its bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthScore {
    pub score: i64,
    pub rating: HealthRating,
}

/// Draw a health score: a base of 70 plus jitter in `[0, 30)`.
pub fn health_score(random: &dyn RandomSource) -> HealthScore {
    let score = HEALTH_BASE + random.int_in(0, HEALTH_JITTER);
    HealthScore {
        score,
        rating: HealthRating::from_score(score),
    }
}
