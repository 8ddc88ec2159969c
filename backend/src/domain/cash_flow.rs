//! Monthly cash-flow series owned by a user.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::UserId;

/// Month labels used for the twelve-entry series, in order.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Generated month before the store binds it to a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewMonthlyRecord {
    pub month: &'static str,
    pub inflow: i64,
    pub outflow: i64,
}

/// One month of money in and out.
///
/// `balance` is always `inflow - outflow`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRecord {
    pub id: u32,
    pub month: String,
    pub inflow: i64,
    pub outflow: i64,
    pub balance: i64,
}

impl MonthlyRecord {
    /// Bind a generated month to its 1-based position in the series.
    #[must_use]
    pub fn from_new(position: u32, record: NewMonthlyRecord) -> Self {
        Self {
            id: position,
            month: record.month.to_owned(),
            inflow: record.inflow,
            outflow: record.outflow,
            balance: record.inflow - record.outflow,
        }
    }
}

/// The read-only series created for a user at registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashFlowSeries {
    pub user_id: UserId,
    pub records: Vec<MonthlyRecord>,
    pub last_updated: DateTime<Utc>,
}

impl CashFlowSeries {
    /// Assemble a series, numbering months from 1.
    #[must_use]
    pub fn new(user_id: UserId, records: Vec<NewMonthlyRecord>, last_updated: DateTime<Utc>) -> Self {
        let records = (1_u32..)
            .zip(records)
            .map(|(position, record)| MonthlyRecord::from_new(position, record))
            .collect();
        Self {
            user_id,
            records,
            last_updated,
        }
    }

    /// The trailing `count` months, oldest first.
    #[must_use]
    pub fn recent(&self, count: usize) -> &[MonthlyRecord] {
        let start = self.records.len().saturating_sub(count);
        self.records.get(start..).unwrap_or_default()
    }
}
