//! Synthetic data generators.
//!
//! Output shape (field set and cardinality) is fixed; values come from the
//! injected [`RandomSource`]. Alert and insight templates are literal and are
//! reproduced verbatim for every account.

use chrono::{Duration, NaiveDate};

use super::cash_flow::MONTH_LABELS;
use super::ports::RandomSource;
use super::{
    NewAlert, NewInsight, NewMonthlyRecord, NewTransaction, NoticeKind, Severity,
    TransactionCategory, TransactionStatus, TransactionType,
};

/// Number of transactions generated per account.
pub const TRANSACTION_BATCH_SIZE: usize = 10;

/// Monthly inflow range, half-open.
pub const INFLOW_RANGE: (i64, i64) = (30_000, 80_000);
/// Monthly outflow range, half-open.
pub const OUTFLOW_RANGE: (i64, i64) = (20_000, 60_000);
/// Transaction amount range, half-open; negative amounts are outgoing.
pub const AMOUNT_RANGE: (i64, i64) = (-5_000, 5_000);

const TRANSACTION_SPACING_DAYS: i64 = 7;
const DESCRIPTION_NUMBER_LIMIT: i64 = 1_000;
const TOKEN_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const TOKEN_LEN: usize = 14;

/// Twelve months labelled Jan..Dec with random inflow and outflow.
pub fn monthly_series(random: &dyn RandomSource) -> Vec<NewMonthlyRecord> {
    MONTH_LABELS
        .iter()
        .map(|&month| NewMonthlyRecord {
            month,
            inflow: random.int_in(INFLOW_RANGE.0, INFLOW_RANGE.1),
            outflow: random.int_in(OUTFLOW_RANGE.0, OUTFLOW_RANGE.1),
        })
        .collect()
}

/// A batch of [`TRANSACTION_BATCH_SIZE`] transactions, newest first, dated
/// one week apart starting at `today`.
pub fn transaction_batch(random: &dyn RandomSource, today: NaiveDate) -> Vec<NewTransaction> {
    (0_i64..)
        .take(TRANSACTION_BATCH_SIZE)
        .map(|step| {
            let kind = pick(random, &TransactionType::ALL);
            let label = pick(random, &TransactionType::ALL).label();
            let number = random.int_in(0, DESCRIPTION_NUMBER_LIMIT);
            NewTransaction {
                date: today - Duration::days(step * TRANSACTION_SPACING_DAYS),
                kind,
                description: format!("{label} #{number}"),
                amount: random.int_in(AMOUNT_RANGE.0, AMOUNT_RANGE.1),
                category: pick(random, &TransactionCategory::ALL),
                status: pick(random, &TransactionStatus::ALL),
            }
        })
        .collect()
}

/// The two alerts every account starts with.
#[must_use]
pub fn alert_templates() -> Vec<NewAlert> {
    vec![
        NewAlert {
            kind: NoticeKind::Warning,
            title: "Low Cash Reserve",
            description: "Projected cash balance falls below one month of operating expenses in 45 days.",
            severity: Severity::High,
        },
        NewAlert {
            kind: NoticeKind::Info,
            title: "Invoice Overdue",
            description: "Invoice #1042 is 15 days past due.",
            severity: Severity::Medium,
        },
    ]
}

/// The three insights every account starts with.
#[must_use]
pub fn insight_templates() -> Vec<NewInsight> {
    vec![
        NewInsight {
            kind: NoticeKind::Warning,
            title: "Cash Flow Risk",
            description: "Your cash flow is declining in Q3. Consider adjusting expenses.",
            severity: Severity::High,
        },
        NewInsight {
            kind: NoticeKind::Success,
            title: "Growth Opportunity",
            description: "Your revenue has increased 12% compared to last quarter.",
            severity: Severity::Medium,
        },
        NewInsight {
            kind: NoticeKind::Info,
            title: "Payment Reminder",
            description: "You have 3 invoices due in the next 7 days.",
            severity: Severity::Low,
        },
    ]
}

/// Opaque identifier such as `cus_Q2x9...` for stubbed external records.
pub fn opaque_id(random: &dyn RandomSource, prefix: &str) -> String {
    let alphabet_len = i64::try_from(TOKEN_ALPHABET.len()).unwrap_or(i64::MAX);
    let suffix: String = (0..TOKEN_LEN)
        .filter_map(|_| {
            let index = usize::try_from(random.int_in(0, alphabet_len)).ok()?;
            TOKEN_ALPHABET.get(index).map(|byte| char::from(*byte))
        })
        .collect();
    format!("{prefix}_{suffix}")
}

fn pick<T: Copy + Default>(random: &dyn RandomSource, options: &[T]) -> T {
    let len = i64::try_from(options.len()).unwrap_or(i64::MAX);
    usize::try_from(random.int_in(0, len))
        .ok()
        .and_then(|index| options.get(index))
        .copied()
        .unwrap_or_default()
}
