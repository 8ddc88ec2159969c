//! Fixed cash-flow sample served to visitors without an account.

use serde::Serialize;

/// One sample month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SampleMonth {
    pub month: &'static str,
    pub inflow: i64,
    pub outflow: i64,
}

/// Headline figures shown beside the sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleSummary {
    pub current_cash: i64,
    pub forecast: i64,
    pub cash_ratio: f64,
}

/// The complete sample payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleCashFlow {
    pub data: Vec<SampleMonth>,
    pub summary: SampleSummary,
}

const SAMPLE_MONTHS: [SampleMonth; 4] = [
    SampleMonth { month: "Jan", inflow: 45_000, outflow: 32_000 },
    SampleMonth { month: "Feb", inflow: 48_000, outflow: 35_000 },
    SampleMonth { month: "Mar", inflow: 52_000, outflow: 38_000 },
    SampleMonth { month: "Apr", inflow: 49_000, outflow: 41_000 },
];

/// Build the static sample. The summary is hard-coded, not derived.
#[must_use]
pub fn sample_cash_flow() -> SampleCashFlow {
    SampleCashFlow {
        data: SAMPLE_MONTHS.to_vec(),
        summary: SampleSummary {
            current_cash: 45_678,
            forecast: 68_500,
            cash_ratio: 2.4,
        },
    }
}
