//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use crate::domain::ports::{
    MockAccountCommand, MockAlertCommand, MockCashFlowQuery, MockReportCommand,
};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::random::SeededRandomSource;
use crate::test_support::fixture_clock;

/// Ports whose mocks carry no expectations; any call fails the test.
///
/// Combine with struct update syntax to replace only the ports under test.
pub fn unused_ports() -> HttpStatePorts {
    HttpStatePorts {
        accounts: Arc::new(MockAccountCommand::new()),
        cash_flow: Arc::new(MockCashFlowQuery::new()),
        alerts: Arc::new(MockAlertCommand::new()),
        reports: Arc::new(MockReportCommand::new()),
    }
}

/// Real services over a fresh store, seeded randomness and a frozen clock.
pub fn in_memory_state() -> HttpState {
    HttpState::in_memory(Arc::new(SeededRandomSource::new(17)), fixture_clock())
}
