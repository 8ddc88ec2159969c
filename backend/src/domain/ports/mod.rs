//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`*Command`, `*Query`) are what inbound adapters call.
//! Driven ports ([`RecordStore`], [`RandomSource`]) are what the domain
//! services call out to.

mod macros;
pub(crate) use macros::define_port_error;

mod account_command;
mod alert_command;
mod cash_flow_query;
mod random_source;
mod record_store;
mod report_command;

#[cfg(test)]
pub use account_command::MockAccountCommand;
pub use account_command::{AccountCommand, LoginOutcome, PaymentSetup, PaymentSetupRequest};
#[cfg(test)]
pub use alert_command::MockAlertCommand;
pub use alert_command::AlertCommand;
#[cfg(test)]
pub use cash_flow_query::MockCashFlowQuery;
pub use cash_flow_query::{
    CashFlowQuery, DashboardView, ForecastReport, ForecastRequest, HealthReport, InsightReport,
    RECENT_MONTHS, RECENT_TRANSACTIONS, TeamMember,
};
pub use random_source::RandomSource;
#[cfg(test)]
pub use record_store::MockRecordStore;
pub use record_store::{RecordStore, RecordStoreError};
#[cfg(test)]
pub use report_command::MockReportCommand;
pub use report_command::{ExportRequest, ExportStatus, ReportCommand, ReportExport};
