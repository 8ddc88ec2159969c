//! Domain primitives, aggregates and services.
//!
//! Purpose: define the strongly typed entities of the cash-flow dashboard,
//! the pure aggregation and generation logic over them, and the services
//! that implement the driving ports. Nothing here knows about HTTP.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic failure payload.
//! - User, UserProfile, Registration, LoginCredentials: accounts.
//! - CashFlowSeries, Transaction, Alert, Insight: per-user records.
//! - AccountService, DashboardService, ReportExportService: driving-port
//!   implementations.

pub mod account_service;
pub mod aggregation;
pub mod alert;
pub mod cash_flow;
pub mod dashboard_service;
pub mod error;
pub mod generators;
pub mod insight;
pub mod notice;
pub mod ports;
pub mod report_export_service;
pub mod sample;
pub(crate) mod service_support;
pub mod trace_id;
pub mod transaction;
pub mod user;

pub use self::account_service::AccountService;
pub use self::alert::{Alert, AlertId, NewAlert};
pub use self::cash_flow::{CashFlowSeries, MONTH_LABELS, MonthlyRecord, NewMonthlyRecord};
pub use self::dashboard_service::DashboardService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::insight::{Insight, InsightId, NewInsight};
pub use self::notice::{NoticeKind, Severity};
pub use self::report_export_service::ReportExportService;
pub use self::trace_id::TraceId;
pub use self::transaction::{
    NewTransaction, Transaction, TransactionCategory, TransactionId, TransactionStatus,
    TransactionType,
};
pub use self::user::{
    LoginCredentials, MissingFields, NewUser, PASSWORD_PLACEHOLDER, Plan, Registration,
    SessionToken, User, UserId, UserProfile,
};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use cashflow_backend::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<u32> {
///     Err(Error::not_found("User not found"))
/// }
/// # assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
