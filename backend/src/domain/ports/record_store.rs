//! Driven port for the process-local record store.
//!
//! Every collection lives for the process lifetime only. Writes happen at
//! registration (plus the payment reference and alert resolution), each inside
//! a single store call, so callers never observe a half-created user.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{
    Alert, AlertId, CashFlowSeries, Insight, NewAlert, NewInsight, NewMonthlyRecord,
    NewTransaction, NewUser, Transaction, User, UserId,
};

use super::define_port_error;

define_port_error! {
    /// Failures raised by record store adapters.
    pub enum RecordStoreError {
        /// Another account already uses this e-mail.
        DuplicateEmail { email: String } => "a user with email {email} already exists",
        /// The owning user does not exist.
        UserNotFound { user_id: u64 } => "user {user_id} does not exist",
        /// The alert does not exist.
        AlertNotFound { alert_id: u64 } => "alert {alert_id} does not exist",
        /// The backing store cannot serve requests.
        Unavailable { message: String } => "record store unavailable: {message}",
    }
}

/// Storage for users and the synthetic records generated for them.
///
/// Identifiers are assigned by the store, sequentially per collection.
/// Listing operations return records in insertion order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert a user, assigning the next sequential id.
    ///
    /// Fails with [`RecordStoreError::DuplicateEmail`] without modifying the
    /// store when the e-mail is taken.
    async fn create_user(&self, user: NewUser) -> Result<User, RecordStoreError>;

    /// Look up a user by id.
    async fn find_user_by_id(&self, id: UserId) -> Result<Option<User>, RecordStoreError>;

    /// Look up a user by exact e-mail.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, RecordStoreError>;

    /// Number of registered users.
    async fn user_count(&self) -> Result<usize, RecordStoreError>;

    /// Record the payment-provider customer reference for a user.
    async fn attach_payment_customer(
        &self,
        id: UserId,
        customer_id: &str,
    ) -> Result<User, RecordStoreError>;

    /// Store the cash-flow series for a user.
    async fn append_series(
        &self,
        user_id: UserId,
        records: Vec<NewMonthlyRecord>,
        last_updated: DateTime<Utc>,
    ) -> Result<CashFlowSeries, RecordStoreError>;

    /// Store a batch of transactions for a user.
    async fn append_transactions(
        &self,
        user_id: UserId,
        drafts: Vec<NewTransaction>,
    ) -> Result<Vec<Transaction>, RecordStoreError>;

    /// Store a batch of alerts for a user.
    async fn append_alerts(
        &self,
        user_id: UserId,
        templates: Vec<NewAlert>,
    ) -> Result<Vec<Alert>, RecordStoreError>;

    /// Store a batch of insights for a user.
    async fn append_insights(
        &self,
        user_id: UserId,
        templates: Vec<NewInsight>,
        created_at: DateTime<Utc>,
    ) -> Result<Vec<Insight>, RecordStoreError>;

    /// Series owned by a user, if one was stored.
    async fn series_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<CashFlowSeries>, RecordStoreError>;

    /// Transactions owned by a user.
    async fn transactions_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Transaction>, RecordStoreError>;

    /// Alerts owned by a user, resolved or not.
    async fn alerts_for_user(&self, user_id: UserId) -> Result<Vec<Alert>, RecordStoreError>;

    /// Insights owned by a user.
    async fn insights_for_user(&self, user_id: UserId) -> Result<Vec<Insight>, RecordStoreError>;

    /// Mark an alert resolved. Resolving twice succeeds and keeps the first
    /// resolution timestamp.
    async fn resolve_alert(&self, id: AlertId, now: DateTime<Utc>)
    -> Result<Alert, RecordStoreError>;
}
