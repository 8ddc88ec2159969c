//! Driving port for account lifecycle use-cases.
//!
//! Inbound adapters call this port to register users, log them in and attach
//! a payment method. Password handling is a stub: passwords are required but
//! never stored nor verified.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{Error, LoginCredentials, Registration, SessionToken, UserId, UserProfile};

/// Successful login: the account profile plus an opaque token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginOutcome {
    pub user: UserProfile,
    pub token: SessionToken,
}

/// Request to attach a payment method to an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentSetupRequest {
    pub user_id: UserId,
    pub payment_method: String,
}

/// Payment-provider customer created for an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSetup {
    /// Opaque `cus_…` reference; no provider is contacted.
    pub customer_id: String,
    pub payment_method: String,
}

/// Account use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountCommand: Send + Sync {
    /// Create an account and seed its synthetic records.
    ///
    /// Fails with an invalid-request error when the e-mail is taken.
    async fn register(&self, registration: Registration) -> Result<UserProfile, Error>;

    /// Look the account up by e-mail. Unknown e-mails are unauthorised.
    async fn login(&self, credentials: LoginCredentials) -> Result<LoginOutcome, Error>;

    /// Generate and attach a payment-customer reference.
    async fn setup_payment(&self, request: PaymentSetupRequest) -> Result<PaymentSetup, Error>;
}
