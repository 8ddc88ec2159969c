//! Driving port for alert mutations.

use async_trait::async_trait;

use crate::domain::{Alert, AlertId, Error};

/// Alert use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AlertCommand: Send + Sync {
    /// Mark an alert resolved. Repeated calls succeed and return the alert
    /// unchanged.
    async fn resolve(&self, alert_id: AlertId) -> Result<Alert, Error>;
}
