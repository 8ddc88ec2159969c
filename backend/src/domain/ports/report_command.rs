//! Driving port for report exports.
//!
//! Exports are never rendered; callers receive a fabricated download URL and
//! a `processing` status.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{Error, UserId};

/// Validated export parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub user_id: UserId,
    pub report_type: String,
    pub format: String,
}

/// Lifecycle of an export. Only `processing` is ever reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportStatus {
    Processing,
}

/// Accepted export job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportExport {
    pub export_id: String,
    pub report_type: String,
    pub format: String,
    pub status: ExportStatus,
    pub download_url: String,
    pub requested_at: DateTime<Utc>,
}

/// Report use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportCommand: Send + Sync {
    /// Queue an export for an existing user.
    async fn export(&self, request: ExportRequest) -> Result<ReportExport, Error>;
}
