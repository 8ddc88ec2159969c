//! Financial insights attached to a user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{NoticeKind, Severity, UserId};

/// Store-assigned insight identifier, unique across all users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InsightId(u64);

impl InsightId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Insight template awaiting an owner and identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInsight {
    pub kind: NoticeKind,
    pub title: &'static str,
    pub description: &'static str,
    pub severity: Severity,
}

/// Immutable insight owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub id: InsightId,
    #[serde(skip)]
    pub user_id: UserId,
    #[serde(rename = "type")]
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
}

impl Insight {
    /// Bind a template to its owner and creation time.
    #[must_use]
    pub fn from_new(
        id: InsightId,
        user_id: UserId,
        template: NewInsight,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            kind: template.kind,
            title: template.title.to_owned(),
            description: template.description.to_owned(),
            severity: template.severity,
            created_at,
        }
    }
}
