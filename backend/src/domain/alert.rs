//! Alerts raised against a user's cash position.
//!
//! `resolved` and `resolved_at` are the only mutable fields; resolving is
//! idempotent and keeps the first resolution timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{NoticeKind, Severity, UserId};

/// Store-assigned alert identifier, unique across all users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertId(u64);

impl AlertId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Parse a path segment; non-numeric input yields `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse().ok().map(Self)
    }
}

impl std::fmt::Display for AlertId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Alert template awaiting an owner and identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAlert {
    pub kind: NoticeKind,
    pub title: &'static str,
    pub description: &'static str,
    pub severity: Severity,
}

/// Alert owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: AlertId,
    #[serde(skip)]
    pub user_id: UserId,
    #[serde(rename = "type")]
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub resolved: bool,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Alert {
    /// Bind a template to its owner; alerts start unresolved.
    #[must_use]
    pub fn from_new(id: AlertId, user_id: UserId, template: NewAlert) -> Self {
        Self {
            id,
            user_id,
            kind: template.kind,
            title: template.title.to_owned(),
            description: template.description.to_owned(),
            severity: template.severity,
            resolved: false,
            resolved_at: None,
        }
    }

    /// Mark the alert resolved at `now` unless it already is.
    pub fn resolve(&mut self, now: DateTime<Utc>) {
        if !self.resolved {
            self.resolved = true;
            self.resolved_at = Some(now);
        }
    }
}
