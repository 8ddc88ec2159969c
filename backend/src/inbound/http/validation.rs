//! Shared validation helpers for inbound HTTP adapters.

use serde::Deserialize;
use serde_json::json;

use crate::domain::service_support::USER_NOT_FOUND;
use crate::domain::{Error, MissingFields, UserId};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
        }
    }
}

/// Convert absent or blank body fields into a 400 naming each of them.
pub(crate) fn missing_fields_error(err: MissingFields) -> Error {
    let fields = err.fields.clone();
    Error::invalid_request(err.to_string()).with_details(json!({
        "fields": fields,
        "code": ErrorCode::MissingField.as_str(),
    }))
}

/// Trim a body string, treating blanks as absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// User id as sent in a JSON body: a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawUserId {
    Number(u64),
    Text(String),
}

impl RawUserId {
    /// Blank strings count as absent.
    pub(crate) fn is_present(&self) -> bool {
        match self {
            Self::Number(_) => true,
            Self::Text(text) => !text.trim().is_empty(),
        }
    }

    /// Interpret the id; values that cannot name a user are reported as an
    /// unknown user.
    pub(crate) fn resolve(&self) -> Result<UserId, Error> {
        match self {
            Self::Number(raw) => Some(*raw).filter(|raw| *raw > 0).map(UserId::new),
            Self::Text(text) => UserId::parse(text),
        }
        .ok_or_else(|| Error::not_found(USER_NOT_FOUND))
    }
}

/// Parse a user id path segment; non-numeric segments name no user.
pub(crate) fn user_id_from_path(raw: &str) -> Result<UserId, Error> {
    UserId::parse(raw).ok_or_else(|| Error::not_found(USER_NOT_FOUND))
}
