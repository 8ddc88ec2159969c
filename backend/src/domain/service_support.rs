//! Internal helpers shared by the domain services.

use crate::domain::ports::{RecordStore, RecordStoreError};
use crate::domain::{Error, User, UserId};

pub(crate) const USER_NOT_FOUND: &str = "User not found";

pub(crate) fn map_store_error(error: RecordStoreError) -> Error {
    match error {
        RecordStoreError::DuplicateEmail { .. } => Error::invalid_request("User already exists"),
        RecordStoreError::UserNotFound { .. } => Error::not_found(USER_NOT_FOUND),
        RecordStoreError::AlertNotFound { .. } => Error::not_found("Alert not found"),
        RecordStoreError::Unavailable { message } => {
            Error::internal(format!("record store unavailable: {message}"))
        }
    }
}

/// Resolve a user or fail with not-found.
pub(crate) async fn require_user<S>(store: &S, user_id: UserId) -> Result<User, Error>
where
    S: RecordStore + ?Sized,
{
    store
        .find_user_by_id(user_id)
        .await
        .map_err(map_store_error)?
        .ok_or_else(|| Error::not_found(USER_NOT_FOUND))
}
