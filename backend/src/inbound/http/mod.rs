//! HTTP inbound adapter exposing REST endpoints.

pub mod accounts;
pub mod alerts;
pub mod dashboard;
pub mod error;
pub mod health;
pub mod reports;
pub mod root;
pub mod routes;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;
