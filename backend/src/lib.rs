//! CashFlowPro backend library.
//!
//! Layout follows ports and adapters: `domain` holds the model, services and
//! port traits; `inbound` exposes them over HTTP; `outbound` provides the
//! in-memory record store and randomness sources.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

#[cfg(test)]
pub(crate) mod test_support;

pub use domain::TraceId;
pub use middleware::Trace;
