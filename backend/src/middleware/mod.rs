//! Request middleware.
//!
//! Purpose: define middleware components for request lifecycle concerns:
//! trace identifiers and cross-origin headers.

pub mod cors;
pub mod trace;

pub use cors::Cors;
pub use trace::Trace;
