//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local record store
//! - **random**: seeded and entropy-backed random sources
//!
//! Adapters translate between domain types and their backing
//! representation. They contain no business logic.

pub mod memory;
pub mod random;
