//! Process-local adapters. Nothing written here survives a restart.

mod record_store;

pub use record_store::InMemoryRecordStore;
