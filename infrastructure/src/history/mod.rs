//! Persistence adapters for the transcript history.

pub mod json_store;

pub use json_store::JsonHistoryStore;
