//! Application layer - use cases and ports.
//!
//! Orchestrates the domain against two ports: a provider gateway (outbound
//! HTTP to the model vendors) and a history store (the persisted transcript).
//! Everything here is infrastructure-agnostic; the concrete adapters live in
//! the infrastructure crate.

pub mod ports;
pub mod providers;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

pub use ports::history_store::{HistoryError, HistoryStore};
pub use ports::provider_gateway::{GatewayError, ProviderGateway};
pub use providers::{AdapterState, ProviderPool};
pub use use_cases::HISTORY_WINDOW_CHARS;
pub use use_cases::judge::JudgeService;
pub use use_cases::run_all::{AllThenJudgeOutcome, RunAllAndJudgeUseCase};
pub use use_cases::run_single::{RunSingleUseCase, SingleOutcome};
pub use use_cases::session::{SessionManager, UndoError};
