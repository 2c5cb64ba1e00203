//! Infrastructure layer - concrete adapters behind the application ports.
//!
//! HTTP provider adapters (Anthropic, Gemini, OpenAI), the JSON file history
//! store, and configuration loading.

pub mod config;
pub mod history;
pub mod providers;

pub use config::{ConfigLoader, Credentials, CredentialsError, FileConfig, ModelsConfig};
pub use history::JsonHistoryStore;
pub use providers::HttpProviderGateway;
