//! Configuration - credentials, file schema, and the loader.

pub mod credentials;
pub mod file_config;
pub mod loader;

pub use credentials::{Credentials, CredentialsError};
pub use file_config::{FileConfig, HistoryConfig, ModelsConfig};
pub use loader::ConfigLoader;
