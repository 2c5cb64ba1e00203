//! Presentation layer - CLI arguments, chat REPL, and console formatting.

pub mod chat;
pub mod cli;
pub mod output;

pub use chat::{ChatRepl, ReplCommand};
pub use cli::Cli;
pub use output::ConsoleFormatter;
