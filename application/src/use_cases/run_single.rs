//! Single-provider use case.
//!
//! One provider, one routed prompt with condensed history injected, one
//! transcript entry.

use crate::ports::history_store::HistoryStore;
use crate::providers::ProviderPool;
use crate::use_cases::{HISTORY_WINDOW_CHARS, timestamp_now};
use std::sync::Arc;
use tracing::{info, warn};
use tribunal_domain::{PromptTemplate, Provider, TranscriptEntry};

/// Result of a single-provider exchange.
#[derive(Debug)]
pub struct SingleOutcome {
    /// The provider's reply, or bracketed error text.
    pub reply: String,
    /// False when the transcript append failed.
    pub persisted: bool,
}

/// Use case for the single-provider path.
pub struct RunSingleUseCase {
    pool: Arc<ProviderPool>,
    store: Arc<dyn HistoryStore>,
}

impl RunSingleUseCase {
    pub fn new(pool: Arc<ProviderPool>, store: Arc<dyn HistoryStore>) -> Self {
        Self { pool, store }
    }

    /// Ask one provider with the condensed history prepended, persist the
    /// exchange.
    pub async fn execute(&self, agent: Provider, user_prompt: &str) -> SingleOutcome {
        info!("Single exchange with {}", agent);

        let history = self.store.read_condensed(HISTORY_WINDOW_CHARS);
        let routed = PromptTemplate::single_with_history(&history, user_prompt);
        let reply = self.pool.ask(agent, &routed).await;

        let entry = TranscriptEntry::single(timestamp_now(), user_prompt, agent, reply.clone());
        let persisted = match self.store.append(entry) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to persist transcript entry: {}", e);
                false
            }
        };

        SingleOutcome { reply, persisted }
    }
}
