//! Error-tolerant provider pool.
//!
//! Wraps the gateway so every call yields text: transport, auth, and
//! malformed-response failures come back as bracketed error strings, and
//! quota-class failures flip a one-way per-provider degradation flag.
//! Downstream consumers (orchestration, judge) treat every call uniformly
//! as "produced some text".

use crate::ports::provider_gateway::ProviderGateway;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};
use tribunal_domain::Provider;

/// Health of one provider adapter within this process.
///
/// One-way: `Normal` transitions to `Degraded` on the first quota-class
/// error and never transitions back. This is not a retry/backoff policy -
/// no recovery is attempted, and a new process starts fresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdapterState {
    #[default]
    Normal,
    Degraded,
}

/// The three provider adapters behind a never-fails `ask`.
pub struct ProviderPool {
    gateway: Arc<dyn ProviderGateway>,
    states: Mutex<HashMap<Provider, AdapterState>>,
}

impl ProviderPool {
    pub fn new(gateway: Arc<dyn ProviderGateway>) -> Self {
        Self {
            gateway,
            states: Mutex::new(HashMap::new()),
        }
    }

    /// Current health of a provider adapter.
    pub fn state(&self, provider: Provider) -> AdapterState {
        self.states
            .lock()
            .map(|states| states.get(&provider).copied().unwrap_or_default())
            .unwrap_or_default()
    }

    fn degrade(&self, provider: Provider) {
        if let Ok(mut states) = self.states.lock() {
            states.insert(provider, AdapterState::Degraded);
        }
    }

    /// Ask a provider. Never fails: every outcome is text.
    ///
    /// A degraded provider short-circuits to a generic unavailable string
    /// without an outbound call. The first quota-class error reports the
    /// full condition once, then degrades the adapter.
    pub async fn ask(&self, provider: Provider, prompt: &str) -> String {
        if self.state(provider) == AdapterState::Degraded {
            debug!("{} is degraded; skipping call", provider);
            return format!("[{} unavailable]", provider);
        }

        match self.gateway.ask(provider, prompt).await {
            Ok(text) => text,
            Err(e) if e.is_quota() => {
                warn!("{} hit a quota limit; degrading adapter: {}", provider, e);
                self.degrade(provider);
                format!(
                    "[{} quota limit reached - consider upgrading API key or wait 24hrs]",
                    provider
                )
            }
            Err(e) => {
                warn!("{} call failed: {}", provider, e);
                format!("[ERROR] {} call failed: {}", provider, e)
            }
        }
    }
}
