//! Judge service - rank the three candidate answers and pick one.

use crate::ports::provider_gateway::ProviderGateway;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};
use tribunal_domain::{JudgeRecord, PromptTemplate, Provider, parse_judge_response};

/// Asks the judge model to compare the three candidate answers.
///
/// The judge is itself a provider adapter with a distinguished (stronger)
/// model configuration, used only with the comparison prompt.
pub struct JudgeService {
    gateway: Arc<dyn ProviderGateway>,
}

impl JudgeService {
    pub fn new(gateway: Arc<dyn ProviderGateway>) -> Self {
        Self { gateway }
    }

    /// Build the comparison prompt, ask the judge, parse the verdict.
    ///
    /// Never fails: a transport error becomes in-band error text, which the
    /// parser then handles like any other judge response without JSON.
    pub async fn judge(
        &self,
        answers: &BTreeMap<Provider, String>,
        history_context: &str,
    ) -> JudgeRecord {
        let prompt = PromptTemplate::judge_comparison(history_context, answers);

        let raw = match self.gateway.ask_judge(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Judge call failed: {}", e);
                format!("[ERROR] {} call failed: {}", Provider::fallback(), e)
            }
        };

        let verdict = parse_judge_response(&raw, answers);
        debug!("Judge picked {}", verdict.best_agent);

        JudgeRecord {
            judge_agent: self.gateway.judge_label(),
            best_agent: verdict.best_agent,
            best_text: verdict.best_text,
            rationale: verdict.rationale,
        }
    }
}
