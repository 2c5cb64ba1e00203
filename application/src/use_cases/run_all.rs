//! Run-all-and-judge use case.
//!
//! The fan-out path: ask all three providers the same prompt sequentially,
//! put the answers before the judge, persist the exchange.

use crate::ports::history_store::HistoryStore;
use crate::providers::ProviderPool;
use crate::use_cases::judge::JudgeService;
use crate::use_cases::{HISTORY_WINDOW_CHARS, timestamp_now};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tribunal_domain::{JudgeRecord, Provider, TranscriptEntry};

/// Flat pacing delay inserted between the sequential provider calls.
/// Unconditional and fixed regardless of prior outcomes - burst avoidance,
/// not backoff.
const PACING_DELAY: Duration = Duration::from_millis(200);

/// Result of a fan-out exchange.
#[derive(Debug)]
pub struct AllThenJudgeOutcome {
    /// One answer per provider, always exactly three keys. Failed calls hold
    /// bracketed error text.
    pub answers: BTreeMap<Provider, String>,
    pub judge: JudgeRecord,
    /// False when the transcript append failed; the exchange may be missing
    /// from the persisted log.
    pub persisted: bool,
}

/// Use case for the all-then-judge path.
pub struct RunAllAndJudgeUseCase {
    pool: Arc<ProviderPool>,
    judge: JudgeService,
    store: Arc<dyn HistoryStore>,
}

impl RunAllAndJudgeUseCase {
    pub fn new(pool: Arc<ProviderPool>, judge: JudgeService, store: Arc<dyn HistoryStore>) -> Self {
        Self { pool, judge, store }
    }

    /// Ask all three providers, have the judge pick, persist the entry.
    ///
    /// Calls are sequential: one in-flight request at a time, with
    /// the pacing delay between them. The raw prompt goes out as-is - this
    /// path skips history injection so three round trips stay fast.
    pub async fn execute(&self, user_prompt: &str) -> AllThenJudgeOutcome {
        info!("Fan-out: asking all three providers");

        let mut answers = BTreeMap::new();
        for (i, provider) in Provider::all().into_iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(PACING_DELAY).await;
            }
            let reply = self.pool.ask(provider, user_prompt).await;
            answers.insert(provider, reply);
        }

        let history = self.store.read_condensed(HISTORY_WINDOW_CHARS);
        let judge = self.judge.judge(&answers, &history).await;

        let entry = TranscriptEntry::all_then_judge(
            timestamp_now(),
            user_prompt,
            answers.clone(),
            judge.clone(),
        );
        let persisted = match self.store.append(entry) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to persist transcript entry: {}", e);
                false
            }
        };

        AllThenJudgeOutcome {
            answers,
            judge,
            persisted,
        }
    }
}
