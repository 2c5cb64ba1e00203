//! Shared test doubles for the use-case tests.

use crate::ports::history_store::{HistoryError, HistoryStore};
use crate::ports::provider_gateway::{GatewayError, ProviderGateway};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tribunal_domain::{ArchivedSession, HistoryDocument, Provider, TranscriptEntry};

fn duplicate(reply: &Result<String, GatewayError>) -> Result<String, GatewayError> {
    match reply {
        Ok(text) => Ok(text.clone()),
        Err(GatewayError::Auth(m)) => Err(GatewayError::Auth(m.clone())),
        Err(GatewayError::Quota(m)) => Err(GatewayError::Quota(m.clone())),
        Err(GatewayError::Transport(m)) => Err(GatewayError::Transport(m.clone())),
        Err(GatewayError::MalformedResponse(m)) => Err(GatewayError::MalformedResponse(m.clone())),
    }
}

/// Gateway returning scripted replies, recording every prompt it receives.
pub(crate) struct ScriptedGateway {
    replies: HashMap<Provider, Result<String, GatewayError>>,
    judge_reply: Option<Result<String, GatewayError>>,
    calls: Mutex<Vec<(Provider, String)>>,
    judge_calls: Mutex<Vec<String>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self {
            replies: HashMap::new(),
            judge_reply: None,
            calls: Mutex::new(Vec::new()),
            judge_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_reply(mut self, provider: Provider, reply: Result<String, GatewayError>) -> Self {
        self.replies.insert(provider, reply);
        self
    }

    pub fn with_judge_reply(mut self, reply: Result<String, GatewayError>) -> Self {
        self.judge_reply = Some(reply);
        self
    }

    pub fn call_count(&self, provider: Provider) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(p, _)| *p == provider)
            .count()
    }

    pub fn prompts_for(&self, provider: Provider) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(p, _)| *p == provider)
            .map(|(_, prompt)| prompt.clone())
            .collect()
    }

    pub fn judge_prompts(&self) -> Vec<String> {
        self.judge_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProviderGateway for ScriptedGateway {
    async fn ask(&self, provider: Provider, prompt: &str) -> Result<String, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push((provider, prompt.to_string()));
        match self.replies.get(&provider) {
            Some(reply) => duplicate(reply),
            None => Ok(format!("{} default answer", provider)),
        }
    }

    async fn ask_judge(&self, prompt: &str) -> Result<String, GatewayError> {
        self.judge_calls.lock().unwrap().push(prompt.to_string());
        match &self.judge_reply {
            Some(reply) => duplicate(reply),
            None => Ok(
                r#"{"best_agent": "Claude", "best_text": "judged best", "rationale": "scripted"}"#
                    .to_string(),
            ),
        }
    }

    fn judge_label(&self) -> String {
        "Claude (judge-model)".to_string()
    }
}

/// In-memory history store with a switchable write-failure mode.
pub(crate) struct MemoryStore {
    doc: Mutex<HistoryDocument>,
    archives: Mutex<Vec<ArchivedSession>>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_document(HistoryDocument::default())
    }

    pub fn with_document(doc: HistoryDocument) -> Self {
        Self {
            doc: Mutex::new(doc),
            archives: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
        }
    }

    pub fn document(&self) -> HistoryDocument {
        self.doc.lock().unwrap().clone()
    }

    pub fn archives(&self) -> Vec<ArchivedSession> {
        self.archives.lock().unwrap().clone()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<(), HistoryError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(HistoryError::Io(std::io::Error::other("disk full")));
        }
        Ok(())
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self) -> Result<HistoryDocument, HistoryError> {
        Ok(self.doc.lock().unwrap().clone())
    }

    fn replace(&self, doc: &HistoryDocument) -> Result<(), HistoryError> {
        self.check_writable()?;
        *self.doc.lock().unwrap() = doc.clone();
        Ok(())
    }

    fn append(&self, entry: TranscriptEntry) -> Result<(), HistoryError> {
        self.check_writable()?;
        self.doc.lock().unwrap().sessions.push(entry);
        Ok(())
    }

    fn save_archive(&self, archive: &ArchivedSession) -> Result<(), HistoryError> {
        self.check_writable()?;
        self.archives.lock().unwrap().push(archive.clone());
        Ok(())
    }
}
