//! Scripted [`AddressFetcher`] for lookup tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use qa_checklist::core::ports::AddressFetcher;

/// What a scripted endpoint does when fetched
#[derive(Debug, Clone)]
pub enum Reply {
    /// Respond with this body
    Body(String),
    /// Fail with a transport error
    Fail,
    /// Never answer within any sane timeout
    Hang,
}

/// Fetcher that answers from a per-URL script and records every call
#[derive(Clone, Default)]
pub struct ScriptedFetcher {
    script: Arc<Mutex<HashMap<String, Vec<Reply>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue replies for `url`; the last one repeats once the queue runs dry
    pub fn on(self, url: &str, replies: Vec<Reply>) -> Self {
        self.script.lock().unwrap().insert(url.to_string(), replies);
        self
    }

    /// URLs fetched so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn next_reply(&self, url: &str) -> Reply {
        let mut script = self.script.lock().unwrap();
        match script.get_mut(url) {
            Some(replies) if replies.len() > 1 => replies.remove(0),
            Some(replies) => replies.first().cloned().unwrap_or(Reply::Fail),
            None => Reply::Fail,
        }
    }
}

impl AddressFetcher for ScriptedFetcher {
    async fn fetch(&self, url: &str) -> anyhow::Result<String> {
        self.calls.lock().unwrap().push(url.to_string());
        match self.next_reply(url) {
            Reply::Body(body) => Ok(body),
            Reply::Fail => anyhow::bail!("connection refused"),
            Reply::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                anyhow::bail!("unreachable")
            },
        }
    }
}
