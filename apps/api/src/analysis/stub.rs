//! Scripted `TextModel` for tests. Counts calls and remembers the last prompt.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{LlmError, TextModel};

enum Script {
    Reply(String),
    Fail(String),
}

pub struct StubModel {
    script: Script,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl StubModel {
    pub fn replying(text: &str) -> Self {
        Self::with_script(Script::Reply(text.to_string()))
    }

    /// Every call fails with an API error carrying `message`.
    pub fn failing(message: &str) -> Self {
        Self::with_script(Script::Fail(message.to_string()))
    }

    fn with_script(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextModel for StubModel {
    async fn generate_content(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        match &self.script {
            Script::Reply(text) => Ok(text.clone()),
            Script::Fail(message) => Err(LlmError::Api {
                status: 500,
                message: message.clone(),
            }),
        }
    }
}
