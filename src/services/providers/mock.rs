//! Mock provider implementation for testing.

use super::{FinishReason, GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Scripted reply for the mock provider.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return the given text as the completion.
    Text(String),
    /// Return a response with no text payload.
    Empty,
    /// Fail the call with the given error.
    Fail(ProviderError),
}

/// Mock text provider for testing.
///
/// Records every prompt it receives so tests can assert both the substituted
/// prompt contents and that validation failures never reach the provider.
pub struct MockTextProvider {
    reply: Mutex<MockReply>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockTextProvider {
    pub fn replying(reply: MockReply) -> Self {
        Self {
            reply: Mutex::new(reply),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Replace the scripted reply for subsequent calls.
    pub fn set_reply(&self, reply: MockReply) {
        *self.reply.lock().unwrap() = reply;
    }

    /// Number of times `generate` was invoked.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every prompt passed to `generate`, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        match self.reply.lock().unwrap().clone() {
            MockReply::Text(text) => Ok(ProviderResponse {
                input_tokens: prompt.len() as i32 / 4,
                output_tokens: text.len() as i32 / 4,
                text: Some(text),
                finish_reason: FinishReason::Complete,
            }),
            MockReply::Empty => Ok(ProviderResponse {
                text: None,
                input_tokens: prompt.len() as i32 / 4,
                output_tokens: 0,
                finish_reason: FinishReason::Complete,
            }),
            MockReply::Fail(err) => Err(err),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}
