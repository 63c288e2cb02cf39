use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ClassifierError, ContentClassifier, LlmClient};
use crate::domain::{ChatMessage, ChunkVerdict, Label};
use crate::infrastructure::observability::sanitize_prompt;

/// Moderation-model classifier speaking the Llama Guard reply convention:
/// the first non-empty line is `safe` or `unsafe`, and an unsafe reply names
/// its hazard category (e.g. `S1`) on the following line.
pub struct LlamaGuardClassifier {
    llm_client: Arc<dyn LlmClient>,
}

impl LlamaGuardClassifier {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }

    /// The chunk is sent as the agent turn of a conversation so the model
    /// judges the content itself rather than a request for it.
    fn build_messages(text: &str) -> [ChatMessage; 2] {
        [ChatMessage::user(""), ChatMessage::assistant(text)]
    }

    pub fn parse_reply(reply: &str) -> ChunkVerdict {
        let mut lines = reply.lines().map(str::trim).filter(|line| !line.is_empty());

        match lines.next() {
            Some(first) if first.eq_ignore_ascii_case("safe") => ChunkVerdict::safe(),
            _ => ChunkVerdict::flagged(lines.next().map(Label::category)),
        }
    }
}

#[async_trait]
impl ContentClassifier for LlamaGuardClassifier {
    fn name(&self) -> &str {
        "llama_guard"
    }

    async fn classify(&self, text: &str) -> Result<ChunkVerdict, ClassifierError> {
        tracing::debug!(chunk = %sanitize_prompt(text), "Sending chunk to moderation model");

        let reply = self.llm_client.complete(&Self::build_messages(text)).await?;
        let verdict = Self::parse_reply(&reply);

        tracing::debug!(
            safe = verdict.safe,
            reply = %sanitize_prompt(&reply),
            "Moderation model replied"
        );
        Ok(verdict)
    }
}
