use async_trait::async_trait;

use crate::domain::ChunkVerdict;

use super::{LlmClientError, RepositoryError};

/// A text classifier judging one chunk at a time. The pipeline treats every
/// implementation the same way and knows nothing about how it decides.
#[async_trait]
pub trait ContentClassifier: Send + Sync {
    fn name(&self) -> &str;

    async fn classify(&self, text: &str) -> Result<ChunkVerdict, ClassifierError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("classifier backend failed: {0}")]
    Backend(String),
    #[error("invalid classifier response: {0}")]
    InvalidResponse(String),
}

impl From<LlmClientError> for ClassifierError {
    fn from(err: LlmClientError) -> Self {
        match err {
            LlmClientError::InvalidResponse(msg) => ClassifierError::InvalidResponse(msg),
            other => ClassifierError::Backend(other.to_string()),
        }
    }
}

impl From<RepositoryError> for ClassifierError {
    fn from(err: RepositoryError) -> Self {
        ClassifierError::Backend(err.to_string())
    }
}
