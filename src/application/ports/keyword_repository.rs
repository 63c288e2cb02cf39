use async_trait::async_trait;

use crate::domain::Keyword;

use super::RepositoryError;

/// Read-only source of the keyword table used by the lexical classifier.
#[async_trait]
pub trait KeywordRepository: Send + Sync {
    async fn list_keywords(&self) -> Result<Vec<Keyword>, RepositoryError>;
}
