use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use crate::application::ports::{KeywordRepository, RepositoryError};
use crate::domain::Keyword;

pub struct PgKeywordRepository {
    pool: PgPool,
}

impl PgKeywordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeywordRepository for PgKeywordRepository {
    #[instrument(skip(self))]
    async fn list_keywords(&self) -> Result<Vec<Keyword>, RepositoryError> {
        sqlx::query_as::<_, Keyword>(
            r#"
            SELECT label, keyword
            FROM keywords
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}
