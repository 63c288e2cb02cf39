use crate::domain::{Chunk, DocumentId};

/// Splits extracted text into classifier-sized chunks. Splitting is pure and
/// restartable; calling it twice yields the same chunks.
pub trait TextSplitter: Send + Sync {
    fn split(&self, text: &str, document_id: DocumentId) -> Vec<Chunk>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextSplitterError {
    #[error("chunk size must be greater than zero")]
    InvalidChunkSize,
}
