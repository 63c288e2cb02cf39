use futures::StreamExt;
use futures::stream;

use crate::application::ports::ContentClassifier;
use crate::domain::{Chunk, ChunkVerdict};

/// Classifies every chunk with at most `max_concurrent` calls in flight and
/// returns the verdicts in chunk order, whatever order they completed in.
///
/// A failed call yields `ChunkVerdict::classifier_error()` for that chunk;
/// the remaining chunks are still classified.
pub async fn classify_chunks(
    classifier: &dyn ContentClassifier,
    chunks: &[Chunk],
    max_concurrent: usize,
) -> Vec<ChunkVerdict> {
    let pending: Vec<_> = chunks
        .iter()
        .map(|chunk| async move {
            let verdict = match classifier.classify(&chunk.text).await {
                Ok(verdict) => verdict,
                Err(e) => {
                    tracing::warn!(
                        classifier = classifier.name(),
                        chunk = chunk.sequence_index,
                        error = %e,
                        "Chunk classification failed, treating chunk as unsafe"
                    );
                    ChunkVerdict::classifier_error()
                }
            };
            (chunk.sequence_index, verdict)
        })
        .collect();
    let mut indexed: Vec<(usize, ChunkVerdict)> = stream::iter(pending)
        .buffer_unordered(max_concurrent.max(1))
        .collect()
        .await;

    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, verdict)| verdict).collect()
}
