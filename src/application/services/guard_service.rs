use std::path::Path;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::application::ports::{ContentClassifier, FileLoader, FileLoaderError, TextSplitter};
use crate::domain::{Document, ExtractionOutcome, FinalDecision, MediaPresence};

use super::chunk_aggregator::aggregate;
use super::chunk_classification::classify_chunks;
use super::verdict_fusion::fuse;

/// Screens one document: extract, chunk, classify with both classifiers,
/// aggregate per classifier, fuse.
pub struct GuardService<F: ?Sized, T: ?Sized>
where
    F: FileLoader,
    T: TextSplitter,
{
    file_loader: Arc<F>,
    text_splitter: Arc<T>,
    model_classifier: Arc<dyn ContentClassifier>,
    lexical_classifier: Arc<dyn ContentClassifier>,
    max_concurrent_chunks: usize,
}

impl<F: ?Sized, T: ?Sized> GuardService<F, T>
where
    F: FileLoader,
    T: TextSplitter,
{
    pub fn new(
        file_loader: Arc<F>,
        text_splitter: Arc<T>,
        model_classifier: Arc<dyn ContentClassifier>,
        lexical_classifier: Arc<dyn ContentClassifier>,
        max_concurrent_chunks: usize,
    ) -> Self {
        Self {
            file_loader,
            text_splitter,
            model_classifier,
            lexical_classifier,
            max_concurrent_chunks,
        }
    }

    /// Screens the file at `path`, using `filename` only to determine its
    /// format. Cancelling `cancel` drops every in-flight classification and
    /// any extraction helper still running.
    #[tracing::instrument(skip(self, path, cancel))]
    pub async fn evaluate(
        &self,
        path: &Path,
        filename: &str,
        cancel: &CancellationToken,
    ) -> Result<FinalDecision, GuardError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::info!("Document screening cancelled");
                Err(GuardError::Cancelled)
            }
            result = self.screen(path, filename) => result,
        }
    }

    /// Dispatches the document to its extraction strategy. An unregistered
    /// format is an `Unsupported` outcome, not an error.
    pub async fn extract(
        &self,
        path: &Path,
        document: &Document,
    ) -> Result<ExtractionOutcome, FileLoaderError> {
        match self.file_loader.extract_text(path, document).await {
            Ok(extracted) => Ok(extracted.into()),
            Err(FileLoaderError::UnsupportedFormat(ext)) => {
                tracing::info!(extension = %ext, "Unsupported file type");
                Ok(ExtractionOutcome::Unsupported {
                    marker: document.unsupported_marker(),
                })
            }
            Err(e) => Err(e),
        }
    }

    async fn screen(&self, path: &Path, filename: &str) -> Result<FinalDecision, GuardError> {
        let size_bytes = tokio::fs::metadata(path)
            .await
            .map_err(FileLoaderError::from)?
            .len();
        let document = Document::new(filename.to_string(), size_bytes);

        let (text, media) = match self.extract(path, &document).await? {
            ExtractionOutcome::Unsupported { marker } => {
                return Ok(FinalDecision::unsure(marker));
            }
            ExtractionOutcome::Extracted { text, media } => (text, media),
        };

        Ok(self.classify_text(&text, &document, media).await)
    }

    async fn classify_text(
        &self,
        text: &str,
        document: &Document,
        media: MediaPresence,
    ) -> FinalDecision {
        let chunks = self.text_splitter.split(text, document.id);
        tracing::debug!(
            document_id = %document.id.as_uuid(),
            chunk_count = chunks.len(),
            ?media,
            "Text extracted and chunked"
        );

        let (lexical_verdicts, model_verdicts) = tokio::join!(
            classify_chunks(
                self.lexical_classifier.as_ref(),
                &chunks,
                self.max_concurrent_chunks
            ),
            classify_chunks(
                self.model_classifier.as_ref(),
                &chunks,
                self.max_concurrent_chunks
            ),
        );

        let lexical = aggregate(&lexical_verdicts);
        let model = aggregate(&model_verdicts);
        let decision = fuse(&model, &lexical, media);

        tracing::info!(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
            lexical_safe = lexical.safe,
            model_safe = model.safe,
            status = %decision.status,
            "Document screened"
        );

        decision
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    #[error("Error processing file: {0}")]
    Extraction(#[from] FileLoaderError),
    #[error("document screening cancelled")]
    Cancelled,
}
