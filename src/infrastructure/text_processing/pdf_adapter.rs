use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, ExtractedText};

use super::blocking::{DEFAULT_EXTRACTION_TIMEOUT, run_blocking};
use super::text_sanitizer::sanitize_extracted_text;

/// PDF text per page, sanitized and separated by blank lines. A page whose
/// text cannot be extracted fails the whole document. Image scanning stops at
/// the first page that reports an image; an image lookup error counts as no
/// image.
pub struct PdfAdapter {
    timeout: Duration,
}

impl PdfAdapter {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn extract_document(path: &Path) -> Result<ExtractedText, FileLoaderError> {
        let doc = PdfDocument::open(path)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let mut pages = Vec::with_capacity(page_count);
        let mut has_media = false;

        for page_index in 0..page_count {
            let raw = doc.extract_text(page_index).map_err(|e| {
                FileLoaderError::ExtractionFailed(format!(
                    "failed to extract page {page_index}: {e}"
                ))
            })?;
            let text = sanitize_extracted_text(&raw);
            if !text.is_empty() {
                pages.push(text);
            }

            if !has_media {
                has_media = doc
                    .extract_images(page_index)
                    .map(|images| !images.is_empty())
                    .unwrap_or(false);
            }
        }

        tracing::info!(page_count, text_pages = pages.len(), has_media, "PDF text extraction complete");

        Ok(ExtractedText::new(pages.join("\n\n"), has_media))
    }
}

impl Default for PdfAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_EXTRACTION_TIMEOUT)
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, path),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        path: &Path,
        document: &Document,
    ) -> Result<ExtractedText, FileLoaderError> {
        let path = path.to_path_buf();
        run_blocking(self.timeout, move || Self::extract_document(&path)).await
    }
}
