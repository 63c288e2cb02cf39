use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, ExtractedText};

use super::blocking::{DEFAULT_EXTRACTION_TIMEOUT, run_blocking};
use super::office_package::{OfficePackage, parse_relationships, wordprocessing_text};

const DOCUMENT_PART: &str = "word/document.xml";
const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";

/// Word documents (Office Open XML). Media is detected from image
/// relationships of the main document part.
pub struct DocxAdapter {
    timeout: Duration,
}

impl DocxAdapter {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub(crate) fn read_package(path: &Path) -> Result<ExtractedText, FileLoaderError> {
        let mut package = OfficePackage::open(path)?;

        let body = package.read_part(DOCUMENT_PART)?.ok_or_else(|| {
            FileLoaderError::ExtractionFailed(format!("missing {DOCUMENT_PART}"))
        })?;
        let text = wordprocessing_text(&body)?;

        let has_media = match package.read_part(DOCUMENT_RELS_PART)? {
            Some(rels) => parse_relationships(&rels)?.iter().any(|rel| rel.is_image()),
            None => false,
        };

        Ok(ExtractedText::new(text, has_media))
    }
}

impl Default for DocxAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_EXTRACTION_TIMEOUT)
    }
}

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(skip(self, path), fields(document_id = %document.id.as_uuid(), filename = %document.filename))]
    async fn extract_text(
        &self,
        path: &Path,
        document: &Document,
    ) -> Result<ExtractedText, FileLoaderError> {
        let path = path.to_path_buf();
        run_blocking(self.timeout, move || Self::read_package(&path)).await
    }
}
