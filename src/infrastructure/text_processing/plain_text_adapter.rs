use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, ExtractedText};

/// Plain text. Bytes that are not valid UTF-8 are dropped.
pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(
        &self,
        path: &Path,
        _document: &Document,
    ) -> Result<ExtractedText, FileLoaderError> {
        let data = tokio::fs::read(path).await?;
        Ok(ExtractedText::text_only(decode_ignoring_invalid(&data)))
    }
}

pub(crate) fn decode_ignoring_invalid(data: &[u8]) -> String {
    String::from_utf8_lossy(data).replace(char::REPLACEMENT_CHARACTER, "")
}
