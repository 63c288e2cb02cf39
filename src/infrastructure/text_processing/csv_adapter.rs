use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, ExtractedText};

use super::plain_text_adapter::decode_ignoring_invalid;

/// CSV rendered one record per line, fields separated by `", "`.
pub struct CsvAdapter;

impl CsvAdapter {
    fn render(text: &str) -> Result<String, FileLoaderError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut lines = Vec::new();
        for record in reader.records() {
            let record = record
                .map_err(|e| FileLoaderError::ExtractionFailed(format!("malformed CSV: {e}")))?;
            lines.push(record.iter().collect::<Vec<_>>().join(", "));
        }

        Ok(lines.join("\n"))
    }
}

#[async_trait]
impl FileLoader for CsvAdapter {
    async fn extract_text(
        &self,
        path: &Path,
        _document: &Document,
    ) -> Result<ExtractedText, FileLoaderError> {
        let data = tokio::fs::read(path).await?;
        let text = decode_ignoring_invalid(&data);
        Ok(ExtractedText::text_only(Self::render(&text)?))
    }
}
