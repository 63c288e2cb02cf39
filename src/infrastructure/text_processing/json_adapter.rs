use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, ExtractedText};

/// A JSON document, validated and re-serialized pretty-printed with object
/// keys in source order.
pub struct JsonAdapter;

#[async_trait]
impl FileLoader for JsonAdapter {
    async fn extract_text(
        &self,
        path: &Path,
        _document: &Document,
    ) -> Result<ExtractedText, FileLoaderError> {
        let data = tokio::fs::read(path).await?;
        let value: serde_json::Value = serde_json::from_slice(&data)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("malformed JSON: {e}")))?;
        let text = serde_json::to_string_pretty(&value)
            .map_err(|e| FileLoaderError::ExtractionFailed(e.to_string()))?;
        Ok(ExtractedText::text_only(text))
    }
}

/// JSON lines, taken line by line without parsing each record.
pub struct JsonLinesAdapter;

#[async_trait]
impl FileLoader for JsonLinesAdapter {
    async fn extract_text(
        &self,
        path: &Path,
        _document: &Document,
    ) -> Result<ExtractedText, FileLoaderError> {
        let content = tokio::fs::read_to_string(path).await?;
        let text = content.lines().collect::<Vec<_>>().join("\n");
        Ok(ExtractedText::text_only(text))
    }
}
