use std::io;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{Document, ExtractedText};

/// One extraction strategy: turns a file on disk into plain text and reports
/// whether it found embedded media. Media detection may stop at the first
/// hit and may miss media, but must never report media that is not there.
#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(
        &self,
        path: &Path,
        document: &Document,
    ) -> Result<ExtractedText, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("office helper unavailable: {0}")]
    HelperUnavailable(String),
    #[error("extraction timed out after {0:?}")]
    Timeout(Duration),
}
