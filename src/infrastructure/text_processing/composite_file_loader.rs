use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat, ExtractedText};

/// Registry of extraction strategies keyed by format. Adding a format means
/// registering one more strategy.
pub struct CompositeFileLoader {
    adapters: HashMap<DocumentFormat, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(DocumentFormat, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    pub fn supports(&self, format: DocumentFormat) -> bool {
        self.adapters.contains_key(&format)
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        path: &Path,
        document: &Document,
    ) -> Result<ExtractedText, FileLoaderError> {
        let adapter = document
            .format()
            .and_then(|format| self.adapters.get(&format))
            .ok_or_else(|| FileLoaderError::UnsupportedFormat(document.extension.clone()))?;

        adapter.extract_text(path, document).await
    }
}
