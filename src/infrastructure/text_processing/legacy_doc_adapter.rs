use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, ExtractedText};

use super::blocking::run_blocking;
use super::docx_adapter::DocxAdapter;
use super::office_helper::OfficeHelperSession;

/// Legacy Word documents, converted to docx by a headless office helper and
/// then read like any other docx. The helper run and the docx parse each get
/// their own time limit.
pub struct LegacyDocAdapter {
    helper_binary: PathBuf,
    conversion_timeout: Duration,
    parse_timeout: Duration,
}

impl LegacyDocAdapter {
    pub fn new(
        helper_binary: impl Into<PathBuf>,
        conversion_timeout: Duration,
        parse_timeout: Duration,
    ) -> Self {
        Self {
            helper_binary: helper_binary.into(),
            conversion_timeout,
            parse_timeout,
        }
    }

    pub fn conversion_timeout(&self) -> Duration {
        self.conversion_timeout
    }

    pub fn parse_timeout(&self) -> Duration {
        self.parse_timeout
    }
}

#[async_trait]
impl FileLoader for LegacyDocAdapter {
    #[tracing::instrument(skip(self, path), fields(document_id = %document.id.as_uuid(), filename = %document.filename))]
    async fn extract_text(
        &self,
        path: &Path,
        document: &Document,
    ) -> Result<ExtractedText, FileLoaderError> {
        let session = OfficeHelperSession::acquire(&self.helper_binary)?;
        let converted = session
            .convert_to_docx(path, self.conversion_timeout)
            .await?;

        let extracted = run_blocking(self.parse_timeout, move || {
            DocxAdapter::read_package(&converted)
        })
        .await;

        drop(session);
        extracted
    }
}
