use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::FileLoader;
use crate::domain::DocumentFormat;
use crate::presentation::config::ExtractionSettings;

use super::composite_file_loader::CompositeFileLoader;
use super::csv_adapter::CsvAdapter;
use super::docx_adapter::DocxAdapter;
use super::json_adapter::{JsonAdapter, JsonLinesAdapter};
use super::legacy_doc_adapter::LegacyDocAdapter;
use super::pdf_adapter::PdfAdapter;
use super::plain_text_adapter::PlainTextAdapter;
use super::spreadsheet_adapter::{SpreadsheetAdapter, SpreadsheetKind};
use super::xml_adapter::XmlAdapter;

#[derive(Debug, thiserror::Error)]
pub enum ExtractorFactoryError {
    #[error("at least one document format must be enabled")]
    NoFormatsEnabled,
    #[error("office_helper.binary is required when the doc format is enabled")]
    MissingOfficeHelperBinary,
}

pub struct ExtractorFactory;

impl ExtractorFactory {
    pub fn create(
        settings: &ExtractionSettings,
    ) -> Result<CompositeFileLoader, ExtractorFactoryError> {
        if settings.formats.is_empty() {
            return Err(ExtractorFactoryError::NoFormatsEnabled);
        }

        let timeout = Duration::from_secs(settings.timeout_secs);
        let mut adapters: Vec<(DocumentFormat, Arc<dyn FileLoader>)> = Vec::new();

        for &format in &settings.formats {
            let adapter: Arc<dyn FileLoader> = match format {
                DocumentFormat::PlainText => Arc::new(PlainTextAdapter),
                DocumentFormat::Csv => Arc::new(CsvAdapter),
                DocumentFormat::Json => Arc::new(JsonAdapter),
                DocumentFormat::JsonLines => Arc::new(JsonLinesAdapter),
                DocumentFormat::Xml => Arc::new(XmlAdapter),
                DocumentFormat::Xlsx => {
                    Arc::new(SpreadsheetAdapter::new(SpreadsheetKind::Xlsx, timeout))
                }
                DocumentFormat::Xls => {
                    Arc::new(SpreadsheetAdapter::new(SpreadsheetKind::Xls, timeout))
                }
                DocumentFormat::Docx => Arc::new(DocxAdapter::new(timeout)),
                DocumentFormat::Doc => {
                    let binary = settings.office_helper.binary.trim();
                    if binary.is_empty() {
                        return Err(ExtractorFactoryError::MissingOfficeHelperBinary);
                    }
                    Arc::new(LegacyDocAdapter::new(
                        binary,
                        Duration::from_secs(settings.office_helper.timeout_secs),
                        timeout,
                    ))
                }
                DocumentFormat::Pdf => Arc::new(PdfAdapter::new(timeout)),
            };
            adapters.push((format, adapter));
        }

        tracing::info!(formats = ?settings.formats, "Extraction strategies registered");
        Ok(CompositeFileLoader::new(adapters))
    }
}
