mod blocking;
mod composite_file_loader;
mod csv_adapter;
mod docx_adapter;
mod extractor_factory;
mod json_adapter;
mod legacy_doc_adapter;
mod office_helper;
mod office_package;
mod ole_inspector;
mod overlap_chunker;
mod pdf_adapter;
mod plain_text_adapter;
mod spreadsheet_adapter;
mod text_sanitizer;
mod xml_adapter;

pub use blocking::DEFAULT_EXTRACTION_TIMEOUT;
pub use composite_file_loader::CompositeFileLoader;
pub use csv_adapter::CsvAdapter;
pub use docx_adapter::DocxAdapter;
pub use extractor_factory::{ExtractorFactory, ExtractorFactoryError};
pub use json_adapter::{JsonAdapter, JsonLinesAdapter};
pub use legacy_doc_adapter::LegacyDocAdapter;
pub use office_helper::OfficeHelperSession;
pub use ole_inspector::has_embedded_media;
pub use overlap_chunker::{DEFAULT_MAX_CHUNK_SIZE, DEFAULT_OVERLAP, OverlapChunker};
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;
pub use spreadsheet_adapter::{SpreadsheetAdapter, SpreadsheetKind};
pub use text_sanitizer::sanitize_extracted_text;
pub use xml_adapter::XmlAdapter;
