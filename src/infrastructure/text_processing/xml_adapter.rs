use std::path::Path;

use async_trait::async_trait;
use quick_xml::Reader;
use quick_xml::events::Event;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, ExtractedText};

/// XML documents are checked for well-formedness and classified as written,
/// markup included.
pub struct XmlAdapter;

impl XmlAdapter {
    fn ensure_well_formed(xml: &str) -> Result<(), FileLoaderError> {
        let mut reader = Reader::from_str(xml);
        let mut depth = 0usize;
        let mut saw_root = false;

        loop {
            let event = reader.read_event().map_err(|e| {
                FileLoaderError::ExtractionFailed(format!(
                    "malformed XML at byte {}: {e}",
                    reader.buffer_position()
                ))
            })?;

            match event {
                Event::Start(_) | Event::Empty(_) if depth == 0 && saw_root => {
                    return Err(junk_after_root());
                }
                Event::Start(_) => {
                    depth += 1;
                    saw_root = true;
                }
                Event::Empty(_) => saw_root = true,
                Event::End(_) => {
                    depth = depth.checked_sub(1).ok_or_else(|| {
                        FileLoaderError::ExtractionFailed("unexpected closing tag".to_string())
                    })?;
                }
                Event::Text(text) if depth == 0 => {
                    let stray = text.iter().any(|b| !b.is_ascii_whitespace());
                    if stray && saw_root {
                        return Err(junk_after_root());
                    }
                    if stray {
                        return Err(FileLoaderError::ExtractionFailed(
                            "text before document element".to_string(),
                        ));
                    }
                }
                Event::CData(_) if depth == 0 => {
                    return Err(FileLoaderError::ExtractionFailed(
                        "character data outside document element".to_string(),
                    ));
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !saw_root {
            return Err(FileLoaderError::ExtractionFailed(
                "no root element found".to_string(),
            ));
        }
        if depth != 0 {
            return Err(FileLoaderError::ExtractionFailed(
                "unclosed element at end of document".to_string(),
            ));
        }
        Ok(())
    }
}

fn junk_after_root() -> FileLoaderError {
    FileLoaderError::ExtractionFailed("junk after document element".to_string())
}

#[async_trait]
impl FileLoader for XmlAdapter {
    async fn extract_text(
        &self,
        path: &Path,
        _document: &Document,
    ) -> Result<ExtractedText, FileLoaderError> {
        let xml = tokio::fs::read_to_string(path).await?;
        Self::ensure_well_formed(&xml)?;
        Ok(ExtractedText::text_only(xml))
    }
}
