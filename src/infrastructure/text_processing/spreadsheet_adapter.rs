use std::fmt::Display;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use calamine::{Data, Reader, Xls, Xlsx, open_workbook};

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, ExtractedText};

use super::blocking::{DEFAULT_EXTRACTION_TIMEOUT, run_blocking};
use super::ole_inspector::has_embedded_media;
use super::office_package::OfficePackage;

const XLSX_MEDIA_PREFIX: &str = "xl/media/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadsheetKind {
    /// Office Open XML workbook.
    Xlsx,
    /// BIFF workbook in an OLE compound file.
    Xls,
}

/// Workbooks: every sheet, one line per row, non-empty cells joined by a
/// space.
pub struct SpreadsheetAdapter {
    kind: SpreadsheetKind,
    timeout: Duration,
}

impl SpreadsheetAdapter {
    pub fn new(kind: SpreadsheetKind, timeout: Duration) -> Self {
        Self { kind, timeout }
    }

    pub fn xlsx() -> Self {
        Self::new(SpreadsheetKind::Xlsx, DEFAULT_EXTRACTION_TIMEOUT)
    }

    pub fn xls() -> Self {
        Self::new(SpreadsheetKind::Xls, DEFAULT_EXTRACTION_TIMEOUT)
    }

    fn read_workbook(kind: SpreadsheetKind, path: &Path) -> Result<ExtractedText, FileLoaderError> {
        match kind {
            SpreadsheetKind::Xlsx => {
                let mut workbook: Xlsx<BufReader<File>> =
                    open_workbook(path).map_err(workbook_error)?;
                let text = sheet_lines(&mut workbook)?.join("\n");
                let has_media = OfficePackage::open(path)?.has_part_under(XLSX_MEDIA_PREFIX);
                Ok(ExtractedText::new(text, has_media))
            }
            SpreadsheetKind::Xls => {
                let mut workbook: Xls<BufReader<File>> =
                    open_workbook(path).map_err(workbook_error)?;
                let text = sheet_lines(&mut workbook)?.join("\n");
                Ok(ExtractedText::new(text, has_embedded_media(path)))
            }
        }
    }
}

fn sheet_lines<R>(workbook: &mut R) -> Result<Vec<String>, FileLoaderError>
where
    R: Reader<BufReader<File>>,
    R::Error: Display,
{
    let mut lines = Vec::new();

    for name in workbook.sheet_names() {
        let range = workbook.worksheet_range(&name).map_err(workbook_error)?;
        for row in range.rows() {
            let cells: Vec<String> = row
                .iter()
                .filter(|cell| !matches!(cell, Data::Empty))
                .map(|cell| cell.to_string())
                .collect();
            lines.push(cells.join(" "));
        }
    }

    Ok(lines)
}

fn workbook_error(e: impl Display) -> FileLoaderError {
    FileLoaderError::ExtractionFailed(format!("failed to read workbook: {e}"))
}

#[async_trait]
impl FileLoader for SpreadsheetAdapter {
    #[tracing::instrument(skip(self, path), fields(document_id = %document.id.as_uuid(), filename = %document.filename, kind = ?self.kind))]
    async fn extract_text(
        &self,
        path: &Path,
        document: &Document,
    ) -> Result<ExtractedText, FileLoaderError> {
        let path = path.to_path_buf();
        let kind = self.kind;
        run_blocking(self.timeout, move || Self::read_workbook(kind, &path)).await
    }
}
