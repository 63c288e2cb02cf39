//! Helpers for Office Open XML packages (docx, xlsx): zip containers of XML
//! parts linked by relationship tables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;
use zip::result::ZipError;

use crate::application::ports::FileLoaderError;

const IMAGE_RELATIONSHIP_SUFFIX: &str = "/image";

pub(crate) struct OfficePackage {
    archive: ZipArchive<File>,
}

impl OfficePackage {
    pub fn open(path: &Path) -> Result<Self, FileLoaderError> {
        let file = File::open(path)?;
        let archive = ZipArchive::new(file).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("not an office package: {e}"))
        })?;
        Ok(Self { archive })
    }

    /// Reads a part as UTF-8, `None` if the package has no such part.
    pub fn read_part(&mut self, name: &str) -> Result<Option<String>, FileLoaderError> {
        let mut part = match self.archive.by_name(name) {
            Ok(part) => part,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => {
                return Err(FileLoaderError::ExtractionFailed(format!(
                    "failed to read {name}: {e}"
                )));
            }
        };

        let mut content = String::new();
        part.read_to_string(&mut content)?;
        Ok(Some(content))
    }

    pub fn has_part_under(&self, prefix: &str) -> bool {
        self.archive.file_names().any(|name| name.starts_with(prefix))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Relationship {
    pub rel_type: String,
    pub target: String,
}

impl Relationship {
    pub fn is_image(&self) -> bool {
        self.rel_type.ends_with(IMAGE_RELATIONSHIP_SUFFIX)
    }
}

pub(crate) fn parse_relationships(xml: &str) -> Result<Vec<Relationship>, FileLoaderError> {
    let mut reader = Reader::from_str(xml);
    let mut relationships = Vec::new();

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                let mut rel_type = String::new();
                let mut target = String::new();
                for attr in e.attributes() {
                    let attr = attr.map_err(|e| FileLoaderError::ExtractionFailed(e.to_string()))?;
                    let value = attr.unescape_value().map_err(xml_error)?.into_owned();
                    match attr.key.as_ref() {
                        b"Type" => rel_type = value,
                        b"Target" => target = value,
                        _ => {}
                    }
                }
                relationships.push(Relationship { rel_type, target });
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(relationships)
}

/// Text of a WordprocessingML body: runs concatenated, one line per
/// paragraph.
pub(crate) fn wordprocessing_text(xml: &str) -> Result<String, FileLoaderError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(e) if e.local_name().as_ref() == b"t" => in_text_run = true,
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" => current.push('\t'),
                b"br" | b"cr" => current.push('\n'),
                b"p" => paragraphs.push(String::new()),
                _ => {}
            },
            Event::Text(t) if in_text_run => current.push_str(&t.unescape().map_err(xml_error)?),
            Event::Eof => break,
            _ => {}
        }
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }

    Ok(paragraphs.join("\n"))
}

fn xml_error(e: quick_xml::Error) -> FileLoaderError {
    FileLoaderError::ExtractionFailed(format!("malformed package XML: {e}"))
}
