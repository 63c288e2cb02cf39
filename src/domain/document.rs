use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

/// A document submitted for screening. `filename` is the caller-declared
/// logical name; only its extension is used to pick a format.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub filename: String,
    pub extension: String,
    pub size_bytes: u64,
}

impl Document {
    pub fn new(filename: String, size_bytes: u64) -> Self {
        let extension = Path::new(&filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        Self {
            id: DocumentId::new(),
            filename,
            extension,
            size_bytes,
        }
    }

    pub fn format(&self) -> Option<DocumentFormat> {
        DocumentFormat::from_extension(&self.extension)
    }

    /// Marker returned to callers when no strategy handles this document.
    pub fn unsupported_marker(&self) -> String {
        if self.extension.is_empty() {
            "Unsupported file type: ".to_string()
        } else {
            format!("Unsupported file type: .{}", self.extension)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum DocumentFormat {
    PlainText,
    Csv,
    Json,
    JsonLines,
    Xml,
    Xls,
    Xlsx,
    Doc,
    Docx,
    Pdf,
}

impl DocumentFormat {
    pub const ALL: [DocumentFormat; 10] = [
        Self::PlainText,
        Self::Csv,
        Self::Json,
        Self::JsonLines,
        Self::Xml,
        Self::Xls,
        Self::Xlsx,
        Self::Doc,
        Self::Docx,
        Self::Pdf,
    ];

    pub fn from_extension(extension: &str) -> Option<Self> {
        let ext = extension.trim_start_matches('.').to_lowercase();
        Self::ALL.into_iter().find(|f| f.as_extension() == ext)
    }

    pub fn as_extension(&self) -> &'static str {
        match self {
            Self::PlainText => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::JsonLines => "jsonl",
            Self::Xml => "xml",
            Self::Xls => "xls",
            Self::Xlsx => "xlsx",
            Self::Doc => "doc",
            Self::Docx => "docx",
            Self::Pdf => "pdf",
        }
    }
}

impl FromStr for DocumentFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s).ok_or_else(|| format!("Invalid document format: {}", s))
    }
}

impl TryFrom<String> for DocumentFormat {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_extension())
    }
}
