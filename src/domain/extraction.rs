/// Whether a document carries embedded images or objects that no text
/// classifier looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaPresence {
    Present,
    Absent,
    Unknown,
}

impl MediaPresence {
    pub fn is_present(&self) -> bool {
        matches!(self, MediaPresence::Present)
    }
}

impl From<bool> for MediaPresence {
    fn from(found: bool) -> Self {
        if found {
            MediaPresence::Present
        } else {
            MediaPresence::Absent
        }
    }
}

/// Output of a single extraction strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    pub has_media: bool,
}

impl ExtractedText {
    pub fn new(text: String, has_media: bool) -> Self {
        Self { text, has_media }
    }

    pub fn text_only(text: String) -> Self {
        Self {
            text,
            has_media: false,
        }
    }
}

/// Result of dispatching a document to the strategy registry. Hard failures
/// are carried separately as `FileLoaderError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    Extracted {
        text: String,
        media: MediaPresence,
    },
    Unsupported {
        marker: String,
    },
}

impl ExtractionOutcome {
    pub fn media(&self) -> MediaPresence {
        match self {
            ExtractionOutcome::Extracted { media, .. } => *media,
            ExtractionOutcome::Unsupported { .. } => MediaPresence::Unknown,
        }
    }
}

impl From<ExtractedText> for ExtractionOutcome {
    fn from(extracted: ExtractedText) -> Self {
        ExtractionOutcome::Extracted {
            text: extracted.text,
            media: extracted.has_media.into(),
        }
    }
}
