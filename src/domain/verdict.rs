/// Separator between rendered labels inside one classifier's summary.
pub const LABEL_SEPARATOR: &str = "<br>";

/// One sub-finding of a structured label, e.g. a keyword category and the
/// keywords that matched it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub category: String,
    pub detail: String,
}

impl Finding {
    pub fn new(category: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    Category(String),
    Findings(Vec<Finding>),
}

impl Label {
    pub fn category(name: impl Into<String>) -> Self {
        Label::Category(name.into())
    }
}

/// A classifier's judgement of one chunk. A label only accompanies an
/// unsafe verdict; an unsafe verdict without one is unsafe but unclassified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkVerdict {
    pub safe: bool,
    pub label: Option<Label>,
}

impl ChunkVerdict {
    pub fn safe() -> Self {
        Self {
            safe: true,
            label: None,
        }
    }

    pub fn flagged(label: Option<Label>) -> Self {
        Self { safe: false, label }
    }

    /// Verdict recorded when the classifier call itself failed.
    pub fn classifier_error() -> Self {
        Self::flagged(Some(Label::category("error")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEntry {
    pub label: String,
    pub detail: Option<String>,
}

impl LabelEntry {
    fn render(&self) -> String {
        match self.detail.as_deref() {
            Some(detail) if !detail.is_empty() => format!("{}: {}", self.label, detail),
            _ => self.label.clone(),
        }
    }
}

/// One classifier's verdict over a whole document. `labels` keeps first-seen
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentVerdict {
    pub safe: bool,
    pub labels: Vec<LabelEntry>,
}

impl DocumentVerdict {
    pub fn safe() -> Self {
        Self {
            safe: true,
            labels: Vec::new(),
        }
    }

    pub fn summary(&self) -> String {
        self.labels
            .iter()
            .map(LabelEntry::render)
            .collect::<Vec<_>>()
            .join(LABEL_SEPARATOR)
    }
}
