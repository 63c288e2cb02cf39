use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{
    ClassifierError, ContentClassifier, KeywordRepository, RepositoryError,
};
use crate::domain::{ChunkVerdict, Finding, Keyword, Label};
use crate::infrastructure::observability::sanitize_prompt;

/// Lexical classifier: flags a chunk when any keyword from the table occurs
/// in it, ignoring case. Findings group matched keywords by their label in
/// table order.
pub struct KeywordClassifier {
    keywords: Vec<NormalizedKeyword>,
}

struct NormalizedKeyword {
    label: String,
    keyword: String,
    needle: String,
}

impl KeywordClassifier {
    pub fn new(keywords: Vec<Keyword>) -> Self {
        let keywords = keywords
            .into_iter()
            .filter(|k| !k.keyword.trim().is_empty())
            .map(|k| NormalizedKeyword {
                needle: k.keyword.to_lowercase(),
                label: k.label,
                keyword: k.keyword,
            })
            .collect();

        Self { keywords }
    }

    /// Loads the keyword table once. The table is read-only for the lifetime
    /// of the classifier.
    pub async fn load(repository: Arc<dyn KeywordRepository>) -> Result<Self, RepositoryError> {
        let keywords = repository.list_keywords().await?;
        tracing::info!(keyword_count = keywords.len(), "Keyword table loaded");
        Ok(Self::new(keywords))
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    pub fn scan(&self, text: &str) -> ChunkVerdict {
        let haystack = text.to_lowercase();
        let mut grouped: Vec<(&str, Vec<&str>)> = Vec::new();

        for entry in self.keywords.iter().filter(|k| haystack.contains(&k.needle)) {
            match grouped.iter_mut().find(|(label, _)| *label == entry.label) {
                Some((_, matched)) => {
                    if !matched.contains(&entry.keyword.as_str()) {
                        matched.push(entry.keyword.as_str());
                    }
                }
                None => grouped.push((entry.label.as_str(), vec![entry.keyword.as_str()])),
            }
        }

        if grouped.is_empty() {
            return ChunkVerdict::safe();
        }

        let findings = grouped
            .into_iter()
            .map(|(label, matched)| Finding::new(label, matched.join(", ")))
            .collect();
        ChunkVerdict::flagged(Some(Label::Findings(findings)))
    }
}

#[async_trait]
impl ContentClassifier for KeywordClassifier {
    fn name(&self) -> &str {
        "keyword"
    }

    async fn classify(&self, text: &str) -> Result<ChunkVerdict, ClassifierError> {
        let verdict = self.scan(text);
        if !verdict.safe {
            tracing::debug!(chunk = %sanitize_prompt(text), "Keyword match");
        }
        Ok(verdict)
    }
}
