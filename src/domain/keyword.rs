/// A row of the keyword table: `keyword` flags text under category `label`.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Keyword {
    pub label: String,
    pub keyword: String,
}

impl Keyword {
    pub fn new(label: impl Into<String>, keyword: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            keyword: keyword.into(),
        }
    }
}
