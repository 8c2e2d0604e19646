/// One decoded search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimeRecord {
    pub title: String,
    /// Kept exactly as the API returned it; blank handling belongs to presentation.
    pub synopsis: Option<String>,
}

impl AnimeRecord {
    pub fn new(title: impl Into<String>, synopsis: Option<String>) -> Self {
        Self {
            title: title.into(),
            synopsis,
        }
    }

    /// Synopsis with surrounding whitespace removed, or `None` when absent or blank.
    pub fn synopsis_text(&self) -> Option<&str> {
        self.synopsis
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Ordered records produced by a single search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    records: Vec<AnimeRecord>,
}

impl SearchResult {
    pub fn new(records: Vec<AnimeRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[AnimeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop everything past `limit`, keeping source order.
    pub fn truncated(mut self, limit: usize) -> Self {
        self.records.truncate(limit);
        self
    }

    pub fn into_records(self) -> Vec<AnimeRecord> {
        self.records
    }
}

impl From<Vec<AnimeRecord>> for SearchResult {
    fn from(records: Vec<AnimeRecord>) -> Self {
        Self::new(records)
    }
}
