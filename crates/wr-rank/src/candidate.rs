//! Candidate documents.

use serde::{Deserialize, Serialize};

/// A short document to be ranked.
///
/// Missing text fields are treated as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Stable identifier within a ranking pass.
    pub id: String,
    /// Document title.
    pub title: String,
    /// Short excerpt, usually a search snippet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Longer summary, usually the lead paragraph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl Candidate {
    /// Creates a candidate with only an id and title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            excerpt: None,
            summary: None,
        }
    }

    /// Sets the excerpt.
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    /// Sets the summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Returns the text that is tokenized for this candidate: title, excerpt and summary
    /// joined by single spaces.
    pub fn text(&self) -> String {
        format!(
            "{} {} {}",
            self.title,
            self.excerpt.as_deref().unwrap_or_default(),
            self.summary.as_deref().unwrap_or_default()
        )
    }
}
