//! Reading history.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wr_config::HistorySettings;

/// A consumed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Title of the consumed document.
    pub title: String,
    /// Language code the document was read in.
    pub lang: String,
    /// When the document was consumed.
    pub ts: DateTime<Utc>,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current time.
    pub fn now(title: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lang: lang.into(),
            ts: Utc::now(),
        }
    }
}

/// Bounded newest-first list of consumed documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    /// Entries, newest first.
    entries: VecDeque<HistoryEntry>,
    /// Maximum number of entries.
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(HistorySettings::default().capacity)
    }
}

impl History {
    /// Creates an empty history.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Restores a history from newest-first entries, dropping any beyond capacity.
    pub fn from_entries(entries: impl IntoIterator<Item = HistoryEntry>, capacity: usize) -> Self {
        Self {
            entries: entries.into_iter().take(capacity).collect(),
            capacity,
        }
    }

    /// Returns a history with `entry` prepended, trimmed to capacity.
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut next = self.clone();
        next.entries.push_front(entry);
        next.entries.truncate(self.capacity);
        next
    }

    /// Titles of the `window` most recent entries, newest first.
    pub fn recent_titles(&self, window: usize) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .take(window)
            .map(|entry| entry.title.as_str())
    }

    /// Iterates over entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been consumed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Consumes the history, returning entries newest first.
    pub fn into_entries(self) -> Vec<HistoryEntry> {
        self.entries.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Entry with a fixed timestamp.
    fn entry(title: &str) -> HistoryEntry {
        HistoryEntry {
            title: title.to_string(),
            lang: "de".to_string(),
            ts: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    #[test]
    fn record_prepends() {
        let history = History::new(5).record(entry("Kant")).record(entry("Hegel"));
        let titles: Vec<&str> = history.recent_titles(10).collect();
        assert_eq!(titles, vec!["Hegel", "Kant"]);
    }

    #[test]
    fn record_leaves_original_untouched() {
        let history = History::new(5);
        let next = history.record(entry("Kant"));
        assert!(history.is_empty());
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn capacity_drops_oldest() {
        let mut history = History::new(3);
        for title in ["a", "b", "c", "d"] {
            history = history.record(entry(title));
        }
        let titles: Vec<&str> = history.recent_titles(10).collect();
        assert_eq!(titles, vec!["d", "c", "b"]);
    }

    #[test]
    fn recent_titles_respects_window() {
        let history = History::from_entries(vec![entry("c"), entry("b"), entry("a")], 10);
        let titles: Vec<&str> = history.recent_titles(2).collect();
        assert_eq!(titles, vec!["c", "b"]);
    }

    #[test]
    fn from_entries_trims_to_capacity() {
        let history = History::from_entries(vec![entry("c"), entry("b"), entry("a")], 2);
        assert_eq!(history.into_entries(), vec![entry("c"), entry("b")]);
    }

    #[test]
    fn entry_serializes_timestamp_as_rfc3339() {
        let json = serde_json::to_string(&entry("Kant")).unwrap();
        assert_eq!(
            json,
            r#"{"title":"Kant","lang":"de","ts":"1970-01-01T00:00:00Z"}"#
        );
    }
}
