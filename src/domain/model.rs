use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A validated search. Only `SearchClient::configure` builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    term: String,
    start: u32,
    limit: u32,
}

impl SearchRequest {
    pub(crate) fn new(term: String, start: u32, limit: u32) -> Self {
        Self { term, start, limit }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub title: String,
    pub link: String,
    pub summary: String,
    /// `None` when the feed's `published` value is not RFC 3339.
    pub published_at: Option<DateTime<Utc>>,
    pub published_display: String,
}

impl Entry {
    /// Newest first; undated entries after every dated one.
    pub fn cmp_published_desc(&self, other: &Self) -> Ordering {
        match (self.published_at, other.published_at) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// Stable, so entries with equal timestamps keep their feed order.
pub fn sort_by_published_desc(entries: &mut [Entry]) {
    entries.sort_by(Entry::cmp_published_desc);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    entries: Vec<Entry>,
}

impl ResultSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sorts the feed entries and caps them at `limit`.
    pub fn from_feed(mut entries: Vec<Entry>, limit: u32) -> Self {
        entries.truncate(limit as usize);
        sort_by_published_desc(&mut entries);
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// What a renderer receives for one entry.
#[derive(Debug, Clone, Serialize)]
pub struct EntryRecord<'a> {
    pub title: &'a str,
    pub link: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub summary: &'a str,
    pub published: &'a str,
}

impl<'a> EntryRecord<'a> {
    pub fn new(entry: &'a Entry, explanation: Option<String>) -> Self {
        Self {
            title: &entry.title,
            link: &entry.link,
            explanation,
            summary: &entry.summary,
            published: &entry.published_display,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, published: &str) -> Entry {
        Entry {
            title: title.to_string(),
            link: format!("http://arxiv.org/abs/{}", title),
            summary: String::new(),
            published_at: DateTime::parse_from_rfc3339(published)
                .ok()
                .map(|d| d.with_timezone(&Utc)),
            published_display: published.to_string(),
        }
    }

    fn titles(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_sort_distinct_timestamps_descending() {
        let mut entries = vec![
            entry("a", "2024-01-10T00:00:00Z"),
            entry("b", "2024-03-01T00:00:00Z"),
            entry("c", "2023-12-31T23:59:59Z"),
            entry("d", "2024-01-12T08:30:00Z"),
        ];
        sort_by_published_desc(&mut entries);
        assert_eq!(titles(&entries), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_sort_equal_timestamps_keep_feed_order() {
        let mut entries = vec![
            entry("first", "2024-01-10T00:00:00Z"),
            entry("newer", "2024-02-10T00:00:00Z"),
            entry("second", "2024-01-10T00:00:00Z"),
            entry("third", "2024-01-10T00:00:00Z"),
        ];
        sort_by_published_desc(&mut entries);
        assert_eq!(titles(&entries), vec!["newer", "first", "second", "third"]);
    }

    #[test]
    fn test_sort_uses_time_value_not_display_string() {
        // Lexically "2024-01-10T12:00:00+05:00" > "2024-01-10T08:00:00Z",
        // but it is 07:00 UTC and therefore older.
        let mut entries = vec![
            entry("offset", "2024-01-10T12:00:00+05:00"),
            entry("utc", "2024-01-10T08:00:00Z"),
        ];
        sort_by_published_desc(&mut entries);
        assert_eq!(titles(&entries), vec!["utc", "offset"]);
    }

    #[test]
    fn test_undated_entries_sort_last_in_feed_order() {
        let mut entries = vec![
            entry("bad1", "yesterday"),
            entry("old", "2020-01-01T00:00:00Z"),
            entry("bad2", ""),
            entry("new", "2024-01-01T00:00:00Z"),
        ];
        sort_by_published_desc(&mut entries);
        assert_eq!(titles(&entries), vec!["new", "old", "bad1", "bad2"]);
    }

    #[test]
    fn test_result_set_caps_at_limit() {
        let entries = vec![
            entry("a", "2024-01-01T00:00:00Z"),
            entry("b", "2024-01-02T00:00:00Z"),
            entry("c", "2024-01-03T00:00:00Z"),
        ];
        let results = ResultSet::from_feed(entries, 2);
        assert_eq!(results.len(), 2);
        assert_eq!(titles(results.entries()), vec!["b", "a"]);
    }
}
