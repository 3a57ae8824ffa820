use crate::domain::model::Entry;
use crate::utils::error::{Result, ScraperError};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct AtomFeed {
    #[serde(rename = "entry", default)]
    entries: Vec<AtomEntry>,
}

#[derive(Debug, Deserialize)]
struct AtomEntry {
    #[serde(default)]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    published: String,
    #[serde(rename = "link", default)]
    links: Vec<AtomLink>,
}

#[derive(Debug, Deserialize)]
struct AtomLink {
    #[serde(rename = "@href", default)]
    href: String,
    #[serde(rename = "@rel", default)]
    rel: Option<String>,
}

impl AtomEntry {
    fn into_entry(self) -> Entry {
        let link = self.primary_link();
        let published_display = self.published.trim().to_string();

        Entry {
            title: collapse_whitespace(&self.title),
            link,
            summary: collapse_whitespace(&self.summary),
            published_at: parse_timestamp(&published_display),
            published_display,
        }
    }

    fn primary_link(&self) -> String {
        self.links
            .iter()
            .find(|l| l.rel.as_deref() == Some("alternate") && !l.href.is_empty())
            .or_else(|| self.links.iter().find(|l| !l.href.is_empty()))
            .map(|l| l.href.clone())
            .unwrap_or_else(|| self.id.trim().to_string())
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|d| d.with_timezone(&Utc))
}

/// Parses an Atom document into entries in feed order.
pub fn parse_feed(body: &str) -> Result<Vec<Entry>> {
    let feed: AtomFeed = quick_xml::de::from_str(body).map_err(|e| ScraperError::Parse {
        message: format!("Failed to parse Atom feed: {}", e),
    })?;

    Ok(feed
        .entries
        .into_iter()
        .map(AtomEntry::into_entry)
        .collect())
}
