// SPDX-License-Identifier: PMPL-1.0-or-later

//! News feed: dated announcements shown on the news page and as a news
//! flash on every other page.
//!
//! Entries keep the order they were authored in. Nothing re-sorts them
//! implicitly; [`NewsFeed::sorted_by_date_desc`] is there for renderers that
//! want newest-first regardless of authoring order.

mod builtin;

pub use builtin::dvdisaster_news;

use crate::error::{ContentError, ContentResult};
use crate::i18n::Lang;
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

const DATE_FORMAT: &str = "%d.%m.%Y";

/// Calendar date of a news entry, written `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NewsDate(NaiveDate);

impl NewsDate {
    pub fn parse(value: &str) -> ContentResult<Self> {
        let trimmed = value.trim();
        // chrono accepts unpadded fields; the content format does not.
        let shape_ok = trimmed.len() == 10
            && trimmed
                .char_indices()
                .all(|(i, ch)| if i == 2 || i == 5 { ch == '.' } else { ch.is_ascii_digit() });
        if !shape_ok {
            return Err(ContentError::InvalidDate(value.to_string()));
        }
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(NewsDate)
            .map_err(|_| ContentError::InvalidDate(value.to_string()))
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(NewsDate)
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// `YYYY-MM-DD`, for machine-readable contexts.
    pub fn iso(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for NewsDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for NewsDate {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NewsDate::parse(s)
    }
}

impl Serialize for NewsDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NewsDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NewsDate::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// One announcement. Title and body are authored markup and are emitted
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsEntry {
    pub date: NewsDate,
    pub title: String,
    pub body: String,
}

impl NewsEntry {
    pub fn new(date: &str, title: impl Into<String>, body: impl Into<String>) -> ContentResult<Self> {
        Ok(Self {
            date: NewsDate::parse(date)?,
            title: title.into(),
            body: body.into(),
        })
    }

    /// Body with tags removed and whitespace collapsed.
    pub fn summary(&self) -> String {
        plain_text(&self.body)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsFeed {
    pub lang: Lang,
    pub headline: String,
    entries: Vec<NewsEntry>,
}

impl NewsFeed {
    pub fn new(lang: Lang, headline: impl Into<String>) -> Self {
        Self {
            lang,
            headline: headline.into(),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: NewsEntry) {
        self.entries.push(entry);
    }

    /// Entries in authoring order.
    pub fn entries(&self) -> &[NewsEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newest first; entries sharing a date keep their authoring order.
    pub fn sorted_by_date_desc(&self) -> Vec<&NewsEntry> {
        let mut sorted: Vec<&NewsEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    /// True when authoring order is already newest-first.
    pub fn is_chronological(&self) -> bool {
        self.entries
            .windows(2)
            .all(|pair| pair[0].date >= pair[1].date)
    }

    /// The first `count` entries, as shown in the news flash.
    pub fn flash(&self, count: usize) -> &[NewsEntry] {
        &self.entries[..count.min(self.entries.len())]
    }

    pub fn latest_date(&self) -> Option<NewsDate> {
        self.entries.iter().map(|entry| entry.date).max()
    }
}

/// Strips markup tags and collapses runs of whitespace.
pub fn plain_text(markup: &str) -> String {
    static TAG: OnceLock<Regex> = OnceLock::new();
    static SPACE: OnceLock<Regex> = OnceLock::new();
    let tag = TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("static regex"));
    let space = SPACE.get_or_init(|| Regex::new(r"\s+").expect("static regex"));
    let without_tags = tag.replace_all(markup, " ");
    space.replace_all(without_tags.trim(), " ").into_owned()
}
