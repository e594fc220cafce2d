// SPDX-License-Identifier: PMPL-1.0-or-later

//! Atom feed for a language's news.
//!
//! The output depends only on the content: `updated` is the newest entry's
//! date and entry ids are hashes of date and title, so rebuilding an
//! unchanged site yields an identical feed.

use super::html::{FEED_FILE, NEWS_PAGE};
use super::{escape, Renderer};
use crate::error::ContentResult;
use crate::news::{NewsDate, NewsEntry, NewsFeed};
use chrono::{NaiveTime, SecondsFormat};
use sha2::{Digest, Sha256};

impl<'a> Renderer<'a> {
    pub fn atom_feed(&self, feed: &NewsFeed) -> ContentResult<String> {
        let title = self.phrase("atom_title")?;
        let base = self.base_url();
        let updated = feed.latest_date().map(timestamp).unwrap_or_else(epoch);

        let mut out = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
        out.push_str(&format!(
            "<feed xmlns=\"http://www.w3.org/2005/Atom\" xml:lang=\"{}\">\n",
            self.lang.code()
        ));
        out.push_str(&format!("  <title>{}</title>\n", escape(title)));
        out.push_str(&format!(
            "  <link rel=\"self\" href=\"{}{}\"/>\n",
            base,
            FEED_FILE
        ));
        out.push_str(&format!(
            "  <link rel=\"alternate\" href=\"{}{}\"/>\n",
            base,
            NEWS_PAGE
        ));
        out.push_str(&format!("  <id>{}{}</id>\n", base, FEED_FILE));
        out.push_str(&format!("  <updated>{}</updated>\n", updated));
        out.push_str(&format!(
            "  <author><name>{}</name></author>\n",
            escape(&self.site.manifest.title)
        ));
        for entry in feed.entries() {
            out.push_str(&self.atom_entry(entry, &base));
        }
        out.push_str("</feed>\n");
        Ok(out)
    }

    fn atom_entry(&self, entry: &NewsEntry, base: &str) -> String {
        // Titles are stored as markup; Atom wants them as escaped HTML.
        format!(
            "  <entry>\n    <id>{}</id>\n    <title type=\"html\">{}</title>\n    <updated>{}</updated>\n    <link href=\"{}{}\"/>\n    <summary>{}</summary>\n    <content type=\"html\">{}</content>\n  </entry>\n",
            entry_id(entry),
            escape(&entry.title),
            timestamp(entry.date),
            base,
            NEWS_PAGE,
            escape(&entry.summary()),
            escape(entry.body.trim())
        )
    }

    /// `<base-url>/<lang>/`, or empty for relative links when no base is set.
    fn base_url(&self) -> String {
        match &self.site.manifest.base_url {
            Some(url) => format!("{}/{}/", url, self.lang.code()),
            None => String::new(),
        }
    }
}

/// Stable id: `urn:sha256:` over the entry's date and title.
pub(crate) fn entry_id(entry: &NewsEntry) -> String {
    let mut hasher = Sha256::new();
    hasher.update(entry.date.to_string().as_bytes());
    hasher.update(b"\n");
    hasher.update(entry.title.as_bytes());
    format!("urn:sha256:{}", hex::encode(hasher.finalize()))
}

fn timestamp(date: NewsDate) -> String {
    date.naive()
        .and_time(NaiveTime::MIN)
        .and_utc()
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn epoch() -> String {
    "1970-01-01T00:00:00Z".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Lang;
    use crate::news::dvdisaster_news;
    use crate::site::Site;

    #[test]
    fn feed_is_deterministic() {
        let site = Site::builtin().unwrap();
        let feed = dvdisaster_news().unwrap();
        let renderer = Renderer::new(&site, Lang::En);
        let first = renderer.atom_feed(&feed).unwrap();
        assert_eq!(first, renderer.atom_feed(&feed).unwrap());
        assert!(first.contains("<updated>2008-03-05T00:00:00Z</updated>"));
        assert_eq!(first.matches("<entry>").count(), 4);
        assert!(first.contains("<title>dvdisaster news</title>"));
    }

    #[test]
    fn entry_ids_are_unique_hashes() {
        let feed = dvdisaster_news().unwrap();
        let ids: Vec<String> = feed.entries().iter().map(entry_id).collect();
        for id in &ids {
            assert!(id.starts_with("urn:sha256:"));
            assert_eq!(id.len(), "urn:sha256:".len() + 64);
        }
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn titles_are_escaped_once_more_for_xml() {
        let site = Site::builtin().unwrap();
        let feed = dvdisaster_news().unwrap();
        let xml = Renderer::new(&site, Lang::En).atom_feed(&feed).unwrap();
        assert!(xml.contains("images &amp;gt;2GB fail"));
        assert!(xml.contains("&lt;i&gt;Currently"));
    }

    #[test]
    fn base_url_makes_links_absolute() {
        let mut site = Site::builtin().unwrap();
        site.manifest.base_url = Some("https://dvdisaster.net".into());
        let feed = dvdisaster_news().unwrap();
        let xml = Renderer::new(&site, Lang::En).atom_feed(&feed).unwrap();
        assert!(xml.contains("<id>https://dvdisaster.net/en/atom.xml</id>"));
        assert!(xml.contains("<link href=\"https://dvdisaster.net/en/news.html\"/>"));
    }

    #[test]
    fn empty_feed_uses_epoch() {
        let site = Site::builtin().unwrap();
        let feed = NewsFeed::new(Lang::En, "");
        let xml = Renderer::new(&site, Lang::En).atom_feed(&feed).unwrap();
        assert!(xml.contains("<updated>1970-01-01T00:00:00Z</updated>"));
    }
}
