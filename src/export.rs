// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization of content data sets for export.

use crate::a2ml::{render_dictionary, render_news, render_toc};
use crate::i18n::Dictionary;
use crate::news::NewsFeed;
use crate::toc::Toc;
use anyhow::Result;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ContentFormat {
    Json,
    Yaml,
    A2ml,
}

/// The data set being exported.
#[derive(Debug, Clone, Copy)]
pub enum Content<'a> {
    Toc(&'a Toc),
    News(&'a NewsFeed),
    Dictionary(&'a Dictionary),
}

impl ContentFormat {
    pub fn serialize(&self, content: Content<'_>) -> Result<String> {
        match self {
            ContentFormat::Json => Ok(match content {
                Content::Toc(toc) => serde_json::to_string_pretty(toc)?,
                Content::News(feed) => serde_json::to_string_pretty(feed)?,
                Content::Dictionary(dict) => serde_json::to_string_pretty(dict)?,
            }),
            ContentFormat::Yaml => Ok(match content {
                Content::Toc(toc) => serde_yaml::to_string(toc)?,
                Content::News(feed) => serde_yaml::to_string(feed)?,
                Content::Dictionary(dict) => serde_yaml::to_string(dict)?,
            }),
            // A2ML is the authoring format, so an export can be edited and
            // loaded back as content.
            ContentFormat::A2ml => Ok(match content {
                Content::Toc(toc) => render_toc(toc),
                Content::News(feed) => render_news(feed),
                Content::Dictionary(dict) => render_dictionary(dict),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::a2ml::parse_dictionary;
    use crate::i18n::{builtin_dictionary, Lang};
    use crate::news::dvdisaster_news;
    use crate::toc::dvdisaster_toc;

    #[test]
    fn json_toc_keeps_nesting() {
        let toc = dvdisaster_toc().unwrap();
        let json = ContentFormat::Json.serialize(Content::Toc(&toc)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let sections = value["sections"].as_array().unwrap();
        assert_eq!(sections.len(), 8);
        assert_eq!(sections[2]["id"], "howtos");
        assert_eq!(sections[2]["children"][0]["children"][0]["id"], "howtos61");
    }

    #[test]
    fn yaml_news_has_dates_as_text() {
        let feed = dvdisaster_news().unwrap();
        let yaml = ContentFormat::Yaml.serialize(Content::News(&feed)).unwrap();
        assert!(yaml.contains("05.03.2008"));
        let back: NewsFeed = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, feed);
    }

    #[test]
    fn a2ml_dictionary_loads_back() {
        let dict = builtin_dictionary(Lang::Ru);
        let text = ContentFormat::A2ml
            .serialize(Content::Dictionary(&dict))
            .unwrap();
        assert_eq!(parse_dictionary(&text).unwrap(), dict);
    }
}
