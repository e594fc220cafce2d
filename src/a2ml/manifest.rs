// SPDX-License-Identifier: PMPL-1.0-or-later

//! Site manifest (`site.a2ml`): publishing configuration.
//!
//! ```text
//! (site
//!   (title "dvdisaster")
//!   (base-url "https://dvdisaster.net")
//!   (languages de en ru)
//!   (default-language en)
//!   (fallback en)          # or (fallback omit)
//!   (news-flash 3)
//!   (output "public"))
//! ```
//!
//! Every key is optional; missing keys take the values of
//! [`Manifest::default`].

use super::documents::{lang_from, parse_document, Document};
use super::{entry_text, entry_texts, gather_entries, quote, Sexpr};
use crate::i18n::Lang;
use crate::render::LabelPolicy;
use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;

pub const MANIFEST_FILE: &str = "site.a2ml";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Manifest {
    pub title: String,
    pub base_url: Option<String>,
    pub languages: Vec<Lang>,
    pub default_language: Lang,
    pub fallback: LabelPolicy,
    pub news_flash: usize,
    pub output: PathBuf,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            title: "dvdisaster".to_string(),
            base_url: None,
            languages: Lang::all().to_vec(),
            default_language: Lang::En,
            fallback: LabelPolicy::Fallback(Lang::En),
            news_flash: 3,
            output: PathBuf::from("public"),
        }
    }
}

impl Manifest {
    pub fn parse(raw: &str) -> Result<Self> {
        match parse_document(raw)? {
            Document::Site(manifest) => Ok(manifest),
            other => Err(anyhow!(
                "expected a site manifest, found '{}'",
                other.kind().as_str()
            )),
        }
    }

    pub(crate) fn from_items(items: &[Sexpr]) -> Result<Self> {
        let entries = gather_entries(items);
        let mut manifest = Self::default();

        if let Some(title) = entry_text(&entries, "title") {
            manifest.title = title.to_string();
        }
        if let Some(url) = entry_text(&entries, "base-url") {
            manifest.base_url = Some(url.trim_end_matches('/').to_string());
        }
        if let Some(codes) = entry_texts(&entries, "languages") {
            if codes.is_empty() {
                return Err(anyhow!("(languages ..) must name at least one language"));
            }
            let mut languages = Vec::with_capacity(codes.len());
            for code in codes {
                let lang = lang_from(code)?;
                if !languages.contains(&lang) {
                    languages.push(lang);
                }
            }
            manifest.languages = languages;
        }
        if let Some(code) = entry_text(&entries, "default-language") {
            manifest.default_language = lang_from(code)?;
        }
        if let Some(value) = entry_text(&entries, "fallback") {
            manifest.fallback = LabelPolicy::parse(value)
                .ok_or_else(|| anyhow!("(fallback ..) must be 'omit' or a language code, got '{}'", value))?;
        }
        if let Some(value) = entry_text(&entries, "news-flash") {
            manifest.news_flash = value
                .parse::<usize>()
                .with_context(|| format!("parsing (news-flash {})", value))?;
        }
        if let Some(output) = entry_text(&entries, "output") {
            manifest.output = PathBuf::from(output);
        }

        if !manifest.languages.contains(&manifest.default_language) {
            return Err(anyhow!(
                "default language {} is not among the published languages",
                manifest.default_language
            ));
        }
        Ok(manifest)
    }

    pub fn render(&self) -> String {
        let languages: Vec<&str> = self.languages.iter().map(Lang::code).collect();
        let mut lines = vec![
            "(site".to_string(),
            format!("  (title {})", quote(&self.title)),
        ];
        if let Some(url) = &self.base_url {
            lines.push(format!("  (base-url {})", quote(url)));
        }
        lines.push(format!("  (languages {})", languages.join(" ")));
        lines.push(format!("  (default-language {})", self.default_language));
        lines.push(format!("  (fallback {})", self.fallback));
        lines.push(format!("  (news-flash {})", self.news_flash));
        lines.push(format!(
            "  (output {}))",
            quote(&self.output.to_string_lossy())
        ));
        lines.join("\n") + "\n"
    }
}
