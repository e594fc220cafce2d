// SPDX-License-Identifier: PMPL-1.0-or-later

//! Content checks run before publishing.

use crate::i18n::Lang;
use crate::render::{NEWS_PHRASES, PAGE_PHRASES};
use crate::site::Site;
use anyhow::{anyhow, Result};
use colored::*;

pub fn run_checks(site: &Site) -> Result<()> {
    println!("{}", "dvdisaster-site content checks".bold());

    let checks = check_site(site);

    println!();
    for entry in &checks {
        entry.print();
    }

    let errors = checks
        .iter()
        .filter(|entry| entry.level == Level::Error)
        .count();
    if errors > 0 {
        Err(anyhow!("content checks reported {} error(s)", errors))
    } else {
        Ok(())
    }
}

/// Every check, in a stable order: TOC, news, then dictionaries per language.
pub fn check_site(site: &Site) -> Vec<Diagnostic> {
    let mut checks = Vec::new();
    checks.push(Diagnostic::ok(
        "table of contents",
        format!(
            "{} sections, {} nodes",
            site.toc.sections().len(),
            site.toc.len()
        ),
    ));
    for lang in &site.manifest.languages {
        checks.push(check_labels(site, *lang));
    }
    for feed in site.news_feeds() {
        checks.push(check_news_order(site, feed.lang));
    }
    for lang in &site.manifest.languages {
        checks.extend(check_dictionary(site, *lang));
    }
    checks
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red().bold(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub label: String,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: impl Into<String>, level: Level, detail: String) -> Self {
        Self {
            label: label.into(),
            level,
            detail,
        }
    }

    fn ok(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    pub fn print(&self) {
        println!("  [{}] {:22} {}", self.level.tag(), self.label, self.detail);
    }
}

fn check_labels(site: &Site, lang: Lang) -> Diagnostic {
    let label = format!("{} labels", lang);
    let missing: Vec<&str> = site
        .toc
        .walk()
        .filter(|(node, _)| !node.labels().has(lang))
        .map(|(node, _)| node.id())
        .collect();
    if missing.is_empty() {
        Diagnostic::ok(label, format!("all {} nodes labelled", site.toc.len()))
    } else {
        Diagnostic::warning(
            label,
            format!(
                "{} node(s) unlabelled, shown per fallback '{}': {}",
                missing.len(),
                site.manifest.fallback,
                missing.join(", ")
            ),
        )
    }
}

fn check_news_order(site: &Site, lang: Lang) -> Diagnostic {
    let label = format!("{} news", lang);
    let Some(feed) = site.news(lang) else {
        return Diagnostic::ok(label, "no feed".to_string());
    };
    if feed.is_chronological() {
        Diagnostic::ok(label, format!("{} entries, newest first", feed.len()))
    } else {
        Diagnostic::warning(
            label,
            format!("{} entries not newest first; pages keep authoring order", feed.len()),
        )
    }
}

fn check_dictionary(site: &Site, lang: Lang) -> Vec<Diagnostic> {
    let label = format!("{} dictionary", lang);
    let Some(dict) = site.dictionary(lang) else {
        return vec![Diagnostic::error(label, "no dictionary loaded".to_string())];
    };

    let mut checks = Vec::new();
    let mut needed: Vec<&str> = PAGE_PHRASES.to_vec();
    if site.news(lang).is_some() {
        needed.extend_from_slice(NEWS_PHRASES);
    }
    let unusable: Vec<&str> = needed
        .into_iter()
        .filter(|key| !dict.contains_key(key))
        .collect();
    if unusable.is_empty() {
        checks.push(Diagnostic::ok(label.clone(), format!("{} keys", dict.len())));
    } else {
        checks.push(Diagnostic::error(
            label.clone(),
            format!("pages need missing key(s): {}", unusable.join(", ")),
        ));
    }

    let default = site.manifest.default_language;
    if lang != default {
        if let Some(reference) = site.dictionary(default) {
            let gaps: Vec<&str> = reference
                .keys()
                .filter(|key| !dict.contains_key(key))
                .collect();
            if !gaps.is_empty() {
                checks.push(Diagnostic::warning(
                    label,
                    format!("missing {} key(s) defined in {}: {}", gaps.len(), default, gaps.join(", ")),
                ));
            }
        }
    }
    checks
}
