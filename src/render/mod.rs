// SPDX-License-Identifier: PMPL-1.0-or-later

//! HTML rendering of the homepage content.
//!
//! A [`Renderer`] is bound to one site and one language. It produces the page
//! shell (header, language switcher, navigation, footer), the news page, the
//! news flash, the contents page and the Atom feed.
//!
//! Plain-text content (TOC labels, dictionary phrases, headlines) is escaped.
//! News titles and bodies are authored markup and pass through untouched.
//! Dictionary lookups propagate [`ContentError::UnknownKey`]: a page that
//! needs a phrase the language does not define fails to render.

mod atom;
mod html;
mod news;
mod toc;

pub use html::{CONTENTS_PAGE, FEED_FILE, NEWS_PAGE};

use crate::error::ContentResult;
use crate::i18n::Lang;
use crate::site::Site;
use crate::toc::{Labels, TocNode};
use log::debug;
use std::fmt;

/// Dictionary keys every page of a language needs.
pub const PAGE_PHRASES: &[&str] = &["contents", "copyright", "fdl"];

/// Additional keys needed when the language has a news feed.
pub const NEWS_PHRASES: &[&str] = &["news", "atom_title"];

/// What to show for a TOC node that has no label in the page language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPolicy {
    /// Leave the node (and everything under it) out.
    Omit,
    /// Use the label of this language instead; omit if that is missing too.
    Fallback(Lang),
}

impl LabelPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "omit" => Some(LabelPolicy::Omit),
            code => Lang::from_code(code).map(LabelPolicy::Fallback),
        }
    }

    pub fn resolve<'a>(&self, labels: &'a Labels, lang: Lang) -> Option<&'a str> {
        if let Some(text) = labels.get(lang) {
            return Some(text);
        }
        match self {
            LabelPolicy::Omit => None,
            LabelPolicy::Fallback(fallback) => labels.get(*fallback),
        }
    }
}

impl Default for LabelPolicy {
    fn default() -> Self {
        LabelPolicy::Fallback(Lang::En)
    }
}

impl fmt::Display for LabelPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelPolicy::Omit => write!(f, "omit"),
            LabelPolicy::Fallback(lang) => write!(f, "{}", lang),
        }
    }
}

pub struct Renderer<'a> {
    site: &'a Site,
    lang: Lang,
    policy: LabelPolicy,
}

impl<'a> Renderer<'a> {
    /// Renderer using the site manifest's label policy.
    pub fn new(site: &'a Site, lang: Lang) -> Self {
        Self {
            site,
            lang,
            policy: site.manifest.fallback,
        }
    }

    pub fn with_policy(mut self, policy: LabelPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Label of `node` in the page language, after applying the policy.
    pub fn label(&self, node: &'a TocNode) -> Option<&'a str> {
        let resolved = self.policy.resolve(node.labels(), self.lang);
        match resolved {
            Some(_) if !node.labels().has(self.lang) => {
                debug!("{}: '{}' shown with {} label", self.lang, node.id(), self.policy)
            }
            None => debug!("{}: '{}' omitted, no label", self.lang, node.id()),
            _ => {}
        }
        resolved
    }

    /// Dictionary phrase in the page language; no cross-language fallback.
    pub fn phrase(&self, key: &str) -> ContentResult<&'a str> {
        self.site.phrase(self.lang, key)
    }
}

/// Escapes text for HTML element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
