// SPDX-License-Identifier: PMPL-1.0-or-later

//! Content documents: table of contents, news feeds and dictionaries.

use super::{entry_text, gather_entries, parse_sexpr, quote, Manifest, Sexpr};
use crate::error::ContentError;
use crate::i18n::{is_valid_iso639_1, language_name, Dictionary, Lang};
use crate::news::{NewsEntry, NewsFeed};
use crate::toc::{Declaration, Toc, TocLevel};
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentKind {
    Toc,
    News,
    Dictionary,
    Site,
}

impl DocumentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Toc => "toc",
            Self::News => "news",
            Self::Dictionary => "dictionary",
            Self::Site => "site",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "toc" => Some(Self::Toc),
            "news" => Some(Self::News),
            "dictionary" => Some(Self::Dictionary),
            "site" => Some(Self::Site),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub enum Document {
    Toc(Toc),
    News(NewsFeed),
    Dictionary(Dictionary),
    Site(Manifest),
}

impl Document {
    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::Toc(_) => DocumentKind::Toc,
            Self::News(_) => DocumentKind::News,
            Self::Dictionary(_) => DocumentKind::Dictionary,
            Self::Site(_) => DocumentKind::Site,
        }
    }
}

/// Parses any document, dispatching on its root atom.
pub fn parse_document(raw: &str) -> Result<Document> {
    let tree = parse_sexpr(raw)?;
    let (root, items) = tree
        .as_form()
        .ok_or_else(|| anyhow!("document must be a list headed by its kind"))?;
    let kind = DocumentKind::parse(root)
        .ok_or_else(|| anyhow!("unsupported document kind '{}'", root))?;
    Ok(match kind {
        DocumentKind::Toc => Document::Toc(toc_from_items(items)?),
        DocumentKind::News => Document::News(news_from_items(items)?),
        DocumentKind::Dictionary => Document::Dictionary(dictionary_from_items(items)?),
        DocumentKind::Site => Document::Site(Manifest::from_items(items)?),
    })
}

pub fn load_document(path: &Path) -> Result<Document> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_document(&raw).with_context(|| format!("parsing {}", path.display()))
}

pub fn parse_toc(raw: &str) -> Result<Toc> {
    match parse_document(raw)? {
        Document::Toc(toc) => Ok(toc),
        other => Err(anyhow!("expected a toc document, found '{}'", other.kind().as_str())),
    }
}

pub fn parse_news(raw: &str) -> Result<NewsFeed> {
    match parse_document(raw)? {
        Document::News(feed) => Ok(feed),
        other => Err(anyhow!("expected a news document, found '{}'", other.kind().as_str())),
    }
}

pub fn parse_dictionary(raw: &str) -> Result<Dictionary> {
    match parse_document(raw)? {
        Document::Dictionary(dict) => Ok(dict),
        other => Err(anyhow!(
            "expected a dictionary document, found '{}'",
            other.kind().as_str()
        )),
    }
}

/// The flat declaration form, one step per line.
pub fn render_toc(toc: &Toc) -> String {
    let mut out = String::from("(toc\n");
    for declaration in toc.to_declarations() {
        let indent = match declaration {
            Declaration::Label(..) => "    ",
            _ => "  ",
        };
        out.push_str(indent);
        out.push_str(&declaration.to_string());
        out.push('\n');
    }
    out.push_str(")\n");
    out
}

pub fn render_news(feed: &NewsFeed) -> String {
    let mut out = format!(
        "(news\n  (lang {})\n  (headline {})\n",
        feed.lang.code(),
        quote(&feed.headline)
    );
    for entry in feed.entries() {
        out.push_str(&format!(
            "  (item\n    (date \"{}\")\n    (title {})\n    (body {}))\n",
            entry.date,
            quote(&entry.title),
            quote(&entry.body)
        ));
    }
    out.push_str(")\n");
    out
}

pub fn render_dictionary(dict: &Dictionary) -> String {
    let mut out = format!("(dictionary\n  (lang {})\n", dict.lang().code());
    for entry in dict.entries() {
        out.push_str(&format!("  (entry {} {})\n", entry.key, quote(&entry.value)));
    }
    out.push_str(")\n");
    out
}

fn toc_from_items(items: &[Sexpr]) -> Result<Toc> {
    let mut declarations = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        let declaration =
            declaration_from(item).with_context(|| format!("toc declaration #{}", idx + 1))?;
        declarations.push(declaration);
    }
    Ok(Toc::from_declarations(declarations)?)
}

fn declaration_from(item: &Sexpr) -> Result<Declaration> {
    let (head, args) = item
        .as_form()
        .ok_or_else(|| anyhow!("expected a (keyword \"value\") form"))?;
    let value = match args {
        [single] => single
            .text()
            .ok_or_else(|| anyhow!("'{}' takes a string, not a list", head))?,
        _ => return Err(anyhow!("'{}' takes exactly one value", head)),
    };
    if let Some(level) = TocLevel::from_keyword(head) {
        return Ok(Declaration::open(level, value));
    }
    if !is_valid_iso639_1(head) {
        return Err(anyhow!(
            "unknown declaration '{}' (expected section, subsection, subsubsection or a language code)",
            head
        ));
    }
    Ok(Declaration::Label(lang_from(head)?, value.to_string()))
}

fn news_from_items(items: &[Sexpr]) -> Result<NewsFeed> {
    let entries = gather_entries(items);
    let lang = lang_from(
        entry_text(&entries, "lang").ok_or_else(|| anyhow!("news document needs (lang ..)"))?,
    )?;
    let headline = entry_text(&entries, "headline").unwrap_or_default();
    let mut feed = NewsFeed::new(lang, headline);

    let mut position = 0;
    for item in items {
        let Some(("item", fields)) = item.as_form() else {
            continue;
        };
        position += 1;
        let fields = gather_entries(fields);
        let field = |name: &str| {
            entry_text(&fields, name)
                .ok_or_else(|| anyhow!("news item #{} is missing ({} ..)", position, name))
        };
        let entry = NewsEntry::new(field("date")?, field("title")?, field("body")?)
            .with_context(|| format!("news item #{}", position))?;
        feed.push(entry);
    }
    Ok(feed)
}

fn dictionary_from_items(items: &[Sexpr]) -> Result<Dictionary> {
    let entries = gather_entries(items);
    let lang = lang_from(
        entry_text(&entries, "lang").ok_or_else(|| anyhow!("dictionary document needs (lang ..)"))?,
    )?;
    let mut dict = Dictionary::new(lang);
    for item in items {
        let Some(("entry", args)) = item.as_form() else {
            continue;
        };
        match args {
            [key, value] => {
                let key = key.text().ok_or_else(|| anyhow!("dictionary key must be an atom"))?;
                let value = value
                    .text()
                    .ok_or_else(|| anyhow!("dictionary value for '{}' must be a string", key))?;
                dict.insert(key, value)?;
            }
            _ => return Err(anyhow!("(entry key \"value\") takes exactly two values")),
        }
    }
    Ok(dict)
}

pub(crate) fn lang_from(code: &str) -> Result<Lang> {
    match Lang::from_code(code) {
        Some(lang) => Ok(lang),
        None if is_valid_iso639_1(code) => Err(anyhow::Error::new(ContentError::UnknownLanguage(
            code.to_string(),
        ))
        .context(match language_name(code) {
            Some(name) => format!("'{}' ({}) has no translation", code, name),
            None => format!("'{}' is a valid language code but has no translation", code),
        })),
        None => Err(anyhow!("'{}' is not an ISO 639-1 language code", code)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::builtin_dictionary;
    use crate::news::dvdisaster_news;
    use crate::toc::{dvdisaster_toc, TocBuilder};

    #[test]
    fn toc_text_roundtrip() {
        let toc = dvdisaster_toc().unwrap();
        let text = render_toc(&toc);
        let back = parse_toc(&text).unwrap();
        assert_eq!(back.to_declarations(), toc.to_declarations());
        assert_eq!(render_toc(&back), text);
    }

    #[test]
    fn toc_label_control_characters_roundtrip() {
        let mut builder = TocBuilder::new();
        builder
            .section("a")
            .unwrap()
            .labels(&[(Lang::En, "a\u{c}b"), (Lang::De, "x\u{8}y")])
            .unwrap();
        let toc = builder.finish().unwrap();
        let back = parse_toc(&render_toc(&toc)).unwrap();
        assert_eq!(back.to_declarations(), toc.to_declarations());
        assert_eq!(back.find("a").unwrap().label(Lang::En), Some("a\u{c}b"));
    }

    #[test]
    fn toc_structural_error_is_typed() {
        let err = parse_toc("(toc (subsection \"index10\") (en \"Examples\"))").unwrap_err();
        let content = err
            .downcast_ref::<ContentError>()
            .expect("structural errors stay typed");
        assert_eq!(
            content,
            &ContentError::OrphanSubsection {
                id: "index10".into()
            }
        );
    }

    #[test]
    fn toc_rejects_untranslated_language() {
        let err = parse_toc("(toc (section news) (fr \"Nouvelles\"))").unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("'fr' (French) has no translation"), "{}", chain);
        let err = parse_toc("(toc (section news) (chapter \"x\"))").unwrap_err();
        assert!(format!("{:#}", err).contains("unknown declaration 'chapter'"));
    }

    #[test]
    fn news_text_roundtrip() {
        let feed = dvdisaster_news().unwrap();
        let back = parse_news(&render_news(&feed)).unwrap();
        assert_eq!(back, feed);
    }

    #[test]
    fn news_item_needs_all_fields() {
        let err = parse_news("(news (lang en) (item (date \"01.01.2008\") (title \"t\")))")
            .unwrap_err();
        assert!(format!("{:#}", err).contains("missing (body .."));
        let err = parse_news(
            "(news (lang en) (item (date \"1.1.2008\") (title \"t\") (body \"b\")))",
        )
        .unwrap_err();
        assert!(err.downcast_ref::<ContentError>().is_some());
    }

    #[test]
    fn dictionary_text_roundtrip() {
        let dict = builtin_dictionary(Lang::Ru);
        let back = parse_dictionary(&render_dictionary(&dict)).unwrap();
        assert_eq!(back, dict);
    }

    #[test]
    fn dictionary_duplicate_key_fails() {
        let err = parse_dictionary(
            "(dictionary (lang ru) (entry back \"Назад\") (entry back \"Назад\"))",
        )
        .unwrap_err();
        assert_eq!(
            err.downcast_ref::<ContentError>(),
            Some(&ContentError::DuplicateKey {
                lang: Lang::Ru,
                key: "back".into()
            })
        );
    }

    #[test]
    fn wrong_kind_is_reported() {
        let err = parse_news("(dictionary (lang ru))").unwrap_err();
        assert!(err.to_string().contains("found 'dictionary'"));
        assert!(parse_document("(catalog)").is_err());
    }
}
