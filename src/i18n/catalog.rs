// SPDX-License-Identifier: PMPL-1.0-or-later

//! Phrase catalog for the homepage.
//!
//! Embeds the UI phrases used by the page shell (header, navigation,
//! download boxes, footer) for every supported language as compile-time
//! static tables, and provides the owned [`Dictionary`] type that content
//! files load into.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`]
//! 2. Add arms to `Lang::code()` and `Lang::from_code()`
//! 3. Create a `const XX: &[(&str, &str)]` table below with every EN key
//! 4. Add `Lang::Xx => XX` to the match in `catalog_for()`

use crate::error::{ContentError, ContentResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Languages the homepage is published in.
///
/// Variants are ordered the way the content declares labels (German, English,
/// Russian), which is also the order of the language switcher.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    De,
    En,
    Ru,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::De => "de",
            Lang::En => "en",
            Lang::Ru => "ru",
        }
    }

    /// Parse an ISO 639-1 code into a supported language.
    ///
    /// Case-sensitive: codes must be lowercase.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "de" => Some(Lang::De),
            "en" => Some(Lang::En),
            "ru" => Some(Lang::Ru),
            _ => None,
        }
    }

    /// All supported languages, in declaration order.
    pub fn all() -> &'static [Lang] {
        &[Lang::De, Lang::En, Lang::Ru]
    }

    /// Name of the language written in its own script.
    pub fn native_name(&self) -> &'static str {
        super::native_name(self.code()).unwrap_or_else(|| self.code())
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::En
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Lang {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::from_code(s).ok_or_else(|| ContentError::UnknownLanguage(s.to_string()))
    }
}

// ─── Dictionary ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub key: String,
    pub value: String,
}

/// Key → phrase table for one language.
///
/// Keys are unique; insertion order is kept so a dictionary writes back out
/// in the order it was authored.
#[derive(Debug, Clone, Serialize)]
pub struct Dictionary {
    lang: Lang,
    entries: Vec<DictionaryEntry>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Dictionary {
    pub fn new(lang: Lang) -> Self {
        Self {
            lang,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> ContentResult<()> {
        let key = key.into();
        if self.index.contains_key(&key) {
            return Err(ContentError::DuplicateKey {
                lang: self.lang,
                key,
            });
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(DictionaryEntry {
            key,
            value: value.into(),
        });
        Ok(())
    }

    /// Exact, case-sensitive lookup. Unknown keys are an error.
    pub fn get(&self, key: &str) -> ContentResult<&str> {
        self.index
            .get(key)
            .map(|&idx| self.entries[idx].value.as_str())
            .ok_or_else(|| ContentError::UnknownKey {
                lang: self.lang,
                key: key.to_string(),
            })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for Dictionary {
    fn eq(&self, other: &Self) -> bool {
        self.lang == other.lang && self.entries == other.entries
    }
}

impl Eq for Dictionary {}

// ─── Built-in lookup ────────────────────────────────────────────────

/// Look up a phrase in the built-in catalog of `lang`.
///
/// ```
/// use dvdisaster_site::i18n::{phrase, Lang};
/// assert_eq!(phrase(Lang::Ru, "contents").unwrap(), "Содержание");
/// assert!(phrase(Lang::Ru, "Contents").is_err());
/// ```
pub fn phrase(lang: Lang, key: &str) -> ContentResult<&'static str> {
    lookup(catalog_for(lang), key).ok_or_else(|| ContentError::UnknownKey {
        lang,
        key: key.to_string(),
    })
}

/// Owned copy of the built-in catalog of `lang`.
pub fn builtin_dictionary(lang: Lang) -> Dictionary {
    let mut dict = Dictionary::new(lang);
    for &(key, value) in catalog_for(lang) {
        dict.insert(key, value).expect("built-in catalogs have unique keys");
    }
    dict
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    for &(k, v) in catalog {
        if k == key {
            return Some(v);
        }
    }
    None
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::De => DE,
        Lang::En => EN,
        Lang::Ru => RU,
    }
}

// ─── English ────────────────────────────────────────────────────────

const EN: &[(&str, &str)] = &[
    ("version", "Version"),
    ("to_internet", "To the Internet version"),
    ("to_hoster", "Summary (on SourceForge.net)"),
    ("back", "Back"),
    ("screen_shot", "Screen shot"),
    ("contents", "Contents"),
    ("news", "News"),
    ("atom_title", "dvdisaster news"),
    ("hosting", "Hosted by"),
    (
        "fdl",
        "Verbatim copying and distribution of this entire article is permitted in any medium, provided this notice is preserved.",
    ),
    ("copyright", "Copyright 2004-2010 Carsten Gnörlich."),
    (
        "modified",
        "The information in this manual refers to the original dvdisaster version and may not be applicable.",
    ),
    ("sourcecode", "Source code for all operating systems:"),
    ("signature", "Digital signature:"),
    ("md5", "MD5 checksum:"),
    ("macbinary", "Binary for Mac OS X 10.5 / x86:"),
    ("winbinary", "Binary for Windows:"),
];

// ─── German ─────────────────────────────────────────────────────────

const DE: &[(&str, &str)] = &[
    ("version", "Version"),
    ("to_internet", "Zur Internet-Version"),
    ("to_hoster", "Kurzbeschreibung (auf SourceForge.net)"),
    ("back", "Zurück"),
    ("screen_shot", "Bildschirmfoto"),
    ("contents", "Inhalt"),
    ("news", "Neuigkeiten"),
    ("atom_title", "dvdisaster-Neuigkeiten"),
    ("hosting", "Gehostet bei"),
    (
        "fdl",
        "Die unveränderte Wiedergabe und Verbreitung dieses gesamten Textes in beliebiger Form ist gestattet, sofern dieser Hinweis erhalten bleibt.",
    ),
    ("copyright", "Copyright 2004-2010 Carsten Gnörlich."),
    (
        "modified",
        "Die Informationen in diesem Handbuch beziehen sich auf die ursprüngliche dvdisaster-Version und sind möglicherweise nicht anwendbar.",
    ),
    ("sourcecode", "Quellkode für alle Betriebssysteme:"),
    ("signature", "Digitale Unterschrift:"),
    ("md5", "MD5-Prüfsumme:"),
    ("macbinary", "Binärversion für Mac OS X 10.5 / x86:"),
    ("winbinary", "Binärversion für Windows:"),
];

// ─── Russian ────────────────────────────────────────────────────────

const RU: &[(&str, &str)] = &[
    ("version", "Версия"),
    ("to_internet", "К интернет-версии"),
    ("to_hoster", "Краткое изложение (на SourceForge.net)"),
    ("back", "Назад"),
    ("screen_shot", "Снимок с экрана"),
    ("contents", "Содержание"),
    ("news", "Новости"),
    ("atom_title", "dvdisaster news"),
    ("hosting", "Размещено на"),
    (
        "fdl",
        "Дословное копирование и распространение всей этой статьи разрешается на любом носителе, при условии, что это уведомление сохраняется.",
    ),
    ("copyright", "Copyright 2007-2009 Igor Gorbounov."),
    (
        "modified",
        "Информация в этом руководстве относится к первоначальной версии программы dvdisaster и не может быть применима.",
    ),
    ("sourcecode", "Исходные тексты для всех операционных систем:"),
    ("signature", "Цифровая подпись:"),
    ("md5", "MD5 checksum:"),
    ("macbinary", "Двоичная версия для Mac OS X 10.5 / x86:"),
    ("winbinary", "Двоичная версия для Windows:"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn english_keys_all_resolve() {
        for &(key, _) in EN {
            assert!(phrase(Lang::En, key).is_ok(), "EN key '{}' should resolve", key);
        }
    }

    #[test]
    fn russian_phrases_match_source() {
        assert_eq!(phrase(Lang::Ru, "version").unwrap(), "Версия");
        assert_eq!(phrase(Lang::Ru, "hosting").unwrap(), "Размещено на");
        assert_eq!(phrase(Lang::Ru, "md5").unwrap(), "MD5 checksum:");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(phrase(Lang::En, "contents").is_ok());
        assert_eq!(
            phrase(Lang::En, "Contents"),
            Err(ContentError::UnknownKey {
                lang: Lang::En,
                key: "Contents".to_string()
            })
        );
    }

    #[test]
    fn unknown_key_does_not_fall_back() {
        let mut ru = Dictionary::new(Lang::Ru);
        ru.insert("back", "Назад").unwrap();
        assert!(ru.get("contents").is_err());
    }

    #[test]
    fn duplicate_key_rejected() {
        let mut dict = Dictionary::new(Lang::De);
        dict.insert("back", "Zurück").unwrap();
        let err = dict.insert("back", "Zurueck").unwrap_err();
        assert_eq!(
            err,
            ContentError::DuplicateKey {
                lang: Lang::De,
                key: "back".to_string()
            }
        );
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn lang_roundtrip() {
        for lang in Lang::all() {
            assert_eq!(Lang::from_code(lang.code()), Some(*lang));
            assert_eq!(lang.code().parse::<Lang>().unwrap(), *lang);
        }
        assert!("RU".parse::<Lang>().is_err());
    }

    #[test]
    fn all_catalogs_share_english_keys() {
        let en: HashSet<&str> = EN.iter().map(|(k, _)| *k).collect();
        for lang in Lang::all() {
            let keys: Vec<&str> = catalog_for(*lang).iter().map(|(k, _)| *k).collect();
            let unique: HashSet<&str> = keys.iter().copied().collect();
            assert_eq!(keys.len(), unique.len(), "{} catalog has duplicate keys", lang);
            assert_eq!(unique, en, "{} catalog key set differs from EN", lang);
        }
    }

    #[test]
    fn builtin_dictionary_keeps_order() {
        let ru = builtin_dictionary(Lang::Ru);
        assert_eq!(ru.len(), 17);
        assert_eq!(ru.keys().next(), Some("version"));
        assert_eq!(ru.keys().last(), Some("winbinary"));
        assert_eq!(ru.get("contents").unwrap(), "Содержание");
    }

    #[test]
    fn builtin_dictionary_holds_every_catalog_entry() {
        for lang in Lang::all() {
            let dict = builtin_dictionary(*lang);
            assert_eq!(dict.len(), catalog_for(*lang).len(), "{}", lang);
            for &(key, value) in catalog_for(*lang) {
                assert_eq!(dict.get(key).unwrap(), value);
            }
        }
    }
}
