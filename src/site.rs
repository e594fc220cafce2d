// SPDX-License-Identifier: PMPL-1.0-or-later

//! A whole site: manifest, table of contents, news feeds and dictionaries.
//!
//! A content directory holds any number of `.a2ml` files, found recursively:
//! exactly one `(toc ..)`, at most one `(site ..)` manifest, and one
//! `(news ..)` or `(dictionary ..)` per language.

use crate::a2ml::{load_document, Document, Manifest};
use crate::error::{ContentError, ContentResult};
use crate::i18n::{builtin_dictionary, Dictionary, Lang};
use crate::news::{dvdisaster_news, NewsFeed};
use crate::toc::{dvdisaster_toc, Toc};
use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct Site {
    pub manifest: Manifest,
    pub toc: Toc,
    news: BTreeMap<Lang, NewsFeed>,
    dictionaries: BTreeMap<Lang, Dictionary>,
}

impl Site {
    pub fn new(manifest: Manifest, toc: Toc) -> Self {
        Self {
            manifest,
            toc,
            news: BTreeMap::new(),
            dictionaries: BTreeMap::new(),
        }
    }

    /// The dvdisaster homepage content compiled into the binary.
    pub fn builtin() -> ContentResult<Self> {
        let mut site = Self::new(Manifest::default(), dvdisaster_toc()?);
        site.news.insert(Lang::En, dvdisaster_news()?);
        for lang in Lang::all() {
            site.dictionaries.insert(*lang, builtin_dictionary(*lang));
        }
        Ok(site)
    }

    /// Loads every `.a2ml` document under `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let files = discover_documents(dir)?;
        debug!("{} content files under {}", files.len(), dir.display());

        let mut manifest: Option<(Manifest, PathBuf)> = None;
        let mut toc: Option<(Toc, PathBuf)> = None;
        let mut news = Vec::new();
        let mut dictionaries = Vec::new();

        for path in files {
            match load_document(&path)? {
                Document::Site(found) => {
                    if let Some((_, first)) = &manifest {
                        return Err(anyhow!(
                            "two site manifests: {} and {}",
                            first.display(),
                            path.display()
                        ));
                    }
                    manifest = Some((found, path));
                }
                Document::Toc(found) => {
                    if let Some((_, first)) = &toc {
                        return Err(anyhow!(
                            "two tables of contents: {} and {}",
                            first.display(),
                            path.display()
                        ));
                    }
                    toc = Some((found, path));
                }
                Document::News(feed) => news.push((feed, path)),
                Document::Dictionary(dict) => dictionaries.push((dict, path)),
            }
        }

        let (toc, _) = toc.ok_or_else(|| anyhow!("no (toc ..) document in {}", dir.display()))?;
        let manifest = manifest.map(|(manifest, _)| manifest).unwrap_or_default();
        let mut site = Self::new(manifest, toc);
        for (feed, path) in news {
            site.add_news(feed)
                .with_context(|| format!("adding {}", path.display()))?;
        }
        for (dict, path) in dictionaries {
            site.add_dictionary(dict)
                .with_context(|| format!("adding {}", path.display()))?;
        }
        info!(
            "loaded {} nodes, {} news feeds, {} dictionaries from {}",
            site.toc.len(),
            site.news.len(),
            site.dictionaries.len(),
            dir.display()
        );
        Ok(site)
    }

    pub fn add_news(&mut self, feed: NewsFeed) -> Result<()> {
        if self.news.contains_key(&feed.lang) {
            return Err(anyhow!("a {} news feed is already loaded", feed.lang));
        }
        self.news.insert(feed.lang, feed);
        Ok(())
    }

    pub fn add_dictionary(&mut self, dict: Dictionary) -> Result<()> {
        if self.dictionaries.contains_key(&dict.lang()) {
            return Err(anyhow!("a {} dictionary is already loaded", dict.lang()));
        }
        self.dictionaries.insert(dict.lang(), dict);
        Ok(())
    }

    /// Installs `dict`, returning the one it displaced.
    pub fn replace_dictionary(&mut self, dict: Dictionary) -> Option<Dictionary> {
        self.dictionaries.insert(dict.lang(), dict)
    }

    pub fn news(&self, lang: Lang) -> Option<&NewsFeed> {
        self.news.get(&lang)
    }

    pub fn dictionary(&self, lang: Lang) -> Option<&Dictionary> {
        self.dictionaries.get(&lang)
    }

    /// Exact-key lookup. A language without a dictionary has no keys.
    pub fn phrase(&self, lang: Lang, key: &str) -> ContentResult<&str> {
        match self.dictionaries.get(&lang) {
            Some(dict) => dict.get(key),
            None => Err(ContentError::UnknownKey {
                lang,
                key: key.to_string(),
            }),
        }
    }

    pub fn news_feeds(&self) -> impl Iterator<Item = &NewsFeed> {
        self.news.values()
    }

    pub fn dictionaries(&self) -> impl Iterator<Item = &Dictionary> {
        self.dictionaries.values()
    }
}

/// Every `.a2ml` file under `dir`, sorted so loading order is stable.
fn discover_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("Not a directory: {}", dir.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("scanning {}", dir.display()))?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "a2ml") {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn builtin_site_has_all_languages() {
        let site = Site::builtin().unwrap();
        assert_eq!(site.toc.len(), 40);
        assert_eq!(site.dictionaries().count(), 3);
        assert!(site.news(Lang::En).is_some());
        assert!(site.news(Lang::Ru).is_none());
        assert_eq!(site.phrase(Lang::Ru, "back").unwrap(), "Назад");
    }

    #[test]
    fn phrase_without_dictionary_is_unknown_key() {
        let site = Site::new(Manifest::default(), Toc::default());
        assert_eq!(
            site.phrase(Lang::De, "back"),
            Err(ContentError::UnknownKey {
                lang: Lang::De,
                key: "back".into()
            })
        );
    }

    #[test]
    fn loads_nested_content_directory() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "site.a2ml", "(site (languages en ru) (news-flash 2))");
        write(dir.path(), "toc.a2ml", "(toc (section \"news\") (en \"News\") (ru \"Новости\"))");
        write(
            dir.path(),
            "en/news.a2ml",
            "(news (lang en) (item (date \"01.02.2008\") (title \"t\") (body \"b\")))",
        );
        write(dir.path(), "ru/dict.a2ml", "(dictionary (lang ru) (entry back \"Назад\"))");
        write(dir.path(), "notes.txt", "not content");

        let site = Site::load(dir.path()).unwrap();
        assert_eq!(site.manifest.languages, vec![Lang::En, Lang::Ru]);
        assert_eq!(site.manifest.news_flash, 2);
        assert_eq!(site.toc.len(), 1);
        assert_eq!(site.news(Lang::En).unwrap().len(), 1);
        assert_eq!(site.phrase(Lang::Ru, "back").unwrap(), "Назад");
        assert!(site.dictionary(Lang::En).is_none());
    }

    #[test]
    fn rejects_missing_or_duplicate_documents() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "site.a2ml", "(site)");
        let err = Site::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("no (toc ..)"));

        write(dir.path(), "a.a2ml", "(toc (section a) (en \"A\"))");
        write(dir.path(), "b.a2ml", "(toc (section b) (en \"B\"))");
        let err = Site::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("two tables of contents"));
    }

    #[test]
    fn rejects_second_feed_for_a_language() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "toc.a2ml", "(toc (section a) (en \"A\"))");
        write(dir.path(), "n1.a2ml", "(news (lang en))");
        write(dir.path(), "n2.a2ml", "(news (lang en))");
        let err = Site::load(dir.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("already loaded"));
    }

    #[test]
    fn parse_errors_name_the_file() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "toc.a2ml", "(toc (subsection \"x\") (en \"X\"))");
        let err = Site::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("toc.a2ml"), "{}", err);
        assert!(err.downcast_ref::<ContentError>().is_some());
    }

    #[test]
    fn missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        assert!(Site::load(&dir.path().join("absent")).is_err());
    }
}
