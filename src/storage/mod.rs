// SPDX-License-Identifier: PMPL-1.0-or-later

//! Writes rendered pages to the output directory

use crate::i18n::Lang;
use crate::render::{Renderer, CONTENTS_PAGE, FEED_FILE, NEWS_PAGE};
use crate::site::Site;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Renders `langs` into `<out_dir>/<lang>/` and returns the written files.
///
/// Every language gets a contents page; languages with a news feed also get
/// the news page and the Atom feed. Nothing is written for a language whose
/// pages fail to render.
pub fn publish(site: &Site, out_dir: &Path, langs: &[Lang]) -> Result<Vec<PathBuf>> {
    let mut stored = Vec::new();

    for lang in langs {
        let renderer = Renderer::new(site, *lang);
        let mut pages = vec![(
            CONTENTS_PAGE,
            renderer
                .contents_page()
                .with_context(|| format!("rendering {}/{}", lang, CONTENTS_PAGE))?,
        )];
        if let Some(feed) = site.news(*lang) {
            pages.push((
                NEWS_PAGE,
                renderer
                    .news_page(feed)
                    .with_context(|| format!("rendering {}/{}", lang, NEWS_PAGE))?,
            ));
            pages.push((
                FEED_FILE,
                renderer
                    .atom_feed(feed)
                    .with_context(|| format!("rendering {}/{}", lang, FEED_FILE))?,
            ));
        }

        let lang_dir = out_dir.join(lang.code());
        fs::create_dir_all(&lang_dir)
            .with_context(|| format!("creating {}", lang_dir.display()))?;
        for (file_name, content) in pages {
            let path = lang_dir.join(file_name);
            fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
            debug!("wrote {}", path.display());
            stored.push(path);
        }
    }

    Ok(stored)
}
