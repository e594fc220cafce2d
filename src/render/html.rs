// SPDX-License-Identifier: PMPL-1.0-or-later

//! Page shell shared by every generated page.

use super::{escape, Renderer};
use crate::error::ContentResult;
use crate::i18n::Lang;

pub const CONTENTS_PAGE: &str = "index.html";
pub const NEWS_PAGE: &str = "news.html";
pub const FEED_FILE: &str = "atom.xml";

impl<'a> Renderer<'a> {
    /// Wraps `body` into a complete document.
    ///
    /// `file_name` is the page's own file, used by the language switcher to
    /// link to the same page in the other languages. `current` is the TOC id
    /// marked in the navigation and expanded into breadcrumbs.
    pub fn page(
        &self,
        file_name: &str,
        title: &str,
        current: Option<&str>,
        body: &str,
    ) -> ContentResult<String> {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n");
        out.push_str(&format!("<html lang=\"{}\">\n<head>\n", self.lang.code()));
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str(&format!(
            "<title>{} - {}</title>\n",
            escape(&self.site.manifest.title),
            escape(title)
        ));
        if self.site.news(self.lang).is_some() {
            out.push_str(&format!(
                "<link rel=\"alternate\" type=\"application/atom+xml\" title=\"{}\" href=\"{}\">\n",
                escape(self.phrase("atom_title")?),
                FEED_FILE
            ));
        }
        out.push_str("</head>\n<body>\n");

        out.push_str("<header>\n");
        out.push_str(&format!(
            "<p class=\"site-title\"><a href=\"{}\">{}</a></p>\n",
            CONTENTS_PAGE,
            escape(&self.site.manifest.title)
        ));
        out.push_str(&self.language_switcher(file_name));
        out.push_str("</header>\n");

        out.push_str(&self.nav(current));
        out.push_str("<main>\n");
        if let Some(id) = current {
            out.push_str(&self.breadcrumbs(id));
        }
        out.push_str(body);
        if !body.ends_with('\n') {
            out.push('\n');
        }
        out.push_str("</main>\n");
        out.push_str(&self.footer()?);
        out.push_str("</body>\n</html>\n");
        Ok(out)
    }

    fn language_switcher(&self, file_name: &str) -> String {
        let mut out = String::from("<ul class=\"languages\">\n");
        for lang in &self.site.manifest.languages {
            if *lang == self.lang {
                out.push_str(&format!(
                    "  <li class=\"current\" lang=\"{}\">{}</li>\n",
                    lang.code(),
                    lang.native_name()
                ));
            } else {
                out.push_str(&format!(
                    "  <li lang=\"{}\"><a href=\"{}\">{}</a></li>\n",
                    lang.code(),
                    sibling_link(*lang, file_name),
                    lang.native_name()
                ));
            }
        }
        out.push_str("</ul>\n");
        out
    }

    fn breadcrumbs(&self, id: &str) -> String {
        let Some(trail) = self.site.toc.trail(id) else {
            return String::new();
        };
        let crumbs: Vec<String> = trail
            .into_iter()
            .filter_map(|node| self.label(node).map(escape))
            .collect();
        if crumbs.is_empty() {
            return String::new();
        }
        format!("<p class=\"trail\">{}</p>\n", crumbs.join(" &raquo; "))
    }

    fn footer(&self) -> ContentResult<String> {
        Ok(format!(
            "<footer>\n<p>{}</p>\n<p>{}</p>\n</footer>\n",
            escape(self.phrase("copyright")?),
            escape(self.phrase("fdl")?)
        ))
    }
}

/// Relative link from one language directory to the same file in another.
pub(crate) fn sibling_link(lang: Lang, file_name: &str) -> String {
    format!("../{}/{}", lang.code(), file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::Site;

    #[test]
    fn shell_has_switcher_and_footer() {
        let site = Site::builtin().unwrap();
        let html = Renderer::new(&site, Lang::De)
            .page(CONTENTS_PAGE, "Inhalt", None, "<p>x</p>")
            .unwrap();
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"de\">"));
        assert!(html.contains("<li class=\"current\" lang=\"de\">Deutsch</li>"));
        assert!(html.contains("href=\"../ru/index.html\">Русский</a>"));
        assert!(html.contains("<footer>"));
        assert!(html.contains("<p>x</p>\n</main>"));
    }

    #[test]
    fn feed_link_only_with_news() {
        let site = Site::builtin().unwrap();
        let en = Renderer::new(&site, Lang::En)
            .page(CONTENTS_PAGE, "Contents", None, "")
            .unwrap();
        assert!(en.contains("application/atom+xml"));
        let ru = Renderer::new(&site, Lang::Ru)
            .page(CONTENTS_PAGE, "Contents", None, "")
            .unwrap();
        assert!(!ru.contains("application/atom+xml"));
    }

    #[test]
    fn breadcrumbs_follow_trail() {
        let site = Site::builtin().unwrap();
        let html = Renderer::new(&site, Lang::En)
            .page(CONTENTS_PAGE, "x", Some("howtos11"), "")
            .unwrap();
        assert!(html.contains("<p class=\"trail\">Howtos &raquo; "), "{}", html);
    }

    #[test]
    fn sibling_link_points_to_other_language() {
        assert_eq!(sibling_link(Lang::Ru, NEWS_PAGE), "../ru/news.html");
    }
}
