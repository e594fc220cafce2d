// SPDX-License-Identifier: PMPL-1.0-or-later

//! News page and news flash.

use super::html::NEWS_PAGE;
use super::{escape, Renderer};
use crate::error::ContentResult;
use crate::news::{NewsEntry, NewsFeed};

impl<'a> Renderer<'a> {
    /// One news item. Title and body are emitted verbatim.
    pub fn news_item(&self, entry: &NewsEntry) -> String {
        format!(
            "<div class=\"news-item\">\n<h3><time datetime=\"{}\">{}</time> {}</h3>\n<div class=\"news-body\">{}</div>\n</div>\n",
            entry.date.iso(),
            entry.date,
            entry.title,
            entry.body
        )
    }

    /// `news.html`: the headline followed by every entry in authoring order.
    pub fn news_page(&self, feed: &NewsFeed) -> ContentResult<String> {
        let mut body = format!("<h1>{}</h1>\n", escape(&feed.headline));
        for entry in feed.entries() {
            body.push_str(&self.news_item(entry));
        }
        let title = if feed.headline.is_empty() {
            self.phrase("news")?
        } else {
            feed.headline.as_str()
        };
        self.page(NEWS_PAGE, title, Some("news"), &body)
    }

    /// Titles and dates of the first `count` entries, linking to the news page.
    pub fn news_flash(&self, feed: &NewsFeed, count: usize) -> ContentResult<String> {
        let entries = feed.flash(count);
        if entries.is_empty() {
            return Ok(String::new());
        }
        let mut out = format!(
            "<aside class=\"news-flash\">\n<h2><a href=\"{}\">{}</a></h2>\n<ul>\n",
            NEWS_PAGE,
            escape(self.phrase("news")?)
        );
        for entry in entries {
            out.push_str(&format!(
                "  <li><time datetime=\"{}\">{}</time> {}</li>\n",
                entry.date.iso(),
                entry.date,
                entry.title
            ));
        }
        out.push_str("</ul>\n</aside>\n");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use crate::i18n::Lang;
    use crate::news::dvdisaster_news;
    use crate::render::Renderer;
    use crate::site::Site;

    #[test]
    fn news_page_keeps_order_and_markup() {
        let site = Site::builtin().unwrap();
        let feed = dvdisaster_news().unwrap();
        let html = Renderer::new(&site, Lang::En).news_page(&feed).unwrap();
        assert!(html.contains("<h1>dvdisaster News</h1>"));
        assert!(html.contains("<i>Currently, the english documentation"));
        assert!(html.contains("images &gt;2GB fail"));
        let first = html.find("05.03.2008").unwrap();
        let last = html.find("28.10.2007").unwrap();
        assert!(first < last);
        assert!(html.contains("<time datetime=\"2008-03-05\">"));
    }

    #[test]
    fn news_flash_is_limited() {
        let site = Site::builtin().unwrap();
        let feed = dvdisaster_news().unwrap();
        let renderer = Renderer::new(&site, Lang::En);
        let flash = renderer.news_flash(&feed, 2).unwrap();
        assert_eq!(flash.matches("<li>").count(), 2);
        assert!(flash.contains("<a href=\"news.html\">News</a>"));
        assert!(!flash.contains("New documentation started"));
        assert_eq!(renderer.news_flash(&feed, 0).unwrap(), "");
        assert_eq!(renderer.news_flash(&feed, 10).unwrap().matches("<li>").count(), 4);
    }
}
