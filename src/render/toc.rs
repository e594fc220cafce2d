// SPDX-License-Identifier: PMPL-1.0-or-later

//! Navigation and contents page built from the table of contents.

use super::html::{CONTENTS_PAGE, NEWS_PAGE};
use super::{escape, Renderer};
use crate::error::ContentResult;
use crate::toc::TocNode;

/// TOC id whose entry links to the news page instead of an anchor.
const NEWS_NODE: &str = "news";

impl<'a> Renderer<'a> {
    /// Nested `<ul>` over the whole tree, depth-first. Nodes without a
    /// resolvable label are skipped along with their children.
    pub fn nav(&self, current: Option<&str>) -> String {
        let mut out = String::from("<nav>\n");
        self.nav_list(self.site.toc.sections(), current, 0, &mut out);
        out.push_str("</nav>\n");
        out
    }

    fn nav_list(&self, nodes: &'a [TocNode], current: Option<&str>, depth: usize, out: &mut String) {
        let visible: Vec<(&'a TocNode, &'a str)> = nodes
            .iter()
            .filter_map(|node| self.label(node).map(|label| (node, label)))
            .collect();
        if visible.is_empty() {
            return;
        }

        let indent = "  ".repeat(depth);
        out.push_str(&format!("{}<ul class=\"{}\">\n", indent, nodes[0].level().keyword()));
        for (node, label) in visible {
            let class = if current == Some(node.id()) {
                " class=\"current\""
            } else {
                ""
            };
            out.push_str(&format!(
                "{}  <li{}><a href=\"{}\">{}</a>",
                indent,
                class,
                self.href(node),
                escape(label)
            ));
            if node.children().is_empty() {
                out.push_str("</li>\n");
            } else {
                out.push('\n');
                self.nav_list(node.children(), current, depth + 1, out);
                out.push_str(&format!("{}  </li>\n", indent));
            }
        }
        out.push_str(&format!("{}</ul>\n", indent));
    }

    fn href(&self, node: &TocNode) -> String {
        if node.id() == NEWS_NODE && self.site.news(self.lang).is_some() {
            NEWS_PAGE.to_string()
        } else {
            format!("{}#{}", CONTENTS_PAGE, escape(node.id()))
        }
    }

    /// `index.html`: every node with its localized label and an anchor.
    pub fn contents_page(&self) -> ContentResult<String> {
        let title = self.phrase("contents")?;
        let mut body = format!("<h1>{}</h1>\n", escape(title));
        if let Some(feed) = self.site.news(self.lang) {
            body.push_str(&self.news_flash(feed, self.site.manifest.news_flash)?);
        }

        let mut hidden_below: Option<usize> = None;
        for (node, depth) in self.site.toc.walk() {
            if let Some(limit) = hidden_below {
                if depth > limit {
                    continue;
                }
                hidden_below = None;
            }
            let Some(label) = self.label(node) else {
                hidden_below = Some(depth);
                continue;
            };
            let heading = depth + 2;
            body.push_str(&format!(
                "<h{level} id=\"{id}\">{label}</h{level}>\n",
                level = heading,
                id = escape(node.id()),
                label = escape(label)
            ));
        }

        self.page(CONTENTS_PAGE, title, None, &body)
    }
}
