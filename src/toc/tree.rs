// SPDX-License-Identifier: PMPL-1.0-or-later

//! Table-of-contents tree types and traversal.

use crate::i18n::Lang;
use serde::{Deserialize, Serialize};

/// Nesting level of a TOC node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TocLevel {
    Section,
    Subsection,
    Subsubsection,
}

impl TocLevel {
    /// Keyword used by the flat declaration form.
    pub fn keyword(&self) -> &'static str {
        match self {
            TocLevel::Section => "section",
            TocLevel::Subsection => "subsection",
            TocLevel::Subsubsection => "subsubsection",
        }
    }

    pub fn from_keyword(value: &str) -> Option<Self> {
        match value {
            "section" => Some(TocLevel::Section),
            "subsection" => Some(TocLevel::Subsection),
            "subsubsection" => Some(TocLevel::Subsubsection),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub lang: Lang,
    pub text: String,
}

/// Per-language labels of one node, in the order they were declared.
///
/// At most one label per language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Labels(Vec<Label>);

impl Labels {
    pub fn get(&self, lang: Lang) -> Option<&str> {
        self.0
            .iter()
            .find(|label| label.lang == lang)
            .map(|label| label.text.as_str())
    }

    pub fn has(&self, lang: Lang) -> bool {
        self.0.iter().any(|label| label.lang == lang)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Label> {
        self.0.iter()
    }

    pub fn langs(&self) -> impl Iterator<Item = Lang> + '_ {
        self.0.iter().map(|label| label.lang)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `false` and leaves the labels untouched if `lang` is taken.
    pub(crate) fn push(&mut self, lang: Lang, text: String) -> bool {
        if self.has(lang) {
            return false;
        }
        self.0.push(Label { lang, text });
        true
    }
}

impl<'a> IntoIterator for &'a Labels {
    type Item = &'a Label;
    type IntoIter = std::slice::Iter<'a, Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocNode {
    pub(crate) id: String,
    pub(crate) level: TocLevel,
    pub(crate) labels: Labels,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) children: Vec<TocNode>,
}

impl TocNode {
    pub(crate) fn new(id: String, level: TocLevel) -> Self {
        Self {
            id,
            level,
            labels: Labels::default(),
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn level(&self) -> TocLevel {
        self.level
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn label(&self, lang: Lang) -> Option<&str> {
        self.labels.get(lang)
    }

    pub fn children(&self) -> &[TocNode] {
        &self.children
    }
}

/// The finished table of contents. Only [`TocBuilder`](super::TocBuilder)
/// creates one, so every tree upholds the builder's invariants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Toc {
    sections: Vec<TocNode>,
}

impl Toc {
    pub(crate) fn from_sections(sections: Vec<TocNode>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[TocNode] {
        &self.sections
    }

    /// Depth-first, pre-order traversal yielding each node with its depth.
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(&self.sections)
    }

    /// Total number of nodes at every level.
    pub fn len(&self) -> usize {
        self.walk().count()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&TocNode> {
        self.walk().map(|(node, _)| node).find(|node| node.id == id)
    }

    /// The chain of nodes from the enclosing section down to `id`.
    pub fn trail(&self, id: &str) -> Option<Vec<&TocNode>> {
        fn descend<'a>(nodes: &'a [TocNode], id: &str, path: &mut Vec<&'a TocNode>) -> bool {
            for node in nodes {
                path.push(node);
                if node.id == id || descend(&node.children, id, path) {
                    return true;
                }
                path.pop();
            }
            false
        }

        let mut path = Vec::new();
        if descend(&self.sections, id, &mut path) {
            Some(path)
        } else {
            None
        }
    }
}

pub struct Walk<'a> {
    stack: Vec<(&'a TocNode, usize)>,
}

impl<'a> Walk<'a> {
    pub(crate) fn new(roots: &'a [TocNode]) -> Self {
        Self {
            stack: roots.iter().rev().map(|node| (node, 0)).collect(),
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (&'a TocNode, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|child| (child, depth + 1)));
        Some((node, depth))
    }
}
