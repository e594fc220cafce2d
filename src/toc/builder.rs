// SPDX-License-Identifier: PMPL-1.0-or-later

//! Order-dependent construction of the table of contents.
//!
//! Nodes nest by declaration order: a subsection belongs to the most recently
//! declared section, a subsubsection to the most recently declared
//! subsection. The builder holds that cursor explicitly; labels attach to
//! whichever node is currently the most specific open one.

use super::declaration::Declaration;
use super::tree::{Toc, TocLevel, TocNode};
use crate::error::{ContentError, ContentResult};
use crate::i18n::Lang;
use log::debug;
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct TocBuilder {
    sections: Vec<TocNode>,
    open: Option<TocLevel>,
    ids: HashSet<String>,
}

impl TocBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a top-level node, closing any open subsection or subsubsection.
    pub fn section(&mut self, id: impl Into<String>) -> ContentResult<&mut Self> {
        let id = self.claim_id(id.into())?;
        self.sections.push(TocNode::new(id, TocLevel::Section));
        self.open = Some(TocLevel::Section);
        Ok(self)
    }

    /// Opens a node under the current section, closing any open
    /// subsubsection.
    pub fn subsection(&mut self, id: impl Into<String>) -> ContentResult<&mut Self> {
        let id = id.into();
        if self.sections.is_empty() {
            return Err(ContentError::OrphanSubsection { id });
        }
        let id = self.claim_id(id)?;
        if let Some(section) = self.sections.last_mut() {
            section
                .children
                .push(TocNode::new(id, TocLevel::Subsection));
        }
        self.open = Some(TocLevel::Subsection);
        Ok(self)
    }

    /// Opens a node under the current subsection.
    ///
    /// Fails right after a `section`, even if an earlier section had
    /// subsections: declaring a section closes them.
    pub fn subsubsection(&mut self, id: impl Into<String>) -> ContentResult<&mut Self> {
        let id = id.into();
        if !matches!(
            self.open,
            Some(TocLevel::Subsection) | Some(TocLevel::Subsubsection)
        ) {
            return Err(ContentError::OrphanSubsubsection { id });
        }
        let id = self.claim_id(id)?;
        let parent = self
            .sections
            .last_mut()
            .and_then(|section| section.children.last_mut());
        match parent {
            Some(subsection) => subsection
                .children
                .push(TocNode::new(id, TocLevel::Subsubsection)),
            None => return Err(ContentError::OrphanSubsubsection { id }),
        }
        self.open = Some(TocLevel::Subsubsection);
        Ok(self)
    }

    /// Attaches a label to the most specific open node.
    pub fn label(&mut self, lang: Lang, text: impl Into<String>) -> ContentResult<&mut Self> {
        let text = text.into();
        let node = match self.current_mut() {
            Some(node) => node,
            None => return Err(ContentError::LabelWithoutNode { lang, text }),
        };
        if !node.labels.push(lang, text) {
            return Err(ContentError::DuplicateLabel {
                id: node.id.clone(),
                lang,
            });
        }
        Ok(self)
    }

    pub fn labels(&mut self, labels: &[(Lang, &str)]) -> ContentResult<&mut Self> {
        for &(lang, text) in labels {
            self.label(lang, text)?;
        }
        Ok(self)
    }

    /// Applies one step of the flat declaration form.
    pub fn declare(&mut self, declaration: Declaration) -> ContentResult<&mut Self> {
        match declaration {
            Declaration::Section(id) => self.section(id),
            Declaration::Subsection(id) => self.subsection(id),
            Declaration::Subsubsection(id) => self.subsubsection(id),
            Declaration::Label(lang, text) => self.label(lang, text),
        }
    }

    /// The node labels currently attach to.
    pub fn current(&self) -> Option<&TocNode> {
        let section = self.sections.last()?;
        match self.open? {
            TocLevel::Section => Some(section),
            TocLevel::Subsection => section.children.last(),
            TocLevel::Subsubsection => section.children.last()?.children.last(),
        }
    }

    /// Closes the builder. Every node must carry at least one label.
    pub fn finish(self) -> ContentResult<Toc> {
        let toc = Toc::from_sections(self.sections);
        if let Some((node, _)) = toc.walk().find(|(node, _)| node.labels.is_empty()) {
            return Err(ContentError::MissingLabels {
                id: node.id.clone(),
            });
        }
        debug!(
            "table of contents built: {} sections, {} nodes",
            toc.sections().len(),
            toc.len()
        );
        Ok(toc)
    }

    fn current_mut(&mut self) -> Option<&mut TocNode> {
        let section = self.sections.last_mut()?;
        match self.open? {
            TocLevel::Section => Some(section),
            TocLevel::Subsection => section.children.last_mut(),
            TocLevel::Subsubsection => section.children.last_mut()?.children.last_mut(),
        }
    }

    fn claim_id(&mut self, id: String) -> ContentResult<String> {
        if id.trim().is_empty() {
            return Err(ContentError::EmptyId);
        }
        if !self.ids.insert(id.clone()) {
            return Err(ContentError::DuplicateId { id });
        }
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(nodes: &[TocNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.id()).collect()
    }

    #[test]
    fn nesting_follows_declaration_order() {
        let mut builder = TocBuilder::new();
        builder.section("A").unwrap().label(Lang::En, "A").unwrap();
        builder.subsection("B").unwrap().label(Lang::En, "B").unwrap();
        builder.subsubsection("C").unwrap().label(Lang::En, "C").unwrap();
        builder.subsection("D").unwrap().label(Lang::En, "D").unwrap();
        let toc = builder.finish().unwrap();

        assert_eq!(ids(toc.sections()), vec!["A"]);
        let a = &toc.sections()[0];
        assert_eq!(ids(a.children()), vec!["B", "D"]);
        assert_eq!(ids(a.children()[0].children()), vec!["C"]);
        assert!(a.children()[1].children().is_empty());
    }

    #[test]
    fn subsection_before_section_fails() {
        let mut builder = TocBuilder::new();
        let err = builder.subsection("index10").unwrap_err();
        assert_eq!(
            err,
            ContentError::OrphanSubsection {
                id: "index10".into()
            }
        );
    }

    #[test]
    fn subsubsection_right_after_section_fails() {
        let mut builder = TocBuilder::new();
        builder.section("a").unwrap().label(Lang::En, "a").unwrap();
        builder.subsection("a1").unwrap().label(Lang::En, "a1").unwrap();
        builder.section("b").unwrap().label(Lang::En, "b").unwrap();
        let err = builder.subsubsection("b11").unwrap_err();
        assert_eq!(err, ContentError::OrphanSubsubsection { id: "b11".into() });
    }

    #[test]
    fn label_attaches_to_most_specific_node() {
        let mut builder = TocBuilder::new();
        builder.section("s").unwrap().label(Lang::De, "S").unwrap();
        builder.subsection("ss").unwrap();
        builder.label(Lang::Ru, "SS").unwrap();
        assert_eq!(builder.current().map(|n| n.id()), Some("ss"));
        builder.subsubsection("sss").unwrap().label(Lang::En, "SSS").unwrap();
        let toc = builder.finish().unwrap();

        let s = &toc.sections()[0];
        assert_eq!(s.labels().len(), 1);
        assert_eq!(s.children()[0].label(Lang::Ru), Some("SS"));
        assert_eq!(s.children()[0].children()[0].label(Lang::En), Some("SSS"));
    }

    #[test]
    fn label_without_node_fails() {
        let mut builder = TocBuilder::new();
        assert!(matches!(
            builder.label(Lang::En, "News"),
            Err(ContentError::LabelWithoutNode { lang: Lang::En, .. })
        ));
    }

    #[test]
    fn duplicate_label_and_id_rejected() {
        let mut builder = TocBuilder::new();
        builder.section("news").unwrap().label(Lang::En, "News").unwrap();
        assert_eq!(
            builder.label(Lang::En, "Updates").unwrap_err(),
            ContentError::DuplicateLabel {
                id: "news".into(),
                lang: Lang::En
            }
        );
        assert_eq!(
            builder.section("news").unwrap_err(),
            ContentError::DuplicateId { id: "news".into() }
        );
        assert_eq!(builder.section("  ").unwrap_err(), ContentError::EmptyId);
    }

    #[test]
    fn unlabelled_node_fails_on_finish() {
        let mut builder = TocBuilder::new();
        builder.section("a").unwrap().label(Lang::En, "A").unwrap();
        builder.subsection("quiet").unwrap();
        assert_eq!(
            builder.finish().unwrap_err(),
            ContentError::MissingLabels { id: "quiet".into() }
        );
    }

    #[test]
    fn labels_helper_chains() {
        let mut builder = TocBuilder::new();
        builder
            .section("download")
            .and_then(|b| b.labels(&[(Lang::De, "Herunterladen"), (Lang::En, "Download")]))
            .unwrap();
        let toc = builder.finish().unwrap();
        let langs: Vec<Lang> = toc.sections()[0].labels().langs().collect();
        assert_eq!(langs, vec![Lang::De, Lang::En]);
    }
}
