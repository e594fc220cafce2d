// SPDX-License-Identifier: PMPL-1.0-or-later

//! The flat declaration form of the table of contents.
//!
//! A TOC is authored as a sequence of `section` / `subsection` /
//! `subsubsection` steps, each followed by its labels. Converting a tree back
//! to declarations reproduces the authored sequence exactly, label order
//! included.

use super::builder::TocBuilder;
use super::tree::{Toc, TocLevel, TocNode};
use crate::a2ml::quote;
use crate::error::ContentResult;
use crate::i18n::Lang;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Declaration {
    Section(String),
    Subsection(String),
    Subsubsection(String),
    Label(Lang, String),
}

impl Declaration {
    pub fn open(level: TocLevel, id: impl Into<String>) -> Self {
        let id = id.into();
        match level {
            TocLevel::Section => Declaration::Section(id),
            TocLevel::Subsection => Declaration::Subsection(id),
            TocLevel::Subsubsection => Declaration::Subsubsection(id),
        }
    }
}

/// One A2ML line: `(section "news")` or `(de "Neuigkeiten")`.
impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Declaration::Section(id) => write!(f, "(section {})", quote(id)),
            Declaration::Subsection(id) => write!(f, "(subsection {})", quote(id)),
            Declaration::Subsubsection(id) => write!(f, "(subsubsection {})", quote(id)),
            Declaration::Label(lang, text) => write!(f, "({} {})", lang.code(), quote(text)),
        }
    }
}

impl Toc {
    pub fn to_declarations(&self) -> Vec<Declaration> {
        fn emit(node: &TocNode, out: &mut Vec<Declaration>) {
            out.push(Declaration::open(node.level, node.id.clone()));
            for label in &node.labels {
                out.push(Declaration::Label(label.lang, label.text.clone()));
            }
            for child in &node.children {
                emit(child, out);
            }
        }

        let mut out = Vec::new();
        for section in self.sections() {
            emit(section, &mut out);
        }
        out
    }

    pub fn from_declarations<I>(declarations: I) -> ContentResult<Toc>
    where
        I: IntoIterator<Item = Declaration>,
    {
        let mut builder = TocBuilder::new();
        for declaration in declarations {
            builder.declare(declaration)?;
        }
        builder.finish()
    }
}
