// SPDX-License-Identifier: PMPL-1.0-or-later

//! Structural content errors.
//!
//! These are authoring mistakes in the news, dictionary or table-of-contents
//! data. They are reported to whoever wrote the content and stop the build;
//! nothing retries or recovers from them.

use crate::i18n::Lang;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("subsection '{id}' declared before any section")]
    OrphanSubsection { id: String },

    #[error("subsubsection '{id}' declared without an enclosing subsection")]
    OrphanSubsubsection { id: String },

    #[error("{lang} label \"{text}\" given before any section was declared")]
    LabelWithoutNode { lang: Lang, text: String },

    #[error("node '{id}' already has a {lang} label")]
    DuplicateLabel { id: String, lang: Lang },

    #[error("node '{id}' has no labels")]
    MissingLabels { id: String },

    #[error("node id '{id}' is declared twice")]
    DuplicateId { id: String },

    #[error("node ids must not be empty")]
    EmptyId,

    #[error("no {lang} dictionary entry for key '{key}'")]
    UnknownKey { lang: Lang, key: String },

    #[error("{lang} dictionary defines key '{key}' twice")]
    DuplicateKey { lang: Lang, key: String },

    #[error("invalid news date '{0}' (expected DD.MM.YYYY)")]
    InvalidDate(String),

    #[error("unsupported language code '{0}'")]
    UnknownLanguage(String),
}

pub type ContentResult<T> = std::result::Result<T, ContentError>;
