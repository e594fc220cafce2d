// SPDX-License-Identifier: PMPL-1.0-or-later

//! Languages and phrase dictionaries for the homepage.
//!
//! ## Supported languages
//!
//! | Code | Language | Native name |
//! |------|----------|-------------|
//! | de   | German   | Deutsch     |
//! | en   | English  | English     |
//! | ru   | Russian  | Русский     |
//!
//! ## Design
//!
//! Dictionary keys are symbolic and identical across languages
//! (`"contents"`, `"hosting"`, `"fdl"`). A lookup only consults the
//! dictionary of the requested language: an unknown key is a
//! [`ContentError::UnknownKey`](crate::error::ContentError::UnknownKey),
//! never an empty string and never the English phrase.
//!
//! The built-in dictionaries are embedded as static tables; user-authored
//! dictionaries are loaded from A2ML content files into the same
//! [`Dictionary`] type.

mod catalog;
mod iso639;

pub use catalog::{builtin_dictionary, phrase, Dictionary, DictionaryEntry, Lang};
pub use iso639::{is_valid_iso639_1, language_name, native_name};
