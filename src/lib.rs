// SPDX-License-Identifier: PMPL-1.0-or-later

//! dvdisaster-site: the multilingual content layer of the dvdisaster homepage.
//!
//! The crate holds three kinds of content, each available in German, English
//! and Russian:
//!
//! 1. **News**: dated announcements with markup titles and bodies.
//! 2. **Dictionaries**: per-language key to phrase tables used by page chrome.
//! 3. **Table of contents**: a three-level tree declared step by step through
//!    [`toc::TocBuilder`], which rejects orphan nodes and stray labels.
//!
//! Content is either compiled in ([`site::Site::builtin`]) or loaded from A2ML
//! files ([`site::Site::load`]), checked ([`diagnostics`]), rendered to static
//! HTML and Atom ([`render`]) and written out ([`storage::publish`]).

pub mod a2ml;
pub mod diagnostics;
pub mod error;
pub mod export;
pub mod i18n;
pub mod news;
pub mod render;
pub mod site;
pub mod storage;
pub mod toc;
