// SPDX-License-Identifier: PMPL-1.0-or-later

//! Table of contents: a three-level tree of documentation sections with
//! per-language labels.

mod builder;
mod builtin;
mod declaration;
mod tree;

pub use builder::TocBuilder;
pub use builtin::dvdisaster_toc;
pub use declaration::Declaration;
pub use tree::{Label, Labels, Toc, TocLevel, TocNode, Walk};
