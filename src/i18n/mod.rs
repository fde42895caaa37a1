// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation module for linguafolio.
//!
//! ## Supported languages
//!
//! | Code | Language | Native name |
//! |------|----------|-------------|
//! | en   | English  | English     |
//! | fr   | French   | Français    |
//!
//! ## Design
//!
//! Translation keys use dotted namespaces: `"nav.contact"`,
//! `"projects.chronosync.title"`. A lookup walks the active language's tree
//! segment by segment; when the walk fails it is retried against the English
//! tree (if loaded), then the caller's literal fallback, then the key string
//! itself is returned (fail-open, never panics, never returns empty).
//!
//! Trees are assembled on demand from a [`BundleSource`] (one common bundle
//! plus one bundle per project section) and cached per language for the
//! lifetime of the process.

mod engine;
mod lang;
mod resolver;
mod source;
mod store;
mod tree;

pub use engine::{I18n, LoadPhase};
pub use lang::{Lang, TextDirection};
pub use resolver::{resolve, resolve_with_fallback};
pub use source::{parse_bundle, BundleSource, DirSource, MemorySource, PROJECT_SECTIONS};
pub use store::TranslationStore;
pub use tree::{leaf_keys, TranslationTree, TranslationValue};
