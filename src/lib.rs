// SPDX-License-Identifier: PMPL-1.0-or-later

//! Linguafolio: hierarchical translation resolution for portfolio content.
//!
//! The i18n core behind a multilingual portfolio site:
//!
//! 1. **Store**: a per-language cache of translation trees assembled from a
//!    common bundle plus one bundle per project section, loaded at most once
//!    per language.
//! 2. **Resolver**: dotted-key lookup over those trees with the fallback
//!    chain active language → English → caller literal → raw key.
//! 3. **Engine**: the active-language state machine (idle/loading), system
//!    locale detection, and persistence of the selected language.
//!
//! The consumer surface is deliberately small: `t`/`t_or` for lookups,
//! `set_language` for switches, and read-only accessors for the active
//! language and its text direction. Nothing on that surface returns an
//! error; every lookup degrades to a displayable string.

pub mod audit;
pub mod details;
pub mod i18n;
pub mod prefs;
