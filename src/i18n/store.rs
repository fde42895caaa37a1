// SPDX-License-Identifier: PMPL-1.0-or-later

//! Per-language translation cache.
//!
//! Each supported language owns one mutex-guarded slot holding its merged
//! tree. The mutex is held across the load, so concurrent callers asking
//! for the same uncached language perform the bundle I/O once. A populated
//! tree is never reloaded for the lifetime of the process. An empty tree
//! (the result of a failed common-bundle load) does not count as populated,
//! so the next access retries the load.

use crate::i18n::lang::Lang;
use crate::i18n::source::BundleSource;
use crate::i18n::tree::{TranslationTree, TranslationValue};
use std::sync::{Arc, Mutex};

pub struct TranslationStore {
    slots: Vec<(Lang, Mutex<Arc<TranslationTree>>)>,
}

impl TranslationStore {
    pub fn new() -> Self {
        Self {
            slots: Lang::all()
                .iter()
                .map(|lang| (*lang, Mutex::new(Arc::new(TranslationTree::new()))))
                .collect(),
        }
    }

    fn slot(&self, lang: Lang) -> &Mutex<Arc<TranslationTree>> {
        let (_, slot) = self
            .slots
            .iter()
            .find(|(slot_lang, _)| *slot_lang == lang)
            .expect("store has a slot for every Lang");
        slot
    }

    /// Return `lang`'s tree, loading and caching it on first use.
    pub fn ensure_loaded(&self, lang: Lang, source: &dyn BundleSource) -> Arc<TranslationTree> {
        let mut slot = self.slot(lang).lock().expect("store slot lock");
        if !slot.is_empty() {
            return Arc::clone(&slot);
        }
        *slot = Arc::new(load_merged(lang, source));
        Arc::clone(&slot)
    }

    /// Current snapshot of `lang`'s tree, without triggering a load.
    pub fn cached(&self, lang: Lang) -> Arc<TranslationTree> {
        Arc::clone(&self.slot(lang).lock().expect("store slot lock"))
    }

    /// Whether `lang`'s tree has been populated.
    pub fn is_loaded(&self, lang: Lang) -> bool {
        !self.cached(lang).is_empty()
    }
}

impl Default for TranslationStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Assemble `lang`'s merged tree: the common bundle's top-level keys plus a
/// synthesized `projects` node mapping each section name to its bundle.
///
/// A failed section load is non-fatal: that section becomes an empty node
/// and the rest of the merge proceeds. A failed common load degrades the
/// whole language to an empty tree; lookups then ride the fallback chain
/// until a later load attempt succeeds.
fn load_merged(lang: Lang, source: &dyn BundleSource) -> TranslationTree {
    let mut root = match source.load_common(lang) {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("warning: failed to load common bundle for {}: {:#}", lang, err);
            return TranslationTree::new();
        }
    };

    let mut projects = TranslationTree::new();
    for section in source.sections() {
        let tree = match source.load_section(lang, section) {
            Ok(tree) => tree,
            Err(err) => {
                eprintln!(
                    "warning: failed to load {} bundle for {}: {:#}",
                    section, lang, err
                );
                TranslationTree::new()
            }
        };
        projects.insert(section.clone(), TranslationValue::Node(tree));
    }
    root.insert("projects".to_string(), TranslationValue::Node(projects));
    root
}
