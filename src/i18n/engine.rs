// SPDX-License-Identifier: PMPL-1.0-or-later

//! The `I18n` engine: active language, lookup surface, language switching.
//!
//! One engine lives at the application's composition point and is cloned
//! (cheaply, via `Arc`) into whatever needs translations. Lookups read only
//! cached trees and never perform I/O; bundle loading happens in [`I18n::init`]
//! and on language switches, which step the engine through the
//! `Idle → Loading → Idle` phases a UI can observe.

use crate::i18n::lang::{Lang, TextDirection};
use crate::i18n::resolver;
use crate::i18n::source::BundleSource;
use crate::i18n::store::TranslationStore;
use crate::prefs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread;

/// Observable phases of the language-change protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// A tree is available; render normally.
    Idle,
    /// A language switch is loading its tree; render a neutral state.
    Loading,
}

struct ActiveState {
    language: Lang,
    phase: LoadPhase,
}

struct Shared {
    source: Box<dyn BundleSource>,
    store: TranslationStore,
    state: Mutex<ActiveState>,
    prefs_path: Option<PathBuf>,
}

#[derive(Clone)]
pub struct I18n {
    shared: Arc<Shared>,
}

impl I18n {
    /// Engine without language persistence.
    pub fn new(source: impl BundleSource + 'static) -> Self {
        Self::build(Box::new(source), None)
    }

    /// Engine persisting the selected language code to `path`.
    pub fn with_prefs_file(source: impl BundleSource + 'static, path: PathBuf) -> Self {
        Self::build(Box::new(source), Some(path))
    }

    fn build(source: Box<dyn BundleSource>, prefs_path: Option<PathBuf>) -> Self {
        Self {
            shared: Arc::new(Shared {
                source,
                store: TranslationStore::new(),
                state: Mutex::new(ActiveState {
                    language: Lang::default(),
                    phase: LoadPhase::Idle,
                }),
                prefs_path,
            }),
        }
    }

    /// Choose and load the startup language: the persisted preference if
    /// valid, else the system locale if supported, else English.
    pub fn init(&self) -> Lang {
        let initial = self
            .shared
            .prefs_path
            .as_deref()
            .and_then(prefs::load_language)
            .or_else(detect_system_language)
            .unwrap_or_default();
        self.shared
            .store
            .ensure_loaded(initial, self.shared.source.as_ref());
        self.state().language = initial;
        initial
    }

    /// The active language.
    pub fn language(&self) -> Lang {
        self.state().language
    }

    /// Text direction of the active language.
    pub fn dir(&self) -> TextDirection {
        self.language().direction()
    }

    pub fn phase(&self) -> LoadPhase {
        self.state().phase
    }

    /// Whether a language switch is currently loading its tree.
    pub fn is_loading(&self) -> bool {
        self.phase() == LoadPhase::Loading
    }

    /// Resolve `key` for the active language, returning the key itself when
    /// nothing in the chain matches.
    pub fn t(&self, key: &str) -> String {
        self.lookup(key, None)
    }

    /// Resolve `key`, preferring `fallback` over the raw key on a full miss.
    pub fn t_or(&self, key: &str, fallback: &str) -> String {
        self.lookup(key, Some(fallback))
    }

    fn lookup(&self, key: &str, fallback: Option<&str>) -> String {
        let active = self.language();
        let tree = self.shared.store.cached(active);
        // cross-language fallback applies only once English has been loaded
        let english = if active != Lang::En {
            let tree = self.shared.store.cached(Lang::En);
            if tree.is_empty() {
                None
            } else {
                Some(tree)
            }
        } else {
            None
        };
        resolver::resolve_with_fallback(&tree, english.as_deref(), key, fallback)
    }

    /// Load (or reuse) `lang`'s tree without making it active. Callers use
    /// this to warm the English tree the fallback chain reads.
    pub fn preload(&self, lang: Lang) {
        self.shared
            .store
            .ensure_loaded(lang, self.shared.source.as_ref());
    }

    /// Switch to `code` synchronously: load (or reuse) its tree, make it
    /// active, persist the choice. Unsupported codes are ignored.
    pub fn set_language(&self, code: &str) {
        let lang = match Lang::from_code(code) {
            Some(lang) => lang,
            None => return,
        };
        self.switch(lang);
    }

    /// Switch to `code` on a background thread so the caller never blocks on
    /// bundle I/O. In-flight switches are not cancelled; the last one to
    /// complete wins, and an overlapping switch may clear the loading phase
    /// before a slower one finishes.
    pub fn set_language_background(&self, code: &str) -> Option<thread::JoinHandle<()>> {
        let lang = Lang::from_code(code)?;
        let engine = self.clone();
        Some(thread::spawn(move || engine.switch(lang)))
    }

    fn switch(&self, lang: Lang) {
        self.state().phase = LoadPhase::Loading;
        self.shared
            .store
            .ensure_loaded(lang, self.shared.source.as_ref());
        {
            let mut state = self.state();
            state.language = lang;
            state.phase = LoadPhase::Idle;
        }
        if let Some(path) = &self.shared.prefs_path {
            if let Err(err) = prefs::save_language(path, lang) {
                eprintln!("warning: failed to persist language choice: {:#}", err);
            }
        }
    }

    fn state(&self) -> std::sync::MutexGuard<'_, ActiveState> {
        self.shared.state.lock().expect("engine state lock")
    }
}

/// The system locale's primary subtag, when it names a supported language.
fn detect_system_language() -> Option<Lang> {
    let raw = sys_locale::get_locale()?;
    let primary = raw.split(['-', '_']).next()?;
    Lang::from_code(&primary.to_ascii_lowercase())
}
