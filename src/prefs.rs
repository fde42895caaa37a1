// SPDX-License-Identifier: PMPL-1.0-or-later

//! Persistent storage for the selected language.
//!
//! One small file holds the active language code as a plain string. It is
//! read once at startup and rewritten on every successful language change.
//! Anything unreadable or unsupported in the file reads as "no preference".

use crate::i18n::Lang;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the language file, under the user config directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("linguafolio").join("language"))
}

/// The persisted language, if the file exists and names a supported code.
pub fn load_language(path: &Path) -> Option<Lang> {
    let raw = fs::read_to_string(path).ok()?;
    Lang::from_code(raw.trim())
}

/// Persist `lang`'s code, creating parent directories as needed.
pub fn save_language(path: &Path, lang: Lang) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(path, lang.code()).with_context(|| format!("writing {}", path.display()))
}
