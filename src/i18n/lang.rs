// SPDX-License-Identifier: PMPL-1.0-or-later

//! Supported language codes and their display metadata.

use serde::{Deserialize, Serialize};

/// Languages the portfolio ships translation bundles for.
///
/// Each variant maps to an ISO 639-1 two-letter code. The enum is used by
/// the CLI `--lang` flag, the persisted language preference, and the
/// translation store's cache slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lang {
    En,
    Fr,
}

/// Languages rendered right-to-left. Empty today; membership drives
/// [`Lang::direction`], so adding an RTL language is a one-line change.
const RTL_LANGS: &[Lang] = &[];

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fr => "fr",
        }
    }

    /// Parse an ISO 639-1 code into a supported language.
    ///
    /// Returns `None` for unsupported codes. Case-sensitive (codes must be
    /// lowercase per ISO 639-1).
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "fr" => Some(Lang::Fr),
            _ => None,
        }
    }

    /// All supported languages, in display order.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Fr]
    }

    /// English display name.
    pub fn name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Fr => "French",
        }
    }

    /// Name of the language in its own script, for language selection UIs.
    pub fn native_name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Fr => "Français",
        }
    }

    /// Flag glyph shown next to the language in selector UIs.
    pub fn flag(&self) -> &'static str {
        match self {
            Lang::En => "🇺🇸",
            Lang::Fr => "🇫🇷",
        }
    }

    /// Rendering direction of this language's script.
    pub fn direction(&self) -> TextDirection {
        if RTL_LANGS.contains(self) {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::En
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Text direction, as it appears in an HTML `dir` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl std::fmt::Display for TextDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
