// SPDX-License-Identifier: PMPL-1.0-or-later

//! Typed per-project details (team, duration, status).
//!
//! Unlike the free-form translation trees, project details have a fixed
//! shape and deserialize into concrete records. Each language ships one
//! `projectdetails.json`; a missing or malformed file falls back to the
//! English records so a details panel never renders empty.

use crate::i18n::Lang;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// One person on a project team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Presentation metadata for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetails {
    pub team_size: u32,
    pub team_members: Vec<TeamMember>,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub project_type: String,
}

/// Project section name → details.
pub type DetailsMap = BTreeMap<String, ProjectDetails>;

/// Load `lang`'s project details from `<root>/<lang>/projectdetails.json`.
pub fn load(root: &Path, lang: Lang) -> Result<DetailsMap> {
    let path = root.join(lang.code()).join("projectdetails.json");
    let data = fs::read_to_string(&path)
        .with_context(|| format!("reading project details {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("parsing project details {}", path.display()))
}

/// Load `lang`'s details, falling back to the English file when the
/// language's own file is missing or malformed.
pub fn load_with_fallback(root: &Path, lang: Lang) -> Result<DetailsMap> {
    match load(root, lang) {
        Ok(details) => Ok(details),
        Err(err) => {
            if lang == Lang::En {
                return Err(err);
            }
            eprintln!(
                "warning: failed to load {} project details, using English: {:#}",
                lang, err
            );
            load(root, Lang::En)
        }
    }
}
