// SPDX-License-Identifier: PMPL-1.0-or-later

//! Bundle coverage audit.
//!
//! Loads every supported language through the store and diffs its leaf keys
//! against English: keys missing from a language silently surface in English
//! at runtime, orphan keys never surface through the fallback chain at all.
//! The CLI prints the summary; `--output` saves the raw report as JSON.

use crate::i18n::{leaf_keys, BundleSource, Lang, TranslationStore};
use anyhow::Result;
use chrono::Utc;
use colored::*;
use serde::Serialize;
use std::path::Path;
use walkdir::WalkDir;

/// Coverage of one language against the English key set.
#[derive(Debug, Serialize)]
pub struct LanguageCoverage {
    pub language: String,
    /// Leaf keys present in this language.
    pub total_keys: usize,
    /// English keys absent here; these fall back at runtime.
    pub missing: Vec<String>,
    /// Keys with no English counterpart.
    pub orphans: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AuditReport {
    pub generated_at: String,
    pub english_keys: usize,
    pub bundle_files: Vec<String>,
    pub languages: Vec<LanguageCoverage>,
}

/// Audit every supported language against English.
///
/// `locales_root` adds a bundle-file inventory to the report when the source
/// is directory-backed.
pub fn run(source: &dyn BundleSource, locales_root: Option<&Path>) -> AuditReport {
    let store = TranslationStore::new();
    let english = store.ensure_loaded(Lang::En, source);
    let english_keys = leaf_keys(&english);

    let mut languages = Vec::new();
    for lang in Lang::all() {
        if *lang == Lang::En {
            continue;
        }
        let tree = store.ensure_loaded(*lang, source);
        let keys = leaf_keys(&tree);
        let missing: Vec<String> = english_keys
            .iter()
            .filter(|key| !keys.contains(*key))
            .cloned()
            .collect();
        let orphans: Vec<String> = keys
            .iter()
            .filter(|key| !english_keys.contains(*key))
            .cloned()
            .collect();
        languages.push(LanguageCoverage {
            language: lang.code().to_string(),
            total_keys: keys.len(),
            missing,
            orphans,
        });
    }

    AuditReport {
        generated_at: Utc::now().to_rfc3339(),
        english_keys: english_keys.len(),
        bundle_files: locales_root.map(scan_bundle_files).unwrap_or_default(),
        languages,
    }
}

/// Relative paths of every bundle file under the locales root.
fn scan_bundle_files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            matches!(
                entry.path().extension().and_then(|ext| ext.to_str()),
                Some("json") | Some("yaml")
            )
        })
        .filter_map(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .ok()
                .map(|path| path.display().to_string())
        })
        .collect();
    files.sort();
    files
}

/// Print the report to the terminal.
pub fn print(report: &AuditReport) {
    println!("\n{}", "=== TRANSLATION COVERAGE AUDIT ===".bold().cyan());
    println!("  Generated: {}", report.generated_at);
    println!("  English keys: {}", report.english_keys);
    if !report.bundle_files.is_empty() {
        println!("  Bundle files: {}", report.bundle_files.len());
    }
    println!();

    for coverage in &report.languages {
        let status = if coverage.missing.is_empty() && coverage.orphans.is_empty() {
            "COMPLETE".green()
        } else {
            "GAPS".yellow()
        };
        println!(
            "  {} [{}] {} keys",
            coverage.language.bold(),
            status,
            coverage.total_keys
        );
        if !coverage.missing.is_empty() {
            println!(
                "    Missing (fall back to English): {}",
                coverage.missing.len().to_string().yellow()
            );
            for key in &coverage.missing {
                println!("      - {}", key.dimmed());
            }
        }
        if !coverage.orphans.is_empty() {
            println!(
                "    No English counterpart: {}",
                coverage.orphans.len().to_string().red()
            );
            for key in &coverage.orphans {
                println!("      - {}", key.dimmed());
            }
        }
    }
}

/// Serialize the report as pretty JSON at `path`.
pub fn save(report: &AuditReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    println!("Report saved to: {}", path.display());
    Ok(())
}
