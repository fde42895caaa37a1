// SPDX-License-Identifier: PMPL-1.0-or-later

//! Bundle sources: where translation trees come from.
//!
//! A source supplies, per language, one common bundle plus one bundle per
//! named project section. The store depends only on the [`BundleSource`]
//! trait, so the concrete source (a locales directory, an in-memory table)
//! can be swapped freely.

use crate::i18n::lang::Lang;
use crate::i18n::tree::TranslationTree;
use anyhow::{anyhow, Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Project sections shipping their own bundle per language.
pub const PROJECT_SECTIONS: &[&str] = &["chronosync", "pauvocoder", "puissancex"];

pub trait BundleSource: Send + Sync {
    /// Load the common bundle for `lang`.
    fn load_common(&self, lang: Lang) -> Result<TranslationTree>;

    /// Load the bundle for one named project section.
    fn load_section(&self, lang: Lang, section: &str) -> Result<TranslationTree>;

    /// The fixed list of section names this source serves.
    fn sections(&self) -> &[String];
}

/// Reads bundles from a locales directory laid out as
/// `<root>/<lang>/common.json` and `<root>/<lang>/projects/<section>.json`.
///
/// A `.yaml` sibling is accepted wherever no `.json` file exists.
pub struct DirSource {
    root: PathBuf,
    sections: Vec<String>,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            sections: PROJECT_SECTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Replace the default section list.
    pub fn with_sections(mut self, sections: Vec<String>) -> Self {
        self.sections = sections;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_bundle(&self, stem: PathBuf) -> Result<TranslationTree> {
        let json = stem.with_extension("json");
        if json.exists() {
            return parse_bundle(&json);
        }
        let yaml = stem.with_extension("yaml");
        if yaml.exists() {
            return parse_bundle(&yaml);
        }
        Err(anyhow!("no bundle at {}.{{json,yaml}}", stem.display()))
    }
}

impl BundleSource for DirSource {
    fn load_common(&self, lang: Lang) -> Result<TranslationTree> {
        self.read_bundle(self.root.join(lang.code()).join("common"))
    }

    fn load_section(&self, lang: Lang, section: &str) -> Result<TranslationTree> {
        self.read_bundle(self.root.join(lang.code()).join("projects").join(section))
    }

    fn sections(&self) -> &[String] {
        &self.sections
    }
}

/// Parse one bundle file, JSON or YAML by extension.
pub fn parse_bundle(path: &Path) -> Result<TranslationTree> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading bundle {}", path.display()))?;
    if path.extension().and_then(|ext| ext.to_str()) == Some("yaml") {
        serde_yaml::from_str(&data).with_context(|| format!("parsing bundle {}", path.display()))
    } else {
        serde_json::from_str(&data).with_context(|| format!("parsing bundle {}", path.display()))
    }
}

/// In-memory bundle source, for embedded catalogs and tests.
#[derive(Default)]
pub struct MemorySource {
    sections: Vec<String>,
    common: HashMap<Lang, TranslationTree>,
    project: HashMap<(Lang, String), TranslationTree>,
}

impl MemorySource {
    pub fn new(sections: &[&str]) -> Self {
        Self {
            sections: sections.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn set_common(&mut self, lang: Lang, tree: TranslationTree) {
        self.common.insert(lang, tree);
    }

    pub fn set_section(&mut self, lang: Lang, section: &str, tree: TranslationTree) {
        self.project.insert((lang, section.to_string()), tree);
    }
}

impl BundleSource for MemorySource {
    fn load_common(&self, lang: Lang) -> Result<TranslationTree> {
        self.common
            .get(&lang)
            .cloned()
            .ok_or_else(|| anyhow!("no common bundle for {}", lang))
    }

    fn load_section(&self, lang: Lang, section: &str) -> Result<TranslationTree> {
        self.project
            .get(&(lang, section.to_string()))
            .cloned()
            .ok_or_else(|| anyhow!("no {} bundle for {}", section, lang))
    }

    fn sections(&self) -> &[String] {
        &self.sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn dir_source_reads_json_bundles() {
        let dir = tempfile::tempdir().expect("tempdir should create");
        let en = dir.path().join("en");
        fs::create_dir_all(en.join("projects")).expect("dirs should create");
        fs::write(en.join("common.json"), r#"{"nav":{"contact":"Contact"}}"#)
            .expect("common should write");
        fs::write(
            en.join("projects").join("chronosync.json"),
            r#"{"title":"ChronoSync"}"#,
        )
        .expect("section should write");

        let source = DirSource::new(dir.path());
        let common = source.load_common(Lang::En).expect("common should load");
        assert!(common.contains_key("nav"));
        let section = source
            .load_section(Lang::En, "chronosync")
            .expect("section should load");
        assert!(section.contains_key("title"));
    }

    #[test]
    fn dir_source_falls_back_to_yaml() {
        let dir = tempfile::tempdir().expect("tempdir should create");
        let fr = dir.path().join("fr");
        fs::create_dir_all(&fr).expect("dirs should create");
        fs::write(fr.join("common.yaml"), "nav:\n  contact: Contact\n")
            .expect("common should write");

        let source = DirSource::new(dir.path());
        let common = source.load_common(Lang::Fr).expect("yaml should load");
        assert!(common.contains_key("nav"));
    }

    #[test]
    fn dir_source_reports_missing_bundles() {
        let dir = tempfile::tempdir().expect("tempdir should create");
        let source = DirSource::new(dir.path());
        let err = source.load_common(Lang::En).unwrap_err();
        assert!(err.to_string().contains("no bundle at"));
    }

    #[test]
    fn dir_source_reports_malformed_bundles() {
        let dir = tempfile::tempdir().expect("tempdir should create");
        let en = dir.path().join("en");
        fs::create_dir_all(&en).expect("dirs should create");
        fs::write(en.join("common.json"), "{ not json").expect("file should write");

        let source = DirSource::new(dir.path());
        let err = source.load_common(Lang::En).unwrap_err();
        assert!(format!("{:#}", err).contains("parsing bundle"));
    }

    #[test]
    fn memory_source_serves_inserted_trees() {
        let mut source = MemorySource::new(&["chronosync"]);
        source.set_common(
            Lang::En,
            serde_json::from_str(r#"{"title":"Portfolio"}"#).expect("tree should parse"),
        );

        assert!(source.load_common(Lang::En).is_ok());
        assert!(source.load_common(Lang::Fr).is_err());
        assert!(source.load_section(Lang::En, "chronosync").is_err());
        assert_eq!(source.sections().len(), 1);
        assert_eq!(source.sections()[0], "chronosync");
    }
}
