// SPDX-License-Identifier: PMPL-1.0-or-later

//! Fallback-chain scenarios driven through the public engine surface.

use linguafolio::i18n::{I18n, Lang, MemorySource, TranslationTree};
use serde_json::json;

fn tree(value: serde_json::Value) -> TranslationTree {
    serde_json::from_value(value).expect("tree should deserialize")
}

fn portfolio_source() -> MemorySource {
    let mut source = MemorySource::new(&["chronosync"]);
    source.set_common(
        Lang::En,
        tree(json!({
            "nav": { "contact": "Contact", "projects": "Projects" },
            "language": { "select": "Select Language" }
        })),
    );
    source.set_section(
        Lang::En,
        "chronosync",
        tree(json!({
            "title": "ChronoSync",
            "overview": "ChronoSync overview text"
        })),
    );
    source.set_common(
        Lang::Fr,
        tree(json!({
            "nav": { "contact": "Contact", "projects": "Projets" },
            "language": { "select": "Choisir la langue" }
        })),
    );
    source.set_section(Lang::Fr, "chronosync", tree(json!({ "title": "ChronoSync" })));
    source
}

#[test]
fn every_loaded_french_leaf_resolves_exactly() {
    let i18n = I18n::new(portfolio_source());
    i18n.set_language("fr");

    for (key, expected) in [
        ("nav.contact", "Contact"),
        ("nav.projects", "Projets"),
        ("language.select", "Choisir la langue"),
        ("projects.chronosync.title", "ChronoSync"),
    ] {
        assert_eq!(i18n.t(key), expected, "key '{}' should resolve", key);
    }
}

#[test]
fn french_miss_with_loaded_english_returns_the_english_string() {
    let i18n = I18n::new(portfolio_source());
    i18n.set_language("en");
    i18n.set_language("fr");

    assert_eq!(
        i18n.t("projects.chronosync.overview"),
        "ChronoSync overview text"
    );
    // the fallback leaves the active language untouched
    assert_eq!(i18n.language(), Lang::Fr);
    assert_eq!(i18n.dir().as_str(), "ltr");
}

#[test]
fn double_miss_returns_fallback_exactly_then_raw_key() {
    let i18n = I18n::new(portfolio_source());
    i18n.set_language("en");
    i18n.set_language("fr");

    assert_eq!(i18n.t_or("nav.missingKey", "Menu"), "Menu");
    assert_eq!(i18n.t("nav.missingKey"), "nav.missingKey");
}

#[test]
fn namespace_result_behaves_like_a_missing_key() {
    let i18n = I18n::new(portfolio_source());
    i18n.set_language("en");

    assert_eq!(i18n.t("projects"), "projects");
    assert_eq!(i18n.t_or("nav", "fallback"), "fallback");
}

#[test]
fn unsupported_language_change_is_a_no_op() {
    let i18n = I18n::new(portfolio_source());
    i18n.set_language("fr");

    i18n.set_language("de");
    assert_eq!(i18n.language(), Lang::Fr);
    assert_eq!(i18n.t("nav.projects"), "Projets");
    assert!(!i18n.is_loading());
}

#[test]
fn superseding_background_switches_settle_on_the_last_completion() {
    let i18n = I18n::new(portfolio_source());
    i18n.set_language("en");

    // neither request cancels the other; join both and the engine must end
    // idle on a supported language with a populated tree
    let first = i18n.set_language_background("fr").expect("fr is supported");
    let second = i18n.set_language_background("en").expect("en is supported");
    first.join().expect("switch should finish");
    second.join().expect("switch should finish");

    assert!(!i18n.is_loading());
    let active = i18n.language();
    assert!(Lang::all().contains(&active));
    assert_ne!(i18n.t("nav.contact"), "nav.contact");
}
