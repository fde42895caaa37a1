// SPDX-License-Identifier: PMPL-1.0-or-later

//! Dotted-key lookup and the fallback chain.
//!
//! Resolution order: active language → English → caller literal → raw key.
//! Every lookup terminates in a displayable string; nothing on this path
//! returns an error or panics.

use crate::i18n::tree::{TranslationTree, TranslationValue};

/// Walk `key` through `tree`, one dot-separated segment at a time.
///
/// Succeeds only when the full path lands exactly on a string leaf. A
/// missing segment, an empty segment (`"a..b"`), a leaf met mid-path, and a
/// terminal node or list are all misses.
pub fn resolve<'t>(tree: &'t TranslationTree, key: &str) -> Option<&'t str> {
    let segments: Vec<&str> = key.split('.').collect();
    let last = segments.len() - 1; // split always yields at least one segment
    let mut node = tree;
    for (i, segment) in segments.iter().enumerate() {
        match node.get(*segment) {
            Some(TranslationValue::Leaf(text)) if i == last => return Some(text.as_str()),
            Some(TranslationValue::Node(child)) => node = child,
            _ => return None,
        }
    }
    // full path resolved, but to a namespace rather than a leaf
    None
}

/// Resolve `key` through the full fallback chain.
///
/// `english` is the already-loaded English tree; callers pass it only when
/// the active language is not English (`None` skips the cross-language
/// step). When both walks miss, the caller's literal wins over the raw key.
pub fn resolve_with_fallback(
    active: &TranslationTree,
    english: Option<&TranslationTree>,
    key: &str,
    fallback: Option<&str>,
) -> String {
    if let Some(text) = resolve(active, key) {
        return text.to_string();
    }
    if let Some(english) = english {
        if let Some(text) = resolve(english, key) {
            eprintln!(
                "warning: no active-language translation for '{}', using English",
                key
            );
            return text.to_string();
        }
    }
    match fallback {
        Some(text) => text.to_string(),
        None => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree(value: serde_json::Value) -> TranslationTree {
        serde_json::from_value(value).expect("tree should deserialize")
    }

    fn sample() -> TranslationTree {
        tree(json!({
            "nav": { "contact": "Contact", "projects": "Projects" },
            "projects": {
                "chronosync": {
                    "title": "ChronoSync",
                    "skills": ["C++", "PostgreSQL"]
                }
            }
        }))
    }

    #[test]
    fn top_level_leaf_resolves() {
        let t = tree(json!({ "title": "Portfolio" }));
        assert_eq!(resolve(&t, "title"), Some("Portfolio"));
    }

    #[test]
    fn nested_leaf_resolves() {
        let t = sample();
        assert_eq!(resolve(&t, "nav.contact"), Some("Contact"));
        assert_eq!(resolve(&t, "projects.chronosync.title"), Some("ChronoSync"));
    }

    #[test]
    fn missing_segment_misses() {
        let t = sample();
        assert_eq!(resolve(&t, "nav.missing"), None);
        assert_eq!(resolve(&t, "absent.contact"), None);
    }

    #[test]
    fn empty_key_and_empty_segments_miss() {
        let t = sample();
        assert_eq!(resolve(&t, ""), None);
        assert_eq!(resolve(&t, "nav..contact"), None);
        assert_eq!(resolve(&t, ".nav.contact"), None);
    }

    #[test]
    fn namespace_result_is_a_miss() {
        let t = sample();
        assert_eq!(resolve(&t, "nav"), None);
        assert_eq!(resolve(&t, "projects.chronosync"), None);
    }

    #[test]
    fn list_result_is_a_miss() {
        let t = sample();
        assert_eq!(resolve(&t, "projects.chronosync.skills"), None);
    }

    #[test]
    fn leaf_met_mid_path_is_a_miss() {
        let t = sample();
        assert_eq!(resolve(&t, "nav.contact.deeper"), None);
    }

    #[test]
    fn chain_prefers_active_language() {
        let active = tree(json!({ "nav": { "contact": "Contact (fr)" } }));
        let english = tree(json!({ "nav": { "contact": "Contact" } }));
        assert_eq!(
            resolve_with_fallback(&active, Some(&english), "nav.contact", None),
            "Contact (fr)"
        );
    }

    #[test]
    fn chain_falls_back_to_english() {
        let active = tree(json!({}));
        let english = tree(json!({ "nav": { "contact": "Contact" } }));
        assert_eq!(
            resolve_with_fallback(&active, Some(&english), "nav.contact", None),
            "Contact"
        );
    }

    #[test]
    fn chain_falls_back_to_english_on_namespace_result() {
        // the active walk completes but ends on a node; English still wins
        let active = tree(json!({ "nav": { "contact": { "label": "x" } } }));
        let english = tree(json!({ "nav": { "contact": "Contact" } }));
        assert_eq!(
            resolve_with_fallback(&active, Some(&english), "nav.contact", None),
            "Contact"
        );
    }

    #[test]
    fn chain_uses_literal_before_raw_key() {
        let active = tree(json!({}));
        assert_eq!(
            resolve_with_fallback(&active, None, "nav.missing", Some("Menu")),
            "Menu"
        );
    }

    #[test]
    fn chain_ends_with_raw_key() {
        let active = tree(json!({}));
        let english = tree(json!({}));
        assert_eq!(
            resolve_with_fallback(&active, Some(&english), "nav.missing", None),
            "nav.missing"
        );
    }
}
