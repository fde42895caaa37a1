// SPDX-License-Identifier: PMPL-1.0-or-later

//! Nested translation trees.
//!
//! Bundles deserialize into a tagged union: a string leaf is a finished
//! translation, a node is a nested namespace, and a list carries ordered
//! content such as a project's skill array. Only leaves are valid
//! resolution results; the resolver treats a path ending on a node or a
//! list as a miss.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A namespace of translations: the bundle root and every inner node.
pub type TranslationTree = BTreeMap<String, TranslationValue>;

/// One value in a translation tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationValue {
    /// A finished translation string.
    Leaf(String),
    /// Ordered content, e.g. a skill list.
    List(Vec<TranslationValue>),
    /// A nested namespace.
    Node(TranslationTree),
}

/// Dotted paths of every string leaf in `tree`, in sorted order.
///
/// List elements have no key of their own and are skipped.
pub fn leaf_keys(tree: &TranslationTree) -> Vec<String> {
    let mut keys = Vec::new();
    collect(tree, None, &mut keys);
    keys
}

fn collect(tree: &TranslationTree, prefix: Option<&str>, out: &mut Vec<String>) {
    for (segment, value) in tree {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, segment),
            None => segment.clone(),
        };
        match value {
            TranslationValue::Leaf(_) => out.push(path),
            TranslationValue::Node(child) => collect(child, Some(&path), out),
            TranslationValue::List(_) => {}
        }
    }
}
