//! Pure operations over binding trees.
//!
//! Responsibilities:
//! - Flatten a tree into root-to-leaf key paths.
//! - Merge a user tree over a base tree with override semantics.
//! - Deduplicate same-key siblings, first occurrence winning.
//! - Sort sibling lists for display.
//!
//! Does NOT handle:
//! - Validation (see `validate` module at crate root).
//! - Merge-strategy or defaults selection (see `effective` module).
//!
//! Invariants:
//! - Every function returns new data; inputs are never mutated.
//! - `deduplicate` is idempotent: a second pass reports no duplicates.
//! - `sort` places submenus strictly before non-submenus for every order.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::types::{Binding, BindingWithPath, Duplicate, SortOrder};

/// Depth-first leaf projection of a binding tree.
///
/// Sibling order is preserved. Submenus contribute their key to the
/// path of every descendant but are not emitted themselves.
pub fn flatten(bindings: &[Binding]) -> Vec<BindingWithPath> {
    let mut out = Vec::new();
    flatten_into(bindings, "", &mut out);
    out
}

fn flatten_into(bindings: &[Binding], prefix: &str, out: &mut Vec<BindingWithPath>) {
    for binding in bindings {
        let path = format!("{prefix}{}", binding.key());
        match binding {
            Binding::Submenu { items, .. } => flatten_into(items, &path, out),
            leaf => out.push(BindingWithPath {
                binding: leaf.clone(),
                path,
            }),
        }
    }
}

/// Merge `overlay` bindings over `base` bindings, key by key.
///
/// When both sides bind the same key as a submenu the result keeps the
/// base submenu's own fields and merges the items recursively. Any
/// other collision is a full replacement by the overlay binding.
/// Overlay-only bindings are appended after all base bindings, in
/// overlay order. Not commutative.
pub fn merge(base: &[Binding], overlay: &[Binding]) -> Vec<Binding> {
    let mut consumed: HashSet<&str> = HashSet::new();

    let mut result: Vec<Binding> = base
        .iter()
        .map(|binding| {
            let Some(user) = overlay.iter().find(|o| o.key() == binding.key()) else {
                return binding.clone();
            };
            consumed.insert(user.key());

            match (binding, user) {
                (
                    Binding::Submenu {
                        key,
                        name,
                        items,
                        detail,
                        icon,
                    },
                    Binding::Submenu {
                        items: overlay_items,
                        ..
                    },
                ) => Binding::Submenu {
                    key: key.clone(),
                    name: name.clone(),
                    items: merge(items, overlay_items),
                    detail: detail.clone(),
                    icon: icon.clone(),
                },
                (_, replacement) => replacement.clone(),
            }
        })
        .collect();

    for user in overlay {
        if consumed.insert(user.key()) {
            result.push(user.clone());
        }
    }

    result
}

/// Drop same-key siblings at every level, keeping the first occurrence.
///
/// Returns the cleaned tree together with a report of every dropped
/// binding and the rendered path prefix of the level it occurred at.
pub fn deduplicate(bindings: &[Binding]) -> (Vec<Binding>, Vec<Duplicate>) {
    let mut duplicates = Vec::new();
    let tree = dedup_level(bindings, "", &mut duplicates);
    (tree, duplicates)
}

fn dedup_level(bindings: &[Binding], path: &str, duplicates: &mut Vec<Duplicate>) -> Vec<Binding> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut kept = Vec::new();

    for binding in bindings {
        if !seen.insert(binding.key()) {
            duplicates.push(Duplicate {
                key: binding.key().to_string(),
                path: path.to_string(),
            });
            continue;
        }

        match binding {
            Binding::Submenu {
                key,
                name,
                items,
                detail,
                icon,
            } => {
                let nested_path = format!("{path}{key} → ");
                let items = dedup_level(items, &nested_path, duplicates);
                kept.push(Binding::Submenu {
                    key: key.clone(),
                    name: name.clone(),
                    items,
                    detail: detail.clone(),
                    icon: icon.clone(),
                });
            }
            leaf => kept.push(leaf.clone()),
        }
    }

    kept
}

/// Return a sorted copy of one sibling list.
///
/// Submenus always come first; that is a hard rule, not a tie-break.
/// Within each partition, `Custom` preserves configuration order and
/// `Alphabetical` orders by key, case-insensitively with a
/// case-sensitive tiebreak.
pub fn sort(bindings: &[Binding], order: SortOrder) -> Vec<Binding> {
    let mut sorted = bindings.to_vec();
    // Vec::sort_by is stable, which is what keeps Custom order intact
    // within each partition.
    sorted.sort_by(|a, b| match (a.is_submenu(), b.is_submenu()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => match order {
            SortOrder::Alphabetical => compare_keys(a.key(), b.key()),
            SortOrder::Custom => Ordering::Equal,
        },
    });
    sorted
}

fn compare_keys(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(key: &str, name: &str) -> Binding {
        Binding::Command {
            key: key.into(),
            name: name.into(),
            command: format!("test.{name}"),
            args: None,
            detail: None,
            icon: None,
        }
    }

    fn submenu(key: &str, name: &str, items: Vec<Binding>) -> Binding {
        Binding::Submenu {
            key: key.into(),
            name: name.into(),
            items,
            detail: None,
            icon: None,
        }
    }

    #[test]
    fn test_flatten_concatenates_keys_root_to_leaf() {
        let tree = vec![
            submenu(
                "b",
                "Buffer",
                vec![cmd("s", "save"), submenu("x", "Extra", vec![cmd("c", "close")])],
            ),
            cmd("w", "write"),
        ];
        let flat = flatten(&tree);
        let paths: Vec<&str> = flat.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["bs", "bxc", "w"]);
    }

    #[test]
    fn test_flatten_never_emits_submenus() {
        let tree = vec![submenu("p", "Project", vec![cmd("of", "open")])];
        let flat = flatten(&tree);
        assert_eq!(flat.len(), 1);
        assert!(!flat[0].binding.is_submenu());
        assert_eq!(flat[0].path, "pof");
    }

    #[test]
    fn test_merge_overlay_wins_on_key_collision() {
        let base = vec![cmd("a", "base")];
        let overlay = vec![cmd("a", "user")];
        let merged = merge(&base, &overlay);
        assert_eq!(merged, overlay);
    }

    #[test]
    fn test_merge_submenu_union_keeps_base_fields() {
        let base = vec![Binding::Submenu {
            key: "f".into(),
            name: "Files".into(),
            items: vec![cmd("s", "save")],
            detail: Some("base detail".into()),
            icon: None,
        }];
        let overlay = vec![submenu("f", "Overridden", vec![cmd("o", "open")])];

        let merged = merge(&base, &overlay);
        assert_eq!(merged.len(), 1);
        match &merged[0] {
            Binding::Submenu {
                name,
                items,
                detail,
                ..
            } => {
                // Base submenu's own fields survive; only items merge.
                assert_eq!(name, "Files");
                assert_eq!(detail.as_deref(), Some("base detail"));
                assert_eq!(items.len(), 2);
                assert_eq!(items[0].key(), "s");
                assert_eq!(items[1].key(), "o");
            }
            other => panic!("expected submenu, got {other:?}"),
        }
    }

    #[test]
    fn test_merge_type_change_replaces_submenu() {
        let base = vec![submenu("f", "Files", vec![cmd("s", "save")])];
        let overlay = vec![cmd("f", "format")];
        let merged = merge(&base, &overlay);
        assert_eq!(merged, overlay);
    }

    #[test]
    fn test_merge_appends_overlay_only_bindings_in_order() {
        let base = vec![cmd("a", "alpha")];
        let overlay = vec![cmd("z", "zeta"), cmd("y", "upsilon")];
        let merged = merge(&base, &overlay);
        let keys: Vec<&str> = merged.iter().map(Binding::key).collect();
        assert_eq!(keys, vec!["a", "z", "y"]);
    }

    #[test]
    fn test_merge_keeps_base_only_bindings_unchanged() {
        let base = vec![cmd("a", "alpha"), cmd("b", "beta")];
        let merged = merge(&base, &[]);
        assert_eq!(merged, base);
    }

    #[test]
    fn test_merge_is_not_commutative() {
        let a = vec![cmd("x", "one")];
        let b = vec![cmd("x", "two")];
        assert_ne!(merge(&a, &b), merge(&b, &a));
    }

    #[test]
    fn test_deduplicate_first_wins() {
        let tree = vec![cmd("a", "First"), cmd("a", "Second")];
        let (deduped, duplicates) = deduplicate(&tree);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].name(), "First");
        assert_eq!(duplicates.len(), 1);
        assert_eq!(duplicates[0].key, "a");
        assert_eq!(duplicates[0].path, "");
    }

    #[test]
    fn test_deduplicate_reports_nested_level_path() {
        let tree = vec![submenu(
            "b",
            "Buffer",
            vec![cmd("s", "save"), cmd("s", "shadowed")],
        )];
        let (_, duplicates) = deduplicate(&tree);
        assert_eq!(duplicates.len(), 1);
        assert_eq!(duplicates[0].key, "s");
        assert_eq!(duplicates[0].path, "b → ");
    }

    #[test]
    fn test_deduplicate_is_idempotent() {
        let tree = vec![
            cmd("a", "one"),
            cmd("a", "two"),
            submenu("b", "Buffer", vec![cmd("c", "x"), cmd("c", "y")]),
        ];
        let (first_pass, duplicates) = deduplicate(&tree);
        assert_eq!(duplicates.len(), 2);

        let (second_pass, rerun_duplicates) = deduplicate(&first_pass);
        assert!(rerun_duplicates.is_empty());
        assert_eq!(second_pass, first_pass);
    }

    #[test]
    fn test_sort_submenus_first_for_custom_order() {
        let tree = vec![
            cmd("z", "zeta"),
            submenu("m", "Menu", vec![cmd("x", "x")]),
            cmd("a", "alpha"),
            submenu("b", "Buffer", vec![cmd("y", "y")]),
        ];
        let sorted = sort(&tree, SortOrder::Custom);
        let keys: Vec<&str> = sorted.iter().map(Binding::key).collect();
        // Partition order is stable: submenus in original relative
        // order, then leaves in original relative order.
        assert_eq!(keys, vec!["m", "b", "z", "a"]);
    }

    #[test]
    fn test_sort_alphabetical_within_partitions() {
        let tree = vec![
            cmd("z", "zeta"),
            submenu("m", "Menu", vec![cmd("x", "x")]),
            cmd("a", "alpha"),
            submenu("b", "Buffer", vec![cmd("y", "y")]),
        ];
        let sorted = sort(&tree, SortOrder::Alphabetical);
        let keys: Vec<&str> = sorted.iter().map(Binding::key).collect();
        assert_eq!(keys, vec!["b", "m", "a", "z"]);
    }

    #[test]
    fn test_sort_alphabetical_submenu_first_beats_key_order() {
        // Leaf "a" sorts before submenu "z" alphabetically, but the
        // submenu-first rule is unconditional.
        let tree = vec![cmd("a", "alpha"), submenu("z", "Zulu", vec![cmd("x", "x")])];
        let sorted = sort(&tree, SortOrder::Alphabetical);
        assert!(sorted[0].is_submenu());
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let tree = vec![cmd("z", "zeta"), submenu("a", "Alpha", vec![cmd("x", "x")])];
        let before = tree.clone();
        let _ = sort(&tree, SortOrder::Alphabetical);
        assert_eq!(tree, before);
    }
}
