//! Merging and ordering of rule bodies.
//!
//! Both operations produce a sorted, duplicate-free rule list. Ordering is
//! plain byte order over the full rule text, not domain-aware.

use std::collections::BTreeSet;

/// Merge one new rule into an existing body.
///
/// The result is the deduplicated union: inserting a rule that is already
/// present literally leaves the set unchanged apart from ordering.
pub fn merge_append(existing: Vec<String>, new_rule: &str) -> Vec<String> {
    let mut set: BTreeSet<String> = existing.into_iter().collect();
    set.insert(new_rule.to_string());
    set.into_iter().collect()
}

/// Order a replacement body.
///
/// The caller has already discarded prior file content; literal duplicate
/// lines in the supplied list collapse under set semantics.
pub fn replace_all(rules: Vec<String>) -> Vec<String> {
    let set: BTreeSet<String> = rules.into_iter().collect();
    set.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(rules: &[&str]) -> Vec<String> {
        rules.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn test_append_sorts_union() {
        let merged = merge_append(body(&["||z.com^", "||a.com^"]), "||m.com^");
        assert_eq!(merged, body(&["||a.com^", "||m.com^", "||z.com^"]));
    }

    #[test]
    fn test_append_existing_rule_is_not_duplicated() {
        let merged = merge_append(body(&["||a.com^", "||b.com^"]), "||a.com^");
        assert_eq!(merged, body(&["||a.com^", "||b.com^"]));
    }

    #[test]
    fn test_no_pair_of_output_rules_is_equal() {
        let merged = merge_append(body(&["||a.com^", "||a.com^", "||b.com^"]), "||b.com^");
        for (i, a) in merged.iter().enumerate() {
            for b in &merged[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_merge_is_idempotent_on_sorted_input() {
        let sorted = body(&["||a.com^", "||b.com^", "||c.com^"]);
        let merged = merge_append(sorted.clone(), "||b.com^");
        assert_eq!(merged, sorted);
    }

    #[test]
    fn test_replace_collapses_duplicates_and_sorts() {
        let replaced = replace_all(body(&["||b.com^", "||a.com^", "||b.com^"]));
        assert_eq!(replaced, body(&["||a.com^", "||b.com^"]));
    }

    #[test]
    fn test_byte_order_not_domain_order() {
        // Uppercase sorts before lowercase; ordering is byte order, not collation
        let merged = merge_append(body(&["||a.com^"]), "||Z.com^");
        assert_eq!(merged, body(&["||Z.com^", "||a.com^"]));
    }
}
