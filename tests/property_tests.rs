//! Property-based tests for normalization and rendering
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use std::collections::HashSet;

use enumgen::{GenerationRequest, normalize, normalize_constants, render_class};
use proptest::prelude::*;

/// Raw value lists: words, punctuation, whitespace, commas and some non-ASCII.
fn raw_values() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-zA-Z0-9_ ,!\-/.\té]{0,64}").expect("valid regex")
}

proptest! {
    /// Property: identifiers only contain `[A-Za-z0-9_]`
    #[test]
    fn identifiers_are_word_chars_only(raw in raw_values(), sort in any::<bool>()) {
        for identifier in normalize(&raw, sort) {
            prop_assert!(!identifier.is_empty());
            prop_assert!(
                identifier.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
                "bad identifier {:?}", identifier
            );
        }
    }

    /// Property: no two identifiers render to the same constant name
    #[test]
    fn constant_names_are_unique(raw in raw_values(), sort in any::<bool>()) {
        let identifiers = normalize(&raw, sort);
        let unique: HashSet<String> = identifiers.iter().map(|id| id.to_ascii_uppercase()).collect();
        prop_assert_eq!(unique.len(), identifiers.len());
    }

    /// Property: normalize(join(normalize(x))) == normalize(x)
    #[test]
    fn normalize_is_idempotent(raw in any::<String>(), sort in any::<bool>()) {
        let once = normalize(&raw, sort);
        let twice = normalize(&once.join(","), sort);
        prop_assert_eq!(once, twice);
    }

    /// Property: sorting only reorders the unsorted result
    #[test]
    fn sort_is_a_permutation(raw in raw_values()) {
        let mut unsorted = normalize(&raw, false);
        let sorted = normalize(&raw, true);
        unsorted.sort();
        prop_assert_eq!(unsorted, sorted);
    }

    /// Property: emitted values are a contiguous run from `start`
    #[test]
    fn values_are_contiguous(raw in raw_values(), start in -1_000_000i64..1_000_000) {
        let constants = normalize_constants(&raw, false);
        for (i, constant) in constants.iter().enumerate() {
            prop_assert_eq!(constant.value(start), i128::from(start) + i as i128);
        }
    }

    /// Property: rendering never fails and emits one declaration per constant
    #[test]
    fn render_emits_one_declaration_per_constant(raw in raw_values(), start in any::<i64>()) {
        let request = GenerationRequest::new("plan", "x").with_start(start).validate().unwrap();
        let constants = normalize_constants(&raw, false);
        let output = render_class(&request, &constants);

        let declarations = output.lines().filter(|l| l.trim_start().starts_with("const ")).count();
        let entries = output.lines().filter(|l| l.trim_start().starts_with("self::")).count();
        prop_assert_eq!(declarations, constants.len());
        prop_assert_eq!(entries, constants.len());
        prop_assert!(output.ends_with("}\n"), "output does not end with a closing brace line");
    }
}

#[test]
fn documented_examples() {
    assert_eq!(normalize("free, paid, free", false), vec!["free", "paid"]);
    assert_eq!(normalize("paid, free", true), vec!["free", "paid"]);
    assert_eq!(normalize("a-b c,  , d!e", false), vec!["a_b_c", "d_e"]);
}
