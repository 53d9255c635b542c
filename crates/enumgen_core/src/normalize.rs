//! Normalize a raw, user-typed list of constant names.
//!
//! ## Notes
//! - Tokens are separated by commas only. Whitespace inside a token is sanitized into `_`, so
//!   `"free trial"` is one identifier (`free_trial`), not two.
//! - A token without a single word character (`"!!"`, `"-"`) is dropped together with empty tokens.
//!   `"_"` is a word character and survives.
//! - Deduplication compares constant names (upper-cased) and keeps the first spelling, so `"Free, free"`
//!   yields only `Free`.

use std::collections::HashSet;

use crate::naming::{constant_name, humanize, is_word_char, sanitize_token};

/// Token separator inside the raw values string.
pub const VALUE_SEPARATOR: char = ',';

/// One constant of the generated class.
///
/// `ordinal` is the 0-based position in the final (deduplicated, optionally sorted) sequence. The emitted
/// value is `ordinal + start`; the label is derived from `identifier` and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedConstant {
    pub identifier: String,
    pub ordinal: usize,
}

impl NormalizedConstant {
    pub fn new(identifier: impl Into<String>, ordinal: usize) -> Self {
        Self {
            identifier: identifier.into(),
            ordinal,
        }
    }

    /// Upper-cased constant name (`FREE_TRIAL`).
    pub fn constant_name(&self) -> String {
        constant_name(&self.identifier)
    }

    /// Human-readable label (`Free Trial`).
    pub fn label(&self) -> String {
        humanize(&self.identifier)
    }

    /// Emitted value for a given start offset.
    ///
    /// ## Notes
    /// - Computed in `i128` so that `start = i64::MAX` with many constants cannot overflow.
    pub fn value(&self, start: i64) -> i128 {
        i128::from(start) + self.ordinal as i128
    }
}

/// Turn raw input into an ordered sequence of unique identifiers.
///
/// ## Parameters
/// - `raw`: comma-separated tokens as typed by the user.
/// - `sort`: sort the result ascending (byte order) instead of keeping first-occurrence order.
///
/// ## Returns
/// - (`Vec<String>`): identifiers made of `[A-Za-z0-9_]` only, no two sharing a constant name. Never fails.
///
/// ## Examples
/// ```rust
/// use enumgen_core::normalize;
///
/// assert_eq!(normalize("free, paid, free", false), vec!["free", "paid"]);
/// assert_eq!(normalize("paid, free", true), vec!["free", "paid"]);
/// assert_eq!(normalize("a-b c,  , d!e", false), vec!["a_b_c", "d_e"]);
/// assert_eq!(normalize("Free, free", false), vec!["Free"]);
/// assert!(normalize(" , !!, ", false).is_empty());
/// ```
pub fn normalize(raw: &str, sort: bool) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut identifiers: Vec<String> = raw
        .split(VALUE_SEPARATOR)
        .map(str::trim)
        .filter(|token| token.chars().any(is_word_char))
        .map(sanitize_token)
        .filter(|identifier| seen.insert(constant_name(identifier)))
        .collect();

    if sort {
        identifiers.sort_unstable();
    }
    identifiers
}

/// Assign ordinals to an already-normalized identifier sequence.
pub fn enumerate(identifiers: Vec<String>) -> Vec<NormalizedConstant> {
    identifiers
        .into_iter()
        .enumerate()
        .map(|(ordinal, identifier)| NormalizedConstant { identifier, ordinal })
        .collect()
}

/// [`normalize`] followed by [`enumerate`].
pub fn normalize_constants(raw: &str, sort: bool) -> Vec<NormalizedConstant> {
    enumerate(normalize(raw, sort))
}
