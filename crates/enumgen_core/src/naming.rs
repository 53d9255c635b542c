//! Identifier and label conversions.
//!
//! These helpers map between the three spellings a constant goes through:
//! raw user token → identifier (`free_trial`) → constant name (`FREE_TRIAL`) / label (`Free Trial`),
//! plus the class-id → class-name conversion (`order-item` → `OrderItem`).

/// Separators accepted inside a class id.
pub const CLASS_ID_SEPARATORS: [char; 2] = ['-', '/'];

/// Check whether a character is a word character (`[A-Za-z0-9_]`).
///
/// ## Notes
/// - ASCII-only on purpose: non-ASCII letters are treated as punctuation and replaced by the sanitizer.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Replace every maximal run of non-word characters with a single `_`.
///
/// ## Parameters
/// - `token`: a trimmed user token (may contain spaces and punctuation).
///
/// ## Returns
/// - (`String`): the token with only word characters left.
///
/// ## Examples
/// ```rust
/// use enumgen_core::naming::sanitize_token;
///
/// assert_eq!(sanitize_token("a-b c"), "a_b_c");
/// assert_eq!(sanitize_token("d!!e"), "d_e");
/// assert_eq!(sanitize_token("already_clean"), "already_clean");
/// ```
pub fn sanitize_token(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut in_run = false;
    for c in token.chars() {
        if is_word_char(c) {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }
    out
}

/// Convert a lowercase class id into a class name.
///
/// Each `-`/`/`-separated segment gets its first character upper-cased and the segments are
/// concatenated. Empty segments (`a--b`) are skipped.
///
/// ## Examples
/// ```rust
/// use enumgen_core::naming::id_to_camel;
///
/// assert_eq!(id_to_camel("order"), "Order");
/// assert_eq!(id_to_camel("order-item"), "OrderItem");
/// assert_eq!(id_to_camel("order/item"), "OrderItem");
/// ```
pub fn id_to_camel(id: &str) -> String {
    id.split(CLASS_ID_SEPARATORS)
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect()
}

/// Spell an identifier as a class constant (`free_trial` → `FREE_TRIAL`).
pub fn constant_name(identifier: &str) -> String {
    identifier.to_ascii_uppercase()
}

/// Turn an identifier into a human-readable label.
///
/// Underscores become spaces and the first letter of every word is upper-cased. The remaining
/// characters are left untouched, so `PAID_plan` becomes `PAID Plan`.
///
/// ## Examples
/// ```rust
/// use enumgen_core::naming::humanize;
///
/// assert_eq!(humanize("free_trial"), "Free Trial");
/// assert_eq!(humanize("paid"), "Paid");
/// ```
pub fn humanize(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len());
    let mut word_start = true;
    for c in identifier.chars() {
        if c == '_' {
            out.push(' ');
            word_start = true;
        } else if word_start {
            out.push(c.to_ascii_uppercase());
            word_start = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
