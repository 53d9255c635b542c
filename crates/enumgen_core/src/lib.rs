//! Provide the pure text transforms behind the enumerable class generator.
//!
//! This crate turns a user-typed list of constant names into a clean, ordered sequence of identifiers and
//! derives everything the renderer needs from them (constant names, values, labels, class names).
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, no third-party dependencies.
//! - Every function here is total: any `&str` input (including the empty string) yields a well-defined output.
//! - Word characters are ASCII-only (`[A-Za-z0-9_]`); see [`naming::is_word_char`].

pub mod lang;
pub mod naming;
pub mod normalize;

pub use naming::{constant_name, humanize, id_to_camel, sanitize_token};
pub use normalize::{NormalizedConstant, enumerate, normalize, normalize_constants};
