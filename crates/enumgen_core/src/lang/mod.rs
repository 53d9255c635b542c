//! Target-language vocabulary.

pub mod php_keywords;
