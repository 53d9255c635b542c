#![forbid(unsafe_code)]
//! Enumerable class generator
//!
//! Turns a class id and a free-text list of constant names into a PHP class holding uniquely-named
//! integer constants plus a label lookup table.
//!
//! The pipeline is one-way: raw input → [`request`] validation → normalization (`enumgen_core`) →
//! [`render`] → [`output`] (path resolution and file write). Only the CLI host performs IO.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod generator;
pub mod output;
pub mod render;
pub mod request;
pub mod version;

pub use enumgen_core::{NormalizedConstant, normalize, normalize_constants};
pub use generator::EnumerableGenerator;
pub use render::{RenderConfig, render_class, render_class_with_config};
pub use request::{GenerationRequest, ValidatedRequest, ValidationError};
