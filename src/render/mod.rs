//! Enumerable class renderer
//!
//! Turns a validated request plus its normalized constants into the text of the generated class.
//! Rendering is a pure function: no host context, no template files, no IO.

mod config;
mod php;
mod writer;

pub use config::{DEFAULT_BASE_CLASS, DEFAULT_LIST_PROPERTY, RenderConfig};
pub use php::PhpClassEmitter;
pub use writer::CodeWriter;

use enumgen_core::NormalizedConstant;

use crate::request::ValidatedRequest;

/// Render a class with default settings
pub fn render_class(request: &ValidatedRequest, constants: &[NormalizedConstant]) -> String {
    render_class_with_config(request, constants, &RenderConfig::default())
}

/// Render a class with custom configuration
pub fn render_class_with_config(
    request: &ValidatedRequest,
    constants: &[NormalizedConstant],
    config: &RenderConfig,
) -> String {
    PhpClassEmitter::new(config).emit(request, constants)
}
