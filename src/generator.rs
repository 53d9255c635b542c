//! Enumerable class generator
//!
//! Composes the pipeline: raw values → normalized constants → rendered class → [`CodeFile`] at the resolved path.

use enumgen_core::NormalizedConstant;
use enumgen_core::lang::php_keywords;
use enumgen_core::normalize_constants;

use crate::output::{CodeFile, OutputError, PathResolver};
use crate::render::{RenderConfig, render_class_with_config};
use crate::request::ValidatedRequest;

/// Message shown after the generated class has been saved.
pub const SUCCESS_MESSAGE: &str = "The Enumerable class has been generated successfully.";

/// Generates one enumerable class from a validated request.
pub struct EnumerableGenerator {
    request: ValidatedRequest,
    config: RenderConfig,
    constants: Vec<NormalizedConstant>,
}

impl EnumerableGenerator {
    pub fn new(request: ValidatedRequest, config: RenderConfig) -> Self {
        let constants = normalize_constants(&request.raw_values, request.sort);
        tracing::debug!(
            class = %request.class_id,
            count = constants.len(),
            sort = request.sort,
            "normalized constant values"
        );
        warn_suspicious_constants(&constants);
        Self {
            request,
            config,
            constants,
        }
    }

    pub fn request(&self) -> &ValidatedRequest {
        &self.request
    }

    /// Constants in emission order.
    pub fn constants(&self) -> &[NormalizedConstant] {
        &self.constants
    }

    /// Rendered class source.
    pub fn render(&self) -> String {
        render_class_with_config(&self.request, &self.constants, &self.config)
    }

    /// Resolve the output location and produce the files to write.
    ///
    /// Slashes in the class id nest the file below the namespace directory
    /// (`admin/order-item` → `<dir>/admin/AdminOrderItem.php`).
    pub fn generate(&self, resolver: &dyn PathResolver) -> Result<Vec<CodeFile>, OutputError> {
        let dir = resolver.resolve(&self.request.namespace)?;
        let dir = self
            .request
            .class_id
            .subdirectories()
            .into_iter()
            .fold(dir, |dir, s| dir.join(s));
        let path = dir.join(self.request.class_id.file_name());
        tracing::debug!(path = %path.display(), "resolved output path");

        Ok(vec![CodeFile::new(path, self.render())])
    }
}

/// Why a constant name would not load as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstantIssue {
    LeadingDigit,
    Reserved,
}

/// Constant names PHP would reject, with the reason.
pub fn suspicious_constants(constants: &[NormalizedConstant]) -> Vec<(String, ConstantIssue)> {
    constants
        .iter()
        .filter_map(|constant| {
            let name = constant.constant_name();
            if name.starts_with(|c: char| c.is_ascii_digit()) {
                Some((name, ConstantIssue::LeadingDigit))
            } else if php_keywords::is_reserved_constant_name(&name) {
                Some((name, ConstantIssue::Reserved))
            } else {
                None
            }
        })
        .collect()
}

fn warn_suspicious_constants(constants: &[NormalizedConstant]) {
    for (name, issue) in suspicious_constants(constants) {
        match issue {
            ConstantIssue::LeadingDigit => {
                tracing::warn!(constant = %name, "constant name starts with a digit and is not a valid PHP identifier")
            }
            ConstantIssue::Reserved => tracing::warn!(constant = %name, "constant name is reserved in PHP"),
        }
    }
}
