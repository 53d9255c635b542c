//! Generation request and its validation.
//!
//! A [`GenerationRequest`] is what the host collects from the user (CLI flags, a form, ...). It is checked
//! once by [`GenerationRequest::validate`]; everything downstream works on a [`ValidatedRequest`] and
//! cannot fail on input shape.

use std::fmt;

use enumgen_core::id_to_camel;
use enumgen_core::lang::php_keywords;
use enumgen_core::naming::CLASS_ID_SEPARATORS;
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Default namespace of generated classes.
pub const DEFAULT_NAMESPACE: &str = r"app\models\enumerables";
/// Default description line of generated classes.
pub const DEFAULT_DESCRIPTION: &str = "This is the CEnumerable class for";
/// Extension of the generated source file.
pub const FILE_EXTENSION: &str = "php";

/// Errors raised at the host boundary, before any generation happens.
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} cannot be blank.")]
    #[diagnostic(code(enumgen::missing_field))]
    MissingField { field: &'static str },

    #[error("Only a-z, 0-9, dashes (-) and slashes (/) are allowed.")]
    #[diagnostic(
        code(enumgen::invalid_class_id),
        help("class ids are lowercase, e.g. `order-item` generates `OrderItem.php`")
    )]
    InvalidClassId {
        #[source_code]
        class_id: String,
        #[label("not allowed here")]
        span: SourceSpan,
    },

    #[error("`{class_name}` is a reserved word and cannot be used as a class name")]
    #[diagnostic(code(enumgen::reserved_class_name), help("pick a different class id"))]
    ReservedClassName { class_name: String },
}

/// Raw input for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Lowercase class id (`order-item`, `admin/order-status`).
    pub class_id: String,
    /// Comma-separated constant names.
    pub raw_values: String,
    pub namespace: String,
    pub author: String,
    pub description: String,
    /// First constant value.
    pub start: Option<i64>,
    /// Sort constants before numbering them.
    pub sort: bool,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            class_id: String::new(),
            raw_values: String::new(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            author: String::new(),
            description: DEFAULT_DESCRIPTION.to_string(),
            start: Some(0),
            sort: false,
        }
    }
}

impl GenerationRequest {
    pub fn new(class_id: impl Into<String>, raw_values: impl Into<String>) -> Self {
        Self {
            class_id: class_id.into(),
            raw_values: raw_values.into(),
            ..Self::default()
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_start(mut self, start: i64) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// Trim, check required fields, check the class id, and build a [`ValidatedRequest`].
    ///
    /// ## Errors
    ///
    /// - [`ValidationError::MissingField`] when `class_id`, `raw_values` or `start` is missing.
    /// - [`ValidationError::InvalidClassId`] when the class id does not match `^[a-z][a-z0-9\-/]*$`.
    /// - [`ValidationError::ReservedClassName`] when the derived class name is a PHP reserved word.
    pub fn validate(self) -> Result<ValidatedRequest, ValidationError> {
        let class_id = self.class_id.trim();
        let raw_values = self.raw_values.trim();

        if class_id.is_empty() {
            return Err(ValidationError::MissingField { field: "Enumerable Class" });
        }
        if raw_values.is_empty() {
            return Err(ValidationError::MissingField { field: "All const values" });
        }
        let Some(start) = self.start else {
            return Err(ValidationError::MissingField { field: "Start" });
        };

        let class_id = ClassId::parse(class_id)?;
        let class_name = class_id.class_name();
        if php_keywords::is_reserved_class_name(&class_name) {
            return Err(ValidationError::ReservedClassName { class_name });
        }

        Ok(ValidatedRequest {
            class_id,
            raw_values: raw_values.to_string(),
            namespace: Namespace::parse(&self.namespace),
            author: self.author,
            description: self.description.trim().to_string(),
            start,
            sort: self.sort,
        })
    }
}

/// A request that passed [`GenerationRequest::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub class_id: ClassId,
    pub raw_values: String,
    pub namespace: Namespace,
    pub author: String,
    pub description: String,
    pub start: i64,
    pub sort: bool,
}

/// A class id matching `^[a-z][a-z0-9\-/]*$`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassId(String);

impl ClassId {
    /// Check a trimmed class id against the allowed alphabet.
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        let invalid_at = id.char_indices().find_map(|(i, c)| {
            let allowed = if i == 0 {
                c.is_ascii_lowercase()
            } else {
                c.is_ascii_lowercase() || c.is_ascii_digit() || CLASS_ID_SEPARATORS.contains(&c)
            };
            (!allowed).then_some((i, c.len_utf8()))
        });

        match (id.is_empty(), invalid_at) {
            (true, _) => Err(ValidationError::MissingField { field: "Enumerable Class" }),
            (false, Some((offset, len))) => Err(ValidationError::InvalidClassId {
                class_id: id.to_string(),
                span: (offset, len).into(),
            }),
            (false, None) => Ok(Self(id.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Class name without namespace (`order-item` → `OrderItem`, `order/item` → `OrderItem`).
    pub fn class_name(&self) -> String {
        id_to_camel(&self.0)
    }

    /// Directory nesting implied by slashes: every segment but the last.
    pub fn subdirectories(&self) -> Vec<&str> {
        let mut segments: Vec<&str> = self.0.split('/').filter(|s| !s.is_empty()).collect();
        segments.pop();
        segments
    }

    /// File name of the generated class (`OrderItem.php`).
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.class_name(), FILE_EXTENSION)
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A namespace qualifier, stored as segments.
///
/// Accepts `\`, `/` and `.` as separators so users can type `app.models`, `app/models` or `app\models`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Namespace {
    segments: Vec<String>,
}

impl Namespace {
    pub fn parse(raw: &str) -> Self {
        let segments = raw
            .trim()
            .split(['\\', '/', '.'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Self { segments }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for Namespace {
    /// PHP spelling (`app\models\enumerables`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("\\"))
    }
}
