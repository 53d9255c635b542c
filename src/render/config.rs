//! Rendering configuration for generated classes.

/// Base class every generated enumerable extends.
pub const DEFAULT_BASE_CLASS: &str = r"yii2mod\enum\helpers\BaseEnum";
/// Name of the static label table property.
pub const DEFAULT_LIST_PROPERTY: &str = "list";

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Number of spaces per indentation level
    pub indent_width: usize,
    /// Fully-qualified base class (imported with `use`)
    pub base_class: String,
    /// Name of the `public static $<name>` label table
    pub list_property: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            base_class: DEFAULT_BASE_CLASS.to_string(),
            list_property: DEFAULT_LIST_PROPERTY.to_string(),
        }
    }
}

impl RenderConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set the base class
    pub fn with_base_class(mut self, base_class: impl Into<String>) -> Self {
        self.base_class = base_class.into();
        self
    }

    /// Set the label table property name
    pub fn with_list_property(mut self, name: impl Into<String>) -> Self {
        self.list_property = name.into();
        self
    }

    /// Short name of the base class (`BaseEnum`), as used after `extends`.
    pub fn base_class_short_name(&self) -> &str {
        self.base_class
            .rsplit('\\')
            .next()
            .unwrap_or(self.base_class.as_str())
    }
}
