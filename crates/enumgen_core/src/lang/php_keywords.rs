//! PHP reserved-word vocabulary (for class-name and constant-name checks).

/// Keywords and reserved type names that PHP rejects as class names.
///
/// ## Notes
/// - PHP compares class names case-insensitively, so lookups lower-case first.
pub const RESERVED_CLASS_NAMES: &[&str] = &[
    "__halt_compiler", "abstract", "and", "array", "as", "bool", "break", "callable", "case", "catch", "class",
    "clone", "const", "continue", "declare", "default", "die", "do", "echo", "else", "elseif", "empty", "enddeclare",
    "endfor", "endforeach", "endif", "endswitch", "endwhile", "enum", "eval", "exit", "extends", "false", "final",
    "finally", "float", "fn", "for", "foreach", "function", "global", "goto", "if", "implements", "include",
    "include_once", "instanceof", "insteadof", "int", "interface", "isset", "iterable", "list", "match", "mixed",
    "namespace", "never", "new", "null", "object", "or", "parent", "print", "private", "protected", "public",
    "readonly", "require", "require_once", "resource", "return", "self", "static", "string", "switch", "throw",
    "trait", "true", "try", "unset", "use", "var", "void", "while", "xor", "yield",
];

/// Constant names that clash with class-constant syntax (`Foo::class`).
pub const RESERVED_CONSTANT_NAMES: &[&str] = &["CLASS"];

/// Check whether a class name is reserved in PHP.
pub fn is_reserved_class_name(name: &str) -> bool {
    let lowered = name.to_ascii_lowercase();
    RESERVED_CLASS_NAMES.contains(&lowered.as_str())
}

/// Check whether a class constant name is reserved in PHP.
pub fn is_reserved_constant_name(name: &str) -> bool {
    let upper = name.to_ascii_uppercase();
    RESERVED_CONSTANT_NAMES.contains(&upper.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_class_names_case_insensitive() {
        assert!(is_reserved_class_name("List"));
        assert!(is_reserved_class_name("STATIC"));
        assert!(is_reserved_class_name("Enum"));
        assert!(!is_reserved_class_name("OrderStatus"));
    }

    #[test]
    fn test_reserved_constant_names() {
        assert!(is_reserved_constant_name("class"));
        assert!(!is_reserved_constant_name("FREE"));
    }

    #[test]
    fn test_vocabulary_is_lowercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for word in RESERVED_CLASS_NAMES {
            assert_eq!(*word, word.to_ascii_lowercase(), "{word} must be lowercase");
            assert!(seen.insert(*word), "{word} listed twice");
        }
    }
}
