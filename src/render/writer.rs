//! Output writer with indentation tracking
//!
//! Handles writing generated code with proper indentation.

/// Writer that tracks indentation and builds generated output
pub struct CodeWriter {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
    /// Spaces per indentation level
    indent_width: usize,
    /// Whether we're at the start of a line
    at_line_start: bool,
}

impl CodeWriter {
    /// Create a new writer with the given indentation width
    pub fn new(indent_width: usize) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_width,
            at_line_start: true,
        }
    }

    /// Get the generated output
    pub fn finish(self) -> String {
        self.output
    }

    /// Increase indentation level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write indentation if at line start
    fn write_indent(&mut self) {
        if self.at_line_start {
            let indent = " ".repeat(self.indent_level * self.indent_width);
            self.output.push_str(&indent);
            self.at_line_start = false;
        }
    }

    /// Write a string (with auto-indent)
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.write_indent();
        self.output.push_str(s);
    }

    /// Write a string and newline
    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    /// Write just a newline
    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_writer() -> CodeWriter {
        CodeWriter::new(4)
    }

    #[test]
    fn test_new_writer_empty_output() {
        let writer = default_writer();
        assert_eq!(writer.finish(), "");
    }

    #[test]
    fn test_write_empty_string_does_not_indent() {
        let mut writer = default_writer();
        writer.indent();
        writer.writeln("");
        assert_eq!(writer.finish(), "\n");
    }

    #[test]
    fn test_writeln_multiple() {
        let mut writer = default_writer();
        writer.writeln("line1");
        writer.writeln("line2");
        assert_eq!(writer.finish(), "line1\nline2\n");
    }

    #[test]
    fn test_dedent_at_zero_stays_zero() {
        let mut writer = default_writer();
        writer.dedent();
        writer.writeln("flush");
        assert_eq!(writer.finish(), "flush\n");
    }

    #[test]
    fn test_indent_only_at_line_start() {
        let mut writer = CodeWriter::new(2);
        writer.indent();
        writer.write("a");
        writer.write(" = 1;");
        writer.newline();
        assert_eq!(writer.finish(), "  a = 1;\n");
    }

    #[test]
    fn test_nested_indentation() {
        let mut writer = CodeWriter::new(2);

        writer.writeln("class A");
        writer.writeln("{");
        writer.indent();
        writer.writeln("public static $list = [");
        writer.indent();
        writer.writeln("self::A => 'A',");
        writer.dedent();
        writer.writeln("];");
        writer.dedent();
        writer.writeln("}");

        let expected = "class A\n{\n  public static $list = [\n    self::A => 'A',\n  ];\n}\n";
        assert_eq!(writer.finish(), expected);
    }
}
