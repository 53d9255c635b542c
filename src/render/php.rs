//! PHP class emission.
//!
//! Emits a single-file enumerable class:
//!
//! ```text
//! <?php
//!
//! namespace app\models\enumerables;
//!
//! use yii2mod\enum\helpers\BaseEnum;
//!
//! /**
//!  * @author Jane Doe
//!  * Subscription plans
//!  */
//! class Plan extends BaseEnum
//! {
//!     const FREE = 0;
//!     const PAID = 1;
//!
//!     public static $list = [
//!         self::FREE => 'Free',
//!         self::PAID => 'Paid',
//!     ];
//! }
//! ```

use enumgen_core::NormalizedConstant;

use super::config::RenderConfig;
use super::writer::CodeWriter;
use crate::request::ValidatedRequest;

/// Renders one enumerable class into PHP source.
pub struct PhpClassEmitter<'a> {
    config: &'a RenderConfig,
    writer: CodeWriter,
}

impl<'a> PhpClassEmitter<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            writer: CodeWriter::new(config.indent_width),
        }
    }

    pub fn emit(mut self, request: &ValidatedRequest, constants: &[NormalizedConstant]) -> String {
        self.writer.writeln("<?php");
        self.writer.newline();

        if !request.namespace.is_empty() {
            self.writer.writeln(&format!("namespace {};", request.namespace));
            self.writer.newline();
        }

        self.writer.writeln(&format!("use {};", self.config.base_class));
        self.writer.newline();

        self.emit_docblock(&request.author, &request.description);

        self.writer.writeln(&format!(
            "class {} extends {}",
            request.class_id.class_name(),
            self.config.base_class_short_name()
        ));
        self.writer.writeln("{");
        self.writer.indent();

        for constant in constants {
            self.writer.writeln(&format!(
                "const {} = {};",
                constant.constant_name(),
                constant.value(request.start)
            ));
        }
        if !constants.is_empty() {
            self.writer.newline();
        }

        self.emit_list(constants);

        self.writer.dedent();
        self.writer.writeln("}");
        self.writer.finish()
    }

    fn emit_docblock(&mut self, author: &str, description: &str) {
        self.writer.writeln("/**");
        if !author.trim().is_empty() {
            for (i, line) in author.trim().lines().enumerate() {
                let line = escape_comment(line.trim_end());
                if i == 0 {
                    self.writer.writeln(&format!(" * @author {line}"));
                } else {
                    self.writer.writeln(&format!(" *         {line}"));
                }
            }
        }
        for line in description.lines() {
            let line = escape_comment(line.trim_end());
            if line.is_empty() {
                self.writer.writeln(" *");
            } else {
                self.writer.writeln(&format!(" * {line}"));
            }
        }
        self.writer.writeln(" */");
    }

    fn emit_list(&mut self, constants: &[NormalizedConstant]) {
        let property = &self.config.list_property;
        if constants.is_empty() {
            self.writer.writeln(&format!("public static ${property} = [];"));
            return;
        }

        self.writer.writeln(&format!("public static ${property} = ["));
        self.writer.indent();
        // Labels hold only `[A-Za-z0-9 ]`, nothing to escape inside single quotes.
        for constant in constants {
            self.writer.writeln(&format!(
                "self::{} => '{}',",
                constant.constant_name(),
                constant.label()
            ));
        }
        self.writer.dedent();
        self.writer.writeln("];");
    }
}

/// Keep free text from closing the surrounding `/** */` block.
fn escape_comment(text: &str) -> String {
    text.replace("*/", "*\\/")
}
