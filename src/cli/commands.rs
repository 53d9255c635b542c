//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::Path;

use enumgen_core::{NormalizedConstant, normalize_constants};
use serde_json::{Value, json};

use crate::generator::{EnumerableGenerator, SUCCESS_MESSAGE};
use crate::output::{AliasResolver, CodeFile, DirectoryResolver, PathResolver};
use crate::render::RenderConfig;
use crate::request::GenerationRequest;

use super::{CliError, CliResult, ExitCode, GenerateArgs};

/// Generate an enumerable class and write (or preview) it.
pub fn generate_class(args: &GenerateArgs) -> CliResult<ExitCode> {
    let request = GenerationRequest::new(&args.class_id, &args.values)
        .with_namespace(&args.namespace)
        .with_author(&args.author)
        .with_description(&args.description)
        .with_start(args.start)
        .with_sort(args.sort)
        .validate()?;

    let config = RenderConfig::new().with_indent_width(args.indent);
    let generator = EnumerableGenerator::new(request, config);

    if args.stdout {
        print!("{}", generator.render());
        return Ok(ExitCode::SUCCESS);
    }

    let resolver = build_resolver(args);
    let files = generator.generate(&*resolver)?;

    for file in &files {
        warn_if_absolute(&file.path);
        if args.diff {
            print_diff(file)?;
        }
        if args.dry_run {
            let operation = file.operation()?;
            println!("[{}] {}", operation, file.path.display());
            continue;
        }
        let operation = file.save(args.overwrite)?;
        println!("[{}] {}", operation, file.path.display());
    }

    if !args.dry_run {
        println!("{}", SUCCESS_MESSAGE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Print the constants a raw value list normalizes to.
pub fn normalize_values(values: &str, sort: bool, start: i64, as_json: bool) -> CliResult<ExitCode> {
    let constants = normalize_constants(values, sort);
    if as_json {
        let rendered = serde_json::to_string_pretty(&constants_to_json(&constants, start))
            .map_err(|e| CliError::failure(format!("Error serializing constants: {}", e)))?;
        println!("{}", rendered);
    } else {
        print!("{}", constants_table(&constants, start));
    }
    Ok(ExitCode::SUCCESS)
}

fn build_resolver(args: &GenerateArgs) -> Box<dyn PathResolver> {
    if args.aliases.is_empty() {
        return Box::new(DirectoryResolver::new(&args.out_dir));
    }
    let mut resolver = AliasResolver::new();
    for (alias, dir) in &args.aliases {
        resolver.add_alias(alias, dir);
    }
    Box::new(resolver)
}

fn print_diff(file: &CodeFile) -> CliResult<()> {
    match file.diff()? {
        Some(diff) => {
            println!("--- {}", file.path.display());
            print!("{}", diff);
        }
        None => println!("{}: no changes", file.path.display()),
    }
    Ok(())
}

fn warn_if_absolute(path: &Path) {
    if path.is_absolute() {
        tracing::warn!(
            "Using absolute output path: {}. Consider using a relative path.",
            path.display()
        );
    }
}

/// JSON view of normalized constants.
///
/// Values outside the `i64` range (possible only near `i64::MAX` starts) are emitted as strings.
pub fn constants_to_json(constants: &[NormalizedConstant], start: i64) -> Value {
    let entries: Vec<Value> = constants
        .iter()
        .map(|constant| {
            let value = constant.value(start);
            let value = match i64::try_from(value) {
                Ok(v) => Value::from(v),
                Err(_) => Value::String(value.to_string()),
            };
            json!({
                "identifier": constant.identifier,
                "name": constant.constant_name(),
                "value": value,
                "label": constant.label(),
            })
        })
        .collect();
    Value::Array(entries)
}

/// Plain-text table of normalized constants (`NAME = value  Label`).
pub fn constants_table(constants: &[NormalizedConstant], start: i64) -> String {
    let width = constants
        .iter()
        .map(|c| c.constant_name().len())
        .max()
        .unwrap_or(0);
    constants
        .iter()
        .map(|c| format!("{:<width$} = {}  {}\n", c.constant_name(), c.value(start), c.label()))
        .collect()
}
