//! Layering guardrails to keep the normalization core free of dependencies.
//!
//! `enumgen_core` holds the pure text transforms and must stay dependency-free (no IO crates, no
//! logging, no serialization). This test scans its `Cargo.toml` and fails if a `[dependencies]`
//! table lists anything.

#[test]
fn core_crate_has_no_dependencies() {
    let manifest = include_str!("../crates/enumgen_core/Cargo.toml");
    let mut in_dependencies = false;

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        panic!("`enumgen_core` must not declare dependencies, found `{line}`");
    }
}

#[test]
fn core_crate_sources_do_no_io() {
    let sources = [
        include_str!("../crates/enumgen_core/src/lib.rs"),
        include_str!("../crates/enumgen_core/src/naming.rs"),
        include_str!("../crates/enumgen_core/src/normalize.rs"),
        include_str!("../crates/enumgen_core/src/lang/php_keywords.rs"),
    ];
    for source in sources {
        for forbidden in ["std::fs", "std::io", "std::env", "std::net"] {
            assert!(!source.contains(forbidden), "`enumgen_core` must stay pure, found `{forbidden}`");
        }
    }
}
