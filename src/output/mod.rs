//! Output layer: where the generated class goes and how it gets there.
//!
//! - `resolver` - namespace → directory mapping (injected, no global alias registry)
//! - `code_file` - a generated file with create/overwrite/skip decisions, preview diff and save

mod code_file;
mod resolver;

pub use code_file::{CodeFile, CodeFileOperation};
pub use resolver::{AliasResolver, DirectoryResolver, PathResolver};

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while resolving or writing generated files
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("unknown path alias `@{alias}` for namespace `{namespace}`")]
    UnknownAlias { alias: String, namespace: String },

    #[error("namespace is empty and no output directory is configured")]
    EmptyNamespace,

    #[error("'{}' already exists with different content (pass --overwrite to replace it)", .path.display())]
    WouldOverwrite { path: PathBuf },

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl OutputError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
