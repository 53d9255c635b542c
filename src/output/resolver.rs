//! Namespace → directory resolution.
//!
//! The generator never looks up a global alias table; callers hand it a [`PathResolver`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::OutputError;
use crate::request::Namespace;

/// Map a namespace to the directory its classes live in.
pub trait PathResolver {
    fn resolve(&self, namespace: &Namespace) -> Result<PathBuf, OutputError>;
}

/// Every namespace segment becomes a directory under `root`.
///
/// `app\models\enumerables` with root `/srv` resolves to `/srv/app/models/enumerables`.
#[derive(Debug, Clone)]
pub struct DirectoryResolver {
    root: PathBuf,
}

impl DirectoryResolver {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl PathResolver for DirectoryResolver {
    fn resolve(&self, namespace: &Namespace) -> Result<PathBuf, OutputError> {
        Ok(namespace.segments().iter().fold(self.root.clone(), |dir, s| dir.join(s)))
    }
}

/// The first namespace segment is looked up as a path alias, the rest are subdirectories.
///
/// With `app → /srv/app`, `app\models\enumerables` resolves to `/srv/app/models/enumerables`.
#[derive(Debug, Clone, Default)]
pub struct AliasResolver {
    aliases: BTreeMap<String, PathBuf>,
}

impl AliasResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an alias. A leading `@` is accepted and ignored (`@app` == `app`).
    pub fn with_alias(mut self, alias: &str, dir: impl AsRef<Path>) -> Self {
        self.add_alias(alias, dir);
        self
    }

    pub fn add_alias(&mut self, alias: &str, dir: impl AsRef<Path>) {
        let alias = alias.trim_start_matches('@').to_string();
        self.aliases.insert(alias, dir.as_ref().to_path_buf());
    }
}

impl PathResolver for AliasResolver {
    fn resolve(&self, namespace: &Namespace) -> Result<PathBuf, OutputError> {
        let Some((alias, rest)) = namespace.segments().split_first() else {
            return Err(OutputError::EmptyNamespace);
        };
        let Some(root) = self.aliases.get(alias) else {
            return Err(OutputError::UnknownAlias {
                alias: alias.clone(),
                namespace: namespace.to_string(),
            });
        };
        Ok(rest.iter().fold(root.clone(), |dir, s| dir.join(s)))
    }
}
