//! A generated file waiting to be written.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::OutputError;

/// What saving a [`CodeFile`] would do to the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeFileOperation {
    /// No file at the target path
    Create,
    /// A file exists with different content
    Overwrite,
    /// A file exists with identical content
    Skip,
}

impl fmt::Display for CodeFileOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CodeFileOperation::Create => "create",
            CodeFileOperation::Overwrite => "overwrite",
            CodeFileOperation::Skip => "unchanged",
        };
        write!(f, "{}", label)
    }
}

/// Generated source plus the path it belongs at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFile {
    pub path: PathBuf,
    pub content: String,
}

impl CodeFile {
    pub fn new(path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            content: content.into(),
        }
    }

    fn existing_content(&self) -> Result<Option<String>, OutputError> {
        match fs::read_to_string(&self.path) {
            Ok(existing) => Ok(Some(existing)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(OutputError::io(&self.path, e)),
        }
    }

    /// Compare against the file currently on disk.
    pub fn operation(&self) -> Result<CodeFileOperation, OutputError> {
        Ok(match self.existing_content()? {
            None => CodeFileOperation::Create,
            Some(existing) if existing == self.content => CodeFileOperation::Skip,
            Some(_) => CodeFileOperation::Overwrite,
        })
    }

    /// Positional line comparison against the file on disk, or `None` if nothing would change.
    ///
    /// A missing file diffs as empty, so every generated line shows up as an addition.
    pub fn diff(&self) -> Result<Option<String>, OutputError> {
        let existing = self.existing_content()?.unwrap_or_default();
        Ok(line_diff(&existing, &self.content))
    }

    /// Write the file, creating parent directories.
    ///
    /// ## Errors
    ///
    /// - [`OutputError::WouldOverwrite`] if a different file exists and `overwrite` is false.
    /// - [`OutputError::Io`] for any filesystem failure.
    pub fn save(&self, overwrite: bool) -> Result<CodeFileOperation, OutputError> {
        let operation = self.operation()?;
        match operation {
            CodeFileOperation::Skip => {
                tracing::debug!(path = %self.path.display(), "content unchanged, skipping write");
                return Ok(operation);
            }
            CodeFileOperation::Overwrite if !overwrite => {
                return Err(OutputError::WouldOverwrite {
                    path: self.path.clone(),
                });
            }
            _ => {}
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| OutputError::io(parent, e))?;
        }
        fs::write(&self.path, &self.content).map_err(|e| OutputError::io(&self.path, e))?;
        tracing::info!(path = %self.path.display(), %operation, "wrote generated class");
        Ok(operation)
    }
}

/// Positional line comparison: line `i` of each side is compared with line `i` of the other.
///
/// Not a minimal diff; inserting one line marks every following line as changed.
fn line_diff(original: &str, updated: &str) -> Option<String> {
    if original == updated {
        return None;
    }

    let mut diff = String::new();
    let original_lines: Vec<&str> = original.lines().collect();
    let updated_lines: Vec<&str> = updated.lines().collect();

    let max_lines = original_lines.len().max(updated_lines.len());

    for i in 0..max_lines {
        let orig = original_lines.get(i).copied();
        let new = updated_lines.get(i).copied();

        if orig != new {
            if let Some(orig) = orig {
                diff.push_str(&format!("-{:4} | {}\n", i + 1, orig));
            }
            if let Some(new) = new {
                diff.push_str(&format!("+{:4} | {}\n", i + 1, new));
            }
        }
    }

    Some(diff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_create_skip_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Plan.php");
        let file = CodeFile::new(&path, "<?php\n");

        assert_eq!(file.operation().unwrap(), CodeFileOperation::Create);

        fs::write(&path, "<?php\n").unwrap();
        assert_eq!(file.operation().unwrap(), CodeFileOperation::Skip);

        fs::write(&path, "<?php\n// edited\n").unwrap();
        assert_eq!(file.operation().unwrap(), CodeFileOperation::Overwrite);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app/models/Plan.php");
        let file = CodeFile::new(&path, "<?php\n");

        assert_eq!(file.save(false).unwrap(), CodeFileOperation::Create);
        assert_eq!(fs::read_to_string(&path).unwrap(), "<?php\n");
        assert_eq!(file.save(false).unwrap(), CodeFileOperation::Skip);
    }

    #[test]
    fn test_save_refuses_to_clobber_without_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Plan.php");
        fs::write(&path, "hand written\n").unwrap();

        let file = CodeFile::new(&path, "<?php\n");
        assert!(matches!(file.save(false), Err(OutputError::WouldOverwrite { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), "hand written\n");

        assert_eq!(file.save(true).unwrap(), CodeFileOperation::Overwrite);
        assert_eq!(fs::read_to_string(&path).unwrap(), "<?php\n");
    }

    #[test]
    fn test_save_io_error_is_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let file = CodeFile::new(blocker.join("Plan.php"), "<?php\n");
        let err = file.save(false).unwrap_err();
        assert!(matches!(err, OutputError::Io { .. }), "got {err:?}");
    }

    #[test]
    fn test_line_diff() {
        assert_eq!(line_diff("a\nb\n", "a\nb\n"), None);
        assert_eq!(line_diff("a\nb\n", "a\nc\nd\n").unwrap(), "-   2 | b\n+   2 | c\n+   3 | d\n");
    }

    #[test]
    fn test_diff_against_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = CodeFile::new(dir.path().join("Plan.php"), "<?php\n");
        assert_eq!(file.diff().unwrap().unwrap(), "+   1 | <?php\n");
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(CodeFileOperation::Create.to_string(), "create");
        assert_eq!(CodeFileOperation::Skip.to_string(), "unchanged");
    }
}
