//! # File Collector Module
//!
//! This module expands the caller-supplied patterns into the list of
//! destination files: plain file paths pass through, directories are walked
//! recursively, and anything else is tried as a glob pattern.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::trace;
use walkdir::WalkDir;

/// Expands file, directory, and glob patterns into a deduplicated file list.
///
/// The caller-supplied order is preserved; overlapping patterns (for example
/// `dist` and `dist/app.js`) yield each file once.
///
/// # Errors
///
/// Returns an error if a glob pattern is invalid or directory traversal fails.
pub fn expand_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
  let mut seen = HashSet::new();
  let mut files = Vec::new();

  let mut push = |path: PathBuf, files: &mut Vec<PathBuf>| {
    if seen.insert(path.clone()) {
      files.push(path);
    }
  };

  for pattern in patterns {
    let maybe_path = PathBuf::from(pattern);
    if maybe_path.is_file() {
      push(maybe_path, &mut files);
    } else if maybe_path.is_dir() {
      for path in traverse_directory(&maybe_path)? {
        push(path, &mut files);
      }
    } else {
      let entries = glob::glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;

      for entry in entries {
        match entry {
          Ok(path) if path.is_file() => push(path, &mut files),
          Ok(path) if path.is_dir() => {
            for file in traverse_directory(&path)? {
              push(file, &mut files);
            }
          }
          Ok(_) => {}
          Err(e) => {
            eprintln!("Error with glob pattern: {e}");
          }
        }
      }
    }
  }

  Ok(files)
}

/// Recursively collects the files under `dir`, skipping symlinks.
fn traverse_directory(dir: &Path) -> Result<Vec<PathBuf>> {
  let mut files = Vec::new();

  for entry in WalkDir::new(dir).sort_by_file_name() {
    let entry = entry.with_context(|| format!("Failed to traverse directory: {}", dir.display()))?;
    if entry.file_type().is_symlink() {
      trace!("Skipping: {} (symlink)", entry.path().display());
      continue;
    }
    if entry.file_type().is_file() {
      files.push(entry.into_path());
    }
  }

  Ok(files)
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::tempdir;

  use super::*;

  #[test]
  fn test_expand_plain_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("a.js");
    fs::write(&file, "x").unwrap();

    let files = expand_patterns(&[file.to_string_lossy().into_owned()]).unwrap();
    assert_eq!(files, vec![file]);
  }

  #[test]
  fn test_expand_directory_recursively() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("a.js"), "x").unwrap();
    fs::write(dir.path().join("sub/b.html"), "y").unwrap();

    let files = expand_patterns(&[dir.path().to_string_lossy().into_owned()]).unwrap();
    assert_eq!(files.len(), 2);
  }

  #[test]
  fn test_overlapping_patterns_deduplicated() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("a.js");
    fs::write(&file, "x").unwrap();

    let files = expand_patterns(&[
      dir.path().to_string_lossy().into_owned(),
      file.to_string_lossy().into_owned(),
    ])
    .unwrap();
    assert_eq!(files.len(), 1);
  }

  #[test]
  fn test_invalid_glob_is_error() {
    assert!(expand_patterns(&["[".to_string()]).is_err());
  }
}
