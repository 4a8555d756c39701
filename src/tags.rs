//! # Tags Module
//!
//! This module handles the auto-generated region of markup files: a span
//! bounded by an open-tag literal and a close-tag literal. Everything strictly
//! between the tags is treated as previously generated and disposable; the
//! injector rewrites it wholesale while leaving the tags themselves and all
//! surrounding text untouched.
//!
//! A markup file without both tags, or with the close tag ahead of the open
//! tag, is structurally invalid. That is a fatal condition: the batch stops
//! and the offending path is reported.

use std::path::{Path, PathBuf};

use regex::Regex;

/// Default open-tag literal when none is configured.
pub const DEFAULT_OPEN_TAG: &str = "<!-- start auto template tags -->";

/// Default close-tag literal when none is configured.
pub const DEFAULT_CLOSE_TAG: &str = "<!-- end auto template tags -->";

/// Error type for tag region operations.
#[derive(Debug, thiserror::Error)]
pub enum TagError {
  /// The file is missing a tag literal or has them in the wrong order.
  #[error("invalid template tags in {path}")]
  InvalidTemplateTags { path: PathBuf },
}

/// The open and close literals bounding an auto-generated markup region.
#[derive(Debug, Clone)]
pub struct TagPair {
  open: String,
  close: String,
  /// Optional leading whitespace directly followed by the open tag; group one
  /// captures the indent to re-apply to injected content.
  indent_re: Regex,
}

impl Default for TagPair {
  fn default() -> Self {
    Self::new(DEFAULT_OPEN_TAG, DEFAULT_CLOSE_TAG)
  }
}

impl TagPair {
  /// Creates a tag pair from the two literals.
  ///
  /// The literals are treated as plain strings everywhere, including inside
  /// the indent-capture pattern, so tags containing regex metacharacters work.
  pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
    let open = open.into();
    let close = close.into();
    let indent_re = Regex::new(&format!(r"([\s\t]+)?{}", regex::escape(&open))).expect("indent pattern must compile");
    Self { open, close, indent_re }
  }

  /// The open-tag literal.
  pub fn open(&self) -> &str {
    &self.open
  }

  /// The close-tag literal.
  pub fn close(&self) -> &str {
    &self.close
  }

  /// Validates that `content` contains both tag literals in the correct order.
  ///
  /// # Errors
  ///
  /// Returns [`TagError::InvalidTemplateTags`] naming `path` if either literal
  /// is absent or the close tag precedes the open tag.
  pub fn validate(&self, path: &Path, content: &str) -> Result<(), TagError> {
    let open_at = content.find(&self.open);
    let close_at = content.find(&self.close);

    match (open_at, close_at) {
      (Some(open_at), Some(close_at)) if open_at < close_at => Ok(()),
      _ => Err(TagError::InvalidTemplateTags {
        path: path.to_path_buf(),
      }),
    }
  }

  /// Captures the whitespace run immediately preceding the open tag.
  ///
  /// The captured run may span a preceding newline; embedded line separators
  /// are stripped so the result is a pure indent prefix. Defaults to empty
  /// when the open tag is absent or sits at column one.
  pub fn capture_indent(&self, content: &str) -> String {
    self
      .indent_re
      .captures(content)
      .and_then(|caps| caps.get(1))
      .map(|indent| indent.as_str().replace(['\r', '\n'], ""))
      .unwrap_or_default()
  }

  /// Rewrites the tag region with `region` content, discarding whatever sat
  /// between the tags before.
  ///
  /// `region` is expected to carry its own trailing line separator (the
  /// renderer guarantees one); `indent` is re-applied before the close tag so
  /// the region's formatting matches its surroundings.
  ///
  /// Call [`validate`](Self::validate) first: injection assumes both tags are
  /// present and ordered.
  pub fn inject(&self, content: &str, indent: &str, region: &str) -> String {
    let before = content.split(&self.open).next().unwrap_or_default();
    let after = content.splitn(2, &self.close).nth(1).unwrap_or_default();

    let mut result = String::with_capacity(content.len() + region.len());
    result.push_str(before);
    result.push_str(&self.open);
    result.push('\n');
    result.push_str(region);
    result.push_str(indent);
    result.push_str(&self.close);
    result.push_str(after);
    result
  }
}
