//! # Templates Module
//!
//! This module provides functionality for rendering notice templates with
//! per-file context and adapting the rendered text to the target file's
//! comment conventions.
//!
//! The module includes:
//! - [`NoticeTemplate`] for holding the parameterized notice text
//! - [`NoticeContext`] for the variables substituted into the template
//! - [`NoticeRenderer`] for producing the literal notice text per file
//!
//! ## Example
//!
//! ```rust
//! use renotice::templates::{NoticeContext, NoticeTemplate};
//!
//! # fn main() -> anyhow::Result<()> {
//! let template = NoticeTemplate::new("// Copyright (c) {{year}} {{name}}");
//!
//! let mut context = NoticeContext::new();
//! context.set("year", "2026");
//! context.set("name", "Example Co.");
//!
//! let notice = template.render(&context)?;
//! assert_eq!(notice, "// Copyright (c) 2026 Example Co.");
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use chrono::Local;
use regex::Regex;

use crate::banner;
use crate::verbose_log;

/// A `{{name}}` placeholder expression. Names follow the usual identifier
/// shape, with dots and dashes allowed for namespaced variables.
static PLACEHOLDER_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_.-]*)\s*\}\}").expect("placeholder regex must compile"));

/// Bare `//` template lines, collapsed to blank lines for markup output.
static COMMENT_LINE_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(//\n)+").expect("comment line regex must compile"));

/// `// ` comment prefixes, stripped entirely for markup output.
static COMMENT_PREFIX_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(//\s)+").expect("comment prefix regex must compile"));

/// Error type for template rendering.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
  /// A placeholder in the template has no value in the context.
  #[error("Unresolved template placeholder '{{{{{name}}}}}'")]
  UnresolvedPlaceholder { name: String },
}

/// The parameterized notice text, owned by configuration and passed read-only
/// into rendering.
#[derive(Debug, Clone)]
pub struct NoticeTemplate {
  text: String,
}

impl NoticeTemplate {
  /// Creates a template from an inline string.
  pub fn new(text: impl Into<String>) -> Self {
    Self { text: text.into() }
  }

  /// Loads a template from a file.
  ///
  /// # Errors
  ///
  /// Returns an error if the file does not exist, cannot be read, or is not
  /// valid UTF-8.
  pub fn from_file(path: &Path) -> Result<Self> {
    verbose_log!("Loading notice template from: {}", path.display());

    let text =
      fs::read_to_string(path).with_context(|| format!("Failed to read notice template file: {}", path.display()))?;

    Ok(Self { text })
  }

  /// Renders the template against the given context.
  ///
  /// Every `{{name}}` placeholder is substituted with the context value of the
  /// same name. A placeholder without a value is an error; there is no silent
  /// fallback.
  pub fn render(&self, context: &NoticeContext) -> Result<String, TemplateError> {
    Self::render_text(&self.text, context)
  }

  /// Renders the template for a markup file: the `//` comment tokens are
  /// stripped first so the notice reads as plain text inside the markup's own
  /// comment convention. Returns the text with one trailing line separator.
  pub fn render_markup(&self, context: &NoticeContext) -> Result<String, TemplateError> {
    let stripped = strip_comment_tokens(&self.text);
    let mut rendered = Self::render_text(&stripped, context)?;
    rendered.push('\n');
    Ok(rendered)
  }

  fn render_text(text: &str, context: &NoticeContext) -> Result<String, TemplateError> {
    // Scan for unresolved placeholders first so the substitution pass below
    // cannot fail halfway through.
    for caps in PLACEHOLDER_RE.captures_iter(text) {
      let name = &caps[1];
      if context.get(name).is_none() {
        return Err(TemplateError::UnresolvedPlaceholder { name: name.to_string() });
      }
    }

    let rendered = PLACEHOLDER_RE.replace_all(text, |caps: &regex::Captures| {
      context.get(&caps[1]).unwrap_or_default().to_string()
    });

    Ok(rendered.into_owned())
  }
}

/// Variables available to template rendering.
///
/// Configuration and the CLI contribute project-level variables (package name,
/// version, repository URL, author); the processor contributes the per-file
/// `path` variable. The run date is available as `{{date}}`.
#[derive(Debug, Clone, Default)]
pub struct NoticeContext {
  vars: BTreeMap<String, String>,
}

impl NoticeContext {
  /// Creates an empty context.
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a context preloaded with the `date` built-in (`dd-mm-yyyy`).
  pub fn for_run() -> Self {
    let mut context = Self::new();
    context.set("date", Local::now().format("%d-%m-%Y").to_string());
    context
  }

  /// Sets a variable, replacing any previous value.
  pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
    self.vars.insert(name.into(), value.into());
  }

  /// Sets the per-file `path` variable, normalized to forward slashes.
  pub fn set_path(&mut self, path: &Path) {
    self.set("path", path.to_string_lossy().replace('\\', "/"));
  }

  /// Looks up a variable value.
  pub fn get(&self, name: &str) -> Option<&str> {
    self.vars.get(name).map(String::as_str)
  }
}

/// Strips `//` comment tokens from notice text.
///
/// Runs of bare `//` lines become blank lines and `// ` prefixes disappear, so
/// a template written in line-comment form reads as plain text when injected
/// into a markup comment region.
pub fn strip_comment_tokens(text: &str) -> String {
  let collapsed = COMMENT_LINE_RE.replace_all(text, "\n");
  COMMENT_PREFIX_RE.replace_all(&collapsed, "").into_owned()
}

/// Produces the literal notice text to place into a given file.
///
/// The renderer owns the template and the project-level context; per file it
/// binds the `path` variable and dispatches on the file kind decided by the
/// processor.
pub struct NoticeRenderer {
  template: NoticeTemplate,
  context: NoticeContext,
}

impl NoticeRenderer {
  /// Creates a renderer over the given template and project context.
  pub const fn new(template: NoticeTemplate, context: NoticeContext) -> Self {
    Self { template, context }
  }

  /// Per-file context: the project context plus the file's `path`.
  fn context_for(&self, path: &Path) -> NoticeContext {
    let mut context = self.context.clone();
    context.set_path(path);
    context
  }

  /// Rewrites source-style content with an up-to-date banner.
  ///
  /// Old banners are collapsed to insertion markers first; the rendered notice
  /// then lands at the position of the first removed banner, or is prepended
  /// followed by a line separator when the file had no banner at all.
  pub fn render_source(&self, path: &Path, content: &str) -> Result<String, TemplateError> {
    let notice = self.template.render(&self.context_for(path))?;
    let stripped = banner::remove_old_banners(content);
    Ok(banner::substitute_notice(&stripped, &notice))
  }

  /// Renders the notice as plain text for a markup tag region, with one
  /// trailing line separator.
  pub fn render_markup(&self, path: &Path) -> Result<String, TemplateError> {
    self.template.render_markup(&self.context_for(path))
  }
}
