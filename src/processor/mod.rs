//! # Processor Module
//!
//! This module contains the per-file orchestration: read a destination file,
//! dispatch on its kind, render the notice into it, and write the result back.
//!
//! The module is organized into submodules:
//! - [`file_io`] - File reading and writing operations
//! - [`file_collector`] - Pattern expansion and directory traversal
//!
//! The [`Processor`] struct is the main entry point. Files are independent of
//! one another and are processed sequentially in the caller-supplied order; a
//! structural violation (a markup file with missing or misordered template
//! tags) is fatal and stops the batch, leaving earlier writes in place.

mod file_collector;
mod file_io;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
pub use file_collector::expand_patterns;
pub use file_io::FileIO;
use tracing::{debug, trace};

use crate::info_log;
use crate::tags::TagPair;
use crate::templates::{NoticeContext, NoticeRenderer, NoticeTemplate};

/// The closed set of behaviors a destination file can receive.
///
/// Adding a new file kind means adding a variant here and its render/place
/// operations, not branching deeper in the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
  /// Source-style file: old banners are replaced with a fresh one.
  SourceBanner,
  /// Markup file: the bounded tag region is regenerated.
  MarkupRegion,
  /// Anything else: written back byte-identical.
  Passthrough,
}

impl FileKind {
  /// Decides the file kind from the path's extension.
  pub fn from_path(path: &Path) -> Self {
    let extension = path
      .extension()
      .and_then(|ext| ext.to_str())
      .unwrap_or("")
      .to_lowercase();

    match extension.as_str() {
      "js" | "mjs" | "cjs" | "jsx" | "ts" | "tsx" => FileKind::SourceBanner,
      "html" | "htm" | "xhtml" => FileKind::MarkupRegion,
      _ => FileKind::Passthrough,
    }
  }
}

/// Processor for rewriting notices in destination files.
///
/// The `Processor` is responsible for:
/// - Reading each destination file
/// - Capturing the tag indentation context from its content
/// - Dispatching by file kind to the banner or tag-region path
/// - Writing the rewritten content back to the same path
pub struct Processor {
  /// Renders the notice per file.
  renderer: NoticeRenderer,

  /// The open/close literals bounding markup tag regions.
  tags: TagPair,
}

impl Processor {
  /// Creates a processor over the given template, context, and tag pair.
  pub const fn new(template: NoticeTemplate, context: NoticeContext, tags: TagPair) -> Self {
    Self {
      renderer: NoticeRenderer::new(template, context),
      tags,
    }
  }

  /// Processes the destination files in order.
  ///
  /// # Parameters
  ///
  /// * `files` - Destination paths; each is rewritten in place
  ///
  /// # Returns
  ///
  /// The number of files rewritten (passthrough files are written back
  /// unchanged and still count as processed).
  ///
  /// # Errors
  ///
  /// Stops at the first fatal condition: an unreadable or unwritable file, a
  /// markup file with invalid template tags, or an unresolved template
  /// placeholder. Files already written earlier in the batch stay written.
  pub fn process(&self, files: &[PathBuf]) -> Result<usize> {
    debug!("Processing {} files", files.len());

    for path in files {
      self.process_file(path)?;
    }

    Ok(files.len())
  }

  /// Processes a single destination file.
  pub fn process_file(&self, path: &Path) -> Result<()> {
    trace!("Processing file: {}", path.display());

    let content = FileIO::read_full_content(path)?;

    // Indent context comes from any occurrence of the open tag in the content;
    // it defaults to empty and only matters for the markup path.
    let indent = self.tags.capture_indent(&content);

    let kind = FileKind::from_path(path);
    let output = match kind {
      FileKind::SourceBanner => self
        .renderer
        .render_source(path, &content)
        .with_context(|| format!("Failed to render notice for {}", path.display()))?,
      FileKind::MarkupRegion => {
        self.tags.validate(path, &content)?;
        let region = format!(
          "{indent}{}",
          self
            .renderer
            .render_markup(path)
            .with_context(|| format!("Failed to render notice for {}", path.display()))?
        );
        self.tags.inject(&content, &indent, &region)
      }
      FileKind::Passthrough => {
        trace!("Passing through: {} (unmanaged extension)", path.display());
        content.clone()
      }
    };

    FileIO::write_file(path, &output)?;

    if kind != FileKind::Passthrough {
      info_log!("Updated notice in: {}", path.display());
    }

    Ok(())
  }
}
