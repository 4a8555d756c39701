//! # renotice
//!
//! A tool that rewrites source and markup files to carry an up-to-date, templated
//! copyright notice.
//!
//! `renotice` modifies files in place. For source files it recognizes existing
//! copyright banners (block comments or consecutive line comments at column one),
//! removes every one of them, and substitutes a freshly rendered notice at the
//! position of the old banner, so re-running the tool never stacks duplicate
//! banners. For markup files it regenerates a tagged region bounded by
//! configurable open and close literals, preserving the indentation of the
//! surrounding document.
//!
//! ## Features
//!
//! * Replace existing copyright banners instead of stacking a second one
//! * Recognize both `/* ... */` block banners and `//` line-comment banners
//! * Regenerate `<!-- start ... -->` / `<!-- end ... -->` tag regions in markup
//! * Template variables (`{{name}}`, `{{version}}`, `{{path}}`, `{{date}}`, ...)
//!   with hard errors on unresolved placeholders
//! * Untouched passthrough for file types the tool does not manage
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//!
//! use renotice::processor::Processor;
//! use renotice::tags::TagPair;
//! use renotice::templates::{NoticeContext, NoticeTemplate};
//!
//! fn main() -> anyhow::Result<()> {
//!   let template = NoticeTemplate::new("// Copyright (c) {{year}} Example Co.");
//!
//!   let mut context = NoticeContext::new();
//!   context.set("year", "2026");
//!
//!   let processor = Processor::new(template, context, TagPair::default());
//!   processor.process(&[PathBuf::from("dist/app.js")])?;
//!
//!   Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Per-file orchestration: read, dispatch by file kind, write back
//! * [`banner`] - Recognition and removal of pre-existing copyright banners
//! * [`tags`] - Tag region validation, indent capture, and injection
//! * [`templates`] - Notice template rendering
//! * [`logging`] - Logging utilities for verbose output
//!
//! [`processor`]: crate::processor
//! [`banner`]: crate::banner
//! [`tags`]: crate::tags
//! [`templates`]: crate::templates
//! [`logging`]: crate::logging

// Re-export modules for public API
pub mod banner;
pub mod cli;
pub mod config;
pub mod logging;
pub mod processor;
pub mod tags;
pub mod templates;
