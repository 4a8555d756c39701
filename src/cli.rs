//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing and wires configuration, template
//! loading, and the processor together.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use tracing::debug;

use crate::config::load_config;
use crate::info_log;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::processor::{Processor, expand_patterns};
use crate::tags::TagPair;
use crate::templates::{NoticeContext, NoticeTemplate};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  version,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Rewrite notices using a template file
  renotice --notice-file NOTICE.txt dist/

  # Inline template with variables
  renotice --notice '// Copyright (c) {{year}} {{name}}' --var year=2026 --var name='Example Co.' dist/**/*.js

  # Custom tag literals for markup regions
  renotice --notice-file NOTICE.txt --open-tag '<!-- start -->' --close-tag '<!-- end -->' dist/index.html

  # Use a project config file
  renotice --config .renotice.toml dist/
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  /// File, directory, or glob patterns naming the destination files.
  /// Directories are processed recursively.
  #[arg(required = false)]
  pub patterns: Vec<String>,

  /// Notice template file to use
  #[arg(long, short = 'f', value_name = "FILE")]
  pub notice_file: Option<PathBuf>,

  /// Inline notice template (overrides --notice-file and config)
  #[arg(long, value_name = "TEMPLATE", conflicts_with = "notice_file")]
  pub notice: Option<String>,

  /// Open-tag literal bounding markup tag regions
  #[arg(long, value_name = "TAG")]
  pub open_tag: Option<String>,

  /// Close-tag literal bounding markup tag regions
  #[arg(long, value_name = "TAG")]
  pub close_tag: Option<String>,

  /// Template variable (repeatable, format: KEY=VALUE)
  #[arg(long, value_name = "KEY=VALUE")]
  pub var: Vec<String>,

  /// Path to config file (default: .renotice.toml in the current directory)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long)]
  pub no_config: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }

  /// Validate the arguments and return an error if invalid
  fn validate(&self) -> Result<(), String> {
    if self.patterns.is_empty() {
      return Err("Missing required argument: <PATTERNS>...".to_string());
    }
    Ok(())
  }
}

/// Parse a `KEY=VALUE` variable argument.
fn parse_var(arg: &str) -> Result<(String, String)> {
  arg
    .split_once('=')
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .ok_or_else(|| anyhow!("Invalid --var '{arg}': expected KEY=VALUE"))
}

/// Run the tool with the given arguments
pub fn run(args: Cli) -> Result<()> {
  // Validate arguments
  if let Err(e) = args.validate() {
    eprintln!("ERROR: {e}");
    process::exit(1);
  }

  // Initialize tracing subscriber for structured logging
  init_tracing(args.quiet, args.verbose);

  // Set verbose mode for output formatting and info_log! macro
  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  // Load configuration file if present
  let config = load_config(args.config.as_deref(), args.no_config)?;

  if config.is_some() {
    debug!("Using configuration file");
  }

  // Resolve the notice template: CLI beats config, inline beats file
  let template = if let Some(ref text) = args.notice {
    NoticeTemplate::new(text.clone())
  } else if let Some(ref path) = args.notice_file {
    NoticeTemplate::from_file(path)?
  } else if let Some(text) = config.as_ref().and_then(|c| c.notice.clone()) {
    NoticeTemplate::new(text)
  } else if let Some(path) = config.as_ref().and_then(|c| c.notice_file.clone()) {
    NoticeTemplate::from_file(&path)?
  } else {
    eprintln!("ERROR: Missing notice template: pass --notice or --notice-file, or configure one");
    process::exit(1);
  };

  // Build the rendering context: run date built-in, then config vars, then
  // CLI vars on top
  let mut context = NoticeContext::for_run();
  if let Some(ref cfg) = config {
    for (name, value) in &cfg.vars {
      context.set(name.clone(), value.clone());
    }
  }
  for arg in &args.var {
    let (name, value) = parse_var(arg)?;
    context.set(name, value);
  }

  // Resolve the tag literals: CLI beats config beats defaults
  let defaults = TagPair::default();
  let open_tag = args
    .open_tag
    .or_else(|| config.as_ref().and_then(|c| c.open_tag.clone()))
    .unwrap_or_else(|| defaults.open().to_string());
  let close_tag = args
    .close_tag
    .or_else(|| config.as_ref().and_then(|c| c.close_tag.clone()))
    .unwrap_or_else(|| defaults.close().to_string());
  let tags = TagPair::new(open_tag, close_tag);

  // Expand patterns into the destination file list
  let files = expand_patterns(&args.patterns).context("Failed to expand file patterns")?;

  if files.is_empty() {
    info_log!("No files matched the given patterns");
    return Ok(());
  }

  let start_time = Instant::now();

  let processor = Processor::new(template, context, tags);
  let processed = processor.process(&files)?;

  info_log!("Processed {} files in {}ms", processed, start_time.elapsed().as_millis());

  Ok(())
}
