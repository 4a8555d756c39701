//! # renotice
//!
//! A tool that rewrites source and markup files to carry an up-to-date
//! templated copyright notice.

use anyhow::Result;
use renotice::cli::{Cli, run};

fn main() -> Result<()> {
  let cli = Cli::parse_args();
  run(cli)
}
