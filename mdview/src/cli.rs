use std::path::PathBuf;

use clap::Parser;

/// Command line interface for mdview
#[derive(Parser, Debug)]
#[command(author, version, about = "mdview: Markdown document page renderer")]
pub struct Cli {
  /// Path to the Markdown document to render
  pub input: PathBuf,

  /// Write the rendered page to this file instead of standard output
  #[arg(short, long)]
  pub output: Option<PathBuf>,

  /// Title of the rendered page. Defaults to the document's first heading,
  /// then the file name.
  #[arg(short = 'T', long)]
  pub title: Option<String>,

  /// Enable verbose debug logging
  #[arg(short, long)]
  pub verbose: bool,
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
