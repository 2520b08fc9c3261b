use std::{
  fs,
  io::{self, Write},
};

use color_eyre::eyre::{Context, Result};
use log::{LevelFilter, info};
use mdview_markdown::{DocFile, DocRenderer};

mod cli;
mod page;

use cli::Cli;
use page::PageOptions;

fn main() -> Result<()> {
  color_eyre::install()?;

  // Parse command line arguments
  let cli = Cli::parse_args();

  // Initialize logging first so we can log during rendering
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  let display_title = cli.title.clone().unwrap_or_else(|| {
    cli
      .input
      .file_stem()
      .and_then(|stem| stem.to_str())
      .unwrap_or("Documentation")
      .to_string()
  });

  let doc = DocFile::new(display_title, &cli.input);
  let renderer = DocRenderer::new()?;

  let rendered = renderer
    .render_file(&doc)
    .wrap_err_with(|| format!("Failed to render {}", cli.input.display()))?;

  let options = PageOptions {
    title: cli.title.clone(),
  };
  let html = page::render_page(&doc, &rendered, &options)?;

  match &cli.output {
    Some(path) => {
      fs::write(path, &html)
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
      info!("Wrote {}", path.display());
    },
    None => {
      io::stdout().write_all(html.as_bytes())?;
    },
  }

  Ok(())
}
