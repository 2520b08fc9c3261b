//! The document rendering pipeline: list notation normalization, Markdown
//! conversion, header extraction, and code fence highlighting.

use comrak::Options;
use log::debug;

use crate::{
  error::RenderResult,
  headers::extract_and_link,
  highlight::{
    Highlighter,
    LanguageAliases,
    create_default_highlighter,
    highlight_fences,
  },
  normalize::normalize_list_notation,
  types::{DocFile, Header, RenderedDoc},
};

/// Renders Markdown documents into anchored, highlighted HTML.
///
/// A renderer owns the process-wide language alias table and a highlighting
/// backend, and can be shared by reference across unlimited concurrent
/// renders: every pass takes `&str` and produces a new `String`, with no
/// shared mutable state.
pub struct DocRenderer {
  aliases:     LanguageAliases,
  highlighter: Box<dyn Highlighter>,
}

impl DocRenderer {
  /// Create a renderer with the default alias table and highlighting
  /// backend.
  ///
  /// # Errors
  ///
  /// Returns an error if no highlighting backend feature is enabled.
  pub fn new() -> RenderResult<Self> {
    Ok(Self::with_highlighter(create_default_highlighter()?))
  }

  /// Create a renderer with a custom highlighting backend.
  #[must_use]
  pub fn with_highlighter(highlighter: Box<dyn Highlighter>) -> Self {
    debug!("using {} highlighting backend", highlighter.name());
    Self {
      aliases: LanguageAliases::default(),
      highlighter,
    }
  }

  /// Read and render the document referenced by `doc`.
  ///
  /// # Errors
  ///
  /// Returns [`crate::RenderError::FileAccess`] if the source cannot be
  /// read, or a highlighting error if a code fence fails to highlight.
  pub fn render_file(&self, doc: &DocFile) -> RenderResult<RenderedDoc> {
    let text = doc.read_contents()?;
    self.render(&text, doc)
  }

  /// Render Markdown source into HTML with anchored headings and
  /// highlighted code fences, plus the header forest for the table of
  /// contents.
  ///
  /// # Errors
  ///
  /// Returns a highlighting error if a code fence fails to highlight; the
  /// render has no partial-output mode.
  pub fn render(
    &self,
    markdown: &str,
    doc: &DocFile,
  ) -> RenderResult<RenderedDoc> {
    let normalized = normalize_list_notation(markdown);
    let html = comrak::markdown_to_html(&normalized, &Self::comrak_options());

    let (html, headers) = extract_and_link(&html, doc);
    let html = highlight_fences(&html, &self.aliases, self.highlighter.as_ref())?;

    // Roots are exactly the level-1 headers, so the first one names the
    // document.
    let title = headers.first().map(Header::title_text);
    debug!("rendered {} ({} root headers)", doc.id, headers.len());

    Ok(RenderedDoc {
      html,
      headers,
      title,
    })
  }

  /// Comrak options for the Markdown conversion step.
  fn comrak_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.tasklist = true;
    // Raw HTML passes through; the post-processing passes rely on it
    options.render.r#unsafe = true;
    options
  }
}
