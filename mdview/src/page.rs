//! Assembles the final HTML page around a rendered document: template,
//! stylesheet, and the on-page table of contents.

use std::fmt::Write;

use color_eyre::eyre::{Context, Result};
use html_escape::encode_text;
use mdview_markdown::{DocFile, Header, RenderedDoc};
use tera::Tera;

const PAGE_TEMPLATE: &str = include_str!("../templates/page.html");
const PAGE_CSS: &str = include_str!("../templates/page.css");

/// Options for the rendered page.
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
  /// Page title override. When unset, the document's own title (its first
  /// level-1 heading) is used, then the document's display title.
  pub title: Option<String>,
}

/// Render the full HTML page for a document.
///
/// # Errors
///
/// Returns an error if the page template fails to render.
pub fn render_page(
  doc: &DocFile,
  rendered: &RenderedDoc,
  options: &PageOptions,
) -> Result<String> {
  let mut tera = Tera::default();
  tera
    .add_raw_template("page", PAGE_TEMPLATE)
    .wrap_err("Failed to load page template")?;

  let title = options
    .title
    .clone()
    .or_else(|| rendered.title.clone())
    .unwrap_or_else(|| doc.title.clone());

  let mut context = tera::Context::new();
  context.insert("title", &title);
  context.insert("styles", PAGE_CSS);
  context.insert("content", &rendered.html);
  context.insert("toc", &render_toc(&rendered.headers));

  tera
    .render("page", &context)
    .wrap_err("Failed to render page template")
}

/// Render the header forest as nested lists for the on-page table of
/// contents. Returns an empty string for a document without headings.
#[must_use]
pub fn render_toc(headers: &[Header]) -> String {
  if headers.is_empty() {
    return String::new();
  }
  toc_level(headers, 0)
}

fn toc_level(headers: &[Header], depth: usize) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "<ul class=\"toc toc-level-{depth}\">");

  for header in headers {
    let _ = write!(
      out,
      "<li><a href=\"#{}\">{}</a>",
      header.anchor,
      encode_text(&header.title_text())
    );
    if !header.subheaders.is_empty() {
      out.push('\n');
      out.push_str(&toc_level(&header.subheaders, depth + 1));
    }
    out.push_str("</li>\n");
  }

  out.push_str("</ul>\n");
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  fn header(title: &str, level: u8, subheaders: Vec<Header>) -> Header {
    Header {
      title: title.to_string(),
      level,
      markup: String::new(),
      anchor: mdview_markdown::utils::slugify(title),
      subheaders,
    }
  }

  #[test]
  fn test_toc_empty_for_no_headers() {
    assert_eq!(render_toc(&[]), "");
  }

  #[test]
  fn test_toc_nests_subheaders() {
    let headers = vec![header("Top", 1, vec![
      header("Child One", 2, vec![]),
      header("Child Two", 2, vec![]),
    ])];

    let toc = render_toc(&headers);
    assert!(toc.contains("<ul class=\"toc toc-level-0\">"));
    assert!(toc.contains("<ul class=\"toc toc-level-1\">"));
    assert!(toc.contains("<a href=\"#top\">Top</a>"));
    assert!(toc.contains("<a href=\"#child-one\">Child One</a>"));
    assert!(toc.contains("<a href=\"#child-two\">Child Two</a>"));
  }

  #[test]
  fn test_toc_labels_are_escaped_and_tag_free() {
    let headers = vec![header("Uses <em>markup</em> & more", 1, vec![])];

    let toc = render_toc(&headers);
    assert!(toc.contains("Uses markup &amp; more"));
    assert!(!toc.contains("<em>"));
  }

  #[test]
  fn test_render_page_includes_content_and_toc() {
    let doc = DocFile::new("Guide", "guide.md");
    let rendered = RenderedDoc {
      html:    "<h1 id=\"guide\">Guide</h1><p>body</p>".to_string(),
      headers: vec![header("Guide", 1, vec![])],
      title:   Some("Guide".to_string()),
    };

    let page = render_page(&doc, &rendered, &PageOptions::default())
      .expect("Failed to render page");

    assert!(page.contains("<title>Guide</title>"));
    assert!(page.contains("<p>body</p>"));
    assert!(page.contains("<a href=\"#guide\">Guide</a>"));
  }

  #[test]
  fn test_render_page_title_override() {
    let doc = DocFile::new("Guide", "guide.md");
    let rendered = RenderedDoc {
      html:    String::new(),
      headers: Vec::new(),
      title:   None,
    };
    let options = PageOptions {
      title: Some("Custom".to_string()),
    };

    let page =
      render_page(&doc, &rendered, &options).expect("Failed to render page");
    assert!(page.contains("<title>Custom</title>"));
  }
}
