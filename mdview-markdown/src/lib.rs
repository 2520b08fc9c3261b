//! # mdview-markdown
//!
//! Markdown document processor for mdview. Turns a Markdown document into
//! an HTML fragment with self-linking, anchored headings and
//! syntax-highlighted code blocks, plus a nested header forest for building
//! an on-page table of contents.
//!
//! ## Quick Start
//!
//! ```rust
//! # fn main() -> Result<(), mdview_markdown::RenderError> {
//! use mdview_markdown::{DocFile, DocRenderer};
//!
//! let renderer = DocRenderer::new()?;
//! let doc = DocFile::new("Readme", "README.md");
//! let result = renderer.render("# Hello World\n\nSome **bold** text.", &doc)?;
//!
//! assert_eq!(result.title.as_deref(), Some("Hello World"));
//! assert!(result.html.contains("id=\"hello-world\""));
//! # Ok(())
//! # }
//! ```
//!
//! ## Pipeline
//!
//! Each render is a sequential pipeline over one document's text:
//!
//! 1. [`normalize_list_notation`] rewrites the `1)` list notation into the
//!    `1.` style the Markdown engine recognizes.
//! 2. comrak converts the Markdown to HTML.
//! 3. [`extract_and_link`] scans the HTML for headings, builds the nested
//!    header forest, and rewrites headings into anchored self-links.
//! 4. [`highlight_fences`] resolves fence language aliases and replaces
//!    fence contents with syntax-highlighted markup from the configured
//!    [`Highlighter`] backend.
//!
//! Steps 3 and 4 are independent whole-document passes; file access and
//! highlighter failures abort the render, while malformed headings or
//! fences are silently skipped.

pub mod headers;
pub mod highlight;
pub mod normalize;
pub mod render;
pub mod utils;

mod error;
mod types;

pub use crate::{
  error::{RenderError, RenderResult},
  headers::extract_and_link,
  highlight::{
    HighlightError,
    HighlightOptions,
    Highlighter,
    LanguageAliases,
    OVERALL_CLASS,
    create_default_highlighter,
    highlight_fences,
  },
  normalize::normalize_list_notation,
  render::DocRenderer,
  types::{DocFile, Header, RenderedDoc},
};
