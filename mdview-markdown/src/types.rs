//! Types for the mdview-markdown public API.
use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::{error::RenderError, utils};

/// Represents a heading found in a rendered document.
///
/// Headers form a forest: level-1 headers are roots, and each header owns
/// the headers nested directly beneath it in `subheaders`, in document
/// order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Header {
  /// Inner content of the heading tag, as captured (may contain inline
  /// HTML).
  pub title: String,

  /// Heading level (1-9).
  pub level: u8,

  /// The exact heading fragment as matched in the document. Used as the
  /// rewrite key when the heading is replaced with its anchored form.
  #[serde(skip)]
  pub markup: String,

  /// URL-fragment-safe anchor id derived from the title, unique within the
  /// document.
  pub anchor: String,

  /// Direct child headers, in document order.
  pub subheaders: Vec<Header>,
}

impl Header {
  /// Title with any inline HTML tags removed, suitable for navigation
  /// labels and the page title.
  #[must_use]
  pub fn title_text(&self) -> String {
    utils::strip_tags(&self.title).trim().to_string()
  }
}

/// A reference to a Markdown document on disk.
///
/// Carries a display title, the source path, and a stable id slug derived
/// from the file stem. The id is used to build self-links that stay on the
/// currently displayed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocFile {
  /// Display title for the document.
  pub title: String,
  /// Path to the Markdown source.
  pub path:  PathBuf,
  /// Stable identifier, slugified from the file stem.
  pub id:    String,
}

impl DocFile {
  /// Create a document reference from a display title and source path.
  pub fn new(title: impl Into<String>, path: impl Into<PathBuf>) -> Self {
    let path = path.into();
    let id = path
      .file_stem()
      .and_then(|stem| stem.to_str())
      .map(utils::slugify)
      .filter(|slug| !slug.is_empty())
      .unwrap_or_else(|| "document".to_string());

    Self {
      title: title.into(),
      path,
      id,
    }
  }

  /// Location of this document as a link target, without a fragment.
  #[must_use]
  pub fn href(&self) -> String {
    format!("?doc={}", self.id)
  }

  /// Read the document source.
  ///
  /// # Errors
  ///
  /// Returns [`RenderError::FileAccess`] if the file cannot be read.
  pub fn read_contents(&self) -> Result<String, RenderError> {
    fs::read_to_string(&self.path).map_err(|source| {
      RenderError::FileAccess {
        path: self.path.clone(),
        source,
      }
    })
  }
}

/// Result of rendering one document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderedDoc {
  /// Rendered HTML with anchored headings and highlighted code blocks.
  pub html: String,

  /// Root (level-1) headers in document order, each owning its nested
  /// subheaders. Used to build the on-page table of contents.
  pub headers: Vec<Header>,

  /// Title of the document, taken from the first level-1 header.
  pub title: Option<String>,
}
