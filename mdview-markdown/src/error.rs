use std::{io, path::PathBuf};

use thiserror::Error;

use crate::highlight::HighlightError;

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that abort a document render.
///
/// Malformed markup inside the document is never an error: headings and
/// code fences that fail to match are silently excluded and the render
/// proceeds.
#[derive(Debug, Error)]
pub enum RenderError {
  #[error("failed to read document {path}: {source}")]
  FileAccess {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("syntax highlighting failed: {0}")]
  Highlight(#[from] HighlightError),
}
