//! Error types for syntax highlighting operations.

/// Result type for syntax highlighting operations.
pub type HighlightResult<T> = Result<T, HighlightError>;

/// Errors that can occur during syntax highlighting.
///
/// Any of these aborts the render: the core never falls back to an
/// unhighlighted code block on its own, though a calling layer may catch
/// and degrade.
#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
  #[error("language '{0}' is not supported by this highlighter")]
  UnsupportedLanguage(String),
  #[error("highlighting failed: {0}")]
  HighlightingFailed(String),
  #[error(
    "no syntax highlighting backend available; enable the 'syntect' feature \
     or supply a custom highlighter"
  )]
  NoBackendAvailable,
}
