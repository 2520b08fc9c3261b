//! Core types and traits for syntax highlighting.

use std::collections::HashMap;

use super::error::HighlightResult;

/// Per-invocation configuration for a highlighter backend.
///
/// The fence-highlighting pass requests every field enabled on every
/// invocation. Backends whose grammars cannot toggle individual token
/// families treat the always-on families as trivially satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightOptions {
  /// Emit class-based styling rather than inline styles.
  pub classed_output: bool,
  /// Highlight language keywords and methods.
  pub highlight_methods: bool,
  /// Highlight numeric literals.
  pub highlight_numbers: bool,
  /// Highlight symbols and operators.
  pub highlight_symbols: bool,
  /// Highlight string literals.
  pub highlight_strings: bool,
}

impl Default for HighlightOptions {
  fn default() -> Self {
    Self {
      classed_output:    true,
      highlight_methods: true,
      highlight_numbers: true,
      highlight_symbols: true,
      highlight_strings: true,
    }
  }
}

/// Trait for syntax highlighting backends.
///
/// Allows different highlighting implementations to be used
/// interchangeably behind the fence-highlighting pass.
pub trait Highlighter: Send + Sync {
  /// Get the name of this highlighter backend.
  fn name(&self) -> &'static str;

  /// Check if a language is supported.
  fn supports_language(&self, language: &str) -> bool;

  /// Highlight `code` as `language`, honoring `options`.
  ///
  /// The returned fragment must be wrapped in the block-wrapper pair
  /// `<pre class="{language} {OVERALL_CLASS}">` / `</pre>`; the
  /// fence-highlighting pass strips exactly that pair before merging the
  /// fragment back into the document.
  ///
  /// # Errors
  ///
  /// Returns an error if the language is unsupported or the backend fails.
  fn highlight(
    &self,
    code: &str,
    language: &str,
    options: &HighlightOptions,
  ) -> HighlightResult<String>;
}

/// Fixed mapping from code fence language tags to canonical highlighter
/// language identifiers.
///
/// Constructed once at startup and passed by reference into the
/// fence-highlighting pass; never mutated afterwards. Tags without an entry
/// pass through unchanged.
#[derive(Debug, Clone)]
pub struct LanguageAliases {
  aliases: HashMap<String, String>,
}

impl LanguageAliases {
  /// Resolve a fence tag to its canonical language identifier.
  ///
  /// Returns the tag itself when no alias entry exists.
  #[must_use]
  pub fn resolve(&self, tag: &str) -> String {
    self
      .aliases
      .get(tag)
      .cloned()
      .unwrap_or_else(|| tag.to_string())
  }
}

impl Default for LanguageAliases {
  fn default() -> Self {
    let mut aliases = HashMap::new();

    // JSON has no grammar of its own in the canonical identifier set and is
    // deliberately mapped to JavaScript's.
    aliases.insert("js".to_string(), "javascript".to_string());
    aliases.insert("json".to_string(), "javascript".to_string());
    aliases.insert("html".to_string(), "html5".to_string());

    // Common shorthands
    aliases.insert("ts".to_string(), "typescript".to_string());
    aliases.insert("py".to_string(), "python".to_string());
    aliases.insert("rb".to_string(), "ruby".to_string());
    aliases.insert("sh".to_string(), "bash".to_string());
    aliases.insert("shell".to_string(), "bash".to_string());
    aliases.insert("yml".to_string(), "yaml".to_string());

    Self { aliases }
  }
}
