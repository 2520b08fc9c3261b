//! Syntect-based syntax highlighting backend enhanced with two-face.
//!
//! Uses Sublime Text's syntax definitions (TextMate grammars), with the
//! two-face crate added for extended syntax definitions. Classed output
//! goes through [`ClassedHTMLGenerator`] so styling stays in CSS classes
//! rather than inline styles.

use std::sync::OnceLock;

use syntect::{
  highlighting::ThemeSet,
  html::{ClassStyle, ClassedHTMLGenerator, highlighted_html_for_string},
  parsing::{SyntaxReference, SyntaxSet},
  util::LinesWithEndings,
};

use super::{
  OVERALL_CLASS,
  error::{HighlightError, HighlightResult},
  types::{HighlightOptions, Highlighter},
};

/// Syntect-based syntax highlighter.
pub struct SyntectHighlighter;

impl SyntectHighlighter {
  /// Create a new syntect highlighter.
  #[must_use]
  pub const fn new() -> Self {
    Self
  }

  /// Get the syntect `SyntaxSet`.
  fn syntax_set() -> &'static SyntaxSet {
    static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
    SYNTAX_SET.get_or_init(two_face::syntax::extra_newlines)
  }

  /// Get the default syntect `ThemeSet`, used for inline-styled output.
  fn theme_set() -> &'static ThemeSet {
    static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();
    THEME_SET.get_or_init(ThemeSet::load_defaults)
  }

  /// Look up the grammar for a canonical language identifier.
  fn find_syntax(language: &str) -> Option<&'static SyntaxReference> {
    // Canonical identifiers that differ from the Sublime grammar tokens
    let token = match language {
      "html5" => "html",
      other => other,
    };
    Self::syntax_set().find_syntax_by_token(token)
  }
}

impl Default for SyntectHighlighter {
  fn default() -> Self {
    Self::new()
  }
}

impl Highlighter for SyntectHighlighter {
  fn name(&self) -> &'static str {
    "Syntect"
  }

  fn supports_language(&self, language: &str) -> bool {
    Self::find_syntax(language).is_some()
  }

  fn highlight(
    &self,
    code: &str,
    language: &str,
    options: &HighlightOptions,
  ) -> HighlightResult<String> {
    let syntax = Self::find_syntax(language)
      .ok_or_else(|| HighlightError::UnsupportedLanguage(language.to_string()))?;

    // The grammar always emits every token family (keywords, methods,
    // numbers, symbols, strings); the per-family options are satisfied
    // trivially.
    let body = if options.classed_output {
      let mut generator = ClassedHTMLGenerator::new_with_class_style(
        syntax,
        Self::syntax_set(),
        ClassStyle::Spaced,
      );
      for line in LinesWithEndings::from(code) {
        generator
          .parse_html_for_line_which_includes_newline(line)
          .map_err(|e| HighlightError::HighlightingFailed(e.to_string()))?;
      }
      generator.finalize()
    } else {
      let theme = Self::theme_set().themes.get("InspiredGitHub").ok_or_else(
        || {
          HighlightError::HighlightingFailed(
            "default theme 'InspiredGitHub' not found".to_string(),
          )
        },
      )?;
      let styled =
        highlighted_html_for_string(code, Self::syntax_set(), syntax, theme)
          .map_err(|e| HighlightError::HighlightingFailed(e.to_string()))?;
      unwrap_pre(&styled)
    };

    Ok(format!("<pre class=\"{language} {OVERALL_CLASS}\">{body}</pre>"))
  }
}

/// Remove syntect's own `<pre>` wrapper from inline-styled output so the
/// fragment can be re-wrapped in the contract wrapper.
fn unwrap_pre(html: &str) -> String {
  let trimmed = html.trim_end();
  let inner = trimmed.strip_suffix("</pre>").unwrap_or(trimmed);
  if inner.starts_with("<pre") {
    match inner.find('>') {
      Some(pos) => inner[pos + 1..].to_string(),
      None => inner.to_string(),
    }
  } else {
    inner.to_string()
  }
}
