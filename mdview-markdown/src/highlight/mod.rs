//! Post-pass over rendered HTML that finds fenced code blocks, resolves
//! language aliases, and delegates to a pluggable syntax highlighter.
//!
//! The highlighter itself sits behind the [`Highlighter`] trait; the
//! default backend is syntect (with two-face for extended syntax
//! definitions), behind the default-on `syntect` feature.

pub mod error;
pub mod types;

use std::sync::LazyLock;

use log::trace;
use regex::Regex;

pub use error::{HighlightError, HighlightResult};
pub use types::{HighlightOptions, Highlighter, LanguageAliases};

// Syntect backend implementation
#[cfg(feature = "syntect")] mod syntect;
#[cfg(feature = "syntect")] pub use syntect::SyntectHighlighter;

use crate::utils;

/// Marker class every highlighter backend puts on its block wrapper,
/// alongside the resolved language name. The fence-highlighting pass strips
/// wrappers keyed on this class.
pub const OVERALL_CLASS: &str = "highlight";

// Fenced code blocks render as a language-tagged <code> element wrapped in
// a <pre> block. Inline code spans carry no language class and never match.
static CODE_FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#"(?is)<code class="language-([a-z]+)">(.*?)</code>"#)
    .unwrap_or_else(|e| {
      log::error!("Failed to compile CODE_FENCE_RE regex: {e}");
      utils::never_matching_regex()
    })
});

/// Create the default syntax highlighter based on available features.
///
/// # Errors
///
/// Returns [`HighlightError::NoBackendAvailable`] if the crate was built
/// without a highlighting backend feature.
pub fn create_default_highlighter() -> HighlightResult<Box<dyn Highlighter>> {
  #[cfg(feature = "syntect")]
  {
    Ok(Box::new(SyntectHighlighter::new()))
  }

  #[cfg(not(feature = "syntect"))]
  {
    Err(HighlightError::NoBackendAvailable)
  }
}

/// Replace the contents of every language-tagged code fence in `html` with
/// syntax-highlighted markup.
///
/// For each fence, the authored tag is resolved through `aliases`
/// (pass-through when absent), the captured text is HTML-unescaped back to
/// literal source characters, and the highlighter is invoked with every
/// token family enabled and class-based styling on. The backend's own block
/// wrapper is stripped from the fragment before it replaces the fence's
/// raw text in the document.
///
/// Replacement is keyed on the raw inner text; as with heading rewrites,
/// byte-identical fence contents share the first match's replacement.
///
/// # Errors
///
/// Propagates any [`HighlightError`] from the backend; a failed fence
/// aborts the whole pass.
pub fn highlight_fences(
  html: &str,
  aliases: &LanguageAliases,
  highlighter: &dyn Highlighter,
) -> HighlightResult<String> {
  let fences: Vec<(String, String)> = CODE_FENCE_RE
    .captures_iter(html)
    .filter_map(|caps| {
      let tag = caps.get(1)?.as_str().to_string();
      let raw = caps.get(2)?.as_str().to_string();
      Some((tag, raw))
    })
    .collect();

  if fences.is_empty() {
    return Ok(html.to_string());
  }
  trace!("highlighting {} code fences", fences.len());

  let options = HighlightOptions::default();
  let mut out = html.to_string();

  for (tag, raw) in &fences {
    // An empty fence has nothing to replace; replacing an empty needle
    // would splice fragments between every character
    if raw.is_empty() {
      continue;
    }

    let language = aliases.resolve(tag);
    let code = html_escape::decode_html_entities(raw.as_str());
    let highlighted = highlighter.highlight(&code, &language, &options)?;
    let stripped = strip_wrapper(&highlighted, &language);
    out = out.replace(raw.as_str(), &stripped);
  }

  Ok(out)
}

/// Strip the backend's enclosing block wrapper from a highlighted fragment,
/// leaving only the inner highlighted content.
fn strip_wrapper(fragment: &str, language: &str) -> String {
  let open = format!("<pre class=\"{language} {OVERALL_CLASS}\">");
  fragment.replace(&open, "").replace("</pre>", "")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_aliases_default() {
    let aliases = LanguageAliases::default();
    assert_eq!(aliases.resolve("js"), "javascript");
    assert_eq!(aliases.resolve("json"), "javascript");
    assert_eq!(aliases.resolve("html"), "html5");
    // No entry: pass through unchanged
    assert_eq!(aliases.resolve("python"), "python");
    assert_eq!(aliases.resolve("rust"), "rust");
  }

  #[test]
  fn test_strip_wrapper() {
    let fragment = format!(
      "<pre class=\"javascript {OVERALL_CLASS}\"><span>x</span></pre>"
    );
    assert_eq!(strip_wrapper(&fragment, "javascript"), "<span>x</span>");
  }

  #[cfg(feature = "syntect")]
  #[test]
  fn test_syntect_highlighter_basic() {
    let highlighter = SyntectHighlighter::new();
    assert_eq!(highlighter.name(), "Syntect");
    assert!(highlighter.supports_language("javascript"));
    assert!(highlighter.supports_language("html5"));

    let html = highlighter
      .highlight("fn main() {}", "rust", &HighlightOptions::default())
      .expect("Failed to highlight code");
    assert!(html.starts_with(&format!("<pre class=\"rust {OVERALL_CLASS}\">")));
    assert!(html.ends_with("</pre>"));
    assert!(html.contains("main"));
  }

  #[cfg(feature = "syntect")]
  #[test]
  fn test_syntect_classed_output_has_no_inline_styles() {
    let highlighter = SyntectHighlighter::new();
    let html = highlighter
      .highlight("let x = 1;", "javascript", &HighlightOptions::default())
      .expect("Failed to highlight code");
    assert!(html.contains("class="));
    assert!(!html.contains("style="));
  }

  #[cfg(feature = "syntect")]
  #[test]
  fn test_create_default_highlighter() {
    let highlighter =
      create_default_highlighter().expect("Failed to create highlighter");
    assert_eq!(highlighter.name(), "Syntect");
  }
}
