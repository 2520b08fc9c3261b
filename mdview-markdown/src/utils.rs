use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"<[^>]*>").unwrap_or_else(|e| {
    log::error!("Failed to compile TAG_RE regex: {e}");
    never_matching_regex()
  })
});

/// Slugify a string for use as an anchor ID.
/// Converts to lowercase, replaces non-alphanumeric characters with dashes,
/// and trims leading/trailing dashes.
#[must_use]
pub fn slugify(text: &str) -> String {
  text
    .to_lowercase()
    .replace(|c: char| !c.is_alphanumeric() && c != '-' && c != '_', "-")
    .trim_matches('-')
    .to_string()
}

/// Remove HTML tags from a fragment, leaving only its text content.
#[must_use]
pub fn strip_tags(html: &str) -> String {
  if html.contains('<') {
    TAG_RE.replace_all(html, "").to_string()
  } else {
    html.to_string()
  }
}

/// Create a regex that never matches anything.
///
/// This is used as a fallback pattern when a regex fails to compile. It
/// will never match any input, which is safer than using a trivial regex
/// like `^$` which would match empty strings.
///
/// # Panics
///
/// Panics if the fallback regex pattern `r"^\b$"` fails to compile, which
/// should never happen.
#[must_use]
pub fn never_matching_regex() -> Regex {
  // This pattern asserts something impossible and is guaranteed to be valid
  Regex::new(r"[^\s\S]").unwrap_or_else(|_| {
    #[allow(
      clippy::unwrap_used,
      reason = "Both fallback patterns are guaranteed to compile"
    )]
    Regex::new(r"^\b$").unwrap()
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_slugify() {
    assert_eq!(slugify("Hello World"), "hello-world");
    assert_eq!(slugify("  Usage & Examples  "), "usage-examples");
    assert_eq!(slugify("already-slugged_ok"), "already-slugged_ok");
    assert_eq!(slugify("!!!"), "");
  }

  #[test]
  fn test_strip_tags() {
    assert_eq!(strip_tags("plain"), "plain");
    assert_eq!(strip_tags("<em>Hi</em> there"), "Hi there");
    assert_eq!(strip_tags("a <code>b</code> c"), "a b c");
  }

  #[test]
  fn test_never_matching_regex() {
    let re = never_matching_regex();
    assert!(!re.is_match(""));
    assert!(!re.is_match("anything"));
  }
}
