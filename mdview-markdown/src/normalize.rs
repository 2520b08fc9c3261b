//! Pre-pass over raw Markdown text that rewrites the `1)` numbered-list
//! notation into the `1.` style the Markdown engine recognizes.

/// Replace all list items in the text that use the `1)` notation with the
/// Markdown `1.` style, so they can be detected correctly.
///
/// Operates line by line: when a line contains a `)` and the text before
/// the first one is, after trimming, entirely numeric, the prefix up to and
/// including the parenthesis is replaced with the trimmed numeral followed
/// by a period. Everything after the parenthesis is preserved unchanged.
///
/// This is a pure, total function, and it is idempotent: normalizing twice
/// equals normalizing once. A numeral before a parenthesis in the middle of
/// prose is still rewritten; the heuristic has no way to tell list markers
/// from prose and the false positive is accepted.
#[must_use]
pub fn normalize_list_notation(text: &str) -> String {
  text
    .split('\n')
    .map(check_bullet)
    .collect::<Vec<_>>()
    .join("\n")
}

fn check_bullet(line: &str) -> String {
  let Some(pos) = line.find(')') else {
    return line.to_string();
  };

  let trimmed = line[..pos].trim();
  if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
    format!("{trimmed}.{}", &line[pos + 1..])
  } else {
    line.to_string()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_rewrites_paren_markers() {
    assert_eq!(normalize_list_notation("1) first"), "1. first");
    assert_eq!(
      normalize_list_notation("1) first\n2) second"),
      "1. first\n2. second"
    );
    assert_eq!(normalize_list_notation("12) twelfth"), "12. twelfth");
  }

  #[test]
  fn test_strips_leading_whitespace_before_marker() {
    // The prefix up to the parenthesis is replaced wholesale, indentation
    // included.
    assert_eq!(normalize_list_notation("  3) indented"), "3. indented");
  }

  #[test]
  fn test_leaves_non_list_lines_alone() {
    assert_eq!(normalize_list_notation("no parens here"), "no parens here");
    assert_eq!(normalize_list_notation("a) not numeric"), "a) not numeric");
    assert_eq!(normalize_list_notation("1.5) fraction"), "1.5) fraction");
    assert_eq!(normalize_list_notation(") empty prefix"), ") empty prefix");
    assert_eq!(normalize_list_notation(""), "");
  }

  #[test]
  fn test_prose_false_positive_is_preserved() {
    // A purely numeric prefix before a mid-line parenthesis still matches.
    // Accepted behavior, see the function docs.
    assert_eq!(normalize_list_notation("2010) was a year"), "2010. was a year");
  }

  #[test]
  fn test_idempotent() {
    let input = "# Title\n\n1) first\n2) second\n\nprose (with parens)\n";
    let once = normalize_list_notation(input);
    let twice = normalize_list_notation(&once);
    assert_eq!(once, twice);
  }

  #[test]
  fn test_preserves_line_structure() {
    let input = "a\n\nb\n";
    assert_eq!(normalize_list_notation(input), input);
  }
}
