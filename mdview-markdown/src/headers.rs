//! Post-pass over rendered HTML that extracts headings, builds the nested
//! header forest, and rewrites each heading into a self-linking anchor.

use std::{collections::HashMap, sync::LazyLock};

use log::trace;
use regex::Regex;

use crate::{
  types::{DocFile, Header},
  utils,
};

/// Deepest heading level the scanner recognizes.
const MAX_HEADING_LEVEL: usize = 9;

// One anchored pattern per heading level. Matching is case-insensitive and
// the inner content is matched non-greedily up to the first closing tag of
// the same level, so nested inline HTML inside a heading is captured intact.
static HEADING_PATTERNS: LazyLock<Vec<(u8, Regex)>> = LazyLock::new(|| {
  (1..=MAX_HEADING_LEVEL as u8)
    .map(|level| {
      let pattern = format!(r"(?is)<h{level}\b[^>]*>(.*?)</h{level}>");
      let regex = Regex::new(&pattern).unwrap_or_else(|e| {
        log::error!("Failed to compile heading pattern for level {level}: {e}");
        utils::never_matching_regex()
      });
      (level, regex)
    })
    .collect()
});

/// One heading as matched in the document, before the forest is built.
struct ScannedHeading {
  level:  u8,
  title:  String,
  markup: String,
  anchor: String,
}

/// Extract all headings from `html`, build the header forest, and rewrite
/// every heading into an anchored, self-linking form.
///
/// Returns the rewritten HTML together with the root (level-1) headers in
/// document order, each owning its order-preserving subheader tree. A
/// heading whose level has no seen ancestor at the level directly above is
/// excluded from the forest but still anchored in the document. Input with
/// no heading tags is returned unchanged with an empty forest; malformed or
/// unterminated heading tags simply fail to match and are skipped.
#[must_use]
pub fn extract_and_link(html: &str, doc: &DocFile) -> (String, Vec<Header>) {
  let scanned = scan_headings(html);
  if scanned.is_empty() {
    return (html.to_string(), Vec::new());
  }
  trace!("found {} headings in {}", scanned.len(), doc.id);

  let forest = build_forest(&scanned);
  let rewritten = rewrite_headings(html, &scanned, doc);
  (rewritten, forest)
}

/// Scan for headings of every level and return them in document order with
/// unique anchors assigned.
fn scan_headings(html: &str) -> Vec<ScannedHeading> {
  let mut found: Vec<(usize, ScannedHeading)> = Vec::new();

  for (level, pattern) in HEADING_PATTERNS.iter() {
    for caps in pattern.captures_iter(html) {
      let (Some(whole), Some(title)) = (caps.get(0), caps.get(1)) else {
        continue;
      };
      found.push((whole.start(), ScannedHeading {
        level:  *level,
        title:  title.as_str().to_string(),
        markup: whole.as_str().to_string(),
        anchor: String::new(),
      }));
    }
  }

  found.sort_by_key(|(start, _)| *start);

  let mut seen: HashMap<String, usize> = HashMap::new();
  let mut scanned: Vec<ScannedHeading> =
    found.into_iter().map(|(_, heading)| heading).collect();

  for heading in &mut scanned {
    let slug = utils::slugify(&utils::strip_tags(&heading.title));
    let base = if slug.is_empty() {
      "section".to_string()
    } else {
      slug
    };

    let count = seen.entry(base.clone()).or_insert(0);
    *count += 1;
    heading.anchor = if *count == 1 {
      base
    } else {
      format!("{base}-{count}")
    };
  }

  scanned
}

/// Attach each heading to the most recently seen heading one level above
/// it, and return the resulting forest of level-1 roots.
fn build_forest(scanned: &[ScannedHeading]) -> Vec<Header> {
  let mut children: Vec<Vec<usize>> = vec![Vec::new(); scanned.len()];
  let mut roots: Vec<usize> = Vec::new();

  // Active ancestor per level. Slots deeper than the current heading are
  // deliberately never cleared: attachment only ever consults level - 1,
  // so a stale deep slot is never read again unless a heading at that
  // depth reappears and overwrites it first.
  let mut active: [Option<usize>; MAX_HEADING_LEVEL + 1] =
    [None; MAX_HEADING_LEVEL + 1];

  for (idx, heading) in scanned.iter().enumerate() {
    let level = heading.level as usize;
    active[level] = Some(idx);

    if heading.level == 1 {
      roots.push(idx);
      continue;
    }

    match active[level - 1] {
      Some(parent) => children[parent].push(idx),
      None => {
        // Orphaned: no ancestor at the level above has been seen yet. The
        // heading stays out of the forest but is still rewritten.
        trace!(
          "heading '{}' (h{level}) has no h{} ancestor",
          heading.anchor,
          level - 1
        );
      },
    }
  }

  roots
    .iter()
    .map(|&idx| materialize(idx, scanned, &children))
    .collect()
}

/// Build an owned [`Header`] subtree rooted at `idx`.
fn materialize(
  idx: usize,
  scanned: &[ScannedHeading],
  children: &[Vec<usize>],
) -> Header {
  let heading = &scanned[idx];
  Header {
    title:      heading.title.clone(),
    level:      heading.level,
    markup:     heading.markup.clone(),
    anchor:     heading.anchor.clone(),
    subheaders: children[idx]
      .iter()
      .map(|&child| materialize(child, scanned, children))
      .collect(),
  }
}

/// Replace every heading with its anchored form, one heading at a time in
/// document order.
///
/// Replacement is keyed on the exact captured markup. When two headings
/// have byte-identical markup only the first occurrence is guaranteed to be
/// targeted correctly; this is a known limitation of substring rewriting.
fn rewrite_headings(
  html: &str,
  scanned: &[ScannedHeading],
  doc: &DocFile,
) -> String {
  let href = doc.href();
  let mut out = html.to_string();

  for heading in scanned {
    let anchored = format!(
      "<h{level} id=\"{anchor}\"><a class=\"heading-anchor\" \
       href=\"{href}#{anchor}\">{title}</a></h{level}>",
      level = heading.level,
      anchor = heading.anchor,
      title = heading.title,
    );
    out = out.replace(&heading.markup, &anchored);
  }

  out
}
