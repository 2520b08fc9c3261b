#![allow(
  clippy::expect_used,
  clippy::unwrap_used,
  reason = "Fine in benchmarks"
)]
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mdview_markdown::{DocFile, extract_and_link, normalize_list_notation};

const HTML_SMALL: &str = r#"<h1>Welcome</h1>
<p>This is a test paragraph. You can read this. Yes.</p>
<h2>Details</h2>
<pre><code class="language-js">console.log(1)</code></pre>"#;

const HTML_LARGE: &str = r#"<h1>Getting Started</h1>
<p>If you can read this, chances are you can also use this tool properly</p>
<h2>Prerequisites</h2>
<ul>
  <li>Computer</li>
  <li>Basic knowledge of command line</li>
  <li>Text editor</li>
  <li>Internet connection</li>
</ul>
<h2>Installation</h2>
<pre><code class="language-sh">cargo install mdview</code></pre>
<h3>Verifying</h3>
<p>After installation, you can verify it works:</p>
<pre><code class="language-sh">mdview --version</code></pre>
<h2>Usage</h2>
<h3>Rendering a document</h3>
<pre><code class="language-sh">mdview README.md -o readme.html</code></pre>
<h3>Scripting</h3>
<pre><code class="language-js">const page = render(&quot;README.md&quot;);
console.log(page.title);</code></pre>
<h2>Troubleshooting</h2>
<p>Check the log output with <code>-v</code> first.</p>
<h3>Common issues</h3>
<p>Most problems are missing input files.</p>"#;

const MARKDOWN: &str = "# Title

1) first
2) second
3) third

Some prose in between the lists.

10) ten
11) eleven
";

fn bench_normalize(c: &mut Criterion) {
  let mut group = c.benchmark_group("normalize");

  group.bench_with_input(
    BenchmarkId::new("list_notation", "small"),
    &MARKDOWN,
    |b, markdown| {
      b.iter(|| normalize_list_notation(black_box(markdown)));
    },
  );

  group.finish();
}

fn bench_header_extraction(c: &mut Criterion) {
  let mut group = c.benchmark_group("header_extraction");
  let doc = DocFile::new("Bench", "bench.md");

  group.bench_with_input(
    BenchmarkId::new("extract_and_link", "small"),
    &HTML_SMALL,
    |b, html| {
      b.iter(|| extract_and_link(black_box(html), black_box(&doc)));
    },
  );

  group.bench_with_input(
    BenchmarkId::new("extract_and_link", "large"),
    &HTML_LARGE,
    |b, html| {
      b.iter(|| extract_and_link(black_box(html), black_box(&doc)));
    },
  );

  group.finish();
}

#[cfg(feature = "syntect")]
fn bench_fence_highlighting(c: &mut Criterion) {
  use mdview_markdown::{
    LanguageAliases,
    create_default_highlighter,
    highlight_fences,
  };

  let mut group = c.benchmark_group("fence_highlighting");
  let aliases = LanguageAliases::default();
  let highlighter =
    create_default_highlighter().expect("Failed to create highlighter");

  group.bench_with_input(
    BenchmarkId::new("highlight_fences", "small"),
    &HTML_SMALL,
    |b, html| {
      b.iter(|| {
        highlight_fences(
          black_box(html),
          black_box(&aliases),
          highlighter.as_ref(),
        )
        .unwrap()
      });
    },
  );

  group.bench_with_input(
    BenchmarkId::new("highlight_fences", "large"),
    &HTML_LARGE,
    |b, html| {
      b.iter(|| {
        highlight_fences(
          black_box(html),
          black_box(&aliases),
          highlighter.as_ref(),
        )
        .unwrap()
      });
    },
  );

  group.finish();
}

#[cfg(not(feature = "syntect"))]
fn bench_fence_highlighting(_c: &mut Criterion) {}

criterion_group!(
  benches,
  bench_normalize,
  bench_header_extraction,
  bench_fence_highlighting
);
criterion_main!(benches);
