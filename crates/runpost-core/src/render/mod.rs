//! HTML rendering for post tables.
//!
//! A post renders as one `<tr>` with three cells: the 1-based row index, the
//! activity label, and the sanitized post text. Sanitization runs in two
//! passes so that generated anchors are never escaped and text is never
//! escaped twice:
//!
//! 1. split the raw text into literal text and URL segments;
//! 2. emit each URL as an anchor (its URL escaped for the attribute and the
//!    label) and HTML-escape every text segment.
//!
//! # Example
//!
//! ```
//! use runpost_core::{Analyzer, Post};
//! use runpost_core::render::render_row;
//!
//! let post = Post::new("Hills & wind https://t.co/x", None);
//! let row = render_row(&Analyzer::default(), 1, &post);
//! assert_eq!(
//!     row.html,
//!     "Hills &amp; wind <a href=\"https://t.co/x\" target=\"_blank\" \
//!      rel=\"noopener noreferrer\">https://t.co/x</a>"
//! );
//! ```

use serde::{Deserialize, Serialize};

use crate::activity::Activity;
use crate::analyzer::Analyzer;
use crate::post::Post;
use crate::text::URL_REGEX;


/// A rendered table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// 1-based row number.
    pub index: usize,
    /// Activity label of the post.
    pub activity: Activity,
    /// Sanitized post text, with live anchors for URLs.
    pub html: String,
}

impl TableRow {
    /// Emits the row as a `<tr>` element.
    pub fn to_html(&self) -> String {
        format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            self.index,
            html_escape(self.activity.as_str()),
            self.html
        )
    }
}

/// A piece of post text, as split by the first pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Link(&'a str),
}

/// Splits text into literal and URL segments, in order.
fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut last = 0;
    for m in URL_REGEX.find_iter(text) {
        if m.start() > last {
            out.push(Segment::Text(&text[last..m.start()]));
        }
        out.push(Segment::Link(m.as_str()));
        last = m.end();
    }
    if last < text.len() {
        out.push(Segment::Text(&text[last..]));
    }
    out
}

/// Creates an anchor that opens in a new browsing context without leaking
/// the referrer or the opener.
pub fn make_anchor(url: &str) -> String {
    let safe = html_escape(url);
    format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        safe, safe
    )
}

/// Escapes text for HTML display.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Escapes everything in the text except URLs, which become anchors.
pub fn sanitize_with_links(text: &str) -> String {
    segments(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(t) => html_escape(t),
            Segment::Link(url) => make_anchor(url),
        })
        .collect()
}

/// Renders one post as a table row.
pub fn render_row(analyzer: &Analyzer, index: usize, post: &Post) -> TableRow {
    TableRow {
        index,
        activity: analyzer.activity(post),
        html: sanitize_with_links(post.text()),
    }
}

/// Renders posts as consecutive rows numbered from 1.
pub fn render_table<'a, I>(analyzer: &Analyzer, posts: I) -> Vec<TableRow>
where
    I: IntoIterator<Item = &'a Post>,
{
    posts
        .into_iter()
        .enumerate()
        .map(|(i, post)| render_row(analyzer, i + 1, post))
        .collect()
}
