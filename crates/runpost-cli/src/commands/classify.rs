//! Per-post derived fields.

use std::fmt::Write;

use runpost_core::AnalyzedPost;

use super::{Dataset, print_json, truncate};
use crate::error::ClientResult;

/// Prints the derived fields of the first `limit` posts.
pub fn run(dataset: &Dataset, limit: Option<usize>, json: bool) -> ClientResult<()> {
    let shown = &dataset.posts[..limit.unwrap_or(usize::MAX).min(dataset.posts.len())];
    if json {
        return print_json(shown);
    }
    print!("{}", format_text(shown));
    Ok(())
}

/// One line per post: category, activity, distance, written flag and text.
pub fn format_text(posts: &[AnalyzedPost]) -> String {
    let mut out = String::new();
    for (i, p) in posts.iter().enumerate() {
        let a = &p.analysis;
        let _ = writeln!(
            out,
            "{:>4}  {:<15} {:<9} {:>7.2}  {}  {}",
            i + 1,
            a.category.as_str(),
            a.activity.as_str(),
            a.distance_miles,
            if a.authorship.has_written_content { "✎" } else { "-" },
            truncate(p.post.text(), 60)
        );
    }
    out
}
