//! Free-text search over written commentary.

use serde::Serialize;

use runpost_core::{AnalyzedPost, render_row, search};

use super::{Dataset, print_json, truncate};
use crate::error::ClientResult;

/// One search hit.
#[derive(Debug, Serialize)]
pub struct Hit<'a> {
    pub activity: runpost_core::Activity,
    pub written_text: &'a str,
    pub text: &'a str,
}

impl<'a> From<&'a AnalyzedPost> for Hit<'a> {
    fn from(p: &'a AnalyzedPost) -> Self {
        Self {
            activity: p.analysis.activity,
            written_text: &p.analysis.authorship.written_text,
            text: p.post.text(),
        }
    }
}

/// Prints posts matching `query`, as text, JSON or HTML rows.
pub fn run(dataset: &Dataset, query: &str, html: bool, json: bool) -> ClientResult<()> {
    let hits = search(&dataset.posts, query);
    tracing::debug!(query, hits = hits.len(), "Searched posts");

    if html {
        for line in format_html(dataset, &hits) {
            println!("{}", line);
        }
        return Ok(());
    }
    if json {
        let hits: Vec<Hit<'_>> = hits.into_iter().map(Hit::from).collect();
        return print_json(&hits);
    }
    if hits.is_empty() {
        println!("No matching posts.");
        return Ok(());
    }
    for hit in hits {
        println!("{}", format_hit(hit));
    }
    Ok(())
}

/// Matches as HTML table rows, numbered from 1.
pub fn format_html(dataset: &Dataset, hits: &[&AnalyzedPost]) -> Vec<String> {
    hits.iter()
        .enumerate()
        .map(|(i, p)| render_row(&dataset.analyzer, i + 1, &p.post).to_html())
        .collect()
}

fn format_hit(p: &AnalyzedPost) -> String {
    format!(
        "[{}] {}",
        p.analysis.activity,
        truncate(&p.analysis.authorship.written_text, 72)
    )
}
