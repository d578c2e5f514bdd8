//! Dataset summary: category shares and date range.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use runpost_core::{Category, Summary};

use super::{Dataset, print_json};
use crate::error::ClientResult;

const DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// Prints the summary.
pub fn run(dataset: &Dataset, json: bool) -> ClientResult<()> {
    let summary = Summary::from_posts(&dataset.posts);
    if json {
        return print_json(&summary);
    }
    print!("{}", format_text(&summary));
    Ok(())
}

fn long_date(t: DateTime<Utc>) -> String {
    t.format(DATE_FORMAT).to_string()
}

/// Formats the summary as a human-readable report.
pub fn format_text(summary: &Summary) -> String {
    let c = &summary.categories;
    let mut out = String::new();

    match summary.date_range {
        Some(range) => {
            let _ = writeln!(
                out,
                "{} posts, from {} to {}.",
                c.total,
                long_date(range.first),
                long_date(range.last)
            );
        }
        None => {
            let _ = writeln!(out, "{} posts, no valid dates.", c.total);
        }
    }
    out.push('\n');

    for category in Category::ALL {
        let _ = writeln!(
            out,
            "  {:<16} {:>6}  {:>7}",
            category.as_str(),
            c.count(category),
            c.percent_of_total(category)
        );
    }
    out.push('\n');

    let _ = writeln!(
        out,
        "{} of {} completed events carry written text ({}).",
        c.completed_with_text,
        c.completed_event,
        c.written_percent()
    );
    out
}
