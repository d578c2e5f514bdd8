//! HTML table rows.

use runpost_core::{TableRow, render_table};

use super::Dataset;
use crate::error::ClientResult;

/// Prints one `<tr>` per post with written content, or per post with `all`.
pub fn run(dataset: &Dataset, all: bool) -> ClientResult<()> {
    for row in rows(dataset, all) {
        println!("{}", row.to_html());
    }
    Ok(())
}

/// Builds the rows, numbered from 1 among the selected posts.
pub fn rows(dataset: &Dataset, all: bool) -> Vec<TableRow> {
    let selected = dataset
        .posts
        .iter()
        .filter(|p| all || p.analysis.authorship.has_written_content)
        .map(|p| &p.post);
    render_table(&dataset.analyzer, selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support;
    use runpost_core::{Activity, Analyzer};

    fn dataset() -> Dataset {
        Dataset {
            analyzer: Analyzer::default(),
            posts: test_support::posts(),
        }
    }

    #[test]
    fn written_only_by_default() {
        let rows = rows(&dataset(), false);
        let summary: Vec<(usize, Activity)> = rows.iter().map(|r| (r.index, r.activity)).collect();
        assert_eq!(
            summary,
            vec![
                (1, Activity::Running),
                (2, Activity::Walking),
                (3, Activity::Unknown),
                (4, Activity::Unknown),
            ]
        );
    }

    #[test]
    fn all_rows() {
        let rows = rows(&dataset(), true);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[4].index, 5);
        assert_eq!(
            rows[0].to_html(),
            "<tr><td>1</td><td>running</td><td>Just completed a 5.00 mi run! #RunKeeper</td></tr>"
        );
    }
}
