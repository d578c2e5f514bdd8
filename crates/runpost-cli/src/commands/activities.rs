//! Activity ranking and distance series.

use std::fmt::Write;

use serde::Serialize;

use runpost_core::{
    ActivityCount, DistancePoint, MeanDistance, activity_counts, distance_points,
    mean_distance_by_weekday,
};

use super::{Dataset, print_json};
use crate::error::ClientResult;

/// Distance series, either every point or per-weekday means.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Series {
    Points(Vec<DistancePoint>),
    Means(Vec<MeanDistance>),
}

/// Ranking plus the distance series of the leading activities.
#[derive(Debug, Serialize)]
pub struct ActivityReport {
    pub ranking: Vec<ActivityCount>,
    pub distances: Series,
}

impl ActivityReport {
    pub fn build(dataset: &Dataset, top: usize, mean: bool) -> Self {
        let points = distance_points(&dataset.posts, top);
        let distances = if mean {
            Series::Means(mean_distance_by_weekday(&points))
        } else {
            Series::Points(points)
        };
        Self {
            ranking: activity_counts(&dataset.posts),
            distances,
        }
    }
}

/// Prints the activity report.
pub fn run(dataset: &Dataset, top: usize, mean: bool, json: bool) -> ClientResult<()> {
    let report = ActivityReport::build(dataset, top, mean);
    tracing::debug!(
        top,
        mean,
        activities = report.ranking.len(),
        "Built activity report"
    );
    if json {
        return print_json(&report);
    }
    print!("{}", format_text(&report));
    Ok(())
}

/// Formats the report as text tables.
pub fn format_text(report: &ActivityReport) -> String {
    let mut out = String::new();

    if report.ranking.is_empty() {
        out.push_str("No completed activities.\n");
        return out;
    }

    out.push_str("Completed activities:\n");
    for (rank, c) in report.ranking.iter().enumerate() {
        let _ = writeln!(out, "  {:>2}. {:<12} {:>5}", rank + 1, c.activity.as_str(), c.count);
    }
    out.push('\n');

    match &report.distances {
        Series::Points(points) => {
            out.push_str("Distances (mi):\n");
            for p in points {
                let _ = writeln!(
                    out,
                    "  {:<12} {:<4} {:>8.2}",
                    p.activity.as_str(),
                    p.weekday.to_string(),
                    p.distance
                );
            }
        }
        Series::Means(means) => {
            out.push_str("Mean distance by weekday (mi):\n");
            for m in means {
                let _ = writeln!(
                    out,
                    "  {:<12} {:<4} {:>8.2}  (n={})",
                    m.activity.as_str(),
                    m.weekday.to_string(),
                    m.mean_distance,
                    m.samples
                );
            }
        }
    }
    out
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
    fn ranking_and_points() {
        let report = ActivityReport::build(&dataset(), 3, false);
        assert_eq!(report.ranking[0].activity, Activity::Running);
        assert_eq!(report.ranking[0].count, 2);
        assert_eq!(report.ranking[1].activity, Activity::Walking);

        assert_eq!(
            format_text(&report),
            "Completed activities:\n\
             \x20  1. running          2\n\
             \x20  2. walking          1\n\
             \n\
             Distances (mi):\n\
             \x20 running      Sun      5.00\n\
             \x20 running      Mon      6.21\n\
             \x20 walking      Sun      1.86\n"
        );
    }

    #[test]
    fn top_limits_series() {
        let report = ActivityReport::build(&dataset(), 1, true);
        match report.distances {
            Series::Means(ref means) => {
                assert_eq!(means.len(), 2);
                assert!(means.iter().all(|m| m.activity == Activity::Running));
                assert_eq!(means[0].weekday, chrono::Weekday::Sun);
            }
            Series::Points(_) => panic!("expected means"),
        }
    }

    #[test]
    fn json_shape() {
        let report = ActivityReport::build(&dataset(), 3, false);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["ranking"][0]["activity"], "running");
        assert_eq!(json["distances"][1]["distance"], 6.21);
        assert_eq!(json["distances"][1]["weekday"], "Mon");
    }

    #[test]
    fn empty_ranking() {
        let empty = Dataset {
            analyzer: Analyzer::default(),
            posts: Vec::new(),
        };
        let report = ActivityReport::build(&empty, 3, false);
        assert_eq!(format_text(&report), "No completed activities.\n");
    }
}
