//! Dataset-level aggregation.
//!
//! Everything here works on an explicit slice of [`AnalyzedPost`] values built
//! by the caller; the engine keeps no global post list. Outputs are plain data
//! ready for tables or chart specifications.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::activity::Activity;
use crate::analyzer::{Analysis, Analyzer};
use crate::category::Category;
use crate::post::Post;

/// Number of activities shown in distance series by default.
pub const DEFAULT_TOP_ACTIVITIES: usize = 3;

/// A post together with its derived fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedPost {
    pub post: Post,
    pub analysis: Analysis,
}

impl AnalyzedPost {
    /// Analyzes a post.
    pub fn new(analyzer: &Analyzer, post: Post) -> Self {
        let analysis = analyzer.analyze(&post);
        Self { post, analysis }
    }
}

/// Analyzes every post of a sequence.
pub fn analyze_all(analyzer: &Analyzer, posts: impl IntoIterator<Item = Post>) -> Vec<AnalyzedPost> {
    posts
        .into_iter()
        .map(|post| AnalyzedPost::new(analyzer, post))
        .collect()
}

/// Formats `count / of` as a percentage with two decimals.
///
/// A zero denominator yields `"0.00%"`.
pub fn percent(count: usize, of: usize) -> String {
    if of == 0 {
        return "0.00%".to_string();
    }
    format!("{:.2}%", count as f64 / of as f64 * 100.0)
}

/// Post counts per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub total: usize,
    pub completed_event: usize,
    pub live_event: usize,
    pub achievement: usize,
    pub miscellaneous: usize,
    /// Completed events that carry written commentary.
    pub completed_with_text: usize,
}

impl CategoryBreakdown {
    /// Counts the posts.
    pub fn from_posts(posts: &[AnalyzedPost]) -> Self {
        let mut breakdown = Self {
            total: posts.len(),
            ..Self::default()
        };
        for p in posts {
            match p.analysis.category {
                Category::CompletedEvent => {
                    breakdown.completed_event += 1;
                    if p.analysis.authorship.has_written_content {
                        breakdown.completed_with_text += 1;
                    }
                }
                Category::LiveEvent => breakdown.live_event += 1,
                Category::Achievement => breakdown.achievement += 1,
                Category::Miscellaneous => breakdown.miscellaneous += 1,
            }
        }
        breakdown
    }

    /// Count for one category.
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::CompletedEvent => self.completed_event,
            Category::LiveEvent => self.live_event,
            Category::Achievement => self.achievement,
            Category::Miscellaneous => self.miscellaneous,
        }
    }

    /// Share of all posts in one category.
    pub fn percent_of_total(&self, category: Category) -> String {
        percent(self.count(category), self.total)
    }

    /// Share of completed events that carry written commentary.
    pub fn written_percent(&self) -> String {
        percent(self.completed_with_text, self.completed_event)
    }
}

/// Earliest and latest valid post timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub first: DateTime<Utc>,
    pub last: DateTime<Utc>,
}

impl DateRange {
    /// Computes the range, skipping posts with an invalid instant.
    ///
    /// Returns `None` when no post has a valid timestamp.
    pub fn from_posts(posts: &[AnalyzedPost]) -> Option<Self> {
        let mut stamps = posts.iter().filter_map(|p| p.post.timestamp());
        let start = stamps.next()?;
        let (first, last) = stamps.fold((start, start), |(lo, hi), t| (lo.min(t), hi.max(t)));
        Some(Self { first, last })
    }
}

/// Number of completed events for one activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCount {
    pub activity: Activity,
    pub count: usize,
}

/// Counts completed events per known activity, most frequent first.
///
/// Ties keep the order in which activities first appear.
pub fn activity_counts(posts: &[AnalyzedPost]) -> Vec<ActivityCount> {
    let mut counts: Vec<ActivityCount> = Vec::new();
    for p in posts {
        let a = &p.analysis;
        if !a.category.is_completed() || !a.activity.is_known() {
            continue;
        }
        match counts.iter_mut().find(|c| c.activity == a.activity) {
            Some(c) => c.count += 1,
            None => counts.push(ActivityCount {
                activity: a.activity,
                count: 1,
            }),
        }
    }
    // Stable sort keeps first-appearance order among equal counts.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// One completed event's distance, placed on its weekday.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistancePoint {
    pub activity: Activity,
    pub distance: f64,
    pub weekday: Weekday,
}

/// Distances of the `top` most frequent activities.
///
/// Only completed events with a positive distance and a valid timestamp are
/// included. Points are ordered by activity rank, then by post order.
/// Weekdays are taken in UTC.
pub fn distance_points(posts: &[AnalyzedPost], top: usize) -> Vec<DistancePoint> {
    let leaders: Vec<Activity> = activity_counts(posts)
        .into_iter()
        .take(top)
        .map(|c| c.activity)
        .collect();

    let mut points: Vec<DistancePoint> = posts
        .iter()
        .filter(|p| p.analysis.category.is_completed())
        .filter(|p| leaders.contains(&p.analysis.activity))
        .filter(|p| p.analysis.distance_miles > 0.0)
        .filter_map(|p| {
            p.post.timestamp().map(|t| DistancePoint {
                activity: p.analysis.activity,
                distance: p.analysis.distance_miles,
                weekday: t.weekday(),
            })
        })
        .collect();
    points.sort_by_key(|p| leaders.iter().position(|a| *a == p.activity));
    points
}

/// Mean distance of one activity on one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanDistance {
    pub activity: Activity,
    pub weekday: Weekday,
    pub mean_distance: f64,
    pub samples: usize,
}

/// Averages distance points per (activity, weekday).
///
/// Groups are ordered by the activity's first appearance in `points`, then by
/// weekday from Sunday. For points from [`distance_points`] this is activity
/// rank.
pub fn mean_distance_by_weekday(points: &[DistancePoint]) -> Vec<MeanDistance> {
    let mut activities: Vec<Activity> = Vec::new();
    let mut sums: HashMap<(Activity, u32), (f64, usize)> = HashMap::new();

    for point in points {
        if !activities.contains(&point.activity) {
            activities.push(point.activity);
        }
        let key = (point.activity, point.weekday.num_days_from_sunday());
        let entry = sums.entry(key).or_insert((0.0, 0));
        entry.0 += point.distance;
        entry.1 += 1;
    }

    let mut means = Vec::new();
    for activity in activities {
        for day in 0..7u32 {
            if let Some(&(sum, n)) = sums.get(&(activity, day)) {
                means.push(MeanDistance {
                    activity,
                    weekday: weekday_from_sunday(day),
                    mean_distance: sum / n as f64,
                    samples: n,
                });
            }
        }
    }
    means
}

fn weekday_from_sunday(day: u32) -> Weekday {
    match day {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

/// Posts with written commentary matching a free-text query.
///
/// The query is trimmed and lowercased, then looked up in the written text
/// and the raw text. An empty query matches nothing.
pub fn search<'a>(posts: &'a [AnalyzedPost], query: &str) -> Vec<&'a AnalyzedPost> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return Vec::new();
    }
    posts
        .iter()
        .filter(|p| p.analysis.authorship.has_written_content)
        .filter(|p| {
            p.analysis.authorship.written_text.to_lowercase().contains(&q)
                || p.post.text().to_lowercase().contains(&q)
        })
        .collect()
}

/// Summary of a dataset, for reports and JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub categories: CategoryBreakdown,
    pub date_range: Option<DateRange>,
    pub activities: Vec<ActivityCount>,
}

impl Summary {
    /// Builds the summary.
    pub fn from_posts(posts: &[AnalyzedPost]) -> Self {
        Self {
            categories: CategoryBreakdown::from_posts(posts),
            date_range: DateRange::from_posts(posts),
            activities: activity_counts(posts),
        }
    }
}
