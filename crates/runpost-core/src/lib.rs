//! Core engine: post records, classification, extraction, rendering, aggregation

pub mod activity;
pub mod analyzer;
pub mod authorship;
pub mod category;
pub mod distance;
pub mod error;
pub mod post;
pub mod render;
pub mod stats;
pub mod text;
pub mod tracing;

pub use activity::{find_activity, Activity, ACTIVITY_KEYWORDS};
pub use analyzer::{analyze, classify, Analysis, Analyzer, AnalyzerConfig, DEFAULT_BRAND};
pub use authorship::{Authorship, AuthorshipExtractor, BoilerplateTable, Stem};
pub use category::{Category, Classifier};
pub use distance::{find_distance_miles, find_measure, DistanceUnit, Measure, KM_TO_MI};
pub use error::{CoreError, CoreResult};
pub use post::{parse_posts, parse_timestamp, Post, RawPost};
pub use render::{html_escape, make_anchor, render_row, render_table, sanitize_with_links, TableRow};
pub use stats::{
    activity_counts, analyze_all, distance_points, mean_distance_by_weekday, percent, search,
    ActivityCount, AnalyzedPost, CategoryBreakdown, DateRange, DistancePoint, MeanDistance,
    Summary,
};
pub use self::tracing::{init_tracing, TracingConfig, TracingError, TracingOutputFormat};
