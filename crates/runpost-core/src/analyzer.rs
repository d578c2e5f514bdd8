//! Per-post analysis.
//!
//! The [`Analyzer`] owns the compiled rule tables for one app brand and
//! derives every field of a post from its text. It holds no per-post state:
//! the same text always yields the same [`Analysis`], and one analyzer can be
//! shared freely across threads.
//!
//! # Example
//!
//! ```
//! use runpost_core::{Activity, Analyzer, Category, Post};
//!
//! let analyzer = Analyzer::default();
//! let post = Post::from_source(
//!     "Just completed a 5.00 mi run! #RunKeeper",
//!     "Sun Sep 30 06:58:57 +0000 2018",
//! );
//! let analysis = analyzer.analyze(&post);
//! assert_eq!(analysis.category, Category::CompletedEvent);
//! assert_eq!(analysis.activity, Activity::Running);
//! assert_eq!(analysis.distance_miles, 5.0);
//! assert!(!analysis.authorship.has_written_content);
//! ```

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::activity::{self, Activity};
use crate::authorship::{Authorship, AuthorshipExtractor, BoilerplateTable, Stem};
use crate::category::{Category, Classifier};
use crate::distance;
use crate::error::{CoreError, CoreResult};
use crate::post::Post;
use crate::text;

/// Brand name of the app the posts come from.
pub const DEFAULT_BRAND: &str = "runkeeper";

static DEFAULT_ANALYZER: LazyLock<Analyzer> = LazyLock::new(Analyzer::default);

/// Analyzer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// App brand name, used for the hashtag strip, the `with/via/on` stems
    /// and the achievement goal rule.
    pub brand: String,
    /// Additional boilerplate phrases, removed after the default table.
    pub extra_phrases: Vec<String>,
    /// Additional boilerplate regex patterns, removed after the phrases.
    pub extra_patterns: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_string(),
            extra_phrases: Vec::new(),
            extra_patterns: Vec::new(),
        }
    }
}

impl AnalyzerConfig {
    /// Sets the brand name.
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Adds a boilerplate phrase.
    #[must_use]
    pub fn with_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.extra_phrases.push(phrase.into());
        self
    }

    /// Adds a boilerplate regex pattern.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.extra_patterns.push(pattern.into());
        self
    }

    /// Builds the full boilerplate table: defaults for the brand, then extras.
    pub fn boilerplate_table(&self) -> BoilerplateTable {
        let mut table = BoilerplateTable::for_brand(&self.brand);
        table.extend(self.extra_phrases.iter().cloned().map(Stem::Phrase));
        table.extend(self.extra_patterns.iter().cloned().map(Stem::Pattern));
        table
    }
}

/// Every derived field of one post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub category: Category,
    pub activity: Activity,
    pub distance_miles: f64,
    pub authorship: Authorship,
}

/// Compiled, immutable analyzer.
#[derive(Debug, Clone)]
pub struct Analyzer {
    brand: String,
    classifier: Classifier,
    authorship: AuthorshipExtractor,
}

impl Default for Analyzer {
    fn default() -> Self {
        // The built-in tables are constants; failing to compile them is a bug.
        Self::new(&AnalyzerConfig::default()).expect("default analyzer tables compile")
    }
}

impl Analyzer {
    /// Compiles an analyzer from settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the brand is empty or an extra pattern is not a
    /// valid regular expression.
    pub fn new(config: &AnalyzerConfig) -> CoreResult<Self> {
        let brand = config.brand.trim();
        if brand.is_empty() {
            return Err(CoreError::EmptyBrand);
        }

        let table = config.boilerplate_table();
        let analyzer = Self {
            brand: brand.to_string(),
            classifier: Classifier::new(brand)?,
            authorship: AuthorshipExtractor::new(brand, &table)?,
        };

        tracing::debug!(
            brand = %analyzer.brand,
            boilerplate_stems = table.len(),
            "Analyzer built"
        );
        Ok(analyzer)
    }

    /// Shared analyzer with default settings.
    pub fn shared() -> &'static Analyzer {
        &DEFAULT_ANALYZER
    }

    /// Brand name this analyzer was built for.
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Event category of the post.
    pub fn category(&self, post: &Post) -> Category {
        self.classifier.classify(post.text())
    }

    /// Activity kind of the post; [`Activity::Unknown`] unless it is a
    /// completed event.
    pub fn activity(&self, post: &Post) -> Activity {
        let normalized = text::normalize(post.text());
        if !self.classifier.classify_normalized(&normalized).is_completed() {
            return Activity::Unknown;
        }
        activity::find_activity(&normalized)
    }

    /// Distance in miles; 0 unless the post is a completed event with a
    /// recognizable distance.
    pub fn distance_miles(&self, post: &Post) -> f64 {
        if !self.category(post).is_completed() {
            return 0.0;
        }
        distance::find_distance_miles(post.text())
    }

    /// User commentary, independent of category.
    pub fn authorship(&self, post: &Post) -> Authorship {
        self.authorship.extract(post.text())
    }

    /// Derives every field at once, classifying only once.
    pub fn analyze(&self, post: &Post) -> Analysis {
        let normalized = text::normalize(post.text());
        let category = self.classifier.classify_normalized(&normalized);

        let (activity, distance_miles) = if category.is_completed() {
            (
                activity::find_activity(&normalized),
                distance::find_distance_miles(post.text()),
            )
        } else {
            (Activity::Unknown, 0.0)
        };

        Analysis {
            category,
            activity,
            distance_miles,
            authorship: self.authorship(post),
        }
    }
}

/// Classifies a post with the shared default analyzer.
///
/// See [`Analyzer::category`] for details.
pub fn classify(post: &Post) -> Category {
    Analyzer::shared().category(post)
}

/// Analyzes a post with the shared default analyzer.
///
/// See [`Analyzer::analyze`] for details.
pub fn analyze(post: &Post) -> Analysis {
    Analyzer::shared().analyze(post)
}
