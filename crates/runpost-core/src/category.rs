//! Event category classification.
//!
//! Every post falls into exactly one [`Category`]. Classification walks an
//! ordered rule list and returns the category of the first rule that matches;
//! a post can textually satisfy several rules, so the list order is the
//! precedence: completed > achievement > live > miscellaneous.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::text;

/// Event category of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// A finished activity session.
    CompletedEvent,
    /// An activity in progress.
    LiveEvent,
    /// A milestone or record.
    Achievement,
    /// Anything else.
    Miscellaneous,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 4] = [
        Category::CompletedEvent,
        Category::LiveEvent,
        Category::Achievement,
        Category::Miscellaneous,
    ];

    /// Returns the wire name for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CompletedEvent => "completed_event",
            Self::LiveEvent => "live_event",
            Self::Achievement => "achievement",
            Self::Miscellaneous => "miscellaneous",
        }
    }

    /// Returns `true` for completed events, the only category carrying
    /// activity and distance.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::CompletedEvent)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A conjunction of patterns: matches when every pattern matches.
#[derive(Debug, Clone)]
struct Clause(Vec<Regex>);

impl Clause {
    fn any(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self(vec![Regex::new(pattern)?]))
    }

    fn all(patterns: &[&str]) -> Result<Self, regex::Error> {
        patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    fn is_match(&self, text: &str) -> bool {
        self.0.iter().all(|re| re.is_match(text))
    }
}

/// A category rule: matches when any of its clauses matches.
#[derive(Debug, Clone)]
struct Rule {
    category: Category,
    clauses: Vec<Clause>,
}

impl Rule {
    fn is_match(&self, text: &str) -> bool {
        self.clauses.iter().any(|c| c.is_match(text))
    }
}

/// Ordered first-match classifier.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<Rule>,
}

impl Classifier {
    /// Builds the classifier for the given app brand name.
    ///
    /// The brand takes part in the achievement rule ("goal" together with the
    /// brand name).
    pub fn new(brand: &str) -> Result<Self, regex::Error> {
        let brand_word = format!(r"(?i)\b{}\b", regex::escape(&brand.to_lowercase()));

        let rules = vec![
            Rule {
                category: Category::CompletedEvent,
                clauses: vec![
                    Clause::any(r"(?i)\bjust completed (a|an)\b")?,
                    Clause::any(r"(?i)\bcompleted (a|an)\b")?,
                    Clause::any(r"(?i)\bjust posted (a|an)\b")?,
                    Clause::any(r"(?i)\bjust did (a|an)\b")?,
                ],
            },
            Rule {
                category: Category::Achievement,
                clauses: vec![
                    Clause::any(r"(?i)\bachieved\b")?,
                    Clause::any(r"(?i)\bnew personal record\b")?,
                    Clause::any(r"(?i)\bprs?\b")?,
                    Clause::any(r"(?i)\bset (a|an) goal\b")?,
                    Clause::all(&[r"(?i)\bgoal\b", brand_word.as_str()])?,
                ],
            },
            Rule {
                category: Category::LiveEvent,
                clauses: vec![
                    Clause::any(r"(?i)\bjust started\b")?,
                    Clause::any(r"(?i)\bi'm (?:running|walking|cycling|doing)\b")?,
                ],
            },
        ];

        Ok(Self { rules })
    }

    /// Classifies raw post text.
    pub fn classify(&self, raw_text: &str) -> Category {
        self.classify_normalized(&text::normalize(raw_text))
    }

    /// Classifies text that has already been normalized.
    pub fn classify_normalized(&self, normalized: &str) -> Category {
        self.rules
            .iter()
            .find(|rule| rule.is_match(normalized))
            .map(|rule| rule.category)
            .unwrap_or(Category::Miscellaneous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::new("runkeeper").unwrap()
    }

    mod category_enum {
        use super::*;

        #[test]
        fn wire_names() {
            assert_eq!(Category::CompletedEvent.as_str(), "completed_event");
            assert_eq!(Category::LiveEvent.as_str(), "live_event");
            assert_eq!(Category::Achievement.as_str(), "achievement");
            assert_eq!(Category::Miscellaneous.as_str(), "miscellaneous");
        }

        #[test]
        fn serde_matches_wire_name() {
            for category in Category::ALL {
                let json = serde_json::to_string(&category).unwrap();
                assert_eq!(json, format!("\"{}\"", category.as_str()));
            }
        }
    }

    mod completed {
        use super::*;

        #[test]
        fn completed_phrasings() {
            let c = classifier();
            for text in [
                "Just completed a 5.00 mi run",
                "Completed an 8.2 km ride",
                "Just posted a 3.1 mi walk",
                "Just did a yoga session",
                "I just completed a hike",
            ] {
                assert_eq!(c.classify(text), Category::CompletedEvent, "{text}");
            }
        }

        #[test]
        fn wins_over_achievement_and_live() {
            let c = classifier();
            assert_eq!(
                c.classify("Just completed a run, new personal record! Just started stretching"),
                Category::CompletedEvent
            );
            assert_eq!(
                c.classify("JUST COMPLETED AN elliptical, achieved my PR"),
                Category::CompletedEvent
            );
        }

        #[test]
        fn requires_article() {
            assert_ne!(classifier().classify("completed my run"), Category::CompletedEvent);
        }
    }

    mod achievement {
        use super::*;

        #[test]
        fn achievement_phrasings() {
            let c = classifier();
            for text in [
                "I achieved a new fastest mile",
                "New personal record for 5K!",
                "Got a PR today",
                "Two PRs this week",
                "I set a goal to run 100 miles",
                "Reached my goal on #Runkeeper",
            ] {
                assert_eq!(c.classify(text), Category::Achievement, "{text}");
            }
        }

        #[test]
        fn goal_without_brand_is_not_achievement() {
            assert_eq!(classifier().classify("my goal is coffee"), Category::Miscellaneous);
        }

        #[test]
        fn pr_must_be_a_whole_word() {
            assert_eq!(classifier().classify("practice makes perfect"), Category::Miscellaneous);
        }

        #[test]
        fn wins_over_live() {
            assert_eq!(
                classifier().classify("Just started a run to chase a new personal record"),
                Category::Achievement
            );
        }

        #[test]
        fn brand_is_configurable() {
            let c = Classifier::new("Strava").unwrap();
            assert_eq!(c.classify("hit my goal with strava"), Category::Achievement);
            assert_eq!(c.classify("hit my goal with runkeeper"), Category::Miscellaneous);
        }
    }

    mod live {
        use super::*;

        #[test]
        fn live_phrasings() {
            let c = classifier();
            for text in [
                "Just started a walk with @Runkeeper",
                "I'm running with Runkeeper. Follow along live",
                "i'm   cycling right now",
                "I'm doing a workout",
            ] {
                assert_eq!(c.classify(text), Category::LiveEvent, "{text}");
            }
        }

        #[test]
        fn other_progressives_are_miscellaneous() {
            assert_eq!(classifier().classify("I'm swimming today"), Category::Miscellaneous);
        }
    }

    mod miscellaneous {
        use super::*;

        #[test]
        fn default_category() {
            let c = classifier();
            assert_eq!(c.classify(""), Category::Miscellaneous);
            assert_eq!(c.classify("Beautiful morning!"), Category::Miscellaneous);
        }

        #[test]
        fn deterministic() {
            let c = classifier();
            let text = "Just completed a 3 km walk, new personal record";
            assert_eq!(c.classify(text), c.classify(text));
        }
    }
}
