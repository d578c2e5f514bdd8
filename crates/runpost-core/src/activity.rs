//! Activity kind extraction.
//!
//! Canonical activities are matched through an ordered keyword table. The
//! table order is itself a tie-break: when keywords of several activities
//! appear in one post, the earliest table entry wins.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Canonical activity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    Running,
    Walking,
    Cycling,
    Hiking,
    Swimming,
    Rowing,
    Elliptical,
    Skiing,
    Snowboarding,
    Skating,
    Kayaking,
    Yoga,
    Workout,
    /// Not a completed event, or no keyword matched.
    Unknown,
}

impl Activity {
    /// Returns the canonical name for this activity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Walking => "walking",
            Self::Cycling => "cycling",
            Self::Hiking => "hiking",
            Self::Swimming => "swimming",
            Self::Rowing => "rowing",
            Self::Elliptical => "elliptical",
            Self::Skiing => "skiing",
            Self::Snowboarding => "snowboarding",
            Self::Skating => "skating",
            Self::Kayaking => "kayaking",
            Self::Yoga => "yoga",
            Self::Workout => "workout",
            Self::Unknown => "unknown",
        }
    }

    /// Returns `true` unless this is [`Activity::Unknown`].
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword table, in match precedence order.
pub const ACTIVITY_KEYWORDS: &[(Activity, &[&str])] = &[
    (Activity::Running, &["run", "running"]),
    (Activity::Walking, &["walk", "walking"]),
    (
        Activity::Cycling,
        &["cycle", "cycling", "bike", "biking", "ride", "riding"],
    ),
    (Activity::Hiking, &["hike", "hiking"]),
    (Activity::Swimming, &["swim", "swimming"]),
    (Activity::Rowing, &["row", "rowing"]),
    (Activity::Elliptical, &["elliptical"]),
    (Activity::Skiing, &["ski", "skiing"]),
    (Activity::Snowboarding, &["snowboard", "snowboarding"]),
    (
        Activity::Skating,
        &[
            "skate",
            "skating",
            "rollerskate",
            "rollerblading",
            "rollerblade",
        ],
    ),
    (Activity::Kayaking, &["kayak", "kayaking"]),
    (Activity::Yoga, &["yoga"]),
    (Activity::Workout, &["workout", "gym", "crossfit", "strength"]),
];

/// One whole-word alternation per table entry.
static ACTIVITY_MATCHERS: LazyLock<Vec<(Activity, Regex)>> = LazyLock::new(|| {
    ACTIVITY_KEYWORDS
        .iter()
        .map(|(activity, variants)| {
            let pattern = format!(r"(?i)\b(?:{})\b", variants.join("|"));
            let re = Regex::new(&pattern).expect("Invalid activity keyword regex");
            (*activity, re)
        })
        .collect()
});

/// Returns a non-capturing alternation of every keyword variant.
pub(crate) fn keyword_alternation() -> String {
    let variants: Vec<&str> = ACTIVITY_KEYWORDS
        .iter()
        .flat_map(|(_, variants)| variants.iter().copied())
        .collect();
    format!("(?:{})", variants.join("|"))
}

/// Finds the first table activity with a whole-word keyword in normalized text.
///
/// This performs the keyword search unconditionally; category gating lives in
/// the [`Analyzer`](crate::Analyzer).
pub fn find_activity(normalized: &str) -> Activity {
    ACTIVITY_MATCHERS
        .iter()
        .find(|(_, re)| re.is_match(normalized))
        .map(|(activity, _)| *activity)
        .unwrap_or(Activity::Unknown)
}
