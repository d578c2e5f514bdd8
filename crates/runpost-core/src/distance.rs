//! Distance extraction with unit conversion to miles.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Miles per kilometer.
pub const KM_TO_MI: f64 = 0.621371;

/// Unit tokens accepted after a number, as a regex alternation.
pub(crate) const UNIT_ALTERNATION: &str = "(?:mi|mile|miles|km|kilometer|kilometers)";

/// First `<number> <unit>` occurrence in a post.
static MEASURE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // Number and unit must be separated by whitespace: "5km" is not a distance.
    Regex::new(r"(?i)([0-9]+(?:\.[0-9]+)?)\s+(mi|mile|miles|km|kilometer|kilometers)\b")
        .expect("Invalid distance regex")
});

/// Distance unit as written in a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    Miles,
    Kilometers,
}

impl DistanceUnit {
    /// Parses a unit token, case-insensitively.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "mi" | "mile" | "miles" => Some(Self::Miles),
            "km" | "kilometer" | "kilometers" => Some(Self::Kilometers),
            _ => None,
        }
    }
}

/// A distance measure found in a post.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    /// Value as written.
    pub value: f64,
    /// Unit as written.
    pub unit: DistanceUnit,
}

impl Measure {
    /// Converts to miles. Imperial values pass through unchanged; metric
    /// values are converted and rounded to two decimals.
    pub fn to_miles(&self) -> f64 {
        match self.unit {
            DistanceUnit::Miles => self.value,
            DistanceUnit::Kilometers => round2(self.value * KM_TO_MI),
        }
    }
}

/// Finds the first distance measure in the text.
///
/// Only the first match counts; later mentions are ignored.
pub fn find_measure(text: &str) -> Option<Measure> {
    let caps = MEASURE_REGEX.captures(text)?;
    let value = caps.get(1)?.as_str().parse::<f64>().ok()?;
    let unit = DistanceUnit::from_token(caps.get(2)?.as_str())?;
    Some(Measure { value, unit })
}

/// Returns the first distance in the text in miles, or 0 when none is found.
///
/// This performs the search unconditionally; category gating lives in the
/// [`Analyzer`](crate::Analyzer).
pub fn find_distance_miles(text: &str) -> f64 {
    find_measure(text).map(|m| m.to_miles()).unwrap_or(0.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
