//! Post records.
//!
//! A [`Post`] holds the two inputs every derivation works from: the raw text
//! and the timestamp. Nothing else is stored; category, activity, distance
//! and authorship are computed on demand by the [`Analyzer`](crate::Analyzer).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Timestamp format used by the post source, e.g. `Sun Sep 30 06:58:57 +0000 2018`.
pub const SOURCE_TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// A post as supplied by the source, before parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPost {
    /// Post text.
    #[serde(default)]
    pub text: String,
    /// Creation time in the source's textual format.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl RawPost {
    /// Creates a raw post.
    pub fn new(text: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            created_at: Some(created_at.into()),
        }
    }
}

/// An immutable post record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    text: String,
    timestamp: Option<DateTime<Utc>>,
}

impl Post {
    /// Creates a record from text and an already parsed instant.
    ///
    /// `None` stands for an invalid instant.
    pub fn new(text: impl Into<String>, timestamp: Option<DateTime<Utc>>) -> Self {
        Self {
            text: text.into(),
            timestamp,
        }
    }

    /// Creates a record from text and the source's textual timestamp.
    ///
    /// An unparseable timestamp is not an error: the record is built with an
    /// invalid instant.
    pub fn from_source(text: impl Into<String>, created_at: &str) -> Self {
        Self::new(text, parse_timestamp(created_at))
    }

    /// Raw text as received.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parsed timestamp, or `None` when the source value was not a valid instant.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// Returns `true` if the timestamp parsed to a valid instant.
    pub fn has_valid_timestamp(&self) -> bool {
        self.timestamp.is_some()
    }
}

impl From<RawPost> for Post {
    fn from(raw: RawPost) -> Self {
        let timestamp = raw.created_at.as_deref().and_then(parse_timestamp);
        Self::new(raw.text, timestamp)
    }
}

/// Parses a source timestamp.
///
/// Accepts the source format first, then RFC 3339 and RFC 2822. Returns
/// `None` when none of them match.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    let parsed = DateTime::parse_from_str(s, SOURCE_TIMESTAMP_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(s))
        .or_else(|_| DateTime::parse_from_rfc2822(s));

    match parsed {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(e) => {
            tracing::debug!(timestamp = s, error = %e, "Unparseable post timestamp");
            None
        }
    }
}

/// Parses a JSON document holding a sequence of raw posts into records.
///
/// A `null` document means no post sequence was supplied and is reported as
/// [`CoreError::MissingInput`]. An empty array is a valid, empty sequence.
pub fn parse_posts(json: &str) -> CoreResult<Vec<Post>> {
    let raw: Option<Vec<RawPost>> = serde_json::from_str(json)?;
    let raw = raw.ok_or(CoreError::MissingInput)?;
    Ok(raw.into_iter().map(Post::from).collect())
}
