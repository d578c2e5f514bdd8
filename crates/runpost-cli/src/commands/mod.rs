//! Command implementations.
//!
//! Each command formats its output with a pure function and prints it, so the
//! text layout can be tested without capturing stdout.

pub mod activities;
pub mod classify;
pub mod config;
pub mod render;
pub mod search;
pub mod summary;

use std::path::Path;

use serde::Serialize;

use runpost_core::{AnalyzedPost, Analyzer, AnalyzerConfig, analyze_all};

use crate::error::ClientResult;
use crate::input::load_posts;

/// Analyzed posts, plus the analyzer that produced them.
#[derive(Debug)]
pub struct Dataset {
    pub analyzer: Analyzer,
    pub posts: Vec<AnalyzedPost>,
}

impl Dataset {
    /// Loads posts from `path` and analyzes them with `config`.
    pub fn load(path: &Path, config: &AnalyzerConfig) -> ClientResult<Self> {
        let analyzer = Analyzer::new(config)?;
        let posts = analyze_all(&analyzer, load_posts(path)?);
        Ok(Self { analyzer, posts })
    }
}

/// Pretty-prints a value as JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> ClientResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Truncates text for one-line display.
pub(crate) fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
pub(crate) mod test_support {
    use runpost_core::{AnalyzedPost, Analyzer, Post, analyze_all};

    pub fn posts() -> Vec<AnalyzedPost> {
        let posts = vec![
            Post::from_source("Just completed a 5.00 mi run! #RunKeeper", "Sun Sep 23 07:00:00 +0000 2018"),
            Post::from_source(
                "Just completed a 10 km run with Runkeeper, windy",
                "Mon Sep 24 07:00:00 +0000 2018",
            ),
            Post::from_source(
                "Just completed a 3 km walk with RunKeeper, felt amazing today!",
                "Sun Sep 30 06:58:57 +0000 2018",
            ),
            Post::from_source("Just started a run with Runkeeper", "Tue Sep 25 07:00:00 +0000 2018"),
            Post::from_source("Lovely weather https://t.co/x", "not a date"),
        ];
        analyze_all(&Analyzer::default(), posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }

    #[test]
    fn dataset_load_rejects_empty_brand() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = AnalyzerConfig::default().with_brand("  ");
        let err = Dataset::load(file.path(), &config).unwrap_err();
        assert_eq!(err.to_string(), "brand name must not be empty");
    }
}
