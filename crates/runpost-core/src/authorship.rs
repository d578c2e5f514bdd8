//! Authorship extraction.
//!
//! Recovers the user's own commentary from a post in two stages:
//!
//! 1. strip URLs, @-mentions and the app's own hashtag;
//! 2. remove every entry of the [`BoilerplateTable`] from the normalized
//!    remainder, then trim stray punctuation at the edges.
//!
//! Stage 1 runs first because boilerplate is matched against the de-linked
//! text. Whatever alphanumeric text survives counts as written content.
//! This is a heuristic: a post made only of unlisted boilerplate variants
//! reads as commentary, and vice versa.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::activity;
use crate::distance::UNIT_ALTERNATION;
use crate::text;

/// User commentary recovered from a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorship {
    /// Whether any user-authored text survived noise removal.
    pub has_written_content: bool,
    /// The surviving text; empty when `has_written_content` is false.
    pub written_text: String,
}

impl Authorship {
    fn from_remainder(remaining: String) -> Self {
        if remaining.chars().any(|c| c.is_ascii_alphanumeric()) {
            Self {
                has_written_content: true,
                written_text: remaining,
            }
        } else {
            Self::default()
        }
    }
}

/// One boilerplate entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Stem {
    /// A literal phrase, matched as a whole word or phrase.
    Phrase(String),
    /// A raw regular expression.
    Pattern(String),
}

impl Stem {
    fn compile(&self) -> Result<Regex, regex::Error> {
        match self {
            Self::Phrase(phrase) => text::whole_word(phrase),
            Self::Pattern(pattern) => Regex::new(&format!("(?i){}", pattern)),
        }
    }
}

/// Ordered table of app-generated boilerplate to remove.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoilerplateTable {
    stems: Vec<Stem>,
}

impl BoilerplateTable {
    /// Creates an empty table.
    pub fn empty() -> Self {
        Self { stems: Vec::new() }
    }

    /// Builds the default table for the given app brand.
    ///
    /// Besides the fixed phrasings the app inserts, this includes the
    /// measurement phrase it generates ("5.00 mi run", "13.42 mi bike ride"):
    /// a distance followed by any run of activity keywords.
    pub fn for_brand(brand: &str) -> Self {
        let brand = brand.trim().to_lowercase();
        let phrases = [
            "just completed a".to_string(),
            "just completed an".to_string(),
            "completed a".to_string(),
            "completed an".to_string(),
            "just posted a".to_string(),
            "just posted an".to_string(),
            "i just posted a".to_string(),
            "just did a".to_string(),
            format!("with {}", brand),
            format!("via {}", brand),
            format!("on {}", brand),
            "check it out".to_string(),
            "check it out!".to_string(),
        ];

        let measure = format!(
            r"\b[0-9]+(?:\.[0-9]+)?\s+{}\b(?:\s+{}\b)*",
            UNIT_ALTERNATION,
            activity::keyword_alternation()
        );

        let mut table = Self::empty();
        for phrase in phrases {
            table.push(Stem::Phrase(phrase));
        }
        table.push(Stem::Pattern(measure));
        table
    }

    /// Appends an entry.
    pub fn push(&mut self, stem: Stem) {
        self.stems.push(stem);
    }

    /// Appends an entry, builder style.
    #[must_use]
    pub fn with(mut self, stem: Stem) -> Self {
        self.push(stem);
        self
    }

    /// Entries in removal order.
    pub fn stems(&self) -> &[Stem] {
        &self.stems
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.stems.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.stems.is_empty()
    }
}

impl Extend<Stem> for BoilerplateTable {
    fn extend<T: IntoIterator<Item = Stem>>(&mut self, iter: T) {
        self.stems.extend(iter);
    }
}

/// Compiled authorship extractor.
#[derive(Debug, Clone)]
pub struct AuthorshipExtractor {
    hashtag: Regex,
    stems: Vec<Regex>,
}

impl AuthorshipExtractor {
    /// Compiles an extractor for the brand's hashtag and the given table.
    pub fn new(brand: &str, table: &BoilerplateTable) -> Result<Self, regex::Error> {
        let hashtag = Regex::new(&format!("(?i)#{}", regex::escape(brand)))?;
        let stems = table
            .stems()
            .iter()
            .map(Stem::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { hashtag, stems })
    }

    /// Extracts the user's commentary from raw post text.
    pub fn extract(&self, raw_text: &str) -> Authorship {
        let base = text::strip_links_and_tags(raw_text, &self.hashtag);
        Authorship::from_remainder(self.remove_boilerplate(&base))
    }

    fn remove_boilerplate(&self, s: &str) -> String {
        let mut t = format!(" {} ", text::normalize(s));
        for re in &self.stems {
            t = re.replace_all(&t, " ").into_owned();
        }
        text::trim_non_word(&text::collapse_whitespace(&t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> AuthorshipExtractor {
        AuthorshipExtractor::new("runkeeper", &BoilerplateTable::for_brand("runkeeper")).unwrap()
    }

    mod table {
        use super::*;

        #[test]
        fn default_table_is_enumerable() {
            let table = BoilerplateTable::for_brand("RunKeeper");
            assert_eq!(table.len(), 14);
            assert_eq!(table.stems()[0], Stem::Phrase("just completed a".to_string()));
            assert!(table.stems().contains(&Stem::Phrase("with runkeeper".to_string())));
            assert!(matches!(table.stems().last(), Some(Stem::Pattern(_))));
        }

        #[test]
        fn brand_is_trimmed() {
            let table = BoilerplateTable::for_brand(" Strava ");
            assert!(table.stems().contains(&Stem::Phrase("via strava".to_string())));
            assert_eq!(table, BoilerplateTable::for_brand("strava"));
        }

        #[test]
        fn table_is_extensible() {
            let mut table = BoilerplateTable::empty().with(Stem::Phrase("go team".into()));
            table.extend([Stem::Pattern(r"\bpace \d+:\d+\b".into())]);
            assert_eq!(table.len(), 2);
            assert!(!table.is_empty());
        }

        #[test]
        fn invalid_pattern_fails_to_compile() {
            let table = BoilerplateTable::empty().with(Stem::Pattern("(unclosed".into()));
            assert!(AuthorshipExtractor::new("runkeeper", &table).is_err());
        }

        #[test]
        fn stem_serde_shape() {
            let json = serde_json::to_string(&Stem::Phrase("go team".into())).unwrap();
            assert_eq!(json, r#"{"kind":"phrase","value":"go team"}"#);
        }
    }

    mod extract {
        use super::*;

        #[test]
        fn boilerplate_only_has_no_content() {
            let a = extractor().extract("Just completed a 5.00 mi run! #RunKeeper");
            assert!(!a.has_written_content);
            assert_eq!(a.written_text, "");
        }

        #[test]
        fn recovers_commentary() {
            let a = extractor().extract("Just completed a 3 km walk with RunKeeper, felt amazing today!");
            assert!(a.has_written_content);
            assert_eq!(a.written_text, "felt amazing today");
        }

        #[test]
        fn strips_links_mentions_and_app_hashtag() {
            let a = extractor().extract(
                "Just completed a 6.21 km run - Windy by the lake @friend https://t.co/AbC #Runkeeper",
            );
            assert_eq!(a.written_text, "windy by the lake");
        }

        #[test]
        fn removes_stems_in_any_order() {
            let a = extractor().extract("Check it out! Lovely loop. Just posted a 4 mi hike via RunKeeper");
            assert_eq!(a.written_text, "lovely loop");
        }

        #[test]
        fn multi_keyword_measurement_leaves_nothing() {
            let a = extractor().extract("Just completed a 13.42 mi bike ride! #RunKeeper");
            assert!(!a.has_written_content);
            assert_eq!(a.written_text, "");
        }

        #[test]
        fn multi_keyword_measurement_keeps_commentary() {
            let a = extractor().extract(
                "Just completed a 13.42 mi bike ride with @Runkeeper. Check it out! https://t.co/x #Runkeeper",
            );
            assert_eq!(a.written_text, "with");
        }

        #[test]
        fn keeps_other_hashtags() {
            let a = extractor().extract("Just completed a 2 mi walk #sunday");
            assert!(a.has_written_content);
            assert_eq!(a.written_text, "sunday");
        }

        #[test]
        fn punctuation_only_is_not_content() {
            let a = extractor().extract("Just completed a 10 km ride!!! :) https://t.co/x");
            assert!(!a.has_written_content);
            assert!(a.written_text.is_empty());
        }

        #[test]
        fn empty_text() {
            assert_eq!(extractor().extract(""), Authorship::default());
        }

        #[test]
        fn independent_of_category() {
            let a = extractor().extract("Just started a walk, beautiful sunrise");
            assert!(a.has_written_content);
            assert_eq!(a.written_text, "just started a walk, beautiful sunrise");
        }

        #[test]
        fn custom_stems_are_removed() {
            let table = BoilerplateTable::for_brand("runkeeper")
                .with(Stem::Phrase("live tracking".into()));
            let ex = AuthorshipExtractor::new("runkeeper", &table).unwrap();
            let a = ex.extract("Live tracking enabled");
            assert_eq!(a.written_text, "enabled");
        }
    }
}
