//! Input source descriptions and scoring keyword sets.
//!
//! Sources can be loaded from a JSON file:
//! ```json
//! {
//!   "sources": [
//!     {
//!       "path": "fec_reviews.csv",
//!       "type_tag": "fec",
//!       "columns": {
//!         "id": "FEC Number",
//!         "name": "FEC Name",
//!         "rating": "Rating",
//!         "teacher": "Teacher",
//!         "review": "Review",
//!         "study_time": "Study time"
//!       }
//!     }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Maps each logical field to the exact CSV header it is read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    pub id: String,
    pub name: String,
    pub rating: String,
    pub teacher: String,
    pub review: String,
    pub study_time: String,
}

/// One CSV file and how to interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: PathBuf,
    pub type_tag: String,
    pub columns: FieldMapping,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcesConfig {
    pub sources: Vec<SourceConfig>,
}

impl SourcesConfig {
    /// Loads the source list from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {path}"))?;
        let config: SourcesConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file {path}"))?;
        Ok(config)
    }
}

impl Default for SourcesConfig {
    /// The FEC survey export, with its headers exactly as the form produced them.
    fn default() -> Self {
        Self {
            sources: vec![SourceConfig {
                path: PathBuf::from("fec_reviews.csv"),
                type_tag: "fec".to_string(),
                columns: FieldMapping {
                    id: "FEC Number".to_string(),
                    name: "FEC Name".to_string(),
                    rating: "On a scale of 1 to 10, how likely will you suggest your fellow friend to opt for this FEC in the next semester?".to_string(),
                    teacher: "What was your Teacher's Name?".to_string(),
                    review: "Please write a small review of your FEC".to_string(),
                    study_time: "How much study time is required to score good in your FEC?PS- Haan wahi Paper se ek raat Pehle wala🤡".to_string(),
                },
            }],
        }
    }
}

static POSITIVE_KEYWORDS: &[&str] = &[
    "chill",
    "easy",
    "no stress",
    "no exam",
    "no paper",
    "presentation",
    "kam padna",
    "last day",
    "ek raat",
    "0 hours",
    "1-2 hours",
    "no assignment",
];

static NEGATIVE_KEYWORDS: &[&str] = &[
    "strict",
    "hectic",
    "daily",
    "compulsory",
    "75%",
    "gaand maregi",
    "trash",
    "bakchod",
    "sir dard",
];

static TRAP_KEYWORDS: &[&str] = &[
    "avoid",
    "trash",
    "bekar",
    "zero marks",
    "ganda",
    "devil",
    "bakchod",
];

/// Keyword lists consumed by the scoring functions. Stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringKeywords {
    positive: Vec<String>,
    negative: Vec<String>,
    trap: Vec<String>,
}

impl ScoringKeywords {
    pub fn new<S: AsRef<str>>(positive: &[S], negative: &[S], trap: &[S]) -> Self {
        fn lower<S: AsRef<str>>(words: &[S]) -> Vec<String> {
            words.iter().map(|w| w.as_ref().to_lowercase()).collect()
        }

        Self {
            positive: lower(positive),
            negative: lower(negative),
            trap: lower(trap),
        }
    }

    pub fn positive(&self) -> &[String] {
        &self.positive
    }

    pub fn negative(&self) -> &[String] {
        &self.negative
    }

    pub fn trap(&self) -> &[String] {
        &self.trap
    }
}

impl Default for ScoringKeywords {
    fn default() -> Self {
        Self::new(POSITIVE_KEYWORDS, NEGATIVE_KEYWORDS, TRAP_KEYWORDS)
    }
}
