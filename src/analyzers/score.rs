//! Keyword heuristics: the chill score and the trap-course flag.

use crate::analyzers::types::Review;
use crate::analyzers::utility::round_to;
use crate::config::ScoringKeywords;

pub const CHILL_BASELINE: f64 = 5.0;
pub const POSITIVE_WEIGHT: f64 = 0.5;
pub const NEGATIVE_WEIGHT: f64 = 1.0;
pub const MAX_CHILL: f64 = 10.0;

/// Courses rated at or above this are never traps.
pub const TRAP_RATING_THRESHOLD: f64 = 6.0;

/// Scores how relaxed a course is, from 0 to 10.
///
/// Every keyword found in a review's text plus study-time text moves the score
/// independently of the others: +0.5 per positive keyword, -1 per negative one.
/// Matching is substring-based on lower-cased text.
pub fn chill_score<'a, I>(reviews: I, keywords: &ScoringKeywords) -> f64
where
    I: IntoIterator<Item = &'a Review>,
{
    let mut score = CHILL_BASELINE;

    for review in reviews {
        let text = format!("{} {}", review.review, review.study_time).to_lowercase();

        let positives = keywords
            .positive()
            .iter()
            .filter(|k| text.contains(k.as_str()))
            .count();
        let negatives = keywords
            .negative()
            .iter()
            .filter(|k| text.contains(k.as_str()))
            .count();

        score += positives as f64 * POSITIVE_WEIGHT;
        score -= negatives as f64 * NEGATIVE_WEIGHT;
    }

    round_to(score.clamp(0.0, MAX_CHILL), 1)
}

/// A low-rated course whose reviews (study-time text excluded) mention any trap keyword.
pub fn is_trap_course<'a, I>(avg_rating: f64, reviews: I, keywords: &ScoringKeywords) -> bool
where
    I: IntoIterator<Item = &'a Review>,
{
    if avg_rating >= TRAP_RATING_THRESHOLD {
        return false;
    }

    let all_text = reviews
        .into_iter()
        .map(|r| r.review.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    keywords.trap().iter().any(|k| all_text.contains(k.as_str()))
}
