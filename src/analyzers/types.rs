//! Data types used by the aggregation pipeline.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a course across sources: upper-cased type tag plus numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseKey {
    type_tag: String,
    id: i64,
}

impl CourseKey {
    pub fn new(type_tag: &str, id: i64) -> Self {
        Self {
            type_tag: type_tag.trim().to_uppercase(),
            id,
        }
    }

    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    pub fn id(&self) -> i64 {
        self.id
    }
}

impl fmt::Display for CourseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.type_tag, self.id)
    }
}

/// A single student review. `rating` is `None` when the cell was not a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub rating: Option<i64>,
    pub review: String,
    pub study_time: String,
}

/// Reviews left for one teacher of a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherGroup {
    pub reviews: Vec<Review>,
    pub avg_rating: f64,
}

/// A finalized course as written to the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    #[serde(rename = "type")]
    pub course_type: String,
    pub name: String,
    pub teachers: IndexMap<String, TeacherGroup>,
    pub avg_rating: f64,
    pub chill_score: f64,
    pub is_trap_course: bool,
    pub review_count: usize,
}

impl Course {
    pub fn key(&self) -> CourseKey {
        CourseKey::new(&self.course_type, self.id)
    }

    /// All retained reviews, teacher by teacher in first-seen order.
    pub fn reviews(&self) -> impl Iterator<Item = &Review> {
        self.teachers.values().flat_map(|t| t.reviews.iter())
    }
}
