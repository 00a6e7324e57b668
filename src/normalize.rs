//! Row normalization: turns a [`RawRow`] into a typed [`ReviewRecord`].
//!
//! Rules run in order and the first failing one rejects the row:
//!
//! | Field       | Empty / `nan`        | Malformed            |
//! |-------------|----------------------|----------------------|
//! | course id   | skip                 | skip                 |
//! | course name | skip                 | n/a                  |
//! | rating      | `None`               | `None`               |
//! | teacher     | `"Unknown"`          | n/a                  |
//! | review text | `""`                 | n/a                  |
//! | study time  | `""`                 | n/a                  |

use crate::analyzers::types::{CourseKey, Review};
use crate::config::FieldMapping;
use crate::error::RowError;
use crate::reader::RawRow;

pub const UNKNOWN_TEACHER: &str = "Unknown";

/// A validated row, ready for aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRecord {
    pub key: CourseKey,
    pub course_name: String,
    pub teacher: String,
    pub review: Review,
}

/// Validates and coerces one row of the source tagged `type_tag`.
pub fn normalize_row(
    row: &RawRow,
    columns: &FieldMapping,
    type_tag: &str,
) -> Result<ReviewRecord, RowError> {
    let id = parse_course_id(row.get(&columns.id))?;
    let course_name = parse_course_name(row.get(&columns.name))?;
    let rating = parse_rating(row.get(&columns.rating));
    let teacher = normalize_teacher(row.get(&columns.teacher));

    Ok(ReviewRecord {
        key: CourseKey::new(type_tag, id),
        course_name,
        teacher,
        review: Review {
            rating,
            review: row.get(&columns.review).trim().to_string(),
            study_time: row.get(&columns.study_time).trim().to_string(),
        },
    })
}

fn is_blank(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case("nan")
}

/// Accepts any numeric literal within `i64` range (`"12"`, `"12.0"`) and truncates it.
pub fn parse_course_id(raw: &str) -> Result<i64, RowError> {
    let value = raw.trim();
    if is_blank(value) {
        return Err(RowError::MissingCourseId);
    }

    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    match value.parse::<f64>() {
        Ok(n) if n >= i64::MIN as f64 && n < i64::MAX as f64 => Ok(n.trunc() as i64),
        _ => Err(RowError::InvalidCourseId(value.to_string())),
    }
}

pub fn parse_course_name(raw: &str) -> Result<String, RowError> {
    let value = raw.trim();
    if is_blank(value) {
        return Err(RowError::MissingCourseName);
    }
    Ok(value.to_string())
}

/// Only plain non-negative literals count: digits with at most one `.`.
/// Anything else, including signs and exponents, is an unrated review.
pub fn parse_rating(raw: &str) -> Option<i64> {
    let value = raw.trim();
    let digits = value.replacen('.', "", 1);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    value.parse::<f64>().ok().map(|n| n.trunc() as i64)
}

pub fn normalize_teacher(raw: &str) -> String {
    let name = title_case(raw.trim());
    if is_blank(&name) {
        return UNKNOWN_TEACHER.to_string();
    }
    name
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the
/// rest, so `"dr. a.k. SINGH"` becomes `"Dr. A.K. Singh"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }

    out
}
