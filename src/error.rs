//! Error types for the review pipeline.
//!
//! Both kinds are recoverable: a [`SourceError`] drops one input file, a
//! [`RowError`] drops one row. Neither aborts a run.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to open or start reading one configured source.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("source file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Reason a single row was skipped by the normalizer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("course id is missing")]
    MissingCourseId,

    #[error("course id {0:?} is not numeric")]
    InvalidCourseId(String),

    #[error("course name is missing")]
    MissingCourseName,
}

impl RowError {
    /// Short label used as a structured logging field.
    pub fn kind(&self) -> &'static str {
        match self {
            RowError::MissingCourseId => "missing_course_id",
            RowError::InvalidCourseId(_) => "invalid_course_id",
            RowError::MissingCourseName => "missing_course_name",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_error_display() {
        assert_eq!(RowError::MissingCourseId.to_string(), "course id is missing");
        assert_eq!(
            RowError::InvalidCourseId("abc".into()).to_string(),
            "course id \"abc\" is not numeric"
        );
    }

    #[test]
    fn test_not_found_mentions_path() {
        let err = SourceError::NotFound(PathBuf::from("missing.csv"));
        assert!(err.to_string().contains("missing.csv"));
    }
}
