//! Report output: sorting, JSON serialization and persistence.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::analyzers::types::Course;

/// Orders courses by average rating, best first. Equal averages keep their order.
pub fn sort_by_rating(courses: &mut [Course]) {
    courses.sort_by(|a, b| b.avg_rating.total_cmp(&a.avg_rating));
}

/// Serializes courses as a JSON array indented by four spaces. Non-ASCII text is
/// written as-is.
pub fn to_json(courses: &[Course]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    courses.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

/// Writes the report to `path`, replacing any existing file.
pub fn write_report(path: &Path, courses: &[Course]) -> Result<()> {
    debug!(path = %path.display(), courses = courses.len(), "Writing report");

    let file = File::create(path)
        .with_context(|| format!("failed to create report file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(to_json(courses)?.as_bytes())?;
    writer.flush()?;

    Ok(())
}

/// Reads a report previously written by [`write_report`].
pub fn read_report(path: &Path) -> Result<Vec<Course>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open report file {}", path.display()))?;
    let courses: Vec<Course> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse report file {}", path.display()))?;
    Ok(courses)
}

/// Logs one line per course.
pub fn print_courses(label: &str, courses: &[&Course]) {
    info!(count = courses.len(), "{label}");
    for (rank, course) in courses.iter().enumerate() {
        info!(
            rank = rank + 1,
            course = %course.key(),
            name = %course.name,
            avg_rating = course.avg_rating,
            chill_score = course.chill_score,
            reviews = course.review_count,
            trap = course.is_trap_course,
            "{label}"
        );
    }
}
