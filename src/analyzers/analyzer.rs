use crate::analyzers::aggregate::CourseAggregator;
use crate::analyzers::types::Course;
use crate::config::{ScoringKeywords, SourceConfig, SourcesConfig};
use crate::error::SourceError;
use crate::normalize::normalize_row;
use crate::output::{sort_by_rating, write_report};
use crate::reader::RecordReader;
use anyhow::Result;
use std::path::Path;
use tracing::{debug, error, info, warn};

/// Row counts for one source.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SourceReport {
    pub rows: usize,
    pub skipped: usize,
    pub unrated: usize,
}

/// Totals for a whole run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub sources_read: usize,
    pub sources_missing: usize,
    pub rows_read: usize,
    pub rows_skipped: usize,
    pub rows_unrated: usize,
    pub courses_emitted: usize,
}

/// Reads one source and folds its valid rows into `aggregator`.
#[tracing::instrument(skip_all, fields(path = %source.path.display(), type_tag = %source.type_tag))]
pub fn ingest_source(
    source: &SourceConfig,
    aggregator: &mut CourseAggregator,
) -> Result<SourceReport, SourceError> {
    let reader = RecordReader::open(&source.path)?;
    info!("Processing source");

    let mut report = SourceReport::default();

    for row in reader {
        report.rows += 1;

        match normalize_row(&row, &source.columns, &source.type_tag) {
            Ok(record) => {
                if record.review.rating.is_none() {
                    report.unrated += 1;
                }
                aggregator.add(record);
            }
            Err(reason) => {
                report.skipped += 1;
                debug!(row = report.rows, kind = reason.kind(), %reason, "Row skipped");
            }
        }
    }

    info!(
        rows = report.rows,
        skipped = report.skipped,
        unrated = report.unrated,
        "Source processed"
    );
    Ok(report)
}

/// Runs every configured source through the pipeline and returns the finalized,
/// sorted courses. Missing or unreadable sources are logged and skipped.
pub fn build_courses(
    config: &SourcesConfig,
    keywords: &ScoringKeywords,
) -> (Vec<Course>, RunSummary) {
    let mut aggregator = CourseAggregator::new();
    let mut summary = RunSummary::default();

    for source in &config.sources {
        match ingest_source(source, &mut aggregator) {
            Ok(report) => {
                summary.sources_read += 1;
                summary.rows_read += report.rows;
                summary.rows_skipped += report.skipped;
                summary.rows_unrated += report.unrated;
            }
            Err(e) => {
                summary.sources_missing += 1;
                error!(path = %source.path.display(), error = %e, "Source skipped");
            }
        }
    }

    if aggregator.is_empty() {
        warn!("No valid course rows found in any source");
    }
    debug!(courses_seen = aggregator.len(), "Aggregation complete");

    let mut courses = aggregator.finalize(keywords);
    sort_by_rating(&mut courses);
    summary.courses_emitted = courses.len();

    (courses, summary)
}

/// Builds the report from `config` and writes it to `output`.
///
/// Only a failure to write the report is returned as an error.
#[tracing::instrument(skip_all, fields(output = %output.display()))]
pub fn analyze(
    config: &SourcesConfig,
    keywords: &ScoringKeywords,
    output: &Path,
) -> Result<RunSummary> {
    let (courses, summary) = build_courses(config, keywords);
    write_report(output, &courses)?;

    info!(
        sources_read = summary.sources_read,
        sources_missing = summary.sources_missing,
        rows = summary.rows_read,
        skipped = summary.rows_skipped,
        unrated = summary.rows_unrated,
        courses = summary.courses_emitted,
        "Report written"
    );
    Ok(summary)
}
