//! CLI entry point for the course review rater.
//!
//! `build` turns the configured survey CSVs into the ranked course report;
//! `inspect` summarizes a report that was already written.

use anyhow::Result;
use clap::{Parser, Subcommand};
use course_rater::analyzers::analyzer::analyze;
use course_rater::config::{ScoringKeywords, SourcesConfig};
use course_rater::insights::{
    chillest_courses, course_tags, popular_courses, recommendation_percentage, trap_courses,
};
use course_rater::output::{print_courses, read_report};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "course_rater")]
#[command(about = "Aggregate and score student course reviews", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read the review CSVs and write the ranked course report
    Build {
        /// JSON file listing the sources; the built-in FEC source is used if omitted
        #[arg(short, long)]
        config: Option<String>,

        /// Report file to write
        #[arg(short, long, default_value = "courses_advanced.json")]
        output: PathBuf,
    },
    /// Summarize an existing report
    Inspect {
        /// Report file to read
        #[arg(short, long, default_value = "courses_advanced.json")]
        input: PathBuf,

        /// Number of courses to list per section
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/course_rater.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("course_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build { config, output } => {
            let sources = match config {
                Some(path) => SourcesConfig::load(&path)?,
                None => SourcesConfig::default(),
            };
            let keywords = ScoringKeywords::default();

            let summary = analyze(&sources, &keywords, &output)?;

            println!("\nProcessing complete!");
            println!(
                "Successfully processed {} unique courses.",
                summary.courses_emitted
            );
            println!("Output saved to '{}'.", output.display());
        }
        Commands::Inspect { input, limit } => {
            let courses = read_report(&input)?;
            info!(path = %input.display(), courses = courses.len(), "Report loaded");

            let top: Vec<_> = courses.iter().take(limit).collect();
            print_courses("Top rated", &top);
            print_courses("Chillest", &chillest_courses(&courses, limit));
            print_courses("Popular", &popular_courses(&courses, limit));
            print_courses("Trap courses", &trap_courses(&courses));

            for course in &top {
                info!(
                    course = %course.key(),
                    recommended_pct = recommendation_percentage(course),
                    tags = %course_tags(course).join(","),
                    "Course summary"
                );
            }
        }
    }

    Ok(())
}
