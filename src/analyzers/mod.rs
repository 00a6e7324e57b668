//! Course aggregation and scoring.
//!
//! This module folds normalized review rows into courses, computes per-teacher
//! and per-course averages, the keyword-based chill score and the trap-course
//! flag, and drives the whole pipeline from configured sources to the report.

pub mod aggregate;
pub mod analyzer;
pub mod score;
pub mod types;
pub mod utility;
