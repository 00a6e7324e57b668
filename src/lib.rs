pub mod analyzers;
pub mod config;
pub mod error;
pub mod insights;
pub mod normalize;
pub mod output;
pub mod reader;
