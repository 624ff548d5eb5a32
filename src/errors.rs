//! Unified application error type.
//! All modules (core, config, export, cli) return AppError so the CLI can
//! surface one message and abort the current generation without side effects.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid {field} format: '{value}'")]
    InvalidFormat { field: &'static str, value: String },

    // ---------------------------
    // Interval parsing
    // ---------------------------
    #[error("Invalid sequence interval: {0}")]
    ParseFailure(String),

    #[error("No sequences to log: {0}")]
    EmptyResult(String),

    // ---------------------------
    // Time window
    // ---------------------------
    #[error("Invalid time window: end {end} precedes start {start}")]
    InvalidWindow { start: String, end: String },

    #[error(
        "At least one minute per sequence is required ({sequences} sequences in {minutes} minutes): widen the time window or reduce the sequences"
    )]
    TooShort { minutes: i64, sequences: usize },

    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
