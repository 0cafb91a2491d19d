//! Unified application error type.
//! The table engine itself never fails; every layer around it (config,
//! record source, CLI, export) returns AppError.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Record source
    // ---------------------------
    #[error("Unsupported data file format: {0}")]
    UnsupportedSource(String),

    #[error("Duplicate intervention id: {0}")]
    DuplicateId(i64),

    // ---------------------------
    // View request errors
    // ---------------------------
    #[error("Unknown column: {0}")]
    InvalidColumn(String),

    #[error("Invalid sort direction: {0}")]
    InvalidDirection(String),

    #[error("Invalid filter '{0}' (expected <column>=<pattern>)")]
    InvalidFilter(String),

    #[error("Column '{0}' is not available for this role")]
    ColumnNotVisible(String),

    #[error("A technician id is required for the technician role")]
    MissingTechnicianId,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration {path}: {source}")]
    ConfigLoad { path: String, source: io::Error },

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
