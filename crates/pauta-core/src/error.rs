//! Error types for the hearing-schedule importer.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid case number: {0}")]
    InvalidCaseNumber(String),

    #[error("Unknown jurisdiction: {0}")]
    InvalidJurisdiction(String),

    #[error("Invalid existing record: {0}")]
    InvalidRecord(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
