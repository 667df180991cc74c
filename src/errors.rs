//! Unified application error type.
//! All modules (config, db, chart, cli) return AppError so the top-level
//! handler can print one diagnostic and exit with a non-zero status.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Failed to connect to the database: {0}")]
    Connection(#[source] mysql::Error),

    #[error("Query failed: {0}")]
    Query(#[source] mysql::Error),

    // ---------------------------
    // Chart rendering
    // ---------------------------
    #[error("Render error: {0}")]
    Render(String),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid country code: {0} (expected three ASCII letters, e.g. TUR)")]
    InvalidCountryCode(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
