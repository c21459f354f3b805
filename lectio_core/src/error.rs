//! Error types for the lectio_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for lectio_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog validation error
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),

    /// A scope selector is empty or names a book the catalog doesn't have
    #[error("Invalid scope: {0}")]
    InvalidScope(String),

    /// Pacing input that cannot produce a schedule
    #[error("Invalid pace: {0}")]
    InvalidPace(String),

    /// No reading weekday selected; nothing could ever be scheduled
    #[error("Reading weekday set is empty")]
    EmptyWeekdaySet,

    /// Day number outside the valid 1-based range
    #[error("Day number {0} is out of range")]
    DayOutOfRange(u32),

    /// Plan storage error
    #[error("Plan error: {0}")]
    Plan(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
