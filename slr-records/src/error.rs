/// Error types for launch record loading and parsing.
use thiserror::Error;

/// Main error type for launch dataset operations.
#[derive(Error, Debug)]
pub enum LaunchDataError {
    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// The CSV header is missing a required column
    #[error("Dataset is missing required column: {0}")]
    MissingColumn(String),

    /// HTTP request failed
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// The dataset endpoint answered with a non-success status
    #[cfg(feature = "api")]
    #[error("Dataset download failed with status {0}")]
    BadStatus(reqwest::StatusCode),

    /// Local file I/O failed
    #[cfg(feature = "api")]
    #[error("File I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
