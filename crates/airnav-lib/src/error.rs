use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the airnav library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a path references a location code that was never added.
    #[error("unknown location code: {code}{}", format_suggestions(.suggestions))]
    UnknownLocation {
        code: String,
        suggestions: Vec<String>,
    },

    /// Raised when a location directory cannot resolve a display name.
    #[error("failed to resolve location '{name}': {reason}")]
    Lookup { name: String, reason: String },

    /// Raised when the remote geocoder is selected but no credential is configured.
    #[error("geocoder API key missing; set {var}")]
    MissingApiKey { var: &'static str },

    /// Data file could not be located at the resolved path.
    #[error("data file not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for airnav data")]
    ProjectDirsUnavailable,

    /// Raised when a record in an airports, routes, or coordinates file is malformed.
    #[error("malformed record in {origin} at line {line}: {message}")]
    MalformedRecord {
        origin: String,
        line: u64,
        message: String,
    },

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for HTTP client errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
