// Defines the application error types and result aliases using the thiserror crate.
use thiserror::Error;

// Make the subsystem error modules public
pub mod fetch;
pub mod report;

// Re-export commonly used types
pub use fetch::{FetchError, FetchResult};
pub use report::{ReportError, ReportResult};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // The #[from] attribute automatically converts a FetchError into an AppError::Fetch using the From trait.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

// Custom result type
pub type AppResult<T> = Result<T, AppError>;
