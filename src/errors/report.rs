use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    // The existing file carries no recognizable timestamp, so it cannot be
    // compared against fresh content. It is left untouched.
    #[error("Existing report {0} has no recognizable timestamp")]
    CorruptReport(String),

    // Freshly rendered content always embeds a timestamp; failing to find one
    // means the template and the extraction pattern have drifted apart.
    #[error("Freshly rendered report for user {0} is missing its timestamp")]
    RenderInvariant(String),

    #[error("Username {0:?} is not safe to use as a file name")]
    UnsafeUsername(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type ReportResult<T> = Result<T, ReportError>;
