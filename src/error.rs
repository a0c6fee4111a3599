//! Error type shared by the loader, resolver, and renderer.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("no *_ticks.csv found in {}", .0.display())]
    NoCandidatesFound(PathBuf),

    #[error("expected columns in {}: {}", path.display(), required.join(", "))]
    MissingRequiredColumns {
        path: PathBuf,
        required: Vec<String>,
    },

    #[error("could not parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid value {value:?} in column {column} at row {row} of {}", path.display())]
    InvalidValue {
        path: PathBuf,
        column: String,
        row: usize,
        value: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not render {}: {message}", path.display())]
    Render { path: PathBuf, message: String },
}

pub type ReportResult<T> = Result<T, ReportError>;
