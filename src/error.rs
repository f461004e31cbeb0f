//! Error types for route generation.
//!
//! A [`RouteError`] returned from [`crate::run`] aborts the run. Bad fields on
//! a single input row are not fatal, the pipeline turns them into a
//! [`crate::processing::SkipReason`].

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the route generator.
#[derive(Error, Debug)]
pub enum RouteError {
    #[error("{text:?} is not a valid IP address")]
    InvalidAddress { text: String },

    #[error("{path}:{line}: {text:?} is not a valid next hop interface")]
    InvalidNextHop {
        path: PathBuf,
        line: usize,
        text: String,
    },

    #[error("Unable to open workbook {path}: {reason}")]
    Workbook { path: PathBuf, reason: String },

    #[error("Sheet {sheet} not found in workbook {path}")]
    MissingSheet { path: PathBuf, sheet: String },

    #[error("Directory not found: {0}")]
    MissingDirectory(PathBuf),

    #[error("{name:?} cannot be used as a {kind} in a route file path")]
    UnsafeName { kind: &'static str, name: String },

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using RouteError
pub type RouteResult<T> = Result<T, RouteError>;

impl RouteError {
    pub(crate) fn invalid_address(text: &str) -> Self {
        RouteError::InvalidAddress {
            text: text.to_string(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RouteError::Io {
            path: path.into(),
            source,
        }
    }
}
