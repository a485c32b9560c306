use crate::domain::date::ReportDate;
use thiserror::Error;

/// Coal Reports application error types
///
/// Malformed per-day cell values are deliberately NOT represented here:
/// they degrade to unknown values inside the aggregation engine instead of
/// surfacing as errors. Only caller preconditions, configuration problems
/// and collaborator failures become `Error`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid date range: {from} is after {to}")]
    InvalidDateRange { from: ReportDate, to: ReportDate },

    #[error("Invalid metric definition `{name}`: {reason}")]
    InvalidMetric { name: String, reason: String },

    #[error("Storage error: {0}")]
    Storage(anyhow::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Storage(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
