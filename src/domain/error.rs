// Domain errors
use thiserror::Error;

/// Errors raised while answering a dashboard or series request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// The request named a measure the observation table does not carry.
    #[error("invalid request: unknown measure '{measure}'")]
    InvalidRequest { measure: String },

    #[error("unknown country '{0}'")]
    UnknownCountry(String),
}

/// Structural violations detected while assembling a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("duplicate observation for {entity} in {year}")]
    DuplicateObservation { entity: String, year: i32 },

    #[error("observation for {entity} in {year} has {found} values, expected {expected}")]
    RowWidth {
        entity: String,
        year: i32,
        expected: usize,
        found: usize,
    },

    #[error("measure '{0}' appears in more than one column")]
    DuplicateMeasure(String),

    #[error("duplicate country profile for {0}")]
    DuplicateCountry(String),
}
