use thiserror::Error;

/// Errors raised while validating a decoded result set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResultSetError {
    #[error("statistics cover {counted} rows but the payload has {rows}")]
    CountMismatch { counted: usize, rows: usize },
}
