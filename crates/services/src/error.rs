//! Shared error types for the services crate.

use thiserror::Error;

use senti_core::ResultSetError;

/// Errors emitted by `SessionService::login`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    /// The endpoint rejected the credentials (any non-2xx response).
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `AnalysisService::analyze`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AnalysisError {
    /// Another upload is still in flight; this one was never started.
    #[error("an analysis request is already in flight")]
    Busy,
    #[error("no session token available")]
    NotAuthenticated,
    #[error("analysis request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Inconsistent(#[from] ResultSetError),
}
