use async_trait::async_trait;

use senti_core::model::{ResultSet, SessionToken};

use crate::error::{AnalysisError, AuthError};

/// A CSV picked up from a drop or the file browser, ready to upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsvUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl CsvUpload {
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Exchange credentials for a bearer token.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn request_token(
        &self,
        username: &str,
        password: &str,
    ) -> Result<SessionToken, AuthError>;
}

/// Submit a CSV for analysis under a bearer token.
#[async_trait]
pub trait AnalysisGateway: Send + Sync {
    async fn analyze(
        &self,
        token: &SessionToken,
        upload: CsvUpload,
    ) -> Result<ResultSet, AnalysisError>;
}
