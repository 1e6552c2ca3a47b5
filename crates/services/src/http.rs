use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{info, warn};

use senti_core::model::{ResultSet, SessionToken};

use crate::config::ApiConfig;
use crate::error::{AnalysisError, AuthError};
use crate::gateway::{AnalysisGateway, AuthGateway, CsvUpload};

/// Reqwest-backed implementation of both gateways, sharing one client.
#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    config: ApiConfig,
}

impl HttpApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl AuthGateway for HttpApi {
    async fn request_token(
        &self,
        username: &str,
        password: &str,
    ) -> Result<SessionToken, AuthError> {
        let response = self
            .client
            .post(self.config.endpoint("token"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;

        // Every rejection comes back as a non-2xx; the client treats them
        // all as bad credentials.
        if !response.status().is_success() {
            warn!(status = %response.status(), "token request rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let body: TokenResponse = response.json().await?;
        Ok(SessionToken::new(body.access_token))
    }
}

#[async_trait]
impl AnalysisGateway for HttpApi {
    async fn analyze(
        &self,
        token: &SessionToken,
        upload: CsvUpload,
    ) -> Result<ResultSet, AnalysisError> {
        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str("text/csv")?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.config.endpoint("analyze"))
            .bearer_auth(token.expose())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "analyze request rejected");
            return Err(AnalysisError::HttpStatus(status));
        }

        let set: ResultSet = response.json().await?;
        set.validate()?;
        info!(rows = set.results.len(), "analysis payload received");
        Ok(set)
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}
