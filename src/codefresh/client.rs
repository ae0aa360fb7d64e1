use std::time::Duration;

use log::debug;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::config::PlatformCredentials;

/// Platform API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid API URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error from {url}: {status}")]
    Status { url: String, status: String },

    #[error("Invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Authenticated client for the platform REST API.
///
/// Every call is a GET returning the decoded JSON body.
pub struct PlatformClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl PlatformClient {
    pub fn new(credentials: &PlatformCredentials, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: credentials.base_url.trim_end_matches('/').to_string(),
            token: credentials.token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|source| ApiError::InvalidUrl { url: raw, source })
    }

    async fn get(&self, url: Url) -> Result<Value, ApiError> {
        debug!("GET {}", url);
        let url_str = url.to_string();

        let response = self
            .client
            .get(url)
            .header("Authorization", &self.token)
            .send()
            .await
            .map_err(|source| ApiError::Request {
                url: url_str.clone(),
                source,
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ApiError::Status {
                url: url_str,
                status: status.to_string(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|source| ApiError::Decode { url: url_str, source })
    }

    /// Pipelines runtimes of the current account
    pub async fn account_runtimes(&self) -> Result<Value, ApiError> {
        self.get(self.endpoint("/runtime-environments")?).await
    }

    /// One runtime definition; the name is percent-encoded as a path segment
    pub async fn runtime(&self, name: &str) -> Result<Value, ApiError> {
        let mut url = self.endpoint("/runtime-environments")?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl {
                url: self.base_url.clone(),
                source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
            })?
            .push(name);
        self.get(url).await
    }

    pub async fn onprem_accounts(&self) -> Result<Value, ApiError> {
        self.get(self.endpoint("/admin/accounts")?).await
    }

    pub async fn onprem_runtimes(&self) -> Result<Value, ApiError> {
        self.get(self.endpoint("/admin/runtime-environments")?).await
    }

    /// First page of users, one entry
    pub async fn onprem_users(&self) -> Result<Value, ApiError> {
        self.get(self.endpoint("/admin/user?limit=1&page=1")?).await
    }

    pub async fn onprem_feature_flags(&self) -> Result<Value, ApiError> {
        self.get(self.endpoint("/admin/features")?).await
    }
}
