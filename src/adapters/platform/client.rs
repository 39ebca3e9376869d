//! Platform HTTP client
//!
//! This module provides the shared HTTP plumbing for the survey platform:
//! client construction from an immutable [`PlatformConfig`], base URL
//! normalization, and the token/content-type headers applied to every
//! request. The operations themselves live in [`super::export`] (response
//! exports) and [`super::survey`] (survey definitions) — each is a function
//! of the client's configuration and an explicit request, with no hidden
//! mutable state.

use crate::config::{PlatformConfig, SecretString};
use crate::domain::{PlatformError, Result, SurveyorError};
use reqwest::{Client, ClientBuilder, RequestBuilder};
use std::time::Duration;
use url::Url;

/// Header carrying the platform API token
const API_TOKEN_HEADER: &str = "x-api-token";

/// Client for the survey platform API
pub struct PlatformClient {
    http: Client,
    base_url: String,
    response_endpoint: String,
    api_token: SecretString,
    content_type: String,
}

impl PlatformClient {
    /// Creates a new platform client from configuration
    ///
    /// The base URL is normalized to always end with `/` so endpoint
    /// suffixes can be appended directly.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &PlatformConfig) -> Result<Self> {
        Url::parse(&config.base_url).map_err(|e| {
            SurveyorError::Configuration(format!(
                "Invalid platform base URL '{}': {}",
                config.base_url, e
            ))
        })?;

        let http = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                PlatformError::ConnectionFailed(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            base_url: normalize_base_url(&config.base_url),
            response_endpoint: config.response_endpoint.clone(),
            api_token: config.api_token.clone(),
            content_type: config.content_type.clone(),
        })
    }

    /// The normalized base URL (always ends with `/`)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configured response-export endpoint suffix
    pub fn response_endpoint(&self) -> &str {
        &self.response_endpoint
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Joins an endpoint suffix onto the base URL
    pub(crate) fn endpoint_url(&self, suffix: &str) -> String {
        format!("{}{}", self.base_url, suffix.trim_start_matches('/'))
    }

    /// Applies the token and content-type headers to a request
    pub(crate) fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        use secrecy::ExposeSecret;

        builder
            .header(API_TOKEN_HEADER, self.api_token.expose_secret().as_ref())
            .header("Content-Type", format!("application/{}", self.content_type))
    }
}

fn normalize_base_url(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}

/// Maps a transport-level failure into the domain error
pub(crate) fn connection_error(err: reqwest::Error) -> PlatformError {
    PlatformError::ConnectionFailed(err.to_string())
}
