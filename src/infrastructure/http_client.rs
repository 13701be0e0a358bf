//! HTTP client for the bulletin site
//!
//! Thin wrapper around `reqwest` configured the way the export run needs
//! it: bounded timeout per request, fixed user agent, gzip. Requests are
//! strictly sequential; there is no retry or rate limiting layer, a failed
//! request is reported to the caller which skips the pair and moves on.

use std::time::Duration;

use reqwest::{Client, ClientBuilder, Response};
use tracing::{debug, error};

use crate::infrastructure::config::{defaults, AppConfig};
use crate::infrastructure::fetch_error::{FetchError, FetchResult};

/// Configuration for HTTP client behavior
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
}

impl HttpClientConfig {
    /// Create HttpClientConfig from the application configuration
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            timeout_seconds: config.request_timeout_seconds,
            user_agent: config.user_agent.clone(),
        }
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: defaults::REQUEST_TIMEOUT_SECONDS,
            user_agent: defaults::USER_AGENT.to_string(),
        }
    }
}

/// HTTP client with bounded timeouts and status checking
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> FetchResult<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> FetchResult<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;

        Ok(Self { client })
    }

    /// GET a page, enforcing a success status
    pub async fn get(&self, url: &str) -> FetchResult<Response> {
        debug!("HTTP GET: {}", url);
        let response = self.client.get(url).send().await?;
        ensure_success(response, url)
    }

    /// POST form fields, optionally with a `Cookie` header, enforcing a
    /// success status
    pub async fn post_form(
        &self,
        url: &str,
        fields: &[(&str, String)],
        cookie: Option<&str>,
    ) -> FetchResult<Response> {
        debug!("HTTP POST: {}", url);

        let mut request = self.client.post(url).form(fields);
        if let Some(cookie) = cookie {
            request = request.header(reqwest::header::COOKIE, cookie);
        }

        let response = request.send().await?;
        ensure_success(response, url)
    }
}

fn ensure_success(response: Response, url: &str) -> FetchResult<Response> {
    let status = response.status();
    if !status.is_success() {
        error!("HTTP error {} for {}", status, url);
        return Err(FetchError::HttpStatus {
            status,
            url: url.to_string(),
        });
    }

    Ok(response)
}
