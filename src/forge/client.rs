//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Configurable timeout, User-Agent and bearer token
//! - Minimum spacing between requests
//! - Status code to error mapping (no retries: one failure is final)

use crate::error::ForgeError;
use crate::forge::ForgeConfig;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

/// Media type of GitHub REST API v3 responses
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Header reporting how many requests remain in the current window
const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

/// HTTP client wrapper with request spacing
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    forge: String,
    request_interval: Duration,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl HttpClient {
    /// Create a new HTTP client from a forge configuration
    pub fn new(config: &ForgeConfig, forge: &str) -> Result<Self, ForgeError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        if let Some(token) = &config.token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
                ForgeError::transport("HTTP client", forge, format!("invalid token: {}", e))
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(|e| {
                ForgeError::transport(
                    "HTTP client",
                    forge,
                    format!("failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self {
            client,
            forge: forge.to_string(),
            request_interval: config.request_interval,
            last_request: Arc::new(Mutex::new(None)),
        })
    }

    /// Wait until the configured interval since the previous request has passed
    async fn throttle(&self) {
        if self.request_interval.is_zero() {
            return;
        }

        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.request_interval {
                tokio::time::sleep(self.request_interval - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }

    /// Perform a GET request and map failure statuses to errors
    pub async fn get_with_context(
        &self,
        url: &str,
        resource: &str,
    ) -> Result<reqwest::Response, ForgeError> {
        self.throttle().await;
        debug!(url, "GET");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                ForgeError::timeout(resource, &self.forge)
            } else {
                ForgeError::transport(resource, &self.forge, e.to_string())
            }
        })?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ForgeError::not_found(resource, &self.forge));
        }

        if status == StatusCode::TOO_MANY_REQUESTS
            || (status == StatusCode::FORBIDDEN && rate_limit_exhausted(&response))
        {
            return Err(ForgeError::rate_limited(&self.forge));
        }

        if !status.is_success() {
            return Err(ForgeError::transport(
                resource,
                &self.forge,
                format!("HTTP {}", status),
            ));
        }

        Ok(response)
    }

    /// Perform a GET request and parse the JSON response
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        resource: &str,
    ) -> Result<T, ForgeError> {
        let response = self.get_with_context(url, resource).await?;

        response.json::<T>().await.map_err(|e| {
            ForgeError::invalid_response(
                resource,
                &self.forge,
                format!("failed to parse JSON: {}", e),
            )
        })
    }
}

/// Returns true if the response reports zero remaining requests
fn rate_limit_exhausted(response: &reqwest::Response) -> bool {
    response
        .headers()
        .get(RATE_LIMIT_REMAINING)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim() == "0")
}
