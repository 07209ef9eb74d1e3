//! Outbound HTTP transport
//!
//! One shared client for every adapter, with a fixed request timeout and
//! bounded retry on transient server errors (429/500/502/503/504). Retry is
//! transparent to adapters; anything that survives it surfaces as an error
//! the adapter downgrades to an empty result.

use std::time::Duration;

use nvt_common::{Error, Result};
use reqwest::{redirect, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Statuses worth retrying
const RETRYABLE: [StatusCode; 5] = [
    StatusCode::TOO_MANY_REQUESTS,
    StatusCode::INTERNAL_SERVER_ERROR,
    StatusCode::BAD_GATEWAY,
    StatusCode::SERVICE_UNAVAILABLE,
    StatusCode::GATEWAY_TIMEOUT,
];

/// Shared HTTP transport for all source adapters
#[derive(Debug)]
pub struct Transport {
    client: Client,
    max_retries: u32,
    retry_delay: Duration,
}

impl Transport {
    pub fn new(
        timeout: Duration,
        user_agent: &str,
        max_retries: u32,
        retry_delay: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .redirect(redirect::Policy::limited(5))
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            client,
            max_retries,
            retry_delay,
        })
    }

    /// GET a URL, retrying transient server errors with linear backoff.
    async fn get(&self, url: &str) -> Result<Response> {
        let mut attempt = 0;
        loop {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| Error::Http(e.to_string()))?;

            let status = response.status();
            if RETRYABLE.contains(&status) && attempt < self.max_retries {
                attempt += 1;
                let delay = self.retry_delay * attempt;
                warn!(url = %url, status = %status, attempt, "Transient error, retrying");
                tokio::time::sleep(delay).await;
                continue;
            }

            if !status.is_success() {
                return Err(Error::Http(format!("{} returned {}", url, status)));
            }

            debug!(url = %url, status = %status, "Fetched");
            return Ok(response);
        }
    }

    /// GET a URL and return the body as text.
    pub async fn get_text(&self, url: &str) -> Result<String> {
        self.get(url)
            .await?
            .text()
            .await
            .map_err(|e| Error::Http(e.to_string()))
    }

    /// GET a URL and decode the body as JSON.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.get(url)
            .await?
            .json()
            .await
            .map_err(|e| Error::Parse(e.to_string()))
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn post_json<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http(format!("{} returned {}", url, status)));
        }

        response.json().await.map_err(|e| Error::Parse(e.to_string()))
    }
}
