//! Default HTTP adapter backed by reqwest

use crate::constants::USER_AGENT;
use crate::error::Result;
use crate::geo::Params;
use crate::http::{query_pairs, HttpAdapter, HttpError};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// reqwest-based [`HttpAdapter`]
#[derive(Debug, Clone)]
pub struct ReqwestAdapter {
    client: reqwest::Client,
}

impl ReqwestAdapter {
    /// Create an adapter with the default User-Agent and no timeout
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    /// Create an adapter whose requests fail after `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an existing client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpAdapter for ReqwestAdapter {
    async fn get(&self, url: &str, params: &Params) -> std::result::Result<Value, HttpError> {
        debug!(url, "sending GET");

        let response = self.client.get(url).query(&query_pairs(params)).send().await?;

        if !response.status().is_success() {
            return Err(format!("{} returned status: {}", url, response.status()).into());
        }

        Ok(response.json::<Value>().await?)
    }
}
