//! reqwest-backed [`HttpTransport`].
//!
//! One instance is created at startup and shared by reference for the lifetime
//! of the application. There is no retry or rate limiting: every call is a single GET.

use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Instant;
use tracing::{debug, warn};

use crate::{
    modules::search::domain::HttpTransport,
    shared::{
        config::SearchConfig,
        errors::{AppError, AppResult},
        utils::LogContext,
    },
};

const PROVIDER_NAME: &str = "Jikan";

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &SearchConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap an already configured client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &Url) -> AppResult<String> {
        let start = Instant::now();
        LogContext::api_call(PROVIDER_NAME, url.path(), "GET", None);

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!("{} API request failed: {}", PROVIDER_NAME, e);
            AppError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} API returned error: {}", PROVIDER_NAME, status);
            return Err(AppError::TransportError(format!(
                "{} API returned error: {}",
                PROVIDER_NAME, status
            )));
        }

        let body = response.text().await.map_err(|e| {
            AppError::TransportError(format!(
                "Failed to read {} response: {}",
                PROVIDER_NAME, e
            ))
        })?;

        debug!("{} response body: {} bytes", PROVIDER_NAME, body.len());
        LogContext::api_call(
            PROVIDER_NAME,
            url.path(),
            status.as_str(),
            Some(start.elapsed().as_millis() as u64),
        );

        Ok(body)
    }
}
