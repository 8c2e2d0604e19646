use async_trait::async_trait;
use reqwest::Url;

#[cfg(test)]
use mockall::automock;

use crate::shared::errors::AppResult;

/// Outbound HTTP access used by the search use case.
/// Implementations return the raw response body of a successful (2xx) GET;
/// any other outcome is an `AppError::TransportError`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &Url) -> AppResult<String>;
}
