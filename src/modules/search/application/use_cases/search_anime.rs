use reqwest::Url;
use std::sync::Arc;

use crate::{
    modules::search::{
        domain::{HttpTransport, SearchQuery, SearchResult},
        infrastructure::jikan::{build_request_url, decode, SEARCH_RESULT_LIMIT},
    },
    shared::{
        config::SearchConfig,
        errors::AppResult,
        utils::{LogContext, TimedOperation},
    },
};

/// Use case for one anime search: build the URL, GET it, decode the body.
pub struct SearchAnimeUseCase {
    transport: Arc<dyn HttpTransport>,
    endpoint: Url,
}

impl SearchAnimeUseCase {
    pub fn new(transport: Arc<dyn HttpTransport>, endpoint: Url) -> Self {
        Self {
            transport,
            endpoint,
        }
    }

    pub fn from_config(transport: Arc<dyn HttpTransport>, config: &SearchConfig) -> AppResult<Self> {
        Ok(Self::new(transport, config.search_endpoint()?))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Execute the search. Transport and decode failures are returned as-is.
    pub async fn execute(&self, query: &SearchQuery) -> AppResult<SearchResult> {
        let timer = TimedOperation::new("anime search");
        LogContext::search_operation(query.as_str(), Some("Jikan"), None);

        let url = build_request_url(&self.endpoint, query);
        log::debug!("Requesting {}", url);

        let body = match self.transport.get(&url).await {
            Ok(body) => body,
            Err(e) => {
                LogContext::error_with_context(&e, "Anime search request failed");
                return Err(e);
            }
        };

        let result = match decode(&body) {
            Ok(result) => result,
            Err(e) => {
                LogContext::error_with_context(&e, "Anime search response was not understood");
                return Err(e);
            }
        };

        if result.len() > SEARCH_RESULT_LIMIT {
            log::debug!(
                "Jikan returned {} records, keeping the first {}",
                result.len(),
                SEARCH_RESULT_LIMIT
            );
        }
        let result = result.truncated(SEARCH_RESULT_LIMIT);

        LogContext::search_operation(query.as_str(), Some("Jikan"), Some(result.len()));
        timer.finish_with_info(&format!("{} results", result.len()));

        Ok(result)
    }
}
