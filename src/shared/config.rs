use reqwest::Url;
use std::env;
use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_BASE_URL: &str = "https://api.jikan.moe/v4";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const BASE_URL_VAR: &str = "ANIME_SEARCH_BASE_URL";
const TIMEOUT_VAR: &str = "ANIME_SEARCH_TIMEOUT_SECS";
const USER_AGENT_VAR: &str = "ANIME_SEARCH_USER_AGENT";

/// Runtime settings for the search client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

impl SearchConfig {
    /// Read overrides from the process environment. Call `dotenvy::dotenv()` first
    /// if a `.env` file should be honored.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset or blank keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(base_url) = read(BASE_URL_VAR) {
            config.base_url = base_url.trim().to_string();
        }

        if let Some(raw) = read(TIMEOUT_VAR) {
            config.timeout_seconds = raw.trim().parse::<u64>().map_err(|e| {
                AppError::ConfigError(format!("{} must be a whole number: {}", TIMEOUT_VAR, e))
            })?;
        }

        if let Some(user_agent) = read(USER_AGENT_VAR) {
            config.user_agent = user_agent;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.timeout_seconds == 0 {
            return Err(AppError::ConfigError(format!(
                "{} must be greater than zero",
                TIMEOUT_VAR
            )));
        }
        self.search_endpoint().map(|_| ())
    }

    /// The `<base_url>/anime` search endpoint.
    pub fn search_endpoint(&self) -> AppResult<Url> {
        let endpoint = format!("{}/anime", self.base_url.trim_end_matches('/'));
        let url = Url::parse(&endpoint)
            .map_err(|e| AppError::ConfigError(format!("Invalid base URL '{}': {}", self.base_url, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(AppError::ConfigError(format!(
                "Unsupported URL scheme '{}' in {}",
                other, self.base_url
            ))),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

fn default_user_agent() -> String {
    format!("anime-search/{}", env!("CARGO_PKG_VERSION"))
}
