/// Scripted stand-in for the HTTP transport
use anime_search_lib::{
    modules::search::domain::HttpTransport,
    shared::errors::{AppError, AppResult},
};
use async_trait::async_trait;
use reqwest::Url;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

pub struct FakeTransport {
    responses: Mutex<VecDeque<AppResult<String>>>,
    requests: Mutex<Vec<Url>>,
    gate: Option<Arc<Notify>>,
}

impl FakeTransport {
    /// Answer each GET with the next scripted response, immediately.
    pub fn with_responses(responses: Vec<AppResult<String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Like `with_responses`, but every GET waits for one `gate.notify_one()`.
    pub fn gated(responses: Vec<AppResult<String>>, gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::with_responses(responses)
        }
    }

    pub fn requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn get(&self, url: &Url) -> AppResult<String> {
        self.requests.lock().unwrap().push(url.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let next = self.responses.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Err(AppError::TransportError("no scripted response".to_string())))
    }
}
