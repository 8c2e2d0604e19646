/// Test helper functions and service builders
use super::fake_transport::FakeTransport;
use anime_search_lib::{
    modules::search::{
        application::{SearchAnimeUseCase, SearchCompletion, SearchDispatcher},
        domain::HttpTransport,
    },
    shared::config::SearchConfig,
};
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct TestServices {
    pub transport: Arc<FakeTransport>,
    pub dispatcher: SearchDispatcher,
    pub completions: mpsc::UnboundedReceiver<SearchCompletion>,
}

/// Build the search stack around a fake transport, using the default endpoint
pub fn build_test_services(transport: FakeTransport) -> TestServices {
    let transport = Arc::new(transport);
    let dyn_transport: Arc<dyn HttpTransport> = transport.clone();

    let use_case = Arc::new(
        SearchAnimeUseCase::from_config(dyn_transport, &SearchConfig::default())
            .expect("default config is valid"),
    );
    let (dispatcher, completions) = SearchDispatcher::new(use_case);

    TestServices {
        transport,
        dispatcher,
        completions,
    }
}

/// Jikan-shaped body holding `(title, synopsis)` entries
pub fn jikan_body(entries: &[(&str, Option<&str>)]) -> String {
    let data: Vec<serde_json::Value> = entries
        .iter()
        .map(|(title, synopsis)| match synopsis {
            Some(s) => serde_json::json!({ "title": title, "synopsis": s }),
            None => serde_json::json!({ "title": title }),
        })
        .collect();
    serde_json::json!({ "data": data }).to_string()
}
