use reqwest::Url;

use crate::modules::search::domain::SearchQuery;

/// Maximum number of records requested per search.
pub const SEARCH_RESULT_LIMIT: usize = 5;

/// Fields requested from the API.
pub const FIELD_SELECTION: &str = "title,synopsis";

/// Build the GET URL for `query` against the `<base>/anime` endpoint.
pub fn build_request_url(endpoint: &Url, query: &SearchQuery) -> Url {
    let mut url = endpoint.clone();
    url.set_query(Some(&format!(
        "q={}&limit={}&fields={}",
        urlencoding::encode(query.as_str()),
        SEARCH_RESULT_LIMIT,
        FIELD_SELECTION
    )));
    url
}
