pub mod http_client;
pub mod jikan;

pub use http_client::ReqwestTransport;
pub use jikan::{build_request_url, decode, FIELD_SELECTION, SEARCH_RESULT_LIMIT};
