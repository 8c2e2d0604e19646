pub mod decoder;
pub mod models;
pub mod query_builder;

pub use decoder::decode;
pub use query_builder::{build_request_url, FIELD_SELECTION, SEARCH_RESULT_LIMIT};
