pub mod search_query;

pub use search_query::SearchQuery;
