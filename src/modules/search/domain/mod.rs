pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::{AnimeRecord, SearchResult};
pub use repositories::HttpTransport;
pub use value_objects::SearchQuery;
