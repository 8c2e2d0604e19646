pub mod anime_record;

pub use anime_record::{AnimeRecord, SearchResult};
