pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-exports for easy external access
pub use application::{
    SearchAnimeUseCase, SearchCompletion, SearchDispatcher, SearchSession, SearchTicket,
};
pub use domain::{AnimeRecord, HttpTransport, SearchQuery, SearchResult};
pub use infrastructure::ReqwestTransport;
pub use presentation::{SearchStatus, StatusTone};
