pub mod search_anime;

pub use search_anime::SearchAnimeUseCase;
