pub mod dispatcher;
pub mod session;
pub mod use_cases;

pub use dispatcher::SearchDispatcher;
pub use session::{SearchCompletion, SearchSession, SearchTicket};
pub use use_cases::SearchAnimeUseCase;
