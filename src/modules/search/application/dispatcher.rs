use std::sync::Arc;
use tokio::{sync::mpsc, task::JoinHandle};
use tokio_util::sync::CancellationToken;

use crate::shared::errors::AppError;

use super::{
    session::{SearchCompletion, SearchTicket},
    use_cases::SearchAnimeUseCase,
};

/// Runs searches off the owner's context and hands each result back over a channel.
///
/// Every dispatched ticket produces exactly one [`SearchCompletion`], including when
/// the dispatcher is shut down while the request is still running.
pub struct SearchDispatcher {
    use_case: Arc<SearchAnimeUseCase>,
    completions: mpsc::UnboundedSender<SearchCompletion>,
    shutdown: CancellationToken,
}

impl SearchDispatcher {
    /// Create a dispatcher and the receiving end the session owner should poll.
    pub fn new(
        use_case: Arc<SearchAnimeUseCase>,
    ) -> (Self, mpsc::UnboundedReceiver<SearchCompletion>) {
        let (completions, receiver) = mpsc::unbounded_channel();
        (
            Self {
                use_case,
                completions,
                shutdown: CancellationToken::new(),
            },
            receiver,
        )
    }

    pub fn dispatch(&self, ticket: SearchTicket) -> JoinHandle<()> {
        let use_case = Arc::clone(&self.use_case);
        let completions = self.completions.clone();
        let cancelled = self.shutdown.child_token();

        tokio::spawn(async move {
            let SearchTicket { generation, query } = ticket;

            // cancellation wins over a request that is ready at the same poll
            let outcome = tokio::select! {
                biased;
                _ = cancelled.cancelled() => {
                    log::info!("Search #{} for '{}' cancelled", generation, query);
                    Err(AppError::TransportError("Search cancelled".to_string()))
                }
                outcome = use_case.execute(&query) => outcome,
            };

            let completion = SearchCompletion {
                generation,
                query,
                outcome,
            };
            if completions.send(completion).is_err() {
                log::debug!("Search #{} finished after its receiver was dropped", generation);
            }
        })
    }

    /// Cancel every outstanding search. Each still delivers a failed completion.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.shutdown.is_cancelled()
    }
}
