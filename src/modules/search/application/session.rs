//! Display state owned by the front end.
//!
//! `SearchSession` is the single mutation point for the status line, the output
//! buffer and the trigger. A search moves through
//! `begin` (trigger disabled) -> `complete` (trigger re-enabled), and each accepted
//! search carries a generation number so a completion that no longer matches the
//! in-flight search is dropped instead of overwriting newer state.

use crate::{
    modules::search::{
        domain::{SearchQuery, SearchResult},
        presentation::{format_error, format_results, format_searching, SearchStatus},
    },
    shared::errors::{AppError, AppResult},
};

/// Handle for one accepted search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub query: SearchQuery,
}

/// Outcome of one search, delivered back to the session owner.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCompletion {
    pub generation: u64,
    pub query: SearchQuery,
    pub outcome: AppResult<SearchResult>,
}

#[derive(Debug)]
pub struct SearchSession {
    status: SearchStatus,
    output: String,
    trigger_enabled: bool,
    generation: u64,
    in_flight: Option<u64>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            status: SearchStatus::Idle,
            output: String::new(),
            trigger_enabled: true,
            generation: 0,
            in_flight: None,
        }
    }

    pub fn status(&self) -> &SearchStatus {
        &self.status
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn is_trigger_enabled(&self) -> bool {
        self.trigger_enabled
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Accept a search request from the user.
    ///
    /// Blank input and requests made while a search is running are rejected
    /// without touching the displayed state. Blank input is always an
    /// `InputError`, even while the trigger is disabled.
    pub fn begin(&mut self, raw_input: &str) -> AppResult<SearchTicket> {
        let query = SearchQuery::parse(raw_input)?;

        if !self.trigger_enabled {
            log::debug!("Search rejected: trigger is disabled");
            return Err(AppError::SearchInProgress);
        }

        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.trigger_enabled = false;
        self.status = SearchStatus::InProgress;
        self.output = format_searching(&query);

        log::debug!("Search #{} started for '{}'", self.generation, query);

        Ok(SearchTicket {
            generation: self.generation,
            query,
        })
    }

    /// Apply a finished search. Returns `false` when the completion is stale
    /// (no search in flight, or a different generation) and was ignored.
    pub fn complete(&mut self, completion: SearchCompletion) -> bool {
        if self.in_flight != Some(completion.generation) {
            log::warn!(
                "Ignoring stale completion #{} for '{}' (in flight: {:?})",
                completion.generation,
                completion.query,
                self.in_flight
            );
            return false;
        }

        match &completion.outcome {
            Ok(result) if result.is_empty() => {
                self.status = SearchStatus::Empty;
                self.output = format_results(result, &completion.query);
            }
            Ok(result) => {
                self.status = SearchStatus::Found {
                    count: result.len(),
                };
                self.output = format_results(result, &completion.query);
            }
            Err(error) => {
                self.status = SearchStatus::Failed {
                    message: error.user_message(),
                };
                self.output = format_error(error);
            }
        }

        self.in_flight = None;
        self.trigger_enabled = true;

        log::debug!(
            "Search #{} finished: {}",
            completion.generation,
            self.status.message()
        );
        true
    }
}
