//! Line-oriented terminal front end.
//!
//! Plays the part of the search window: each input line is the text field plus
//! the search button, the writer is the output area and status bar. Completions
//! arrive on the dispatcher channel and are applied here, on the loop that owns
//! the session, so display state is never touched from two places.

use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use crate::{
    modules::search::{
        application::{SearchCompletion, SearchDispatcher, SearchSession},
        presentation::{SearchStatus, StatusTone},
    },
    shared::errors::AppError,
};

/// Input line that ends an interactive session.
pub const QUIT_COMMAND: &str = ":q";

pub struct TerminalFrontend<W: Write> {
    session: SearchSession,
    dispatcher: SearchDispatcher,
    completions: mpsc::UnboundedReceiver<SearchCompletion>,
    out: W,
}

impl<W: Write> TerminalFrontend<W> {
    pub fn new(
        dispatcher: SearchDispatcher,
        completions: mpsc::UnboundedReceiver<SearchCompletion>,
        out: W,
    ) -> Self {
        Self {
            session: SearchSession::new(),
            dispatcher,
            completions,
            out,
        }
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    /// Run a single search and wait for it. Returns the final status.
    pub async fn run_once(&mut self, raw_query: &str) -> std::io::Result<SearchStatus> {
        if !self.submit(raw_query)? {
            return Ok(self.session.status().clone());
        }

        while self.session.is_in_flight() {
            match self.completions.recv().await {
                Some(completion) => self.apply(completion)?,
                None => break,
            }
        }

        Ok(self.session.status().clone())
    }

    /// Read queries line by line until `:q` or end of input. A search still
    /// running at end of input is waited for; `:q` cancels it.
    pub async fn run_interactive<R>(&mut self, input: R) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        let mut input_open = true;

        self.render()?;

        while input_open || self.session.is_in_flight() {
            tokio::select! {
                line = lines.next_line(), if input_open => match line? {
                    Some(line) if line.trim() == QUIT_COMMAND => {
                        if self.session.is_in_flight() {
                            self.dispatcher.shutdown();
                        }
                        break;
                    }
                    Some(line) => {
                        self.submit(&line)?;
                    }
                    None => input_open = false,
                },
                Some(completion) = self.completions.recv() => {
                    self.apply(completion)?;
                }
                else => break,
            }
        }

        self.out.flush()
    }

    /// Hand one query to the session. Returns whether a request went out.
    fn submit(&mut self, raw_query: &str) -> std::io::Result<bool> {
        match self.session.begin(raw_query) {
            Ok(ticket) => {
                self.dispatcher.dispatch(ticket);
                self.render()?;
                Ok(true)
            }
            Err(AppError::SearchInProgress) => {
                writeln!(
                    self.out,
                    "! A search is already running. Please wait for it to finish."
                )?;
                Ok(false)
            }
            Err(e) => {
                writeln!(self.out, "! {}", e.user_message())?;
                Ok(false)
            }
        }
    }

    fn apply(&mut self, completion: SearchCompletion) -> std::io::Result<()> {
        if self.session.complete(completion) {
            self.render()?;
        }
        Ok(())
    }

    fn render(&mut self) -> std::io::Result<()> {
        let status = self.session.status();
        writeln!(self.out, "{} {}", tone_label(status.tone()), status.message())?;
        if !self.session.output().is_empty() {
            writeln!(self.out, "{}", self.session.output())?;
        }
        self.out.flush()
    }
}

fn tone_label(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Neutral => "[ready]",
        StatusTone::Busy => "[busy]",
        StatusTone::Success => "[ok]",
        StatusTone::Warning => "[empty]",
        StatusTone::Error => "[error]",
    }
}
