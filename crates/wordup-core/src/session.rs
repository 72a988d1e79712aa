use wordup_types::{ViewSnapshot, WordResult};

use crate::drawer::Drawer;
use crate::history::{History, timestamp_now};
use crate::validate::is_valid_word;

pub const INVALID_WORD_MESSAGE: &str =
    "Please enter a valid word (letters only, no numbers or special characters).";
pub const FETCH_FAILED_MESSAGE: &str =
    "There was an error fetching the word data. Please try again later.";

/// An accepted search waiting for its lookup to finish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub id: u64,
    pub term: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Term failed validation; error message set, nothing else touched
    Rejected,
    /// Blank after trimming; silently ignored
    Skipped,
    /// Caller must run the lookup and report back with `complete_search`
    Started(SearchTicket),
}

/// Search, result and history state behind one view.
///
/// A failed lookup leaves the previous word in place next to the error.
/// Only the most recently issued ticket may update state.
#[derive(Debug, Default)]
pub struct Session {
    search_term: String,
    word: WordResult,
    error: Option<String>,
    history: History,
    drawer: Drawer,
    last_ticket: u64,
    pending: Option<SearchTicket>,
}

impl Session {
    pub fn new(drawer: Drawer) -> Self {
        Self {
            drawer,
            ..Self::default()
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Validate the current term and, if accepted, issue a new ticket
    pub fn begin_search(&mut self) -> SearchOutcome {
        if !is_valid_word(&self.search_term) {
            tracing::debug!("Rejected search term {:?}", self.search_term);
            self.error = Some(INVALID_WORD_MESSAGE.to_string());
            return SearchOutcome::Rejected;
        }

        if self.search_term.trim().is_empty() {
            return SearchOutcome::Skipped;
        }

        self.last_ticket += 1;
        let ticket = SearchTicket {
            id: self.last_ticket,
            term: self.search_term.clone(),
        };
        if let Some(previous) = self.pending.replace(ticket.clone()) {
            tracing::debug!(
                "Search #{} superseded by #{} before completing",
                previous.id,
                ticket.id
            );
        }

        SearchOutcome::Started(ticket)
    }

    /// Apply a lookup result. Returns false when the ticket is stale.
    pub fn complete_search(&mut self, ticket: u64, result: Result<WordResult, String>) -> bool {
        let term = match &self.pending {
            Some(pending) if pending.id == ticket => pending.term.clone(),
            _ => {
                tracing::debug!("Discarding stale lookup result #{ticket}");
                return false;
            }
        };
        self.pending = None;

        match result {
            Ok(word) => {
                self.word = word;
                self.history.record(&term, timestamp_now());
                self.error = None;
            }
            Err(detail) => {
                tracing::warn!("Lookup for {term:?} failed: {detail}");
                self.error = Some(FETCH_FAILED_MESSAGE.to_string());
            }
        }

        true
    }

    /// Put a past term back in the input without searching
    pub fn select_history_term(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.error = None;
    }

    pub fn remove_history_entry(&mut self, term: &str) {
        self.history.remove(term);
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Put the synonym in the input and search for it right away
    pub fn select_synonym(&mut self, word: &str) -> SearchOutcome {
        self.search_term = word.to_string();
        self.begin_search()
    }

    pub fn resize(&mut self, width: u32) {
        self.drawer.resize(width);
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer.toggle();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn word(&self) -> &WordResult {
        &self.word
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn drawer(&self) -> &Drawer {
        &self.drawer
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            search_term: self.search_term.clone(),
            word: self.word.clone(),
            error: self.error.clone(),
            history: self.history.entries().to_vec(),
            drawer: self.drawer.state(),
            loading: self.is_loading(),
        }
    }
}
