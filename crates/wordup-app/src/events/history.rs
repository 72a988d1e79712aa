use wordup_core::Session;

use super::Flow;

/// Fills the input only; the user searches again explicitly
pub fn handle_select(session: &mut Session, term: &str) -> Flow {
    session.select_history_term(term);
    Flow::Render
}

pub fn handle_remove(session: &mut Session, term: &str) -> Flow {
    session.remove_history_entry(term);
    Flow::Render
}

pub fn handle_clear(session: &mut Session) -> Flow {
    tracing::debug!("Clearing {} history entries", session.history().len());
    session.clear_history();
    Flow::Render
}
