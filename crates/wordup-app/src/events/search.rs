use std::sync::Arc;

use kanal::AsyncSender;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use wordup_core::{SearchOutcome, SearchTicket, Session};
use wordup_lookup::Lookup;
use wordup_types::{AppEvent, WordResult};

use super::{EventContext, Flow};

pub fn handle_search(session: &mut Session, ctx: &EventContext) -> Flow {
    let outcome = session.begin_search();
    dispatch(outcome, ctx)
}

/// Synonym clicks search immediately, unlike history selection
pub fn handle_synonym(session: &mut Session, ctx: &EventContext, word: &str) -> Flow {
    tracing::debug!("Synonym selected: {word}");
    let outcome = session.select_synonym(word);
    dispatch(outcome, ctx)
}

pub fn handle_lookup_finished(
    session: &mut Session,
    ticket: u64,
    result: Result<WordResult, String>,
) -> Flow {
    if session.complete_search(ticket, result) {
        Flow::Render
    } else {
        Flow::Idle
    }
}

fn dispatch(outcome: SearchOutcome, ctx: &EventContext) -> Flow {
    match outcome {
        SearchOutcome::Started(ticket) => {
            spawn_lookup(
                ticket,
                ctx.lookup.clone(),
                ctx.inbox_tx.clone(),
                ctx.cancel.child_token(),
            );
            Flow::Render
        }
        SearchOutcome::Rejected => Flow::Render,
        SearchOutcome::Skipped => Flow::Idle,
    }
}

/// Run one lookup off the loop and post the result back
pub fn spawn_lookup(
    ticket: SearchTicket,
    lookup: Arc<dyn Lookup>,
    inbox_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tracing::info!("Searching #{} for {:?}", ticket.id, ticket.term);

    tokio::spawn(async move {
        let result = tokio::select! {
            result = lookup.lookup(&ticket.term) => result,
            _ = cancel.cancelled() => {
                tracing::debug!("Lookup #{} dropped on shutdown", ticket.id);
                return;
            }
        };

        let result = result.map_err(|e| e.to_string());
        if let Err(e) = inbox_tx
            .send(AppEvent::LookupFinished {
                ticket: ticket.id,
                result,
            })
            .await
        {
            tracing::debug!("Lookup #{} result not delivered: {e}", ticket.id);
        }
    })
}
