use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use wordup_core::Session;
use wordup_core::drawer::Drawer;
use wordup_lookup::Lookup;
use wordup_types::{AppEvent, UiEvent};

use crate::state::AppState;

pub mod history;
pub mod search;
pub mod viewport;

use history::{handle_clear, handle_remove, handle_select};
use search::{handle_lookup_finished, handle_search, handle_synonym};
use viewport::{handle_resize, handle_toggle};

/// What the loop does after an event
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Render,
    Idle,
    Quit,
}

/// Everything a handler may touch besides the session
pub struct EventContext {
    pub lookup: Arc<dyn Lookup>,
    /// Lookup tasks post their results back through this
    pub inbox_tx: AsyncSender<AppEvent>,
    pub cancel: CancellationToken,
}

/// App's main loop. Sole owner of the session.
pub async fn event_loop(
    state: Arc<AppState>,
    ctx: EventContext,
    inbox_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let mut session = {
        let config = state.config.read().await;
        Session::new(Drawer::mount(
            config.ui.drawer_breakpoint,
            config.ui.viewport_width,
        ))
    };

    let provider = ctx.lookup.metadata();
    tracing::info!(
        "[EVENT_LOOP] Mounted with drawer {:?}, using {} at {}",
        session.drawer().state(),
        provider.name,
        provider.endpoint
    );
    app_to_ui_tx.send(AppEvent::Render(session.snapshot())).await?;

    loop {
        let event = tokio::select! {
            event = inbox_rx.recv() => event?,
            _ = ctx.cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
        };

        tracing::debug!("[EVENT_LOOP] Event received: {:?}", event);
        match handle_events(&mut session, &ctx, &app_to_ui_tx, event).await? {
            Flow::Render => {
                app_to_ui_tx.send(AppEvent::Render(session.snapshot())).await?;
            }
            Flow::Idle => {}
            Flow::Quit => break,
        }
    }

    // Stop in-flight lookups before the UI goes away
    ctx.cancel.cancel();
    let _ = app_to_ui_tx.send(AppEvent::Shutdown).await;

    Ok(())
}

pub async fn handle_events(
    session: &mut Session,
    ctx: &EventContext,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<Flow> {
    let flow = match event {
        AppEvent::UiEvent(event) => handle_ui_event(session, ctx, event),
        AppEvent::LookupFinished { ticket, result } => {
            handle_lookup_finished(session, ticket, result)
        }
        AppEvent::Notice(message) => {
            app_to_ui_tx.send(AppEvent::Notice(message)).await?;
            Flow::Idle
        }
        AppEvent::Render(_) | AppEvent::Shutdown => {
            // UI-only events, ignore in backend
            Flow::Idle
        }
    };

    Ok(flow)
}

fn handle_ui_event(session: &mut Session, ctx: &EventContext, event: UiEvent) -> Flow {
    match event {
        UiEvent::SetSearchTerm(term) => {
            session.set_search_term(term);
            Flow::Render
        }
        UiEvent::Search => handle_search(session, ctx),
        UiEvent::SelectSynonym(word) => handle_synonym(session, ctx, &word),
        UiEvent::SelectHistory(term) => handle_select(session, &term),
        UiEvent::RemoveHistory(term) => handle_remove(session, &term),
        UiEvent::ClearHistory => handle_clear(session),
        UiEvent::Resize { width } => handle_resize(session, width),
        UiEvent::ToggleDrawer => handle_toggle(session),
        UiEvent::Quit => {
            tracing::info!("Quit requested");
            Flow::Quit
        }
    }
}
