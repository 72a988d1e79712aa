use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use wordup_lookup::Lookup;
use wordup_types::AppEvent;

use crate::events::{EventContext, event_loop};
use crate::state::AppState;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    /// UI intents and lookup results, consumed by the event loop
    pub inbox: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            inbox: kanal::bounded_async(64),
            app_to_ui: kanal::bounded_async(64),
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    lookup: Arc<dyn Lookup>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>, lookup: Arc<dyn Lookup>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            lookup,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Where front-end input goes
    pub fn input_sender(&self) -> &AsyncSender<AppEvent> {
        &self.channels.inbox.0
    }

    pub fn spawn_tasks(&self, prompt: bool) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            EventContext {
                lookup: self.lookup.clone(),
                inbox_tx: self.channels.inbox.0.clone(),
                cancel: self.cancel_token.child_token(),
            },
            self.channels.inbox.1.clone(),
            self.channels.app_to_ui.0.clone(),
        ));

        // UI loop
        tasks.spawn(ui_loop(
            self.channels.app_to_ui.1.clone(),
            std::io::stdout(),
            prompt,
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
