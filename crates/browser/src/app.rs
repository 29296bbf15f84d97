//! The state container and its completion pump.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc;
use vecview_client::{Connection, StoreClient};
use vecview_core::{AppConfig, StalePolicy};

use crate::event::{Action, Completion};
use crate::render::Renderer;
use crate::state::AppState;

/// Knobs of the state machine taken from configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserOptions {
    pub stale_policy: StalePolicy,

    /// Forwarded as `?limit=` on document fetches when set
    pub documents_limit: Option<u32>,
}

impl From<&AppConfig> for BrowserOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            stale_policy: config.stale_policy,
            documents_limit: config.documents_limit,
        }
    }
}

/// The browser: state, renderer and the store it talks to.
///
/// Owned by one task. Requests run as spawned tokio tasks and are never
/// cancelled; their results queue up until [`App::pump`] applies them.
pub struct App<R: Renderer> {
    pub(crate) state: AppState,
    pub(crate) client: Arc<dyn StoreClient>,
    pub(crate) renderer: R,
    pub(crate) options: BrowserOptions,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
    in_flight: usize,
}

impl<R: Renderer> App<R> {
    pub fn new(client: Arc<dyn StoreClient>, renderer: R, options: BrowserOptions) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            client,
            renderer,
            options,
            completions_tx,
            completions_rx,
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn connection(&self) -> &Connection {
        self.client.connection()
    }

    /// Requests issued but not yet applied.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn has_pending(&self) -> bool {
        self.in_flight > 0
    }

    /// Route a user action to its handler.
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!("Dispatching {:?}", action);
        match action {
            Action::Refresh => self.refresh(),
            Action::SetBaseUrl(url) => {
                self.set_base_url(url);
            }
            Action::Select(name) => self.select(name),
            Action::Search { query, k } => self.search(&query, &k),
        }
    }

    /// Wait for the next request to finish and apply it.
    ///
    /// Returns `false` without waiting when nothing is in flight.
    pub async fn pump(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }

        match self.completions_rx.recv().await {
            Some(completion) => {
                self.in_flight -= 1;
                tracing::trace!(
                    "Applying completion of ticket {} ({} still in flight)",
                    completion.ticket(),
                    self.in_flight
                );
                self.apply(completion);
                true
            }
            None => false,
        }
    }

    /// Pump until every issued request has been applied.
    pub async fn settle(&mut self) {
        while self.pump().await {}
    }

    /// Apply one completion to state and surfaces.
    pub fn apply(&mut self, completion: Completion) {
        match completion {
            Completion::Collections { ticket, result } => self.apply_collections(ticket, result),
            Completion::Documents {
                ticket,
                collection,
                result,
            } => self.apply_documents(ticket, &collection, result),
            Completion::Search {
                ticket,
                collection,
                result,
            } => self.apply_search(ticket, &collection, result),
        }
    }

    /// Run `request` on the runtime and queue its completion.
    pub(crate) fn spawn<F>(&mut self, request: F)
    where
        F: Future<Output = Completion> + Send + 'static,
    {
        self.in_flight += 1;
        let tx = self.completions_tx.clone();
        tokio::spawn(async move {
            let completion = request.await;
            // The receiver lives as long as the App; a send error means it is gone
            let _ = tx.send(completion);
        });
    }

    /// Whether a content-panel completion may still be shown.
    ///
    /// Under `DiscardStale` it must be the newest content request and belong
    /// to the collection that is active now.
    pub(crate) fn accepts_display(&self, ticket: u64, collection: &str) -> bool {
        match self.options.stale_policy {
            StalePolicy::LastArrivedWins => true,
            StalePolicy::DiscardStale => {
                self.state.tickets.is_current_display(ticket)
                    && self.state.active.as_deref() == Some(collection)
            }
        }
    }

    pub(crate) fn accepts_list(&self, ticket: u64) -> bool {
        match self.options.stale_policy {
            StalePolicy::LastArrivedWins => true,
            StalePolicy::DiscardStale => self.state.tickets.is_current_list(ticket),
        }
    }
}
