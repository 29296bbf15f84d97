//! Collection browser: listing and selection.

use std::sync::Arc;

use vecview_client::Collection;
use vecview_core::AppResult;

use crate::app::App;
use crate::event::Completion;
use crate::render::{mark_first, ListItem, Renderer};

impl<R: Renderer> App<R> {
    /// Fetch the collection list from the current base URL.
    ///
    /// Failures are final for this cycle: no retry, the user refreshes again.
    pub fn refresh(&mut self) {
        let ticket = self.state.tickets.issue_list();
        tracing::info!("Fetching collections from {}", self.base_url());

        let client = Arc::clone(&self.client);
        self.spawn(async move {
            let result = client.list_collections().await;
            Completion::Collections { ticket, result }
        });
    }

    /// Make `name` the active collection and load its documents.
    ///
    /// The name is used verbatim, listed or not.
    pub fn select(&mut self, name: impl Into<String>) {
        let name = name.into();
        tracing::info!("Selecting collection '{}'", name);

        self.state.active = Some(name.clone());
        self.renderer.mark_active(&name);
        self.load_for_collection(name);
    }

    pub(crate) fn apply_collections(&mut self, ticket: u64, result: AppResult<Vec<Collection>>) {
        if !self.accepts_list(ticket) {
            tracing::debug!("Discarding superseded collection list (ticket {})", ticket);
            return;
        }

        match result {
            Ok(collections) => {
                let items = list_items(&collections, self.state.active.as_deref());
                tracing::debug!("Rendering {} collections", items.len());
                self.state.collections = collections;
                self.renderer.render_collections(&items);
            }
            Err(e) => {
                tracing::error!("Error fetching collections: {}", e);
                self.state.collections.clear();
                self.renderer
                    .render_collections_error(&format!("Error fetching collections: {}", e));
            }
        }
    }
}

/// Rows in service order, marking the first one named `active`.
pub fn list_items(collections: &[Collection], active: Option<&str>) -> Vec<ListItem> {
    let mut items: Vec<ListItem> = collections
        .iter()
        .map(|collection| ListItem {
            name: collection.name.clone(),
            active: false,
        })
        .collect();
    if let Some(active) = active {
        mark_first(&mut items, active);
    }
    items
}
