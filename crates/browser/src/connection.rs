//! Connection config: the editable base URL.

use crate::app::App;
use crate::render::Renderer;

impl<R: Renderer> App<R> {
    /// Current base URL, read on demand.
    pub fn base_url(&self) -> String {
        self.connection().base_url()
    }

    /// Commit an edit of the base URL.
    ///
    /// A changed value triggers a collection refresh; committing the same
    /// value does nothing. The active collection and the content panel are
    /// left alone, so they may describe the previous service until the user
    /// selects again. Returns whether the value changed.
    pub fn set_base_url(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        if !self.connection().set_base_url(url.clone()) {
            tracing::debug!("Base URL unchanged: {}", url);
            return false;
        }

        tracing::info!("Base URL changed to {}", url);
        self.refresh();
        true
    }
}
