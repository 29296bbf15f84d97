//! Document viewer: the single content panel.

use std::sync::Arc;

use vecview_client::DocumentSet;
use vecview_core::AppResult;

use crate::app::App;
use crate::event::Completion;
use crate::render::Renderer;

/// Two-space indented JSON, the form payloads are shown in.
pub fn pretty(payload: &DocumentSet) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(payload)?)
}

impl<R: Renderer> App<R> {
    /// Fetch the documents of `name` into the content panel.
    pub fn load_for_collection(&mut self, name: impl Into<String>) {
        let name = name.into();
        let ticket = self.state.tickets.issue_display();
        let limit = self.options.documents_limit;
        tracing::debug!("Loading documents of '{}' (ticket {})", name, ticket);

        let client = Arc::clone(&self.client);
        self.spawn(async move {
            let result = client.get_documents(&name, limit).await;
            Completion::Documents {
                ticket,
                collection: name,
                result,
            }
        });
    }

    /// Replace the content panel with `payload`.
    pub fn show_results(&mut self, payload: &DocumentSet) {
        match pretty(payload) {
            Ok(text) => self.renderer.render_content(&text),
            Err(e) => self.renderer.render_content_error(&e.to_string()),
        }
    }

    /// Replace the content panel with an inline error message.
    pub(crate) fn show_error(&mut self, message: &str) {
        self.renderer.render_content_error(message);
    }

    pub(crate) fn apply_documents(
        &mut self,
        ticket: u64,
        collection: &str,
        result: AppResult<DocumentSet>,
    ) {
        if !self.accepts_display(ticket, collection) {
            tracing::debug!(
                "Discarding stale documents of '{}' (ticket {})",
                collection,
                ticket
            );
            return;
        }

        match result {
            Ok(documents) => self.show_results(&documents),
            Err(e) => {
                tracing::error!("Error fetching documents of '{}': {}", collection, e);
                self.show_error(&format!("Error fetching documents: {}", e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::BrowserOptions;
    use crate::render::{DisplaySurface, RecordingRenderer};
    use serde_json::json;
    use vecview_client::{routes, MockReply, MockStoreClient};

    #[test]
    fn test_pretty_uses_two_space_indent() {
        let text = pretty(&json!({"documents": [["a", "b"]]})).unwrap();
        assert_eq!(
            text,
            "{\n  \"documents\": [\n    [\n      \"a\",\n      \"b\"\n    ]\n  ]\n}"
        );
    }

    #[tokio::test]
    async fn test_documents_render_verbatim() {
        let payload = json!(["first chunk", "second chunk"]);
        let mock = Arc::new(MockStoreClient::new("http://mock"));
        mock.with_documents("notes", payload.clone());
        let mut app = App::new(mock, RecordingRenderer::new(), BrowserOptions::default());

        app.select("notes");
        app.settle().await;

        assert_eq!(
            app.renderer().display,
            DisplaySurface::Content(pretty(&payload).unwrap())
        );
    }

    #[tokio::test]
    async fn test_documents_limit_is_forwarded() {
        let mock = Arc::new(MockStoreClient::new("http://mock"));
        let options = BrowserOptions {
            documents_limit: Some(0),
            ..BrowserOptions::default()
        };
        let mut app = App::new(mock.clone(), RecordingRenderer::new(), options);

        app.load_for_collection("notes");
        app.settle().await;
        assert_eq!(
            mock.requests()[0].url,
            "http://mock/api/v1/collections/notes/documents?limit=0"
        );
    }

    #[tokio::test]
    async fn test_status_error_replaces_previous_content() {
        let mock = Arc::new(MockStoreClient::new("http://mock"));
        mock.with_documents("good", json!(["kept?"]));
        mock.reply(&routes::documents("bad"), MockReply::Status(500));
        let mut app = App::new(mock, RecordingRenderer::new(), BrowserOptions::default());

        app.select("good");
        app.settle().await;
        app.select("bad");
        app.settle().await;

        let error = app.renderer().display_error().unwrap();
        assert!(error.starts_with("Error fetching documents:"));
        assert!(error.contains("500"));
        assert!(!error.contains("kept?"));
    }

    #[tokio::test]
    async fn test_show_results_overwrites() {
        let mock = Arc::new(MockStoreClient::new("http://mock"));
        let mut app = App::new(mock, RecordingRenderer::new(), BrowserOptions::default());

        app.show_results(&json!([1]));
        app.show_results(&json!([2]));
        assert_eq!(app.renderer().display_text(), Some("[\n  2\n]"));
    }
}
