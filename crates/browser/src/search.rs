//! Search controller: input validation and kNN requests.

use std::sync::Arc;

use vecview_client::{DocumentSet, SearchRequest};
use vecview_core::{AppResult, ValidationError};

use crate::app::App;
use crate::event::Completion;
use crate::render::Renderer;

/// A search that passed validation, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSearch {
    pub collection: String,
    pub request: SearchRequest,
}

/// Parse the neighbor count field the way a browser reads a number input.
///
/// Surrounding whitespace is ignored, then an optional sign and the leading
/// run of decimal digits are read; anything after them is ignored, so
/// `"2.5"` is 2 and `"3abc"` is 3. No digits, or a value below one, is
/// rejected. Values beyond `u32::MAX` saturate.
pub fn parse_k(k_text: &str) -> Result<u32, ValidationError> {
    let text = k_text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(ValidationError::InvalidK);
    }

    let magnitude = rest[..digits]
        .bytes()
        .fold(0u32, |k, d| k.saturating_mul(10).saturating_add(u32::from(d - b'0')));

    if negative || magnitude < 1 {
        return Err(ValidationError::InvalidK);
    }
    Ok(magnitude)
}

/// Check search inputs in order: selection, query, then k.
///
/// The first failing check is reported. The query is sent trimmed.
pub fn validate(
    active: Option<&str>,
    query_text: &str,
    k_text: &str,
) -> Result<ValidatedSearch, ValidationError> {
    let collection = active.ok_or(ValidationError::NoActiveCollection)?;

    let query = query_text.trim();
    if query.is_empty() {
        return Err(ValidationError::EmptyQuery);
    }

    let k = parse_k(k_text)?;

    Ok(ValidatedSearch {
        collection: collection.to_string(),
        request: SearchRequest::new(query, k),
    })
}

impl<R: Renderer> App<R> {
    /// Run a kNN search against the active collection.
    ///
    /// Invalid input is reported in the content panel and sends nothing.
    pub fn search(&mut self, query_text: &str, k_text: &str) {
        let ticket = self.state.tickets.issue_display();

        let ValidatedSearch {
            collection,
            request,
        } = match validate(self.state.active.as_deref(), query_text, k_text) {
            Ok(search) => search,
            Err(e) => {
                tracing::debug!("Search rejected: {}", e);
                self.show_error(&e.to_string());
                return;
            }
        };

        tracing::info!(
            "Searching '{}' for {} neighbors of {:?}",
            collection,
            request.k,
            request.query
        );

        let client = Arc::clone(&self.client);
        self.spawn(async move {
            let result = client.nearest_neighbors(&collection, &request).await;
            Completion::Search {
                ticket,
                collection,
                result,
            }
        });
    }

    pub(crate) fn apply_search(
        &mut self,
        ticket: u64,
        collection: &str,
        result: AppResult<DocumentSet>,
    ) {
        if !self.accepts_display(ticket, collection) {
            tracing::debug!(
                "Discarding stale search results of '{}' (ticket {})",
                collection,
                ticket
            );
            return;
        }

        match result {
            Ok(results) => self.show_results(&results),
            Err(e) => {
                tracing::error!("Error searching '{}': {}", collection, e);
                self.show_error(&format!("Error searching documents: {}", e));
            }
        }
    }
}
