//! User actions in, HTTP completions out.

use vecview_client::{Collection, DocumentSet};
use vecview_core::AppResult;

/// A user action, as a front end reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Refresh control clicked
    Refresh,
    /// Connection URL edited and committed
    SetBaseUrl(String),
    /// Collection clicked
    Select(String),
    /// Search control clicked, or the query field committed
    Search { query: String, k: String },
}

/// Result of one spawned request, tagged with the ticket it was issued under.
#[derive(Debug)]
pub enum Completion {
    Collections {
        ticket: u64,
        result: AppResult<Vec<Collection>>,
    },
    Documents {
        ticket: u64,
        collection: String,
        result: AppResult<DocumentSet>,
    },
    Search {
        ticket: u64,
        collection: String,
        result: AppResult<DocumentSet>,
    },
}

impl Completion {
    pub fn ticket(&self) -> u64 {
        match self {
            Completion::Collections { ticket, .. }
            | Completion::Documents { ticket, .. }
            | Completion::Search { ticket, .. } => *ticket,
        }
    }
}
