//! Interaction state machine of the vecview browser.
//!
//! The browser has four parts sharing one [`AppState`]:
//! - connection config: the editable base URL ([`App::set_base_url`])
//! - collection browser: [`App::refresh`] and [`App::select`]
//! - document viewer: [`App::load_for_collection`] and [`App::show_results`]
//! - search controller: [`App::search`]
//!
//! Handlers never block. Each one mutates state, renders what it can right
//! away and spawns its HTTP call; the call reports back as a [`Completion`]
//! that [`App::pump`] applies in arrival order. Rendering goes through the
//! [`Renderer`] trait so the whole machine runs headless in tests.

pub mod app;
pub mod collections;
pub mod connection;
pub mod event;
pub mod render;
pub mod search;
pub mod state;
pub mod viewer;

#[cfg(test)]
mod tests;

pub use app::{App, BrowserOptions};
pub use event::{Action, Completion};
pub use render::{
    mark_first, DisplaySurface, ListItem, ListSurface, RecordingRenderer, Renderer,
};
pub use search::{parse_k, validate, ValidatedSearch};
pub use state::AppState;
pub use vecview_core::StalePolicy;
