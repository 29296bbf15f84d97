//! Command handlers for the vecview CLI.
//!
//! One submodule per subcommand.

pub mod browse;
pub mod collections;
pub mod documents;
pub mod embed;
pub mod models;
pub mod search;

// Re-export command types for convenience
pub use browse::BrowseCommand;
pub use collections::CollectionsCommand;
pub use documents::DocumentsCommand;
pub use embed::EmbedCommand;
pub use models::ModelsCommand;
pub use search::SearchCommand;
