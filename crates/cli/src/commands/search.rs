//! Search command handler.

use clap::Args;
use vecview_browser::{validate, viewer::pretty, ValidatedSearch};
use vecview_client::create_client;
use vecview_core::{config::AppConfig, AppResult};

/// Run a kNN query against a collection
#[derive(Args, Debug)]
pub struct SearchCommand {
    /// Collection name
    pub collection: String,

    /// Query text (words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Number of neighbors (default: from config)
    #[arg(short)]
    pub k: Option<String>,
}

impl SearchCommand {
    /// Execute the search command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing search command");

        let query = self.query.join(" ");
        let k_text = self
            .k
            .clone()
            .unwrap_or_else(|| config.default_k.to_string());

        // Same checks as the interactive search field
        let ValidatedSearch {
            collection,
            request,
        } = validate(Some(self.collection.as_str()), &query, &k_text)?;
        tracing::debug!("Search request: {:?}", request);

        let client = create_client(config)?;
        let results = client.nearest_neighbors(&collection, &request).await?;

        println!("{}", pretty(&results)?);
        Ok(())
    }
}
