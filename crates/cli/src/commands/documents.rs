//! Documents command handler.

use clap::Args;
use vecview_browser::viewer::pretty;
use vecview_client::create_client;
use vecview_core::{config::AppConfig, AppResult};

/// Print the documents of a collection
#[derive(Args, Debug)]
pub struct DocumentsCommand {
    /// Collection name
    pub collection: String,

    /// Maximum number of documents (default: from config, else the service's)
    #[arg(short, long)]
    pub limit: Option<u32>,
}

impl DocumentsCommand {
    /// Execute the documents command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing documents command");

        let limit = self.limit.or(config.documents_limit);
        let client = create_client(config)?;
        let documents = client.get_documents(&self.collection, limit).await?;

        println!("{}", pretty(&documents)?);
        Ok(())
    }
}
