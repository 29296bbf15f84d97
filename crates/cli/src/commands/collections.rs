//! Collections command handler.

use clap::Args;
use vecview_client::create_client;
use vecview_core::{config::AppConfig, AppResult};

/// List the collections of the service
#[derive(Args, Debug)]
pub struct CollectionsCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl CollectionsCommand {
    /// Execute the collections command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing collections command");

        let client = create_client(config)?;
        let collections = client.list_collections().await?;
        tracing::debug!("Service returned {} collections", collections.len());

        if self.json {
            println!("{}", serde_json::to_string_pretty(&collections)?);
            return Ok(());
        }

        if collections.is_empty() {
            println!("No collections at {}", config.base_url);
            return Ok(());
        }

        for collection in &collections {
            println!("{}", collection.name);
        }

        Ok(())
    }
}
