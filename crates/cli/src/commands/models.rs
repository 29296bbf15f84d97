//! Models command handler.

use clap::Args;
use vecview_browser::viewer::pretty;
use vecview_client::create_client;
use vecview_core::{config::AppConfig, AppResult};

/// List the embedding models the service supports
#[derive(Args, Debug)]
pub struct ModelsCommand {}

impl ModelsCommand {
    /// Execute the models command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing models command");

        let client = create_client(config)?;
        let models = client.supported_models().await?;

        println!("{}", pretty(&models)?);
        Ok(())
    }
}
