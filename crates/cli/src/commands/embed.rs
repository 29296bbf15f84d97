//! Embed command handler.

use clap::Args;
use vecview_browser::viewer::pretty;
use vecview_client::create_client;
use vecview_core::{config::AppConfig, AppError, AppResult};

/// Embed a text with the service's model
#[derive(Args, Debug)]
pub struct EmbedCommand {
    /// Text to embed (words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

impl EmbedCommand {
    /// Execute the embed command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing embed command");

        let text = self.text.join(" ");
        if text.trim().is_empty() {
            return Err(AppError::Other("Nothing to embed".to_string()));
        }

        let client = create_client(config)?;
        let embedding = client.embeddings(&text).await?;

        println!("{}", pretty(&embedding)?);
        Ok(())
    }
}
