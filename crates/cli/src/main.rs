//! vecview CLI
//!
//! Main entry point for the vecview command-line tool.
//! Browse the collections of a vector-store service, read their documents
//! and run nearest-neighbor queries against them.

mod commands;
mod terminal;

use clap::{Parser, Subcommand};
use commands::{
    BrowseCommand, CollectionsCommand, DocumentsCommand, EmbedCommand, ModelsCommand,
    SearchCommand,
};
use std::path::PathBuf;
use vecview_core::{config::AppConfig, logging, AppResult};

/// vecview - inspect the collections of a vector-store service
#[derive(Parser, Debug)]
#[command(name = "vecview")]
#[command(about = "Inspect collections, documents and kNN results of a vector store", long_about = None)]
#[command(version)]
struct Cli {
    /// Base URL of the vector-store service
    #[arg(short, long, global = true, env = "VECVIEW_URL")]
    url: Option<String>,

    /// Path to config file
    #[arg(short, long, global = true, env = "VECVIEW_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive browser: select collections, view documents, search
    Browse(BrowseCommand),

    /// List collections
    Collections(CollectionsCommand),

    /// Print the documents of a collection
    Documents(DocumentsCommand),

    /// Run a k-nearest-neighbor query against a collection
    Search(SearchCommand),

    /// List the embedding models the service supports
    Models(ModelsCommand),

    /// Embed a text with the service's model
    Embed(EmbedCommand),
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Browse(_) => "browse",
            Commands::Collections(_) => "collections",
            Commands::Documents(_) => "documents",
            Commands::Search(_) => "search",
            Commands::Models(_) => "models",
            Commands::Embed(_) => "embed",
        }
    }
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load configuration: file, then environment, then flags
    let config = AppConfig::load_with(cli.config.as_deref())?.with_overrides(
        cli.url,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    logging::init_logging(config.log_level.as_deref(), config.log_format, config.no_color)?;

    tracing::debug!("Config file: {:?}", config.config_file);
    tracing::debug!("Base URL: {}", config.base_url);

    config.validate()?;

    let _span = tracing::info_span!("command", name = cli.command.name()).entered();

    let result = match cli.command {
        Commands::Browse(cmd) => cmd.execute(&config).await,
        Commands::Collections(cmd) => cmd.execute(&config).await,
        Commands::Documents(cmd) => cmd.execute(&config).await,
        Commands::Search(cmd) => cmd.execute(&config).await,
        Commands::Models(cmd) => cmd.execute(&config).await,
        Commands::Embed(cmd) => cmd.execute(&config).await,
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
