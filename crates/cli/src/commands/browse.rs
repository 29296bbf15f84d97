//! Browse command handler.
//!
//! Runs the interactive browser on the terminal. Lines starting with `:`
//! are commands; any other non-empty line is a query, searched with the
//! current k.

use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};
use vecview_browser::{App, BrowserOptions};
use vecview_client::create_client;
use vecview_core::{config::AppConfig, AppResult};

use crate::terminal::TerminalRenderer;

const HELP: &str = "\
Commands:
  :url <base-url>     point at another service (refreshes the list)
  :refresh, :r        fetch the collection list again
  :select <name>      make <name> active and show its documents
  :k <n>              neighbor count for searches
  :search <query>     search the active collection
  :help               this text
  :quit, :q           leave
Any other line is searched in the active collection.";

/// Interactive browser
#[derive(Args, Debug)]
pub struct BrowseCommand {
    /// Initial neighbor count (default: from config)
    #[arg(short, long)]
    pub k: Option<String>,
}

/// One line typed into the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseInput {
    Url(String),
    Refresh,
    Select(String),
    K(String),
    Search(String),
    Help,
    Quit,
    Empty,
    /// Unknown command, missing argument or undecodable line, with a hint to show
    Invalid(String),
}

impl BrowseInput {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return BrowseInput::Empty;
        }

        let Some(command) = line.strip_prefix(':') else {
            return BrowseInput::Search(line.to_string());
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };

        let needs_arg = |usage: &str, make: fn(String) -> BrowseInput| {
            if arg.is_empty() {
                BrowseInput::Invalid(format!("usage: {}", usage))
            } else {
                make(arg.to_string())
            }
        };

        match name {
            "url" => needs_arg(":url <base-url>", BrowseInput::Url),
            "refresh" | "r" => BrowseInput::Refresh,
            "select" | "use" => needs_arg(":select <name>", BrowseInput::Select),
            "k" => needs_arg(":k <n>", BrowseInput::K),
            // An empty query goes through so the browser reports it
            "search" | "s" => BrowseInput::Search(arg.to_string()),
            "help" | "h" | "?" => BrowseInput::Help,
            "quit" | "q" | "exit" => BrowseInput::Quit,
            other => BrowseInput::Invalid(format!("unknown command ':{}' (try :help)", other)),
        }
    }
}

/// Turn one read from stdin into input for the loop.
///
/// `Ok(None)` is end of input. A line that is not valid UTF-8 has already
/// been consumed by the reader, so it becomes a hint and the session goes on;
/// any other read failure ends it.
pub fn read_input(read: std::io::Result<Option<String>>) -> AppResult<Option<BrowseInput>> {
    match read {
        Ok(Some(line)) => Ok(Some(BrowseInput::parse(&line))),
        Ok(None) => Ok(None),
        Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
            tracing::warn!("Ignoring undecodable input line: {}", e);
            Ok(Some(BrowseInput::Invalid(
                "input was not valid UTF-8; line ignored".to_string(),
            )))
        }
        Err(e) => Err(e.into()),
    }
}

impl BrowseCommand {
    /// Execute the browse command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Starting interactive browser on {}", config.base_url);

        let client = create_client(config)?;
        let mut app = App::new(client, TerminalRenderer::stdout(), BrowserOptions::from(config));
        let mut k_text = self
            .k
            .clone()
            .unwrap_or_else(|| config.default_k.to_string());

        println!("vecview: {} (k = {})", app.base_url(), k_text);
        println!("{}", HELP);

        // Initial fetch, like a page load
        app.refresh();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(input) = read_input(line)? else {
                        tracing::debug!("stdin closed");
                        break;
                    };

                    match input {
                        BrowseInput::Quit => break,
                        BrowseInput::Empty => {}
                        BrowseInput::Help => println!("{}", HELP),
                        BrowseInput::Invalid(hint) => println!("{}", hint),
                        BrowseInput::Url(url) => {
                            if !app.set_base_url(url) {
                                println!("Base URL unchanged; use :refresh to fetch again");
                            }
                        }
                        BrowseInput::Refresh => app.refresh(),
                        BrowseInput::Select(name) => {
                            if !app.state().has_collection(&name) {
                                tracing::warn!("'{}' is not in the current list", name);
                            }
                            app.select(name);
                        }
                        BrowseInput::K(text) => {
                            println!("k = {}", text);
                            k_text = text;
                        }
                        BrowseInput::Search(query) => app.search(&query, &k_text),
                    }
                }
                _ = app.pump(), if app.has_pending() => {}
            }
        }

        if app.has_pending() {
            tracing::debug!("Leaving with {} requests in flight", app.in_flight());
        }

        Ok(())
    }
}
