//! shiftsearch console entry point.
//!
//! Reads commands from stdin, one per line, and prints the console state to
//! stdout. Logging goes to stderr so it never mixes with rendered output.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use shiftsearch_client::ApiClient;
use shiftsearch_core::{AppConfig, Intent, SearchConsole};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

mod command;
mod render;

use command::{Command, HELP};

#[derive(Debug, Parser)]
#[command(name = "shiftsearch", version, about = "Boolean search console for a shift-index service")]
struct Args {
    /// TOML config file (overrides SHIFTSEARCH_CONFIG_FILE).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search service base URL (overrides configuration).
    #[arg(long)]
    base_url: Option<String>,

    /// Emit logs as JSON.
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    if args.json_logs {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let mut config = match &args.config {
        Some(path) => AppConfig::load_from(Some(path.as_path()))?,
        None => AppConfig::load()?,
    };
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
        config.validate()?;
    }

    tracing::info!(base_url = %config.base_url, "starting shiftsearch console");

    let client = ApiClient::from_config(&config)?;
    let mut console = SearchConsole::from_config(client, &config);

    println!("{}", render::input_line(console.state()));
    println!("{}", render::results(console.state()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            Command::Show => {
                println!("{}", render::settings_line(console.state()));
                println!("{}", render::input_line(console.state()));
                println!("{}", render::results(console.state()));
            }
            Command::Dispatch(intents) => {
                let typing_only = intents.iter().all(|i| matches!(i, Intent::Input(_) | Intent::AcceptSuggestion));
                for intent in intents {
                    console.dispatch(intent).await;
                }

                println!("{}", render::input_line(console.state()));
                if !typing_only {
                    println!("{}", render::results(console.state()));
                }
                if let Some(target) = console.take_navigation() {
                    println!("navigate: {target}");
                }
            }
        }
    }

    tracing::info!("shiftsearch console exiting");

    Ok(())
}
