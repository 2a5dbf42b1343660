//! Banter TUI entry point.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use banter_client::{BrokerConfig, SessionController};
use banter_tui::Runtime;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Terminal chat client
#[derive(Parser, Debug)]
#[command(name = "banter")]
#[command(about = "Terminal chat client for a public websocket broker")]
#[command(version)]
struct Args {
    /// Broker websocket endpoint
    #[arg(long, default_value = banter_client::DEFAULT_ENDPOINT)]
    broker: Url,

    /// Broker access key, sent as the `api_key` query parameter
    #[arg(long, env = "BANTER_API_KEY")]
    api_key: String,

    /// Display name; prompted on startup when omitted
    #[arg(short, long)]
    user: Option<String>,

    /// Log file (the terminal itself is busy drawing)
    #[arg(long, default_value = "banter.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args.log_file)?;

    tracing::info!(endpoint = %args.broker, "starting");

    let config = BrokerConfig::new(args.broker, args.api_key);
    let controller = SessionController::spawn(&config, args.user.clone());
    let runtime = Runtime::new(controller, args.user)?;

    Ok(runtime.run().await?)
}

/// Route tracing output to a file so the alternate screen stays clean.
fn init_logging(path: &Path) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
