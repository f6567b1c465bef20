use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use family_dialer::app::{Collaborators, Dialer, DialerSettings};
use family_dialer::config::Config;
use family_dialer::host::{StdinConfirmer, Terminal, stdin_lines};
use family_dialer::integration::{
    ClipboardWriter, CommandClipboard, CommandLauncher, MemoryClipboard,
};
use family_dialer::store::{BlobContactStore, FileLocalStorage};

#[derive(Parser, Debug)]
#[command(name = "family-dialer")]
#[command(version)]
#[command(about = "An elder-friendly contact dialer with WeChat call guidance")]
struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Generate example config and exit
    #[arg(long)]
    generate_config: bool,
}

const EXAMPLE_CONFIG: &str = include_str!("../example-config.yaml");

fn load_config(path: &Path) -> anyhow::Result<Config> {
    if path.exists() {
        Config::load(&path.to_string_lossy())
    } else {
        Ok(Config::default())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.generate_config {
        println!("{}", EXAMPLE_CONFIG);
        return Ok(());
    }

    let config = load_config(&args.config);
    let min_level = config
        .as_ref()
        .map(|c| c.logging.min_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(min_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting family dialer v{}", env!("CARGO_PKG_VERSION"));

    let config = match config {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config from {}: {}", args.config.display(), e);
            return Err(e);
        }
    };

    let storage = FileLocalStorage::new(&config.storage.directory);
    info!("Storing contacts in {}", storage.directory().display());

    let clipboard: Arc<dyn ClipboardWriter> = match &config.integrations.clipboard_command {
        Some(program) => Arc::new(CommandClipboard::new(program.clone())),
        None => Arc::new(MemoryClipboard::new()),
    };

    let lines = stdin_lines();
    let collaborators = Collaborators {
        store: Arc::new(BlobContactStore::with_key(storage, config.storage.key.clone())),
        clipboard,
        launcher: Arc::new(CommandLauncher::new(config.integrations.opener.clone())),
        confirmer: Arc::new(StdinConfirmer::new(lines.clone())),
    };

    let (dialer, events) = Dialer::start(collaborators, DialerSettings::from(&config)).await;
    println!("Type `help` for a list of commands.");

    Terminal::new(dialer, events, lines, config.header.clone()).run().await?;

    info!("Family dialer stopped");
    Ok(())
}
