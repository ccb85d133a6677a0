//! Flashzilla entry point.
//!
//! # Usage
//!
//! ```bash
//! # Review the default deck for 100 seconds
//! flashzilla
//!
//! # Edit the deck
//! flashzilla add "capital of France" "Paris"
//! flashzilla list
//! flashzilla remove 0 3
//!
//! # Short session with debug logs
//! flashzilla --duration 30 --log-file flashzilla.log --log-level debug
//! ```

use std::{fs::OpenOptions, io, path::PathBuf, sync::Mutex};

use clap::{Parser, Subcommand};
use flashzilla_core::{SessionConfig, config::DEFAULT_SESSION_DURATION_SECS};
use flashzilla_store::FileStore;
use flashzilla_tui::{SystemEnv, commands};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Timed flashcard review in the terminal
#[derive(Parser, Debug)]
#[command(name = "flashzilla")]
#[command(about = "Timed flashcard review in the terminal")]
#[command(version)]
struct Args {
    /// Deck file (JSON). Defaults to the user data directory.
    #[arg(short, long)]
    deck: Option<PathBuf>,

    /// Session length in seconds
    #[arg(long, default_value_t = DEFAULT_SESSION_DURATION_SECS)]
    duration: u32,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write logs to this file. The review screen owns the terminal, so
    /// reviews log nothing without it.
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start a review session (default)
    Review,
    /// Add a card; it is reviewed after every existing card
    Add {
        /// Front of the card
        prompt: String,
        /// Back of the card
        answer: String,
    },
    /// List cards with their positions
    List,
    /// Remove cards by position
    Remove {
        /// Positions as printed by `list`
        #[arg(required = true)]
        positions: Vec<usize>,
    },
}

fn default_deck() -> PathBuf {
    dirs::data_local_dir()
        .map_or_else(|| PathBuf::from("."), |dir| dir.join("flashzilla"))
        .join("cards.json")
}

fn init_logging(args: &Args, interactive: bool) -> io::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    match &args.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .with(filter)
                .init();
        },
        None if !interactive => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr))
                .with(filter)
                .init();
        },
        None => {},
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = Args::parse();
    let command = args.command.take().unwrap_or(Command::Review);
    init_logging(&args, matches!(command, Command::Review))?;

    let store = FileStore::new(args.deck.clone().unwrap_or_else(default_deck));
    let env = SystemEnv::new();

    match command {
        Command::Review => {
            let config = SessionConfig::default().with_duration_secs(args.duration);
            commands::review(store, env, config).await?;
        },
        Command::Add { prompt, answer } => {
            commands::add(&store, env, &prompt, &answer)?;
        },
        Command::List => {
            commands::list(&store, &mut io::stdout().lock())?;
        },
        Command::Remove { positions } => {
            commands::remove(&store, env, &positions)?;
        },
    }

    Ok(())
}
