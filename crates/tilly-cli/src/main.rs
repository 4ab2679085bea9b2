//! CLI frontend for the Finding Tilly exploration game.

mod commands;
mod console;

use std::process;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tilly_fiction::GameConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "tilly",
    about = "Finding Tilly — search the house and yard for Tilly",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log filter for diagnostics on stderr (RUST_LOG takes precedence)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game (the default when no command is given)
    Play(PlayArgs),

    /// Print the locations, their connections, and their items
    Map {
        /// Output format: table, json
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

#[derive(Args)]
struct PlayArgs {
    /// RNG seed for a reproducible hiding spot
    #[arg(short, long)]
    seed: Option<u64>,

    /// Milliseconds between characters of the typed-text effect (0 disables it)
    #[arg(long, default_value = "30")]
    typing_delay_ms: u64,

    /// Do not clear the screen between turns
    #[arg(long)]
    no_clear: bool,
}

impl PlayArgs {
    fn config(&self) -> GameConfig {
        let config = GameConfig::default()
            .with_typing_delay(Duration::from_millis(self.typing_delay_ms))
            .with_clear_screen(!self.no_clear);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let result = match cli.command {
        None => commands::play::run(&GameConfig::default()),
        Some(Commands::Play(args)) => commands::play::run(&args.config()),
        Some(Commands::Map { format }) => commands::map::run(&format),
    };

    if let Err(e) = result {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}
