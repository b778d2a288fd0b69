//! Clan Wars CLI - run headless matches and inspect the card catalog.

// Allow unwrap in tests and print in the CLI binary
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Clan Wars - a deterministic lane-based ninja card battle engine
#[derive(Parser, Debug)]
#[command(name = "clan-wars")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Match config file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log engine internals at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a single headless match against the AI
    Run {
        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Player controller
        #[arg(short, long, default_value = "random")]
        bot: cli::BotKind,

        /// Override the match length in seconds
        #[arg(short, long)]
        duration: Option<u32>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Run many seeded matches in parallel and aggregate the results
    Tournament {
        /// Number of matches to run (default: 1000)
        #[arg(short, long, default_value = "1000")]
        games: u64,

        /// Starting seed (increments for each match)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Player controller
        #[arg(short, long, default_value = "random")]
        bot: cli::BotKind,

        /// Override the match length in seconds
        #[arg(short, long)]
        duration: Option<u32>,

        /// Output format: text, json, or csv
        #[arg(short, long, default_value = "text")]
        format: cli::TournamentFormat,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,
    },

    /// List the card and combo catalog
    Cards {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "clan_wars=debug" } else { "clan_wars=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let result = match args.command {
        Commands::Run {
            seed,
            bot,
            duration,
            format,
        } => cli::load_config(args.config.as_deref(), duration)
            .and_then(|config| cli::run::execute(&config, seed, bot, format)),

        Commands::Tournament {
            games,
            seed,
            threads,
            bot,
            duration,
            format,
            progress,
        } => cli::load_config(args.config.as_deref(), duration).and_then(|config| {
            cli::tournament::execute(&config, games, seed, threads, bot, format, progress)
        }),

        Commands::Cards { format } => cli::cards::execute(format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
