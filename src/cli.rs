//! CLI command implementations for Clan Wars.

pub(crate) mod cards;
pub(crate) mod run;
pub(crate) mod tournament;

mod output;

use clan_wars::tournament::PlayerBot;
use clan_wars::{ConfigError, MatchConfig};
use clap::ValueEnum;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Output format for the `run` and `cards` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Output format for the `tournament` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum TournamentFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
    /// CSV format.
    Csv,
}

/// Player controller selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum BotKind {
    /// Random card into a random open lane.
    Random,
    /// Cheapest affordable card into the emptiest lane.
    Cheapest,
}

impl From<BotKind> for PlayerBot {
    fn from(kind: BotKind) -> Self {
        match kind {
            BotKind::Random => Self::Random,
            BotKind::Cheapest => Self::Cheapest,
        }
    }
}

/// CLI error type.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Bad or unreadable match config.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// JSON output failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    /// Thread pool setup failed.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Load the config file if given, then apply flag overrides.
pub(crate) fn load_config(path: Option<&Path>, duration: Option<u32>) -> Result<MatchConfig, CliError> {
    let mut config = match path {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };
    if let Some(secs) = duration {
        config.match_duration_secs = secs;
    }
    config.validate()?;
    Ok(config)
}

/// Seed from the wall clock when none is given.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn seed_or_now(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    })
}
