//! Tournament command implementation.

// Throughput figures are display-only floating point.
#![allow(clippy::cast_precision_loss)]

use super::output::{
    JsonTournamentResult, TournamentStats, format_tournament_csv, format_tournament_text,
};
use super::{BotKind, CliError, TournamentFormat, seed_or_now};
use clan_wars::MatchConfig;
use clan_wars::tournament::{PlayerBot, run_match};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::Instant;
use tracing::warn;

fn bot_name(bot: PlayerBot) -> &'static str {
    match bot {
        PlayerBot::Random => "random",
        PlayerBot::Cheapest => "cheapest",
    }
}

/// Execute the tournament command.
///
/// # Errors
///
/// Returns an error if the thread pool cannot be built or output fails.
pub(crate) fn execute(
    config: &MatchConfig,
    games: u64,
    seed: Option<u64>,
    threads: Option<usize>,
    bot: BotKind,
    format: TournamentFormat,
    progress: bool,
) -> Result<(), CliError> {
    let bot = PlayerBot::from(bot);
    let base_seed = seed_or_now(seed);

    let mut pool = rayon::ThreadPoolBuilder::new();
    if let Some(num_threads) = threads {
        pool = pool.num_threads(num_threads);
    }
    let pool = pool.build()?;

    let pb = progress.then(|| {
        let pb = ProgressBar::new(games);
        if let Ok(style) = ProgressStyle::default_bar().template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} matches ({per_sec})",
        ) {
            pb.set_style(style.progress_chars("=>-"));
        }
        pb
    });

    let start = Instant::now();

    // Each worker folds into its own stats; the partials merge at the end.
    let stats = pool.install(|| {
        (0..games)
            .into_par_iter()
            .fold(TournamentStats::default, |mut local, i| {
                let match_seed = base_seed.wrapping_add(i);
                match run_match(match_seed, config, bot) {
                    Ok(report) => local.add_report(&report),
                    Err(e) => warn!(seed = match_seed, error = %e, "match failed"),
                }
                if let Some(pb) = &pb {
                    pb.inc(1);
                }
                local
            })
            .reduce(TournamentStats::default, |mut a, b| {
                a.merge(&b);
                a
            })
    });

    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }

    let duration = start.elapsed();
    let games_per_sec = if duration.as_secs_f64() > 0.0 {
        stats.games_played as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    let name = bot_name(bot);
    match format {
        TournamentFormat::Text => {
            println!();
            print!("{}", format_tournament_text(&stats, name));
            println!();
            println!("Duration: {:.2}s ({games_per_sec:.0} matches/sec)", duration.as_secs_f64());
        }
        TournamentFormat::Json => {
            let json = JsonTournamentResult::from_stats(&stats, name);
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        TournamentFormat::Csv => print!("{}", format_tournament_csv(&stats, name)),
    }

    Ok(())
}
