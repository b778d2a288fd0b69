//! Run command implementation.

use super::output::format_text;
use super::{BotKind, CliError, OutputFormat, seed_or_now};
use clan_wars::MatchConfig;
use clan_wars::tournament::run_match;

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the config is rejected or output fails.
pub(crate) fn execute(
    config: &MatchConfig,
    seed: Option<u64>,
    bot: BotKind,
    format: OutputFormat,
) -> Result<(), CliError> {
    let seed = seed_or_now(seed);
    let report = run_match(seed, config, bot.into())?;

    match format {
        OutputFormat::Text => print!("{}", format_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
