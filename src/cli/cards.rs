//! Cards command implementation.

use super::output::{JsonCatalog, format_cards_text};
use super::{CliError, OutputFormat};
use clan_wars::game::CARDS;

/// Execute the cards command.
///
/// # Errors
///
/// Returns an error if JSON output fails.
pub(crate) fn execute(format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => print!("{}", format_cards_text(&CARDS)),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&JsonCatalog::new(&CARDS))?);
        }
    }
    Ok(())
}
