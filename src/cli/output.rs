//! Output formatting utilities for CLI.

// Aggregates are display-only floating point.
#![allow(clippy::cast_precision_loss)]

use clan_wars::MatchResult;
use clan_wars::game::{COMBOS, CardDefinition, ComboDefinition};
use clan_wars::tournament::MatchReport;
use serde::Serialize;
use std::fmt::Write as _;

/// Format a match report as human-readable text.
pub(super) fn format_text(report: &MatchReport) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Match Result (seed: {})", report.seed);
    let _ = writeln!(output, "  Result: {:?}", report.result);
    let _ = writeln!(output, "  Duration: {:.1}s", report.duration_ms as f64 / 1000.0);
    let _ = writeln!(
        output,
        "  Strongholds: player {} / ai {}\n",
        report.player_strongholds, report.ai_strongholds
    );

    let stats = &report.stats;
    let _ = writeln!(output, "  Actions: {} ({} APM)", stats.actions, stats.apm);
    let _ = writeln!(output, "  Passes: {}", report.player_passes);
    let _ = writeln!(output, "  Combos: {}", stats.combos);
    let _ = writeln!(output, "  Strongholds destroyed: {}", stats.strongholds_destroyed);
    let _ = writeln!(output, "  Terrain utilization: {}%", stats.terrain_utilization);

    output
}

/// Tournament statistics for aggregated results.
#[derive(Debug, Default, Clone, PartialEq)]
pub(super) struct TournamentStats {
    /// Total matches played.
    pub(super) games_played: u64,
    /// Player victories.
    pub(super) victories: u64,
    /// Player defeats.
    pub(super) defeats: u64,
    /// Matches that ran out the clock.
    pub(super) timeouts: u64,
    /// Summed match time.
    total_duration_ms: u64,
    /// Summed player actions.
    total_actions: u64,
    /// Summed combos.
    total_combos: u64,
    /// Summed AI strongholds destroyed.
    total_destroyed: u64,
    /// APM sum for the mean.
    apm_sum: f64,
    /// APM sum of squares for std dev calculation.
    apm_sq_sum: f64,
}

impl TournamentStats {
    /// Add a match report to the stats.
    pub(super) fn add_report(&mut self, report: &MatchReport) {
        self.games_played += 1;
        match report.result {
            MatchResult::Victory => self.victories += 1,
            MatchResult::Defeat => self.defeats += 1,
            MatchResult::Timeout => self.timeouts += 1,
        }
        self.total_duration_ms += report.duration_ms;
        self.total_actions += u64::from(report.stats.actions);
        self.total_combos += u64::from(report.stats.combos);
        self.total_destroyed += u64::from(report.stats.strongholds_destroyed);

        let apm = f64::from(report.stats.apm);
        self.apm_sum += apm;
        self.apm_sq_sum += apm * apm;
    }

    /// Fold another partial aggregate into this one.
    pub(super) fn merge(&mut self, other: &Self) {
        self.games_played += other.games_played;
        self.victories += other.victories;
        self.defeats += other.defeats;
        self.timeouts += other.timeouts;
        self.total_duration_ms += other.total_duration_ms;
        self.total_actions += other.total_actions;
        self.total_combos += other.total_combos;
        self.total_destroyed += other.total_destroyed;
        self.apm_sum += other.apm_sum;
        self.apm_sq_sum += other.apm_sq_sum;
    }

    fn per_game(&self, total: f64) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        total / self.games_played as f64
    }

    /// Share of matches (0.0-1.0) with `count` occurrences.
    pub(super) fn rate(&self, count: u64) -> f64 {
        self.per_game(count as f64)
    }

    /// Average match length in seconds.
    pub(super) fn avg_duration_secs(&self) -> f64 {
        self.per_game(self.total_duration_ms as f64) / 1000.0
    }

    /// Average player actions per match.
    pub(super) fn avg_actions(&self) -> f64 {
        self.per_game(self.total_actions as f64)
    }

    /// Average combos per match.
    pub(super) fn avg_combos(&self) -> f64 {
        self.per_game(self.total_combos as f64)
    }

    /// Average AI strongholds destroyed per match.
    pub(super) fn avg_destroyed(&self) -> f64 {
        self.per_game(self.total_destroyed as f64)
    }

    /// Mean APM.
    pub(super) fn avg_apm(&self) -> f64 {
        self.per_game(self.apm_sum)
    }

    /// APM standard deviation.
    pub(super) fn apm_std_dev(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        let mean = self.avg_apm();
        let variance = self.per_game(self.apm_sq_sum) - mean * mean;
        variance.max(0.0).sqrt()
    }
}

/// JSON-serializable tournament result.
#[derive(Debug, Serialize)]
pub(super) struct JsonTournamentResult {
    games_played: u64,
    bot: &'static str,
    victories: u64,
    defeats: u64,
    timeouts: u64,
    victory_rate: f64,
    avg_duration_secs: f64,
    avg_actions: f64,
    avg_combos: f64,
    avg_strongholds_destroyed: f64,
    avg_apm: f64,
    apm_std_dev: f64,
}

impl JsonTournamentResult {
    /// Create from stats.
    pub(super) fn from_stats(stats: &TournamentStats, bot: &'static str) -> Self {
        Self {
            games_played: stats.games_played,
            bot,
            victories: stats.victories,
            defeats: stats.defeats,
            timeouts: stats.timeouts,
            victory_rate: stats.rate(stats.victories),
            avg_duration_secs: stats.avg_duration_secs(),
            avg_actions: stats.avg_actions(),
            avg_combos: stats.avg_combos(),
            avg_strongholds_destroyed: stats.avg_destroyed(),
            avg_apm: stats.avg_apm(),
            apm_std_dev: stats.apm_std_dev(),
        }
    }
}

/// Format tournament stats as human-readable text.
pub(super) fn format_tournament_text(stats: &TournamentStats, bot: &str) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Tournament Results ({} matches, {bot} bot)", stats.games_played);
    output.push_str("========================================\n\n");

    output.push_str("Outcomes:\n");
    for (label, count) in [
        ("Victory", stats.victories),
        ("Defeat", stats.defeats),
        ("Timeout", stats.timeouts),
    ] {
        let _ = writeln!(output, "  {label:<8} {:.1}% ({count})", stats.rate(count) * 100.0);
    }

    output.push_str("\nPer Match:\n");
    let _ = writeln!(output, "  Length: {:.1}s", stats.avg_duration_secs());
    let _ = writeln!(output, "  Actions: {:.1}", stats.avg_actions());
    let _ = writeln!(output, "  APM: {:.1} (+/- {:.1})", stats.avg_apm(), stats.apm_std_dev());
    let _ = writeln!(output, "  Combos: {:.2}", stats.avg_combos());
    let _ = writeln!(output, "  Strongholds destroyed: {:.2}", stats.avg_destroyed());

    output
}

/// Format tournament stats as CSV.
pub(super) fn format_tournament_csv(stats: &TournamentStats, bot: &str) -> String {
    let mut output = String::new();

    output.push_str(
        "bot,games,victories,defeats,timeouts,victory_rate,avg_duration_secs,avg_actions,avg_apm,apm_std_dev\n",
    );
    let _ = writeln!(
        output,
        "{bot},{},{},{},{},{:.4},{:.2},{:.2},{:.2},{:.2}",
        stats.games_played,
        stats.victories,
        stats.defeats,
        stats.timeouts,
        stats.rate(stats.victories),
        stats.avg_duration_secs(),
        stats.avg_actions(),
        stats.avg_apm(),
        stats.apm_std_dev()
    );

    output
}

/// JSON view of the catalog.
#[derive(Debug, Serialize)]
pub(super) struct JsonCatalog {
    cards: &'static [CardDefinition],
    combos: &'static [ComboDefinition],
}

impl JsonCatalog {
    /// The full catalog.
    pub(super) fn new(cards: &'static [CardDefinition]) -> Self {
        Self {
            cards,
            combos: &COMBOS,
        }
    }
}

/// Format the catalog as a text table.
pub(super) fn format_cards_text(cards: &[CardDefinition]) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "{:<20} {:<10} {:>4} {:>4} {:>4}  {:<10} Ability",
        "Card", "School", "Cost", "Atk", "HP", "Rarity"
    );
    for card in cards {
        let _ = writeln!(
            output,
            "{:<20} {:<10} {:>4} {:>4} {:>4}  {:<10} {}",
            card.name,
            format!("{:?}", card.school),
            card.cost,
            card.attack,
            card.health,
            format!("{:?}", card.rarity),
            card.text
        );
    }

    output.push_str("\nCombos:\n");
    for combo in &COMBOS {
        let sequence: Vec<String> = combo.sequence.iter().map(|s| format!("{s:?}")).collect();
        let _ = writeln!(
            output,
            "  {:<22} {:<22} within {:.0}s",
            combo.name,
            sequence.join(" -> "),
            combo.window_ms as f64 / 1000.0
        );
    }

    output
}
