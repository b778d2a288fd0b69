//! Headless match runner.
//!
//! Provides a pure function interface: `(seed, config, player bot) -> MatchReport`.
//!
//! The runner plays the host's part: it ticks the engine at a fixed frame
//! step and, whenever the player holds the turn with nothing pending, asks a
//! [`Policy`] for the player's move.

use serde::Serialize;
use tracing::debug;

use crate::engine::{Action, CheapestFirst, Engine, MatchConfig, Policy, RandomPolicy};
use crate::error::ConfigError;
use crate::game::{MatchResult, Side, Stats};

/// Frame step of the headless loop (about 60 fps).
pub const FRAME_MS: u64 = 16;

/// Built-in player controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerBot {
    /// Random card into a random open lane.
    #[default]
    Random,
    /// Cheapest affordable card into the emptiest lane.
    Cheapest,
}

impl PlayerBot {
    fn policy(self, seed: u64) -> Box<dyn Policy> {
        match self {
            Self::Random => Box::new(RandomPolicy::new(seed.rotate_left(17) ^ 0x9e37_79b9)),
            Self::Cheapest => Box::new(CheapestFirst),
        }
    }
}

/// Outcome of one headless match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    /// Seed the match was played with.
    pub seed: u64,
    /// How the match ended.
    pub result: MatchResult,
    /// Match time when it ended.
    pub duration_ms: u64,
    /// Player strongholds left.
    pub player_strongholds: u32,
    /// AI strongholds left.
    pub ai_strongholds: u32,
    /// Final statistics.
    pub stats: Stats,
    /// Deployments made by the player bot.
    pub player_deployments: u32,
    /// Times the player bot had nothing to play.
    pub player_passes: u32,
}

/// Play one match to completion.
///
/// Identical inputs always produce identical reports.
///
/// # Errors
///
/// Returns an error if the config does not validate.
pub fn run_match(seed: u64, config: &MatchConfig, bot: PlayerBot) -> Result<MatchReport, ConfigError> {
    let mut engine = Engine::new(config.clone(), seed)?;
    let mut player = bot.policy(seed);
    engine.start_match();

    let mut deployments = 0;
    let mut passes = 0;
    // Chakra at the last declined turn; the bot is asked again once it changes.
    let mut declined_at: Option<u32> = None;

    // The clock bounds the loop; the extra frames cover rounding.
    let max_frames = engine.state().match_duration_ms() / FRAME_MS + 2;
    for _ in 0..max_frames {
        if !engine.state().is_playing() {
            break;
        }

        let state = engine.state();
        if state.turn != Side::Player {
            declined_at = None;
        } else if !engine.resolution_pending() && declined_at != Some(state.chakra.current) {
            let chakra = state.chakra.current;
            let accepted = match player.choose_action(state, Side::Player) {
                Action::Deploy { hand_index, lane } => {
                    engine.deploy(Side::Player, hand_index, lane).is_ok()
                }
                Action::Pass => false,
            };
            if accepted {
                deployments += 1;
                declined_at = None;
            } else {
                passes += 1;
                declined_at = Some(chakra);
            }
        }

        engine.tick(FRAME_MS);
    }

    let state = engine.state();
    let result = state.result.unwrap_or(MatchResult::Timeout);
    debug!(seed, ?result, deployments, passes, "headless match finished");

    Ok(MatchReport {
        seed,
        result,
        duration_ms: state.elapsed_ms,
        player_strongholds: state.strongholds.player,
        ai_strongholds: state.strongholds.ai,
        stats: state.stats,
        player_deployments: deployments,
        player_passes: passes,
    })
}
