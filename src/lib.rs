// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Clan Wars: a deterministic lane-based ninja card battle engine.
//!
//! Two sides (a player and an AI) spend chakra to deploy ninja units onto
//! three lanes. Units fight lane by lane, breached lanes cost strongholds,
//! and the match ends when a side runs out of strongholds or the clock
//! expires.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Host (CLI / headless runner)      │
//! ├─────────────────────────────────────┤
//! │   Engine (tick loop, scheduler, AI) │
//! ├─────────────────────────────────────┤
//! │   Game rules (state, combat, ...)   │
//! └─────────────────────────────────────┘
//! ```
//!
//! The host talks to the [`Engine`] through intents ([`Engine::deploy`])
//! and observations ([`Engine::snapshot`]). Given the same seed, config
//! and sequence of intents and ticks, a match always plays out the same.

pub mod engine;
pub mod error;
pub mod game;
pub mod tournament;

pub use engine::{Action, Engine, MatchConfig, Policy};
pub use error::{ActionResult, ConfigError, InvalidAction};

// Re-export key game types at crate root for convenience
pub use game::{BattleState, GameEvent, LaneId, MatchResult, Phase, Side, Snapshot};
