//! Error types for the battle engine.

use std::path::PathBuf;

use thiserror::Error;

use crate::game::{LaneId, Side};

/// A rejected intent.
///
/// Rejections never mutate the battle state; the host surfaces them to the
/// user and carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidAction {
    /// The match is not in the `playing` phase.
    #[error("match is not running")]
    MatchNotRunning,
    /// The acting side does not hold the turn.
    #[error("it is not the {0} side's turn")]
    WrongTurn(Side),
    /// A previous deployment is still waiting for its lane to resolve.
    #[error("a deployment is still resolving")]
    ResolutionPending,
    /// The hand index is past the end of the hand.
    #[error("hand slot {0} does not exist")]
    SlotOutOfRange(usize),
    /// The hand slot has already been played.
    #[error("hand slot {0} is empty")]
    EmptySlot(usize),
    /// The card costs more chakra than is available.
    #[error("card costs {cost} chakra but only {available} is available")]
    InsufficientChakra {
        /// Card cost.
        cost: u32,
        /// Chakra held by the side.
        available: u32,
    },
    /// The side already fills the lane.
    #[error("{0} lane is full")]
    LaneFull(LaneId),
}

/// A configuration problem found before a match starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric setting is out of its valid range.
    #[error("invalid setting `{field}`: {reason}")]
    InvalidSetting {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
    /// The card pool names a card the catalog does not know.
    #[error("unknown card in pool: {0}")]
    UnknownCard(String),
    /// The config file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid JSON for a match config.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for intent handling.
pub type ActionResult<T> = Result<T, InvalidAction>;
