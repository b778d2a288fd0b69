//! Observable notifications for the display host.

use serde::Serialize;

use crate::game::{LaneId, MatchResult, Side, UnitId};

/// Something the host may want to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    /// A match began.
    MatchStarted,
    /// A card entered a lane.
    Deployed {
        /// Deploying side.
        side: Side,
        /// Target lane.
        lane: LaneId,
        /// New unit.
        unit: UnitId,
        /// Card name.
        card: &'static str,
    },
    /// A heal ability restored allies.
    Healed {
        /// Lane of the healer.
        lane: LaneId,
        /// Allies healed.
        count: usize,
    },
    /// An area ability struck enemies.
    ChainLightning {
        /// Lane of the caster.
        lane: LaneId,
        /// Enemies struck.
        count: usize,
    },
    /// Units fell in lane combat.
    Casualties {
        /// Lane.
        lane: LaneId,
        /// Player units removed.
        player: usize,
        /// AI units removed.
        ai: usize,
    },
    /// A side lost a stronghold.
    StrongholdDamaged {
        /// Side that lost the stronghold.
        side: Side,
        /// Strongholds it has left.
        remaining: u32,
    },
    /// The active terrain changed.
    TerrainChanged {
        /// Previously active terrain.
        from: LaneId,
        /// Newly active terrain.
        to: LaneId,
    },
    /// A jutsu combo was recognized.
    ComboTriggered {
        /// Combo name.
        name: &'static str,
    },
    /// Control passed to a side.
    TurnChanged {
        /// Side now holding the turn.
        side: Side,
    },
    /// The AI had no legal move.
    AiPassed,
    /// The match is over.
    MatchEnded {
        /// How it ended.
        result: MatchResult,
    },
}
