//! Battle state management.

use serde::Serialize;

use crate::game::{
    Battlefield, CardId, Chakra, LaneId, School, Side, Terrain, TerrainRotation, UnitId,
};

/// Actions per percentage point of terrain utilization (15 actions = 100%).
const UTILIZATION_FULL_ACTIONS: f64 = 15.0;

/// Match phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Waiting for a match to start.
    Menu,
    /// A match is running.
    Playing,
    /// The match is over. Terminal.
    Ended,
}

/// How a match ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchResult {
    /// The AI's strongholds fell.
    Victory,
    /// The player's strongholds fell.
    Defeat,
    /// The match clock ran out.
    Timeout,
}

/// Numeric rules for one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rules {
    /// Player chakra at match start.
    pub starting_chakra: u32,
    /// Nominal chakra maximum.
    pub max_chakra: u32,
    /// Hard chakra ceiling.
    pub overflow_chakra: u32,
    /// Tick time per regenerated chakra point.
    pub regen_interval_ms: u64,
    /// Seconds between terrain rotations.
    pub terrain_rotation_secs: u32,
    /// Match length in seconds.
    pub match_duration_secs: u32,
    /// Units a side may hold in one lane.
    pub lane_capacity: usize,
    /// Cards dealt to each side.
    pub hand_size: usize,
    /// Strongholds each side starts with.
    pub starting_strongholds: u32,
    /// A side at or below this many strongholds loses.
    pub loss_threshold: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            starting_chakra: 12,
            max_chakra: 12,
            overflow_chakra: 15,
            regen_interval_ms: 2000,
            terrain_rotation_secs: 90,
            match_duration_secs: 300,
            lane_capacity: 3,
            hand_size: 5,
            starting_strongholds: 3,
            loss_threshold: 1,
        }
    }
}

/// Stronghold counters per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Strongholds {
    /// Player strongholds left.
    pub player: u32,
    /// AI strongholds left.
    pub ai: u32,
}

impl Strongholds {
    /// Both sides at `count`.
    #[must_use]
    pub const fn new(count: u32) -> Self {
        Self {
            player: count,
            ai: count,
        }
    }

    /// Strongholds left for a side.
    #[must_use]
    pub const fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        }
    }

    /// Knock one stronghold off a side, flooring at zero. Returns what is left.
    pub fn damage(&mut self, side: Side) -> u32 {
        let counter = match side {
            Side::Player => &mut self.player,
            Side::Ai => &mut self.ai,
        };
        *counter = counter.saturating_sub(1);
        *counter
    }
}

/// Aggregate match statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Player deployments.
    pub actions: u32,
    /// Jutsu combos recognized.
    pub combos: u32,
    /// Player actions per minute.
    pub apm: u32,
    /// AI strongholds destroyed by the player.
    pub strongholds_destroyed: u32,
    /// Terrain utilization percentage, set when the match ends.
    pub terrain_utilization: u32,
}

/// A player deployment remembered for combo recognition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentPlay {
    /// School of the deployed card.
    pub school: School,
    /// Match time of the deployment.
    pub at_ms: u64,
}

/// Hands of both sides. `None` marks a played slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hands {
    /// Player hand.
    pub player: Vec<Option<CardId>>,
    /// AI hand.
    pub ai: Vec<Option<CardId>>,
}

impl Hands {
    /// Hand of a side.
    #[must_use]
    pub fn get(&self, side: Side) -> &[Option<CardId>] {
        match side {
            Side::Player => &self.player,
            Side::Ai => &self.ai,
        }
    }

    /// Mutable hand of a side.
    pub fn get_mut(&mut self, side: Side) -> &mut Vec<Option<CardId>> {
        match side {
            Side::Player => &mut self.player,
            Side::Ai => &mut self.ai,
        }
    }

    /// Indices of unplayed slots.
    #[must_use]
    pub fn playable(&self, side: Side) -> Vec<usize> {
        self.get(side)
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.map(|_| idx))
            .collect()
    }
}

/// Complete battle state.
///
/// Owned by one engine; the host only sees [`Snapshot`]s.
#[derive(Debug, Clone)]
pub struct BattleState {
    /// Rules this match runs under.
    pub rules: Rules,
    /// Match phase.
    pub phase: Phase,
    /// Outcome once `phase` is `Ended`.
    pub result: Option<MatchResult>,
    /// Side holding the turn.
    pub turn: Side,
    /// Player chakra.
    pub chakra: Chakra,
    /// Terrain list and rotation countdown.
    pub terrain: TerrainRotation,
    /// The three lanes.
    pub battlefield: Battlefield,
    /// Stronghold counters.
    pub strongholds: Strongholds,
    /// Hands of both sides.
    pub hands: Hands,
    /// Statistics.
    pub stats: Stats,
    /// Tick time since the match started.
    pub elapsed_ms: u64,
    /// Player deployments inside the combo history window.
    pub recent_plays: Vec<RecentPlay>,
    next_unit_id: u32,
}

impl BattleState {
    /// Fresh state in the menu phase.
    #[must_use]
    pub fn new(rules: Rules, hands: Hands) -> Self {
        Self {
            rules,
            phase: Phase::Menu,
            result: None,
            turn: Side::Player,
            chakra: Chakra::new(
                rules.starting_chakra,
                rules.max_chakra,
                rules.overflow_chakra,
                rules.regen_interval_ms,
            ),
            terrain: TerrainRotation::new(rules.terrain_rotation_secs),
            battlefield: Battlefield::new(),
            strongholds: Strongholds::new(rules.starting_strongholds),
            hands,
            stats: Stats::default(),
            elapsed_ms: 0,
            recent_plays: Vec::new(),
            next_unit_id: 1,
        }
    }

    /// Whether the match is running.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Mint a unit id.
    pub fn allocate_unit_id(&mut self) -> UnitId {
        let id = UnitId(self.next_unit_id);
        self.next_unit_id += 1;
        id
    }

    /// Hand control to `side`.
    pub fn set_turn(&mut self, side: Side) {
        self.turn = side;
    }

    /// Match length in milliseconds.
    #[must_use]
    pub fn match_duration_ms(&self) -> u64 {
        u64::from(self.rules.match_duration_secs) * 1000
    }

    /// Whole seconds left on the match clock.
    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        let elapsed_secs = u32::try_from(self.elapsed_ms / 1000).unwrap_or(u32::MAX);
        self.rules.match_duration_secs.saturating_sub(elapsed_secs)
    }

    /// Recompute actions per minute from the match clock.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn update_apm(&mut self) {
        let minutes = self.elapsed_ms as f64 / 60_000.0;
        self.stats.apm = if minutes > 0.0 {
            (f64::from(self.stats.actions) / minutes).round() as u32
        } else {
            0
        };
    }

    /// Check stronghold counters against the loss threshold.
    ///
    /// A fallen player takes priority over a fallen AI. Ends the match and
    /// returns the result when either side is out.
    pub fn evaluate_win(&mut self) -> Option<MatchResult> {
        if !self.is_playing() {
            return None;
        }
        let threshold = self.rules.loss_threshold;
        let result = if self.strongholds.player <= threshold {
            MatchResult::Defeat
        } else if self.strongholds.ai <= threshold {
            MatchResult::Victory
        } else {
            return None;
        };
        self.end(result);
        Some(result)
    }

    /// Move to the terminal phase.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn end(&mut self, result: MatchResult) {
        self.phase = Phase::Ended;
        self.result = Some(result);
        let utilization = (f64::from(self.stats.actions) / UTILIZATION_FULL_ACTIONS * 100.0).round();
        self.stats.terrain_utilization = utilization.min(100.0) as u32;
    }

    /// Read-only projection for the display host.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let hand_view = |side: Side| -> Vec<Option<&'static str>> {
            self.hands
                .get(side)
                .iter()
                .map(|slot| slot.map(|card| card.definition().name))
                .collect()
        };

        Snapshot {
            phase: self.phase,
            result: self.result,
            turn: self.turn,
            chakra: self.chakra.current,
            max_chakra: self.chakra.max,
            overflow_chakra: self.chakra.overflow_cap,
            chakra_overflowing: self.chakra.is_overflowing(),
            player_hand: hand_view(Side::Player),
            ai_hand: hand_view(Side::Ai),
            lanes: self
                .battlefield
                .iter()
                .map(|(id, lane)| LaneView {
                    lane: id,
                    player: lane.player.iter().map(UnitView::from).collect(),
                    ai: lane.ai.iter().map(UnitView::from).collect(),
                })
                .collect(),
            strongholds: self.strongholds,
            active_terrain: *self.terrain.active(),
            terrain_countdown_secs: self.terrain.countdown_secs(),
            remaining_secs: self.remaining_secs(),
            stats: self.stats,
        }
    }
}

/// Display view of a deployed unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnitView {
    /// Unit id.
    pub id: UnitId,
    /// Card name.
    pub name: &'static str,
    /// Effective attack.
    pub attack: u32,
    /// Current health.
    pub health: i32,
    /// Base health.
    pub max_health: i32,
}

impl From<&crate::game::DeployedUnit> for UnitView {
    fn from(unit: &crate::game::DeployedUnit) -> Self {
        Self {
            id: unit.id,
            name: unit.definition().name,
            attack: unit.attack,
            health: unit.health,
            max_health: unit.max_health,
        }
    }
}

/// Display view of a lane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaneView {
    /// Lane key.
    pub lane: LaneId,
    /// Player units in combat order.
    pub player: Vec<UnitView>,
    /// AI units in combat order.
    pub ai: Vec<UnitView>,
}

/// Read-only projection of [`BattleState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Match phase.
    pub phase: Phase,
    /// Result once ended.
    pub result: Option<MatchResult>,
    /// Side holding the turn.
    pub turn: Side,
    /// Player chakra.
    pub chakra: u32,
    /// Nominal chakra maximum.
    pub max_chakra: u32,
    /// Hard chakra ceiling.
    pub overflow_chakra: u32,
    /// Chakra sits above the nominal maximum.
    pub chakra_overflowing: bool,
    /// Player hand by card name.
    pub player_hand: Vec<Option<&'static str>>,
    /// AI hand by card name.
    pub ai_hand: Vec<Option<&'static str>>,
    /// Lanes in battlefield order.
    pub lanes: Vec<LaneView>,
    /// Stronghold counters.
    pub strongholds: Strongholds,
    /// Active terrain.
    pub active_terrain: Terrain,
    /// Seconds until the next terrain rotation.
    pub terrain_countdown_secs: u32,
    /// Seconds left on the match clock.
    pub remaining_secs: u32,
    /// Statistics.
    pub stats: Stats,
}
