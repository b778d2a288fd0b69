//! Lanes, sides and the units deployed on them.

use std::fmt;

use serde::Serialize;

use crate::game::{CardDefinition, CardId};

/// One of the two competing sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The human player.
    Player,
    /// The computer opponent.
    Ai,
}

impl Side {
    /// Both sides, player first.
    pub const ALL: [Side; 2] = [Side::Player, Side::Ai];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Ai => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Ai => write!(f, "ai"),
        }
    }
}

/// Fixed lane key. Lane order is also terrain order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LaneId {
    /// Mountain Path.
    Mountain,
    /// Forest Grove.
    Forest,
    /// River Valley.
    River,
}

impl LaneId {
    /// All lanes in battlefield order.
    pub const ALL: [LaneId; 3] = [LaneId::Mountain, LaneId::Forest, LaneId::River];

    /// Position of the lane in [`LaneId::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            LaneId::Mountain => 0,
            LaneId::Forest => 1,
            LaneId::River => 2,
        }
    }
}

impl fmt::Display for LaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaneId::Mountain => write!(f, "mountain"),
            LaneId::Forest => write!(f, "forest"),
            LaneId::River => write!(f, "river"),
        }
    }
}

/// Per-match identity of a deployed unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct UnitId(pub u32);

/// A card instance living on the battlefield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeployedUnit {
    /// Match-unique identity.
    pub id: UnitId,
    /// Catalog entry this unit was made from.
    pub card: CardId,
    /// Effective attack after deployment modifiers.
    pub attack: u32,
    /// Current health. Zero or below means destroyed.
    pub health: i32,
    /// Base health from the card; heals never exceed it.
    pub max_health: i32,
}

impl DeployedUnit {
    /// Instantiate a unit with the card's base stats.
    #[must_use]
    pub fn from_card(id: UnitId, card: CardId) -> Self {
        let def = card.definition();
        let health = i32::try_from(def.health).unwrap_or(i32::MAX);
        Self {
            id,
            card,
            attack: def.attack,
            health,
            max_health: health,
        }
    }

    /// The catalog definition.
    #[must_use]
    pub fn definition(&self) -> &'static CardDefinition {
        self.card.definition()
    }

    /// Whether the unit still stands.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// One lane: an ordered unit list per side.
///
/// Insertion order is combat order; the earliest deployment absorbs damage first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Lane {
    /// Units on the player's side.
    pub player: Vec<DeployedUnit>,
    /// Units on the AI's side.
    pub ai: Vec<DeployedUnit>,
}

impl Lane {
    /// Units for a side.
    #[must_use]
    pub fn units(&self, side: Side) -> &[DeployedUnit] {
        match side {
            Side::Player => &self.player,
            Side::Ai => &self.ai,
        }
    }

    /// Mutable units for a side.
    pub fn units_mut(&mut self, side: Side) -> &mut Vec<DeployedUnit> {
        match side {
            Side::Player => &mut self.player,
            Side::Ai => &mut self.ai,
        }
    }

    /// Number of units a side occupies in this lane.
    #[must_use]
    pub fn occupancy(&self, side: Side) -> usize {
        self.units(side).len()
    }

    /// Number of living units for a side.
    #[must_use]
    pub fn living(&self, side: Side) -> usize {
        self.units(side).iter().filter(|u| u.is_alive()).count()
    }

    /// Drop every destroyed unit. Returns how many were removed per side,
    /// indexed player then AI.
    pub fn remove_destroyed(&mut self) -> [usize; 2] {
        let mut removed = [0; 2];
        for side in Side::ALL {
            let units = self.units_mut(side);
            let before = units.len();
            units.retain(DeployedUnit::is_alive);
            removed[side.index()] = before - units.len();
        }
        removed
    }
}

/// The three lanes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Battlefield {
    lanes: [Lane; 3],
}

impl Battlefield {
    /// An empty battlefield.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow a lane.
    #[must_use]
    pub fn lane(&self, id: LaneId) -> &Lane {
        &self.lanes[id.index()]
    }

    /// Mutably borrow a lane.
    pub fn lane_mut(&mut self, id: LaneId) -> &mut Lane {
        &mut self.lanes[id.index()]
    }

    /// Iterate over lanes with their keys.
    pub fn iter(&self) -> impl Iterator<Item = (LaneId, &Lane)> {
        LaneId::ALL.into_iter().zip(self.lanes.iter())
    }

    /// Find a unit anywhere on the battlefield.
    #[must_use]
    pub fn find_unit(&self, id: UnitId) -> Option<(LaneId, Side, &DeployedUnit)> {
        self.iter().find_map(|(lane_id, lane)| {
            Side::ALL.into_iter().find_map(|side| {
                lane.units(side)
                    .iter()
                    .find(|u| u.id == id)
                    .map(|u| (lane_id, side, u))
            })
        })
    }

    /// Total units currently deployed.
    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.lanes.iter().map(|l| l.player.len() + l.ai.len()).sum()
    }
}
