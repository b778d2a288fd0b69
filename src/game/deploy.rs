//! Deployment validation and the post-deployment pipeline.
//!
//! Deployment is a two-phase commit: [`deploy`] validates and places the unit
//! immediately, and [`resolve_deployment`] later runs abilities, lane combat
//! and the win check.

use tracing::debug;

use crate::error::{ActionResult, InvalidAction};
use crate::game::{
    AbilityKind, AbilityOutcome, BattleState, CardId, CombatResult, DeployedUnit, LaneId,
    MatchResult, School, Side, UnitId, resolve_combat, trigger_ability,
};

/// Taijutsu attack multiplier on the Mountain lane, as a fraction (6/5 = +20%).
const MOUNTAIN_TAIJUTSU_NUM: u32 = 6;
const MOUNTAIN_TAIJUTSU_DEN: u32 = 5;

/// Extra health for Stone Wall units on the Mountain lane.
const STONE_WALL_HEALTH: i32 = 2;

/// A unit that has been placed but not yet resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deployment {
    /// Deploying side.
    pub side: Side,
    /// Target lane.
    pub lane: LaneId,
    /// The new unit.
    pub unit: UnitId,
    /// Card it came from.
    pub card: CardId,
}

/// Check whether `side` may deploy hand slot `hand_index` into `lane`.
///
/// Returns the card on success. Only the player side is chakra-gated.
///
/// # Errors
///
/// Returns the first [`InvalidAction`] that applies.
pub fn can_deploy(
    state: &BattleState,
    side: Side,
    hand_index: usize,
    lane: LaneId,
) -> ActionResult<CardId> {
    if !state.is_playing() {
        return Err(InvalidAction::MatchNotRunning);
    }
    if state.turn != side {
        return Err(InvalidAction::WrongTurn(side));
    }

    let card = state
        .hands
        .get(side)
        .get(hand_index)
        .copied()
        .ok_or(InvalidAction::SlotOutOfRange(hand_index))?
        .ok_or(InvalidAction::EmptySlot(hand_index))?;

    if side == Side::Player {
        let cost = card.definition().cost;
        if !state.chakra.can_afford(cost) {
            return Err(InvalidAction::InsufficientChakra {
                cost,
                available: state.chakra.current,
            });
        }
    }

    if state.battlefield.lane(lane).occupancy(side) >= state.rules.lane_capacity {
        return Err(InvalidAction::LaneFull(lane));
    }

    Ok(card)
}

/// Build a unit for `card` entering `lane`, applying deployment modifiers.
#[must_use]
pub fn instantiate(id: UnitId, card: CardId, lane: LaneId) -> DeployedUnit {
    let mut unit = DeployedUnit::from_card(id, card);
    let def = card.definition();

    if lane == LaneId::Mountain && def.school == School::Taijutsu {
        unit.attack = unit.attack * MOUNTAIN_TAIJUTSU_NUM / MOUNTAIN_TAIJUTSU_DEN;
    }
    if lane == LaneId::Mountain && def.ability == Some(AbilityKind::StoneWall) {
        unit.health += STONE_WALL_HEALTH;
    }

    unit
}

/// Place a card from hand onto the battlefield.
///
/// On success the cost is paid (player only), the slot is emptied and the
/// unit is appended to the lane. Nothing changes on failure.
///
/// # Errors
///
/// Returns an [`InvalidAction`] if [`can_deploy`] rejects the intent.
pub fn deploy(
    state: &mut BattleState,
    side: Side,
    hand_index: usize,
    lane: LaneId,
) -> ActionResult<Deployment> {
    let card = can_deploy(state, side, hand_index, lane)?;

    if side == Side::Player {
        state.chakra.spend(card.definition().cost);
        state.stats.actions += 1;
    }

    let id = state.allocate_unit_id();
    let unit = instantiate(id, card, lane);
    debug!(
        %side, %lane, card = card.definition().name,
        attack = unit.attack, health = unit.health,
        "unit deployed"
    );
    state.battlefield.lane_mut(lane).units_mut(side).push(unit);

    if let Some(slot) = state.hands.get_mut(side).get_mut(hand_index) {
        *slot = None;
    }

    Ok(Deployment {
        side,
        lane,
        unit: id,
        card,
    })
}

/// What the post-deployment pipeline did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Ability effect, if the unit had one and was still standing.
    pub ability: Option<AbilityOutcome>,
    /// Lane combat outcome.
    pub combat: CombatResult,
    /// Match result if this resolution ended the match.
    pub result: Option<MatchResult>,
}

/// Run abilities, combat for the lane, then the win check.
///
/// Returns `None` without touching anything once the match is no longer
/// running.
pub fn resolve_deployment(state: &mut BattleState, deployment: &Deployment) -> Option<Resolution> {
    if !state.is_playing() {
        return None;
    }

    let ability = trigger_ability(state, deployment.unit);
    let combat = resolve_combat(state, deployment.lane);
    let result = state.evaluate_win();

    Some(Resolution {
        ability,
        combat,
        result,
    })
}
