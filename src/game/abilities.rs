//! On-deploy ability triggers.
//!
//! Dispatch is by the unit's catalog ability. Abilities fire once per
//! deployment and never trigger further abilities.

use tracing::debug;

use crate::game::{AbilityKind, BattleState, UnitId};

/// Health restored per ally by a heal.
pub const HEAL_AMOUNT: i32 = 2;

/// Damage dealt to each enemy by chain lightning.
pub const CHAIN_LIGHTNING_DAMAGE: i32 = 2;

/// Effect of a triggered ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbilityOutcome {
    /// Allies healed.
    Healed(usize),
    /// Enemies struck.
    Struck(usize),
}

/// Fire the on-deploy ability of `unit`, if it has one.
///
/// Returns `None` when the unit is gone or has no on-deploy ability.
pub fn trigger_ability(state: &mut BattleState, unit: UnitId) -> Option<AbilityOutcome> {
    let (lane_id, side, deployed) = state.battlefield.find_unit(unit)?;
    let ability = deployed.definition().ability?;
    let lane = state.battlefield.lane_mut(lane_id);

    let outcome = match ability {
        AbilityKind::Heal => {
            let mut healed = 0;
            for ally in lane.units_mut(side) {
                if ally.id != unit && ally.is_alive() && ally.health < ally.max_health {
                    ally.health = (ally.health + HEAL_AMOUNT).min(ally.max_health);
                    healed += 1;
                }
            }
            AbilityOutcome::Healed(healed)
        }
        AbilityKind::ChainLightning => {
            let mut struck = 0;
            for enemy in lane.units_mut(side.opponent()) {
                if enemy.is_alive() {
                    enemy.health -= CHAIN_LIGHTNING_DAMAGE;
                    struck += 1;
                }
            }
            AbilityOutcome::Struck(struck)
        }
        AbilityKind::Stealth | AbilityKind::StoneWall => return None,
    };

    debug!(%side, lane = %lane_id, ?ability, ?outcome, "ability triggered");
    Some(outcome)
}
