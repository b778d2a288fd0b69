//! Lane combat resolution.
//!
//! Both sides strike simultaneously with their pre-combat attack totals.
//! Damage is spread greedily in deployment order: the earliest unit absorbs
//! up to its remaining health before the rest carries over.

use tracing::debug;

use crate::game::{BattleState, DeployedUnit, Lane, LaneId, Side};

/// Result of resolving one lane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CombatResult {
    /// Total attack the player side brought.
    pub player_attack: u32,
    /// Total attack the AI side brought.
    pub ai_attack: u32,
    /// Player units removed.
    pub player_losses: usize,
    /// AI units removed.
    pub ai_losses: usize,
    /// Side whose stronghold was hit because its half of the lane emptied.
    pub breached: Option<Side>,
}

/// Spread `damage` over living units in order. Returns damage absorbed.
pub fn distribute_damage(units: &mut [DeployedUnit], damage: u32) -> u32 {
    let mut remaining = damage;
    for unit in units.iter_mut().filter(|u| u.is_alive()) {
        if remaining == 0 {
            break;
        }
        // Living units have positive health.
        let health = u32::try_from(unit.health).unwrap_or(0);
        let absorbed = remaining.min(health);
        unit.health -= i32::try_from(absorbed).unwrap_or(i32::MAX);
        remaining -= absorbed;
    }
    damage - remaining
}

fn total_attack(units: &[DeployedUnit]) -> u32 {
    units
        .iter()
        .filter(|u| u.is_alive())
        .fold(0u32, |sum, u| sum.saturating_add(u.attack))
}

/// Resolve combat within a single lane, without touching strongholds.
///
/// With no living units on either side this is a no-op.
pub fn resolve_lane(lane: &mut Lane) -> CombatResult {
    let player_living = lane.living(Side::Player);
    let ai_living = lane.living(Side::Ai);
    if player_living == 0 && ai_living == 0 {
        return CombatResult::default();
    }

    let player_attack = total_attack(&lane.player);
    let ai_attack = total_attack(&lane.ai);

    if player_attack > 0 && ai_living > 0 {
        distribute_damage(&mut lane.ai, player_attack);
    }
    if ai_attack > 0 && player_living > 0 {
        distribute_damage(&mut lane.player, ai_attack);
    }

    let [player_losses, ai_losses] = lane.remove_destroyed();

    let breached = match (lane.living(Side::Player), lane.living(Side::Ai)) {
        (p, 0) if p > 0 => Some(Side::Ai),
        (0, a) if a > 0 => Some(Side::Player),
        _ => None,
    };

    CombatResult {
        player_attack,
        ai_attack,
        player_losses,
        ai_losses,
        breached,
    }
}

/// Resolve combat in `lane_id` and apply stronghold damage.
pub fn resolve_combat(state: &mut BattleState, lane_id: LaneId) -> CombatResult {
    let result = resolve_lane(state.battlefield.lane_mut(lane_id));

    if let Some(side) = result.breached {
        state.strongholds.damage(side);
        if side == Side::Ai {
            state.stats.strongholds_destroyed += 1;
        }
    }

    debug!(
        lane = %lane_id,
        player_attack = result.player_attack,
        ai_attack = result.ai_attack,
        player_losses = result.player_losses,
        ai_losses = result.ai_losses,
        breached = ?result.breached,
        "lane resolved"
    );
    result
}

/// Kani formal verification proofs.
///
/// Run with: `cargo kani`
#[cfg(kani)]
mod kani_proofs {
    /// Prove that damage spread never absorbs more than was dealt.
    #[kani::proof]
    fn prove_absorb_bounded() {
        let damage: u32 = kani::any();
        let health: i32 = kani::any();
        kani::assume(health > 0);

        let absorbed = damage.min(health as u32);
        assert!(absorbed <= damage);
        assert!(i64::from(absorbed) <= i64::from(health));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{CLASSIC_POOL, Hands, Phase, Rules, UnitId, find_card};

    fn unit(id: u32, attack: u32, health: i32) -> DeployedUnit {
        let mut u = DeployedUnit::from_card(UnitId(id), CLASSIC_POOL[0]);
        u.attack = attack;
        u.health = health;
        u.max_health = health;
        u
    }

    #[test]
    fn test_distribute_in_order() {
        let mut units = vec![unit(1, 0, 2), unit(2, 0, 2), unit(3, 0, 2)];
        let absorbed = distribute_damage(&mut units, 5);
        assert_eq!(absorbed, 5);
        let healths: Vec<_> = units.iter().map(|u| u.health).collect();
        assert_eq!(healths, [0, 0, 1]);
    }

    #[test]
    fn test_distribute_skips_dead() {
        let mut units = vec![unit(1, 0, 0), unit(2, 0, 3)];
        distribute_damage(&mut units, 2);
        assert_eq!(units[0].health, 0);
        assert_eq!(units[1].health, 1);
    }

    #[test]
    fn test_overkill_is_wasted() {
        let mut units = vec![unit(1, 0, 1)];
        assert_eq!(distribute_damage(&mut units, 10), 1);
    }

    #[test]
    fn test_five_attack_into_three_twos() {
        let mut lane = Lane {
            player: vec![unit(1, 5, 10)],
            ai: vec![unit(2, 0, 2), unit(3, 0, 2), unit(4, 0, 2)],
        };

        let result = resolve_lane(&mut lane);
        assert_eq!(result.ai_losses, 2);
        assert_eq!(lane.ai.len(), 1);
        assert_eq!(lane.ai[0].id, UnitId(4));
        assert_eq!(lane.ai[0].health, 1);
        assert_eq!(result.breached, None);
    }

    #[test]
    fn test_simultaneous_exchange() {
        // Both units die; each still deals its damage.
        let mut lane = Lane {
            player: vec![unit(1, 3, 2)],
            ai: vec![unit(2, 2, 3)],
        };

        let result = resolve_lane(&mut lane);
        assert_eq!(result.player_losses, 1);
        assert_eq!(result.ai_losses, 1);
        assert!(lane.player.is_empty());
        assert!(lane.ai.is_empty());
        assert_eq!(result.breached, None);
    }

    #[test]
    fn test_empty_lane_noop() {
        let mut lane = Lane::default();
        assert_eq!(resolve_lane(&mut lane), CombatResult::default());
    }

    #[test]
    fn test_dead_units_cleared_even_without_attack() {
        // Chain lightning can leave corpses in a lane with no enemy attack.
        let mut lane = Lane {
            player: vec![unit(1, 6, 4)],
            ai: vec![unit(2, 1, 0)],
        };

        let result = resolve_lane(&mut lane);
        assert_eq!(result.ai_losses, 1);
        assert_eq!(result.breached, Some(Side::Ai));
    }

    #[test]
    fn test_resolve_combat_damages_stronghold() {
        let mut state = BattleState::new(
            Rules::default(),
            Hands {
                player: vec![],
                ai: vec![],
            },
        );
        state.phase = Phase::Playing;
        let mut genin = DeployedUnit::from_card(UnitId(1), find_card("Shadow Genin").unwrap());
        genin.health = 2;
        state.battlefield.lane_mut(LaneId::Forest).ai.push(genin);

        let result = resolve_combat(&mut state, LaneId::Forest);
        assert_eq!(result.breached, Some(Side::Player));
        assert_eq!(state.strongholds.player, 2);
        assert_eq!(state.strongholds.ai, 3);
        assert_eq!(state.stats.strongholds_destroyed, 0);
    }

    #[test]
    fn test_player_breach_counts_stat() {
        let mut state = BattleState::new(
            Rules::default(),
            Hands {
                player: vec![],
                ai: vec![],
            },
        );
        state.phase = Phase::Playing;
        state.battlefield.lane_mut(LaneId::River).player.push(unit(1, 2, 2));

        resolve_combat(&mut state, LaneId::River);
        assert_eq!(state.strongholds.ai, 2);
        assert_eq!(state.stats.strongholds_destroyed, 1);
    }
}
