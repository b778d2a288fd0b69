//! Battle invariants - sanity checks that detect bugs.
//!
//! None of these should ever fire if the component operations are correct.
//! Debug builds panic on a violation; release builds clamp the state back
//! into range and carry on.

use thiserror::Error;
use tracing::error;

use crate::game::{BattleState, LaneId, Phase, Side};

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invariant violation: {message}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl InvariantViolation {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Check all battle invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &BattleState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    if state.chakra.current > state.chakra.overflow_cap {
        violations.push(InvariantViolation::new(format!(
            "chakra {} exceeds overflow cap {}",
            state.chakra.current, state.chakra.overflow_cap
        )));
    }

    let active = state.terrain.active_count();
    if active != 1 {
        violations.push(InvariantViolation::new(format!(
            "{active} terrains active, expected exactly 1"
        )));
    }

    for side in Side::ALL {
        let count = state.strongholds.get(side);
        if count > state.rules.starting_strongholds {
            violations.push(InvariantViolation::new(format!(
                "{side} strongholds {count} above starting {}",
                state.rules.starting_strongholds
            )));
        }
    }

    for (lane_id, lane) in state.battlefield.iter() {
        for side in Side::ALL {
            let occupancy = lane.occupancy(side);
            if occupancy > state.rules.lane_capacity {
                violations.push(InvariantViolation::new(format!(
                    "{side} holds {occupancy} units in {lane_id}, capacity {}",
                    state.rules.lane_capacity
                )));
            }
        }
    }

    if state.phase == Phase::Ended && state.result.is_none() {
        violations.push(InvariantViolation::new("match ended without a result"));
    }

    violations
}

/// Assert all battle invariants hold, panicking if any are violated.
///
/// Only active in debug builds. In release builds the state is clamped.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn enforce_invariants(state: &mut BattleState) {
    let violations = check_invariants(state);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Battle invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// Clamp the state back into range in release builds.
#[cfg(not(debug_assertions))]
pub fn enforce_invariants(state: &mut BattleState) {
    let violations = check_invariants(state);
    if violations.is_empty() {
        return;
    }
    for violation in &violations {
        error!(%violation, "clamping battle state");
    }
    repair(state);
}

/// Pull every bounded field back into range.
pub fn repair(state: &mut BattleState) {
    state.chakra.clamp();

    if state.terrain.active_count() != 1 {
        let lane = state
            .terrain
            .terrains()
            .iter()
            .find(|t| t.active)
            .map_or(LaneId::Mountain, |t| t.lane);
        error!(%lane, "repairing terrain activation");
        state.terrain.activate(lane);
    }

    let cap = state.rules.starting_strongholds;
    state.strongholds.player = state.strongholds.player.min(cap);
    state.strongholds.ai = state.strongholds.ai.min(cap);

    let capacity = state.rules.lane_capacity;
    for lane in LaneId::ALL {
        for side in Side::ALL {
            state.battlefield.lane_mut(lane).units_mut(side).truncate(capacity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Hands, MatchResult, Rules};

    fn create_valid_state() -> BattleState {
        let mut state = BattleState::new(
            Rules::default(),
            Hands {
                player: vec![],
                ai: vec![],
            },
        );
        state.phase = Phase::Playing;
        state
    }

    #[test]
    fn test_valid_state_passes() {
        let state = create_valid_state();
        assert!(check_invariants(&state).is_empty());
    }

    #[test]
    fn test_detects_chakra_overflow() {
        let mut state = create_valid_state();
        state.chakra.current = 99;
        let violations = check_invariants(&state);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("chakra"));
    }

    #[test]
    fn test_detects_two_active_terrains() {
        let mut state = create_valid_state();
        state.terrain.terrains_mut()[2].active = true;
        let violations = check_invariants(&state);
        assert!(violations.iter().any(|v| v.message.contains("terrains active")));
    }

    #[test]
    fn test_detects_ended_without_result() {
        let mut state = create_valid_state();
        state.phase = Phase::Ended;
        assert_eq!(check_invariants(&state).len(), 1);
        state.result = Some(MatchResult::Timeout);
        assert!(check_invariants(&state).is_empty());
    }

    #[test]
    fn test_repair_clamps() {
        let mut state = create_valid_state();
        state.chakra.current = 40;
        state.strongholds.ai = 9;
        state.terrain.terrains_mut()[1].active = true;

        repair(&mut state);
        assert!(check_invariants(&state).is_empty());
        assert_eq!(state.chakra.current, 15);
        assert_eq!(state.strongholds.ai, 3);
        assert_eq!(state.terrain.active().name, "Mountain Path");
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "Battle invariant violations")]
    fn test_enforce_panics_in_debug() {
        let mut state = create_valid_state();
        state.chakra.current = 16;
        enforce_invariants(&mut state);
    }
}
