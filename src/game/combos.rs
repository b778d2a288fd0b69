//! Jutsu combo recognition.
//!
//! Player deployments are remembered for a short history window. When the
//! tail of that history spells out a combo's school sequence inside the
//! combo's own window, the combo counts and the history starts over.

use crate::game::{BattleState, COMBOS, ComboDefinition, RecentPlay, School};

/// How long a deployment stays in the combo history.
pub const COMBO_HISTORY_MS: u64 = 10_000;

/// Record a player deployment and check for a completed combo.
///
/// Longer sequences are checked first so a three-step combo is not shadowed
/// by a two-step one ending on the same play.
pub fn record_play(state: &mut BattleState, school: School) -> Option<&'static ComboDefinition> {
    let now = state.elapsed_ms;
    state
        .recent_plays
        .retain(|play| now.saturating_sub(play.at_ms) <= COMBO_HISTORY_MS);
    state.recent_plays.push(RecentPlay { school, at_ms: now });

    let mut candidates: Vec<&'static ComboDefinition> = COMBOS.iter().collect();
    candidates.sort_by_key(|combo| std::cmp::Reverse(combo.sequence.len()));

    let combo = candidates
        .into_iter()
        .find(|combo| matches_tail(&state.recent_plays, combo, now))?;

    state.recent_plays.clear();
    state.stats.combos += 1;
    Some(combo)
}

fn matches_tail(plays: &[RecentPlay], combo: &ComboDefinition, now: u64) -> bool {
    let len = combo.sequence.len();
    if len == 0 || plays.len() < len {
        return false;
    }
    let tail = &plays[plays.len() - len..];
    let schools_match = tail
        .iter()
        .zip(combo.sequence)
        .all(|(play, school)| play.school == *school);
    schools_match && now.saturating_sub(tail[0].at_ms) <= combo.window_ms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Hands, Phase, Rules};

    fn create_test_state() -> BattleState {
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
    fn test_two_ninjutsu_in_window() {
        let mut state = create_test_state();
        assert!(record_play(&mut state, School::Ninjutsu).is_none());
        state.elapsed_ms = 4000;
        let combo = record_play(&mut state, School::Ninjutsu).unwrap();
        assert_eq!(combo.name, "Fire Dragon Tornado");
        assert_eq!(state.stats.combos, 1);
        assert!(state.recent_plays.is_empty());
    }

    #[test]
    fn test_outside_window_does_not_count() {
        let mut state = create_test_state();
        record_play(&mut state, School::Ninjutsu);
        state.elapsed_ms = 5001;
        assert!(record_play(&mut state, School::Ninjutsu).is_none());
        assert_eq!(state.stats.combos, 0);
    }

    #[test]
    fn test_order_matters() {
        let mut state = create_test_state();
        record_play(&mut state, School::Taijutsu);
        state.elapsed_ms = 1000;
        assert!(record_play(&mut state, School::Genjutsu).is_none());

        state.elapsed_ms = 2000;
        let combo = record_play(&mut state, School::Ninjutsu).unwrap();
        assert_eq!(combo.name, "Genjutsu Trap");
    }

    #[test]
    fn test_history_expires() {
        let mut state = create_test_state();
        record_play(&mut state, School::Genjutsu);
        state.elapsed_ms = 20_000;
        record_play(&mut state, School::Taijutsu);
        assert_eq!(state.recent_plays.len(), 1);
    }
}
