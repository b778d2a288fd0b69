//! Pluggable decision policies.
//!
//! The engine asks a [`Policy`] for the AI's move. The headless runner uses
//! the same interface to drive the player side.

use std::collections::VecDeque;
use std::fmt;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::game::{BattleState, LaneId, Side};

/// A move chosen by a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Deploy a hand slot into a lane.
    Deploy {
        /// Hand slot.
        hand_index: usize,
        /// Target lane.
        lane: LaneId,
    },
    /// Do nothing this turn.
    Pass,
}

/// Chooses moves for one side.
pub trait Policy: fmt::Debug + Send {
    /// Pick a move for `side` given the current state.
    fn choose_action(&mut self, state: &BattleState, side: Side) -> Action;
}

/// Lanes where `side` still has room.
#[must_use]
pub fn open_lanes(state: &BattleState, side: Side) -> Vec<LaneId> {
    LaneId::ALL
        .into_iter()
        .filter(|&lane| state.battlefield.lane(lane).occupancy(side) < state.rules.lane_capacity)
        .collect()
}

/// Uniformly random legal-looking move: any unplayed card into any open lane.
///
/// Cost is ignored, matching how the AI is allowed to deploy.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: ChaCha8Rng,
}

impl RandomPolicy {
    /// Seeded policy.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn choose_action(&mut self, state: &BattleState, side: Side) -> Action {
        let cards = state.hands.playable(side);
        let lanes = open_lanes(state, side);
        match (cards.choose(&mut self.rng), lanes.choose(&mut self.rng)) {
            (Some(&hand_index), Some(&lane)) => Action::Deploy { hand_index, lane },
            _ => Action::Pass,
        }
    }
}

/// Deterministic policy: cheapest card the side can pay for, into the open
/// lane where it has the fewest units (earliest lane on ties).
#[derive(Debug, Clone, Copy, Default)]
pub struct CheapestFirst;

impl Policy for CheapestFirst {
    fn choose_action(&mut self, state: &BattleState, side: Side) -> Action {
        let affordable = |cost: u32| side == Side::Ai || state.chakra.can_afford(cost);

        let card = state
            .hands
            .get(side)
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.map(|card| (idx, card.definition().cost)))
            .filter(|&(_, cost)| affordable(cost))
            .min_by_key(|&(idx, cost)| (cost, idx));

        let lane = open_lanes(state, side)
            .into_iter()
            .min_by_key(|&lane| (state.battlefield.lane(lane).occupancy(side), lane));

        match (card, lane) {
            (Some((hand_index, _)), Some(lane)) => Action::Deploy { hand_index, lane },
            _ => Action::Pass,
        }
    }
}

/// Replays a fixed list of moves, then passes forever.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    actions: VecDeque<Action>,
}

impl Scripted {
    /// Policy that plays `actions` in order.
    #[must_use]
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }
}

impl Policy for Scripted {
    fn choose_action(&mut self, _state: &BattleState, _side: Side) -> Action {
        self.actions.pop_front().unwrap_or(Action::Pass)
    }
}
