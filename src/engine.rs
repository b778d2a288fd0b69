//! Tick-driven match engine.
//!
//! [`Engine`] owns one [`BattleState`] and is the only thing that mutates it.
//! The host calls [`Engine::tick`] once per frame, submits intents through
//! [`Engine::deploy`] and reads [`Engine::snapshot`] for display.
//!
//! Delayed work (lane resolution after a deployment, the AI thinking, the AI
//! passing) sits in a schedule keyed by match time. Continuations are queued
//! relative to the due time of the task that spawned them, and a tick stops
//! at every due time on its way, so a single large tick plays out the same as
//! many small ones.

pub mod config;
pub mod policy;

pub use config::MatchConfig;
pub use policy::{Action, CheapestFirst, Policy, RandomPolicy, Scripted, open_lanes};

use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::error::{ActionResult, ConfigError, InvalidAction};
use crate::game::{
    self, AbilityOutcome, BattleState, CardId, Deployment, GameEvent, Hands, LaneId, MatchResult,
    Phase, Rules, Side, Snapshot, TerrainBonus, enforce_invariants, record_play,
};

/// Deferred work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    /// Run the post-deployment pipeline.
    Resolve(Deployment),
    /// Ask the AI policy for a move.
    AiAct,
    /// Hand control back after an AI pass.
    AiPass,
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    due_ms: u64,
    seq: u64,
    task: Task,
}

/// A running (or finished) match.
#[derive(Debug)]
pub struct Engine {
    config: MatchConfig,
    rules: Rules,
    pool: Vec<CardId>,
    state: BattleState,
    rng: ChaCha8Rng,
    ai: Box<dyn Policy>,
    schedule: Vec<Scheduled>,
    next_seq: u64,
    events: Vec<GameEvent>,
}

impl Engine {
    /// Engine with the random AI policy, seeded from `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config does not validate.
    pub fn new(config: MatchConfig, seed: u64) -> Result<Self, ConfigError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let ai = Box::new(RandomPolicy::new(rng.next_u64()));
        Self::build(config, rng, ai)
    }

    /// Engine with a caller-supplied AI policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the config does not validate.
    pub fn with_policy(
        config: MatchConfig,
        seed: u64,
        ai: Box<dyn Policy>,
    ) -> Result<Self, ConfigError> {
        Self::build(config, ChaCha8Rng::seed_from_u64(seed), ai)
    }

    fn build(config: MatchConfig, rng: ChaCha8Rng, ai: Box<dyn Policy>) -> Result<Self, ConfigError> {
        config.validate()?;
        let pool = config.card_pool()?;
        let rules = config.rules();
        let state = BattleState::new(
            rules,
            Hands {
                player: Vec::new(),
                ai: Vec::new(),
            },
        );
        Ok(Self {
            config,
            rules,
            pool,
            state,
            rng,
            ai,
            schedule: Vec::new(),
            next_seq: 0,
            events: Vec::new(),
        })
    }

    /// Reset everything and begin a match. Valid from any phase.
    pub fn start_match(&mut self) {
        let hands = Hands {
            player: self.deal(),
            ai: self.deal(),
        };
        self.state = BattleState::new(self.rules, hands);
        self.state.phase = Phase::Playing;
        self.schedule.clear();
        self.events.clear();
        self.events.push(GameEvent::MatchStarted);
        info!(
            hand_size = self.rules.hand_size,
            duration_secs = self.rules.match_duration_secs,
            "match started"
        );
    }

    fn deal(&mut self) -> Vec<Option<CardId>> {
        (0..self.rules.hand_size)
            .map(|_| self.pool.choose(&mut self.rng).copied())
            .collect()
    }

    /// Check an intent without applying it.
    ///
    /// # Errors
    ///
    /// Returns why the deployment would be rejected.
    pub fn can_deploy(&self, side: Side, hand_index: usize, lane: LaneId) -> ActionResult<CardId> {
        if self.state.is_playing() && self.resolution_pending() {
            return Err(InvalidAction::ResolutionPending);
        }
        game::can_deploy(&self.state, side, hand_index, lane)
    }

    /// Deploy a card now and queue its resolution.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidAction`] and leaves the state untouched if the
    /// intent is rejected.
    pub fn deploy(&mut self, side: Side, hand_index: usize, lane: LaneId) -> ActionResult<Deployment> {
        let now = self.state.elapsed_ms;
        self.deploy_at(side, hand_index, lane, now)
    }

    fn deploy_at(
        &mut self,
        side: Side,
        hand_index: usize,
        lane: LaneId,
        now_ms: u64,
    ) -> ActionResult<Deployment> {
        if let Err(reason) = self.can_deploy(side, hand_index, lane) {
            warn!(%side, hand_index, %lane, %reason, "deployment rejected");
            return Err(reason);
        }
        let deployment = game::deploy(&mut self.state, side, hand_index, lane)?;
        let card = deployment.card.definition();

        self.events.push(GameEvent::Deployed {
            side,
            lane,
            unit: deployment.unit,
            card: card.name,
        });

        if side == Side::Player {
            if let Some(combo) = record_play(&mut self.state, card.school) {
                debug!(combo = combo.name, "combo recognized");
                self.events.push(GameEvent::ComboTriggered { name: combo.name });
            }
        }

        self.push_task(now_ms + self.config.resolution_delay_ms, Task::Resolve(deployment));
        Ok(deployment)
    }

    /// Whether a deployment is waiting for its lane to resolve.
    #[must_use]
    pub fn resolution_pending(&self) -> bool {
        self.schedule
            .iter()
            .any(|entry| matches!(entry.task, Task::Resolve(_)))
    }

    /// Advance the match clock by `delta_ms`.
    ///
    /// The delta is played out in segments that stop at scheduled tasks and
    /// terrain rotations, and never run past the match clock. Within a
    /// segment the turn and the active terrain are fixed, so chakra only
    /// regenerates for time the player actually held the turn. Tasks due
    /// after the clock runs out never run. Does nothing unless a match is
    /// running.
    pub fn tick(&mut self, delta_ms: u64) {
        if !self.state.is_playing() {
            return;
        }
        let deadline = self.state.match_duration_ms();
        let target = self.state.elapsed_ms.saturating_add(delta_ms).min(deadline);

        loop {
            let now = self.state.elapsed_ms;
            if now >= deadline {
                break;
            }
            self.run_due_tasks();
            if !self.state.is_playing() || now >= target {
                break;
            }

            let mut until = target.min(now.saturating_add(self.state.terrain.ms_until_rotation()));
            if let Some(due) = self.next_due() {
                until = until.min(due);
            }
            self.advance_clock(until - now);
        }

        self.state.update_apm();
        if self.state.is_playing() && self.state.elapsed_ms >= deadline {
            self.finish(MatchResult::Timeout);
        }

        enforce_invariants(&mut self.state);
    }

    /// Move the clock forward over a stretch with no task or rotation inside.
    fn advance_clock(&mut self, span_ms: u64) {
        self.state.elapsed_ms += span_ms;

        if self.state.turn == Side::Player {
            let bonus = self.state.terrain.grants(TerrainBonus::ChakraRegen);
            let regen = self.state.chakra.regenerate(span_ms, bonus);
            if regen.gained > 0 {
                debug!(gained = regen.gained, chakra = self.state.chakra.current, "chakra regenerated");
            }
        }

        for shift in self.state.terrain.advance(span_ms) {
            info!(from = %shift.from, to = %shift.to, "terrain rotated");
            self.events.push(GameEvent::TerrainChanged {
                from: shift.from,
                to: shift.to,
            });
        }
    }

    /// Run every queued task immediately, advancing the clock to each due
    /// time in turn. Returns once nothing is scheduled or the match is over.
    pub fn settle(&mut self) {
        while self.state.is_playing() {
            let Some(due) = self.next_due() else {
                break;
            };
            let delta = due.saturating_sub(self.state.elapsed_ms);
            self.tick(delta);
        }
    }

    fn push_task(&mut self, due_ms: u64, task: Task) {
        self.schedule.push(Scheduled {
            due_ms,
            seq: self.next_seq,
            task,
        });
        self.next_seq += 1;
    }

    fn next_due(&self) -> Option<u64> {
        self.schedule.iter().map(|entry| entry.due_ms).min()
    }

    fn pop_due(&mut self) -> Option<Scheduled> {
        let now = self.state.elapsed_ms;
        let (idx, _) = self
            .schedule
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due_ms <= now)
            .min_by_key(|(_, entry)| (entry.due_ms, entry.seq))?;
        Some(self.schedule.remove(idx))
    }

    fn run_due_tasks(&mut self) {
        while let Some(entry) = self.pop_due() {
            if !self.state.is_playing() {
                debug!(task = ?entry.task, "discarding task after match end");
                continue;
            }
            match entry.task {
                Task::Resolve(deployment) => self.resolve(&deployment, entry.due_ms),
                Task::AiAct => self.ai_act(entry.due_ms),
                Task::AiPass => {
                    if self.state.turn == Side::Ai {
                        self.hand_turn_to(Side::Player);
                    }
                }
            }
        }
    }

    fn resolve(&mut self, deployment: &Deployment, due_ms: u64) {
        let Some(resolution) = game::resolve_deployment(&mut self.state, deployment) else {
            return;
        };
        let lane = deployment.lane;

        match resolution.ability {
            Some(AbilityOutcome::Healed(count)) => {
                self.events.push(GameEvent::Healed { lane, count });
            }
            Some(AbilityOutcome::Struck(count)) => {
                self.events.push(GameEvent::ChainLightning { lane, count });
            }
            None => {}
        }

        let combat = resolution.combat;
        if combat.player_losses > 0 || combat.ai_losses > 0 {
            self.events.push(GameEvent::Casualties {
                lane,
                player: combat.player_losses,
                ai: combat.ai_losses,
            });
        }
        if let Some(side) = combat.breached {
            self.events.push(GameEvent::StrongholdDamaged {
                side,
                remaining: self.state.strongholds.get(side),
            });
        }

        if let Some(result) = resolution.result {
            self.announce_end(result);
            return;
        }

        match deployment.side {
            Side::Player => {
                self.hand_turn_to(Side::Ai);
                self.push_task(due_ms + self.config.ai_think_delay_ms, Task::AiAct);
            }
            Side::Ai => self.hand_turn_to(Side::Player),
        }
    }

    fn ai_act(&mut self, due_ms: u64) {
        if self.state.turn != Side::Ai || self.resolution_pending() {
            return;
        }

        let action = self.ai.choose_action(&self.state, Side::Ai);
        debug!(?action, "ai chose");
        let deployed = match action {
            Action::Deploy { hand_index, lane } => {
                self.deploy_at(Side::Ai, hand_index, lane, due_ms).is_ok()
            }
            Action::Pass => false,
        };

        if !deployed {
            self.events.push(GameEvent::AiPassed);
            self.push_task(due_ms + self.config.ai_pass_delay_ms, Task::AiPass);
        }
    }

    fn hand_turn_to(&mut self, side: Side) {
        self.state.set_turn(side);
        debug!(%side, "turn changed");
        self.events.push(GameEvent::TurnChanged { side });
    }

    fn finish(&mut self, result: MatchResult) {
        self.state.end(result);
        self.announce_end(result);
    }

    fn announce_end(&mut self, result: MatchResult) {
        self.schedule.clear();
        self.events.push(GameEvent::MatchEnded { result });
        info!(
            ?result,
            elapsed_ms = self.state.elapsed_ms,
            player_strongholds = self.state.strongholds.player,
            ai_strongholds = self.state.strongholds.ai,
            actions = self.state.stats.actions,
            "match ended"
        );
    }

    /// Read-only projection for display.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// The battle state.
    #[must_use]
    pub fn state(&self) -> &BattleState {
        &self.state
    }

    /// Mutable battle state for scenario setup. Bypasses all validation.
    #[doc(hidden)]
    pub fn state_mut(&mut self) -> &mut BattleState {
        &mut self.state
    }

    /// The config this engine was built from.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Take the events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_config(cards: &[&str]) -> MatchConfig {
        MatchConfig {
            card_pool: Some(cards.iter().map(|&name| name.to_owned()).collect()),
            ..MatchConfig::default()
        }
    }

    fn create_engine(cards: &[&str], ai: Vec<Action>) -> Engine {
        let mut engine =
            Engine::with_policy(pool_config(cards), 42, Box::new(Scripted::new(ai))).unwrap();
        engine.start_match();
        engine
    }

    #[test]
    fn test_start_match_deals_hands() {
        let mut engine = Engine::new(MatchConfig::default(), 7).unwrap();
        assert_eq!(engine.state().phase, Phase::Menu);

        engine.start_match();
        let state = engine.state();
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.turn, Side::Player);
        assert_eq!(state.chakra.current, 12);
        assert_eq!(state.hands.player.len(), 5);
        assert!(state.hands.ai.iter().all(Option::is_some));
        assert_eq!(engine.drain_events(), vec![GameEvent::MatchStarted]);
    }

    #[test]
    fn test_same_seed_same_hands() {
        let mut a = Engine::new(MatchConfig::default(), 1234).unwrap();
        let mut b = Engine::new(MatchConfig::default(), 1234).unwrap();
        a.start_match();
        b.start_match();
        assert_eq!(a.state().hands, b.state().hands);
    }

    fn create_engine_with(config: MatchConfig, ai: Vec<Action>) -> Engine {
        let mut engine = Engine::with_policy(config, 42, Box::new(Scripted::new(ai))).unwrap();
        engine.start_match();
        engine
    }

    fn slow_resolution(cards: &[&str]) -> MatchConfig {
        MatchConfig {
            resolution_delay_ms: 5000,
            ..pool_config(cards)
        }
    }

    #[test]
    fn test_regen_after_deploy() {
        let mut engine = create_engine_with(slow_resolution(&["Lightning Jonin"]), vec![]);
        engine.deploy(Side::Player, 0, LaneId::Mountain).unwrap();
        assert_eq!(engine.state().chakra.current, 4);

        engine.tick(1000);
        engine.tick(1000);
        assert_eq!(engine.state().chakra.current, 5);
    }

    #[test]
    fn test_forest_regen_bonus() {
        let mut engine = create_engine_with(slow_resolution(&["Lightning Jonin"]), vec![]);
        engine.deploy(Side::Player, 0, LaneId::Mountain).unwrap();
        engine.state_mut().terrain.activate(LaneId::Forest);

        engine.tick(2000);
        assert_eq!(engine.state().chakra.current, 6);
    }

    #[test]
    fn test_regen_stops_at_turn_handoff_inside_tick() {
        let mut engine = create_engine(&["Lightning Jonin"], vec![]);
        engine.deploy(Side::Player, 0, LaneId::Mountain).unwrap();

        // The turn passes to the AI at 1500 ms, before the first regen step.
        engine.tick(4000);
        assert_eq!(engine.state().turn, Side::Ai);
        assert_eq!(engine.state().chakra.current, 4);
    }

    #[test]
    fn test_one_large_tick_matches_frame_ticks() {
        let mut coarse = create_engine(&["Lightning Jonin"], vec![]);
        let mut fine = create_engine(&["Lightning Jonin"], vec![]);
        coarse.deploy(Side::Player, 0, LaneId::Mountain).unwrap();
        fine.deploy(Side::Player, 0, LaneId::Mountain).unwrap();

        for checkpoint in [Side::Ai, Side::Player] {
            coarse.tick(4000);
            for _ in 0..250 {
                fine.tick(16);
            }
            let (a, b) = (coarse.snapshot(), fine.snapshot());
            assert_eq!(a.turn, checkpoint);
            assert_eq!(a.turn, b.turn);
            assert_eq!(a.chakra, b.chakra);
            assert_eq!(a.active_terrain, b.active_terrain);
            assert_eq!(a.terrain_countdown_secs, b.terrain_countdown_secs);
            assert_eq!(a.strongholds, b.strongholds);
        }
        assert_eq!(coarse.state().chakra.current, 6);
    }

    #[test]
    fn test_terrain_bonus_follows_rotation_inside_tick() {
        let config = MatchConfig {
            starting_chakra: 0,
            terrain_rotation_secs: 3,
            ..pool_config(&["Shadow Genin"])
        };
        let mut coarse = create_engine_with(config.clone(), vec![]);
        let mut fine = create_engine_with(config, vec![]);

        coarse.tick(8000);
        for _ in 0..500 {
            fine.tick(16);
        }

        // Regen steps at 2 s (Mountain), 4 s and 6 s (Forest), 8 s (River).
        assert_eq!(coarse.state().chakra.current, 6);
        assert_eq!(fine.state().chakra.current, 6);
        assert_eq!(coarse.state().terrain.active().lane, LaneId::River);
        assert_eq!(fine.state().terrain.active().lane, LaneId::River);
    }

    #[test]
    fn test_no_regen_on_ai_turn() {
        let mut engine = create_engine(&["Lightning Jonin"], vec![]);
        engine.deploy(Side::Player, 0, LaneId::Mountain).unwrap();
        engine.tick(1500);
        assert_eq!(engine.state().turn, Side::Ai);

        engine.tick(1000);
        assert_eq!(engine.state().chakra.current, 4);
    }

    #[test]
    fn test_zero_tick_is_idempotent() {
        let mut engine = create_engine(&["Shadow Genin"], vec![]);
        engine.tick(700);
        let before = engine.snapshot();
        for _ in 0..10 {
            engine.tick(0);
        }
        let after = engine.snapshot();
        assert_eq!(before.chakra, after.chakra);
        assert_eq!(before.terrain_countdown_secs, after.terrain_countdown_secs);
        assert_eq!(before.phase, after.phase);
    }

    #[test]
    fn test_rejects_second_deploy_while_pending() {
        let mut engine = create_engine(&["Shadow Genin"], vec![]);
        engine.deploy(Side::Player, 0, LaneId::River).unwrap();
        assert_eq!(
            engine.deploy(Side::Player, 1, LaneId::River),
            Err(InvalidAction::ResolutionPending)
        );
        assert_eq!(engine.state().chakra.current, 10);
    }

    #[test]
    fn test_player_breach_then_victory() {
        let mut engine = create_engine(&["Shadow Genin"], vec![]);

        engine.deploy(Side::Player, 0, LaneId::Mountain).unwrap();
        engine.settle();
        assert_eq!(engine.state().strongholds.ai, 2);
        assert_eq!(engine.state().stats.strongholds_destroyed, 1);
        assert_eq!(engine.state().turn, Side::Player);
        assert!(engine.drain_events().contains(&GameEvent::AiPassed));

        engine.deploy(Side::Player, 1, LaneId::Forest).unwrap();
        engine.settle();
        let state = engine.state();
        assert_eq!(state.strongholds.ai, 1);
        assert_eq!(state.phase, Phase::Ended);
        assert_eq!(state.result, Some(MatchResult::Victory));
        assert!(engine.drain_events().contains(&GameEvent::MatchEnded {
            result: MatchResult::Victory
        }));
    }

    #[test]
    fn test_ai_deploy_returns_turn_to_player() {
        let ai = vec![Action::Deploy {
            hand_index: 0,
            lane: LaneId::River,
        }];
        let mut engine = create_engine(&["Shadow Genin"], ai);

        engine.deploy(Side::Player, 0, LaneId::Mountain).unwrap();
        engine.settle();

        let state = engine.state();
        assert_eq!(state.turn, Side::Player);
        assert_eq!(state.strongholds.player, 2);
        assert_eq!(state.hands.ai[0], None);
        assert_eq!(state.battlefield.lane(LaneId::River).ai.len(), 1);
    }

    #[test]
    fn test_failed_ai_deploy_counts_as_pass() {
        let ai = vec![Action::Deploy {
            hand_index: 99,
            lane: LaneId::River,
        }];
        let mut engine = create_engine(&["Shadow Genin"], ai);
        engine.deploy(Side::Player, 0, LaneId::Mountain).unwrap();
        engine.settle();

        assert_eq!(engine.state().turn, Side::Player);
        assert!(engine.drain_events().contains(&GameEvent::AiPassed));
    }

    #[test]
    fn test_timeout() {
        let config = MatchConfig {
            match_duration_secs: 2,
            ..MatchConfig::default()
        };
        let mut engine = Engine::new(config, 3).unwrap();
        engine.start_match();
        engine.tick(1999);
        assert!(engine.state().is_playing());
        engine.tick(1);
        assert_eq!(engine.state().result, Some(MatchResult::Timeout));
        assert_eq!(engine.snapshot().remaining_secs, 0);
    }

    #[test]
    fn test_ended_match_ignores_ticks_and_intents() {
        let config = MatchConfig {
            match_duration_secs: 1,
            ..pool_config(&["Shadow Genin"])
        };
        let mut engine = Engine::new(config, 3).unwrap();
        engine.start_match();
        engine.tick(5000);
        let before = engine.snapshot();

        engine.tick(10_000);
        assert_eq!(engine.snapshot(), before);
        assert_eq!(
            engine.deploy(Side::Player, 0, LaneId::Forest),
            Err(InvalidAction::MatchNotRunning)
        );
    }

    #[test]
    fn test_resolution_discarded_after_timeout() {
        let config = MatchConfig {
            match_duration_secs: 1,
            ..pool_config(&["Shadow Genin"])
        };
        let mut engine = Engine::new(config, 3).unwrap();
        engine.start_match();
        engine.deploy(Side::Player, 0, LaneId::Mountain).unwrap();
        engine.tick(1000);

        assert_eq!(engine.state().result, Some(MatchResult::Timeout));
        assert_eq!(engine.state().strongholds.ai, 3);
        assert!(!engine.resolution_pending());
    }

    #[test]
    fn test_resolution_due_after_clock_never_runs() {
        let mut engine = create_engine(&["Shadow Genin"], vec![]);
        engine.state_mut().strongholds.ai = 2;
        engine.tick(299_000);
        engine.deploy(Side::Player, 0, LaneId::Mountain).unwrap();
        engine.drain_events();

        engine.tick(5000);
        let state = engine.state();
        assert_eq!(state.result, Some(MatchResult::Timeout));
        assert_eq!(state.elapsed_ms, 300_000);
        assert_eq!(state.strongholds.ai, 2);

        let events = engine.drain_events();
        assert!(events.contains(&GameEvent::MatchEnded {
            result: MatchResult::Timeout
        }));
        assert!(!events.iter().any(|e| matches!(e, GameEvent::StrongholdDamaged { .. })));
    }

    #[test]
    fn test_combo_event() {
        let mut engine = create_engine(&["Shadow Genin"], vec![]);
        engine.deploy(Side::Player, 0, LaneId::Mountain).unwrap();
        engine.settle();
        engine.drain_events();

        engine.deploy(Side::Player, 1, LaneId::River).unwrap();
        assert!(engine.drain_events().contains(&GameEvent::ComboTriggered {
            name: "Fire Dragon Tornado"
        }));
        assert_eq!(engine.state().stats.combos, 1);
    }

    #[test]
    fn test_terrain_rotation_event() {
        let mut engine = create_engine(&["Shadow Genin"], vec![]);
        engine.tick(90_000);
        assert_eq!(engine.state().terrain.active().lane, LaneId::Forest);
        assert!(engine.drain_events().contains(&GameEvent::TerrainChanged {
            from: LaneId::Mountain,
            to: LaneId::Forest
        }));
    }

    #[test]
    fn test_restart_resets_state() {
        let mut engine = create_engine(&["Shadow Genin"], vec![]);
        engine.deploy(Side::Player, 0, LaneId::Mountain).unwrap();
        engine.settle();

        engine.start_match();
        let state = engine.state();
        assert_eq!(state.strongholds.ai, 3);
        assert_eq!(state.chakra.current, 12);
        assert_eq!(state.elapsed_ms, 0);
        assert_eq!(state.battlefield.unit_count(), 0);
        assert!(!engine.resolution_pending());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = MatchConfig {
            regen_interval_ms: 0,
            ..MatchConfig::default()
        };
        assert!(Engine::new(config, 0).is_err());
    }
}
