//! End-to-end match scenarios driven through the public engine API.
//!
//! Run with: cargo test --release match_integration

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use clan_wars::engine::Scripted;
use clan_wars::tournament::{PlayerBot, run_match};
use clan_wars::{
    Action, Engine, GameEvent, InvalidAction, LaneId, MatchConfig, MatchResult, Phase, Side,
};

fn pool(cards: &[&str]) -> MatchConfig {
    MatchConfig {
        card_pool: Some(cards.iter().map(|&c| c.to_owned()).collect()),
        ..MatchConfig::default()
    }
}

fn engine_with_ai(config: MatchConfig, ai: Vec<Action>) -> Engine {
    let mut engine = Engine::with_policy(config, 42, Box::new(Scripted::new(ai))).unwrap();
    engine.start_match();
    engine
}

#[test]
fn test_jonin_cost_and_regen() {
    // Keep the turn with the player while the clock runs.
    let config = MatchConfig {
        resolution_delay_ms: 5000,
        ..pool(&["Lightning Jonin"])
    };
    let mut engine = engine_with_ai(config, vec![]);
    assert_eq!(engine.snapshot().chakra, 12);

    engine.deploy(Side::Player, 0, LaneId::River).unwrap();
    assert_eq!(engine.snapshot().chakra, 4);

    for _ in 0..125 {
        engine.tick(16);
    }
    assert_eq!(engine.snapshot().chakra, 5);
}

#[test]
fn test_strongholds_fall_to_defeat() {
    // The AI answers every player lane by opening a fresh one.
    let ai = vec![
        Action::Deploy {
            hand_index: 0,
            lane: LaneId::Forest,
        },
        Action::Deploy {
            hand_index: 1,
            lane: LaneId::River,
        },
    ];
    let mut engine = engine_with_ai(pool(&["Shadow Genin"]), ai);

    engine.deploy(Side::Player, 0, LaneId::Mountain).unwrap();
    engine.settle();
    let snap = engine.snapshot();
    assert_eq!(snap.strongholds.ai, 2);
    assert_eq!(snap.strongholds.player, 2);
    assert_eq!(snap.turn, Side::Player);
    assert_eq!(snap.phase, Phase::Playing);

    // Forest trades evenly: both units fall and nobody is breached.
    engine.deploy(Side::Player, 1, LaneId::Forest).unwrap();
    engine.settle();
    let snap = engine.snapshot();
    assert_eq!(snap.strongholds.ai, 2);
    assert_eq!(snap.phase, Phase::Ended);
    assert_eq!(snap.result, Some(MatchResult::Defeat));
    assert_eq!(snap.strongholds.player, 1);
}

#[test]
fn test_full_lane_rejected_regardless_of_cost() {
    let config = MatchConfig {
        starting_chakra: 15,
        starting_strongholds: 5,
        loss_threshold: 0,
        ..pool(&["Academy Student"])
    };
    let mut engine = engine_with_ai(config, vec![]);

    for slot in 0..3 {
        engine.deploy(Side::Player, slot, LaneId::River).unwrap();
        engine.settle();
    }
    let before = engine.snapshot();
    assert_eq!(
        engine.deploy(Side::Player, 3, LaneId::River),
        Err(InvalidAction::LaneFull(LaneId::River))
    );
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_chain_lightning_strikes_enemy() {
    let ai = vec![Action::Deploy {
        hand_index: 0,
        lane: LaneId::Forest,
    }];
    let config = MatchConfig {
        starting_chakra: 15,
        ..pool(&["Lightning Jonin"])
    };
    let mut engine = engine_with_ai(config, ai);

    engine.deploy(Side::Player, 0, LaneId::Mountain).unwrap();
    engine.settle();
    engine.drain_events();

    engine.tick(8000);
    engine.deploy(Side::Player, 1, LaneId::Forest).unwrap();
    engine.settle();
    let events = engine.drain_events();
    assert!(events.contains(&GameEvent::ChainLightning {
        lane: LaneId::Forest,
        count: 1
    }));
}

#[test]
fn test_snapshot_serializes() {
    let mut engine = Engine::new(MatchConfig::default(), 11).unwrap();
    engine.start_match();
    engine.tick(5000);
    let json = serde_json::to_value(engine.snapshot()).unwrap();
    assert_eq!(json["phase"], "playing");
    assert_eq!(json["lanes"].as_array().unwrap().len(), 3);
    assert_eq!(json["active_terrain"]["name"], "Mountain Path");
    assert_eq!(json["remaining_secs"], 295);
    assert_eq!(json["chakra"], 14);
    assert_eq!(json["chakra_overflowing"], true);
}

#[test]
fn test_many_seeds_finish_cleanly() {
    let config = MatchConfig::default();
    for seed in 0..20 {
        for bot in [PlayerBot::Random, PlayerBot::Cheapest] {
            let report = run_match(seed, &config, bot).unwrap();
            match report.result {
                MatchResult::Victory => assert!(report.ai_strongholds <= 1),
                MatchResult::Defeat => assert!(report.player_strongholds <= 1),
                MatchResult::Timeout => assert!(report.duration_ms >= 300_000),
            }
        }
    }
}

#[test]
fn test_restart_after_end() {
    let config = MatchConfig {
        match_duration_secs: 1,
        ..MatchConfig::default()
    };
    let mut engine = Engine::new(config, 8).unwrap();
    engine.start_match();
    engine.tick(1000);
    assert_eq!(engine.snapshot().phase, Phase::Ended);

    engine.start_match();
    let snap = engine.snapshot();
    assert_eq!(snap.phase, Phase::Playing);
    assert_eq!(snap.result, None);
    assert_eq!(snap.remaining_secs, 1);
    assert_eq!(engine.drain_events(), vec![GameEvent::MatchStarted]);
}
