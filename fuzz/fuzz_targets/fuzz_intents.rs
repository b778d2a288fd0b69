#![no_main]

use arbitrary::Arbitrary;
use clan_wars::game::check_invariants;
use clan_wars::{Engine, LaneId, MatchConfig, Side};
use libfuzzer_sys::fuzz_target;

/// One host call.
#[derive(Arbitrary, Debug)]
enum Intent {
    /// Advance the clock.
    Tick(u16),
    /// Try to deploy for either side.
    Deploy { ai: bool, slot: u8, lane: u8 },
    /// Restart the match.
    Restart,
}

/// Structured input for engine fuzzing.
#[derive(Arbitrary, Debug)]
struct IntentInput {
    seed: u64,
    intents: Vec<Intent>,
}

fuzz_target!(|input: IntentInput| {
    let Ok(mut engine) = Engine::new(MatchConfig::default(), input.seed) else {
        return;
    };
    engine.start_match();
    let mut strongholds = engine.snapshot().strongholds;

    for intent in input.intents.iter().take(512) {
        match *intent {
            Intent::Tick(ms) => engine.tick(u64::from(ms)),
            Intent::Deploy { ai, slot, lane } => {
                let side = if ai { Side::Ai } else { Side::Player };
                let lane = LaneId::ALL[usize::from(lane) % 3];
                let _ = engine.deploy(side, usize::from(slot), lane);
            }
            Intent::Restart => {
                engine.start_match();
                strongholds = engine.snapshot().strongholds;
            }
        }

        let violations = check_invariants(engine.state());
        assert!(violations.is_empty(), "Invariants violated: {violations:?}");

        let now = engine.snapshot().strongholds;
        assert!(now.player <= strongholds.player, "player strongholds increased");
        assert!(now.ai <= strongholds.ai, "AI strongholds increased");
        strongholds = now;
    }
});
