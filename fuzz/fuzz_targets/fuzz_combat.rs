#![no_main]

use arbitrary::Arbitrary;
use clan_wars::Side;
use clan_wars::game::{CARDS, CardId, DeployedUnit, Lane, UnitId, resolve_lane};
use libfuzzer_sys::fuzz_target;

/// One unit entering the lane.
#[derive(Arbitrary, Debug)]
struct UnitInput {
    /// Catalog index (wrapped into range).
    card: u8,
    /// Health offset applied after creation, to reach damaged states.
    wound: i8,
}

/// Structured input for lane combat fuzzing.
#[derive(Arbitrary, Debug)]
struct CombatInput {
    player: Vec<UnitInput>,
    ai: Vec<UnitInput>,
}

fn build(units: &[UnitInput], base: u32) -> Vec<DeployedUnit> {
    // Lanes never hold more than three units per side.
    units
        .iter()
        .take(3)
        .zip(base..)
        .filter_map(|(input, id)| {
            let card = CardId::from_index(usize::from(input.card) % CARDS.len())?;
            let mut unit = DeployedUnit::from_card(UnitId(id), card);
            unit.health = (unit.health - i32::from(input.wound.rem_euclid(8))).max(1);
            Some(unit)
        })
        .collect()
}

fuzz_target!(|input: CombatInput| {
    let mut lane = Lane {
        player: build(&input.player, 0),
        ai: build(&input.ai, 100),
    };
    let health_before: i64 = lane
        .player
        .iter()
        .chain(&lane.ai)
        .map(|u| i64::from(u.health))
        .sum();
    let count_before = [lane.player.len(), lane.ai.len()];

    let result = resolve_lane(&mut lane);

    // Casualties are removed and counted exactly.
    assert!(lane.player.iter().chain(&lane.ai).all(DeployedUnit::is_alive));
    assert_eq!(lane.player.len() + result.player_losses, count_before[0]);
    assert_eq!(lane.ai.len() + result.ai_losses, count_before[1]);

    // Combat never heals.
    let health_after: i64 = lane
        .player
        .iter()
        .chain(&lane.ai)
        .map(|u| i64::from(u.health))
        .sum();
    assert!(health_after <= health_before);

    // Only a side with nothing left standing can be breached.
    match result.breached {
        Some(Side::Player) => assert!(lane.player.is_empty() && !lane.ai.is_empty()),
        Some(Side::Ai) => assert!(lane.ai.is_empty() && !lane.player.is_empty()),
        None => {}
    }
});
