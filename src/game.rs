//! Battle rules for Clan Wars.
//!
//! Implements the battle simulation on a plain owned state value:
//! - Card catalog (units and jutsu combos)
//! - Three-lane battlefield with per-side unit lists
//! - Chakra economy and terrain rotation
//! - Deployment validation, abilities and lane combat
//! - Win evaluation and invariant checks

mod abilities;
mod battlefield;
mod catalog;
mod combat;
mod combos;
mod deploy;
mod economy;
mod event;
mod invariants;
mod state;
mod terrain;

pub use abilities::{AbilityOutcome, CHAIN_LIGHTNING_DAMAGE, HEAL_AMOUNT, trigger_ability};
pub use battlefield::{Battlefield, DeployedUnit, Lane, LaneId, Side, UnitId};
pub use catalog::{
    AbilityKind, CARDS, CLASSIC_POOL, COMBOS, CardDefinition, CardId, ComboDefinition, Rarity,
    School, all_cards, find_card,
};
pub use combat::{CombatResult, distribute_damage, resolve_combat, resolve_lane};
pub use combos::{COMBO_HISTORY_MS, record_play};
pub use deploy::{Deployment, Resolution, can_deploy, deploy, instantiate, resolve_deployment};
pub use economy::{Chakra, RegenResult};
pub use event::GameEvent;
pub use invariants::{InvariantViolation, check_invariants, enforce_invariants, repair};
pub use state::{
    BattleState, Hands, LaneView, MatchResult, Phase, RecentPlay, Rules, Snapshot, Stats,
    Strongholds, UnitView,
};
pub use terrain::{
    COUNTDOWN_STEP_MS, Terrain, TerrainBonus, TerrainRotation, TerrainShift, default_terrains,
};
