//! Terrain rotation.
//!
//! One terrain per lane; exactly one is active at a time. The active terrain
//! advances cyclically whenever the countdown runs out.

use serde::Serialize;

use crate::game::LaneId;

/// Milliseconds per countdown step.
pub const COUNTDOWN_STEP_MS: u64 = 1000;

/// Gameplay effect of an active terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrainBonus {
    /// Taijutsu units hit harder.
    TaijutsuAttack,
    /// Player chakra regenerates an extra point per regen step.
    ChakraRegen,
    /// Genjutsu stealth; cosmetic in this engine.
    GenjutsuStealth,
}

/// Terrain record for one lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Terrain {
    /// Lane this terrain belongs to.
    pub lane: LaneId,
    /// Display name.
    pub name: &'static str,
    /// Bonus description.
    pub description: &'static str,
    /// Bonus effect.
    pub bonus: TerrainBonus,
    /// Whether this terrain is the active one.
    pub active: bool,
}

/// The fixed terrain list, in rotation order.
#[must_use]
pub fn default_terrains() -> [Terrain; 3] {
    [
        Terrain {
            lane: LaneId::Mountain,
            name: "Mountain Path",
            description: "Taijutsu +20%",
            bonus: TerrainBonus::TaijutsuAttack,
            active: true,
        },
        Terrain {
            lane: LaneId::Forest,
            name: "Forest Grove",
            description: "Ninjutsu +1 CP/s",
            bonus: TerrainBonus::ChakraRegen,
            active: false,
        },
        Terrain {
            lane: LaneId::River,
            name: "River Valley",
            description: "Genjutsu Stealth",
            bonus: TerrainBonus::GenjutsuStealth,
            active: false,
        },
    ]
}

/// A completed rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerrainShift {
    /// Terrain that was active.
    pub from: LaneId,
    /// Terrain that is now active.
    pub to: LaneId,
}

/// Terrain list plus the rotation countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TerrainRotation {
    terrains: [Terrain; 3],
    /// Seconds until the next rotation.
    countdown_secs: u32,
    /// Rotation period in seconds.
    period_secs: u32,
    /// Tick time not yet converted into countdown steps.
    #[serde(skip)]
    accumulator_ms: u64,
}

impl TerrainRotation {
    /// Start with the first terrain active and a full countdown.
    #[must_use]
    pub fn new(period_secs: u32) -> Self {
        Self {
            terrains: default_terrains(),
            countdown_secs: period_secs,
            period_secs,
            accumulator_ms: 0,
        }
    }

    /// All terrains in rotation order.
    #[must_use]
    pub fn terrains(&self) -> &[Terrain; 3] {
        &self.terrains
    }

    #[cfg(test)]
    pub(crate) fn terrains_mut(&mut self) -> &mut [Terrain; 3] {
        &mut self.terrains
    }

    /// Seconds until the next rotation.
    #[must_use]
    pub const fn countdown_secs(&self) -> u32 {
        self.countdown_secs
    }

    /// Index of the active terrain. Falls back to 0 if the invariant is broken.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.terrains.iter().position(|t| t.active).unwrap_or(0)
    }

    /// The active terrain.
    #[must_use]
    pub fn active(&self) -> &Terrain {
        &self.terrains[self.active_index()]
    }

    /// Whether the active terrain grants the given bonus.
    #[must_use]
    pub fn grants(&self, bonus: TerrainBonus) -> bool {
        self.active().bonus == bonus
    }

    /// Number of terrains flagged active. Always 1 unless something is broken.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.terrains.iter().filter(|t| t.active).count()
    }

    /// Tick time left before the active terrain changes.
    #[must_use]
    pub fn ms_until_rotation(&self) -> u64 {
        let steps = u64::from(self.countdown_secs.max(1));
        (steps * COUNTDOWN_STEP_MS).saturating_sub(self.accumulator_ms)
    }

    /// Advance by `delta_ms` of tick time.
    ///
    /// The countdown drops one second per full 1000 ms accumulated. Each time
    /// it reaches zero the next terrain activates and the countdown resets.
    pub fn advance(&mut self, delta_ms: u64) -> Vec<TerrainShift> {
        let mut shifts = Vec::new();
        self.accumulator_ms = self.accumulator_ms.saturating_add(delta_ms);

        while self.accumulator_ms >= COUNTDOWN_STEP_MS {
            self.accumulator_ms -= COUNTDOWN_STEP_MS;
            self.countdown_secs = self.countdown_secs.saturating_sub(1);
            if self.countdown_secs == 0 {
                shifts.push(self.rotate());
                self.countdown_secs = self.period_secs;
            }
        }

        shifts
    }

    /// Deactivate the current terrain and activate the next one.
    pub fn rotate(&mut self) -> TerrainShift {
        let current = self.active_index();
        let next = (current + 1) % self.terrains.len();
        for terrain in &mut self.terrains {
            terrain.active = false;
        }
        self.terrains[next].active = true;
        TerrainShift {
            from: self.terrains[current].lane,
            to: self.terrains[next].lane,
        }
    }

    /// Force the given terrain active. Used to repair a broken invariant and
    /// to set up scenarios.
    pub fn activate(&mut self, lane: LaneId) {
        for terrain in &mut self.terrains {
            terrain.active = terrain.lane == lane;
        }
    }
}
