//! Chakra economy: accumulation, cap and overflow.
//!
//! Chakra regenerates one point per regen interval of player-turn tick time.
//! While Forest Grove is active each regen step yields a bonus point. Normal
//! play starts at `max`; bonus regen may push chakra up to `overflow_cap`.

use serde::Serialize;

/// Player chakra pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chakra {
    /// Current chakra.
    pub current: u32,
    /// Nominal maximum.
    pub max: u32,
    /// Hard ceiling.
    pub overflow_cap: u32,
    /// Tick time per regenerated point.
    #[serde(skip)]
    pub regen_interval_ms: u64,
    /// Player-turn tick time not yet converted into chakra.
    #[serde(skip)]
    pub regen_accumulator_ms: u64,
}

/// Outcome of one regen pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegenResult {
    /// Points gained, bonus included.
    pub gained: u32,
    /// Regen steps completed.
    pub steps: u32,
}

impl Chakra {
    /// A full pool.
    #[must_use]
    pub const fn new(start: u32, max: u32, overflow_cap: u32, regen_interval_ms: u64) -> Self {
        Self {
            current: start,
            max,
            overflow_cap,
            regen_interval_ms,
            regen_accumulator_ms: 0,
        }
    }

    /// Whether the pool can pay `cost`.
    #[must_use]
    pub const fn can_afford(&self, cost: u32) -> bool {
        cost <= self.current
    }

    /// Deduct `cost`, flooring at zero.
    pub fn spend(&mut self, cost: u32) {
        self.current = self.current.saturating_sub(cost);
    }

    /// Whether chakra sits above the nominal maximum.
    #[must_use]
    pub const fn is_overflowing(&self) -> bool {
        self.current > self.max
    }

    /// Accumulate `delta_ms` and convert whole intervals into chakra.
    ///
    /// Nothing accumulates while chakra is at the overflow cap. Every completed
    /// interval grants one point and, with `bonus` set, one more; both clamp to
    /// the cap.
    pub fn regenerate(&mut self, delta_ms: u64, bonus: bool) -> RegenResult {
        let mut result = RegenResult::default();
        if self.current >= self.overflow_cap || self.regen_interval_ms == 0 {
            return result;
        }

        self.regen_accumulator_ms = self.regen_accumulator_ms.saturating_add(delta_ms);
        while self.regen_accumulator_ms >= self.regen_interval_ms {
            self.regen_accumulator_ms -= self.regen_interval_ms;
            result.steps += 1;

            let before = self.current;
            self.current = (self.current + 1).min(self.overflow_cap);
            if bonus {
                self.current = (self.current + 1).min(self.overflow_cap);
            }
            result.gained += self.current - before;
        }

        result
    }

    /// Pull chakra back into `0..=overflow_cap`.
    pub fn clamp(&mut self) {
        self.current = self.current.min(self.overflow_cap);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(current: u32) -> Chakra {
        let mut chakra = Chakra::new(12, 12, 15, 2000);
        chakra.current = current;
        chakra
    }

    #[test]
    fn test_regen_one_point_per_interval() {
        let mut chakra = pool(4);
        let result = chakra.regenerate(1999, false);
        assert_eq!(result.gained, 0);
        assert_eq!(chakra.current, 4);

        chakra.regenerate(1, false);
        assert_eq!(chakra.current, 5);
        assert_eq!(chakra.regen_accumulator_ms, 0);
    }

    #[test]
    fn test_regen_bonus_doubles() {
        let mut chakra = pool(4);
        let result = chakra.regenerate(2000, true);
        assert_eq!(chakra.current, 6);
        assert_eq!(result.gained, 2);
        assert_eq!(result.steps, 1);
    }

    #[test]
    fn test_regen_consumes_threshold_only() {
        let mut chakra = pool(0);
        chakra.regenerate(5500, false);
        assert_eq!(chakra.current, 2);
        assert_eq!(chakra.regen_accumulator_ms, 1500);
    }

    #[test]
    fn test_regen_clamps_to_overflow() {
        let mut chakra = pool(14);
        chakra.regenerate(2000, true);
        assert_eq!(chakra.current, 15);
        assert!(chakra.is_overflowing());

        // At the cap nothing accumulates.
        chakra.regenerate(10_000, true);
        assert_eq!(chakra.current, 15);
        assert_eq!(chakra.regen_accumulator_ms, 0);
    }

    #[test]
    fn test_spend_floors_at_zero() {
        let mut chakra = pool(3);
        assert!(!chakra.can_afford(4));
        chakra.spend(4);
        assert_eq!(chakra.current, 0);
    }

    #[test]
    fn test_zero_delta_is_inert() {
        let mut chakra = pool(7);
        for _ in 0..50 {
            chakra.regenerate(0, true);
        }
        assert_eq!(chakra.current, 7);
    }
}
