//! Match configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::{CLASSIC_POOL, CardId, Rules, find_card};

/// Every tunable of a match.
///
/// Missing fields in a config file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Player chakra at match start.
    pub starting_chakra: u32,
    /// Nominal chakra maximum.
    pub max_chakra: u32,
    /// Hard chakra ceiling.
    pub overflow_chakra: u32,
    /// Tick time per regenerated chakra point.
    pub regen_interval_ms: u64,
    /// Seconds between terrain rotations.
    pub terrain_rotation_secs: u32,
    /// Match length in seconds.
    pub match_duration_secs: u32,
    /// Units a side may hold in one lane.
    pub lane_capacity: usize,
    /// Cards dealt to each side.
    pub hand_size: usize,
    /// Strongholds each side starts with.
    pub starting_strongholds: u32,
    /// A side at or below this many strongholds loses.
    pub loss_threshold: u32,
    /// Delay between a deployment and its lane resolving.
    pub resolution_delay_ms: u64,
    /// Delay before the AI acts once it holds the turn.
    pub ai_think_delay_ms: u64,
    /// Delay before control returns after an AI pass.
    pub ai_pass_delay_ms: u64,
    /// Card names hands are dealt from. Defaults to the classic four.
    pub card_pool: Option<Vec<String>>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        let rules = Rules::default();
        Self {
            starting_chakra: rules.starting_chakra,
            max_chakra: rules.max_chakra,
            overflow_chakra: rules.overflow_chakra,
            regen_interval_ms: rules.regen_interval_ms,
            terrain_rotation_secs: rules.terrain_rotation_secs,
            match_duration_secs: rules.match_duration_secs,
            lane_capacity: rules.lane_capacity,
            hand_size: rules.hand_size,
            starting_strongholds: rules.starting_strongholds,
            loss_threshold: rules.loss_threshold,
            resolution_delay_ms: 1500,
            ai_think_delay_ms: 2000,
            ai_pass_delay_ms: 1000,
            card_pool: None,
        }
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidSetting {
        field,
        reason: reason.into(),
    }
}

impl MatchConfig {
    /// Read a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings a match cannot run with.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_chakra == 0 {
            return Err(invalid("max_chakra", "must be positive"));
        }
        if self.overflow_chakra < self.max_chakra {
            return Err(invalid(
                "overflow_chakra",
                format!("{} is below max_chakra {}", self.overflow_chakra, self.max_chakra),
            ));
        }
        if self.starting_chakra > self.overflow_chakra {
            return Err(invalid("starting_chakra", "exceeds overflow_chakra"));
        }
        if self.regen_interval_ms == 0 {
            return Err(invalid("regen_interval_ms", "must be positive"));
        }
        if self.terrain_rotation_secs == 0 {
            return Err(invalid("terrain_rotation_secs", "must be positive"));
        }
        if self.match_duration_secs == 0 {
            return Err(invalid("match_duration_secs", "must be positive"));
        }
        if self.lane_capacity == 0 {
            return Err(invalid("lane_capacity", "must be positive"));
        }
        if self.loss_threshold >= self.starting_strongholds {
            return Err(invalid(
                "loss_threshold",
                format!(
                    "{} leaves no room below starting_strongholds {}",
                    self.loss_threshold, self.starting_strongholds
                ),
            ));
        }
        self.card_pool()?;
        Ok(())
    }

    /// Numeric rules for the battle state.
    #[must_use]
    pub fn rules(&self) -> Rules {
        Rules {
            starting_chakra: self.starting_chakra,
            max_chakra: self.max_chakra,
            overflow_chakra: self.overflow_chakra,
            regen_interval_ms: self.regen_interval_ms,
            terrain_rotation_secs: self.terrain_rotation_secs,
            match_duration_secs: self.match_duration_secs,
            lane_capacity: self.lane_capacity,
            hand_size: self.hand_size,
            starting_strongholds: self.starting_strongholds,
            loss_threshold: self.loss_threshold,
        }
    }

    /// Resolve the card pool against the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown names or an empty pool.
    pub fn card_pool(&self) -> Result<Vec<CardId>, ConfigError> {
        let Some(names) = &self.card_pool else {
            return Ok(CLASSIC_POOL.to_vec());
        };
        if names.is_empty() {
            return Err(invalid("card_pool", "must name at least one card"));
        }
        names
            .iter()
            .map(|name| find_card(name).ok_or_else(|| ConfigError::UnknownCard(name.clone())))
            .collect()
    }
}
