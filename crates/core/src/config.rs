//! Game configuration
//!
//! Every field has a classic default, and the struct deserializes with
//! `#[serde(default)]`, so a config file only needs the fields it changes:
//!
//! ```
//! use quadfall_core::{GameConfig, Randomizer};
//!
//! let config: GameConfig = serde_json::from_str(r#"{ "randomizer": "uniform", "start_level": 3 }"#).unwrap();
//! assert_eq!(config.randomizer, Randomizer::Uniform);
//! assert_eq!(config.width, 10);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::collision::KickTable;
use crate::error::ConfigError;
use crate::generator::Randomizer;
use crate::types::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, DROP_INTERVALS, LINES_PER_LEVEL, LINE_CLEAR_PAUSE_MS,
    LOCK_DELAY_MS, LOCK_RESET_LIMIT, MAX_PREVIEW, MIN_DIMENSION, SOFT_DROP_FACTOR,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Grid columns
    pub width: u8,
    /// Grid rows
    pub height: u8,
    pub start_level: u32,
    /// Milliseconds per gravity row, indexed by level; non-increasing
    pub gravity_ms: Vec<u32>,
    pub randomizer: Randomizer,
    pub kicks: KickTable,
    pub lock_delay_ms: u32,
    /// Lock timer resets allowed per piece while grounded
    pub lock_reset_limit: u8,
    pub soft_drop_factor: u32,
    pub lines_per_level: u32,
    /// Pause in the line-clear phase after rows are removed (0 = spawn at once)
    pub line_clear_delay_ms: u32,
    /// Number of upcoming pieces reported in snapshots
    pub preview: usize,
    /// Award +1/+2 per row for soft/hard drops
    pub drop_points: bool,
    /// RNG seed; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            start_level: 0,
            gravity_ms: DROP_INTERVALS.to_vec(),
            randomizer: Randomizer::Bag,
            kicks: KickTable::Srs,
            lock_delay_ms: LOCK_DELAY_MS,
            lock_reset_limit: LOCK_RESET_LIMIT,
            soft_drop_factor: SOFT_DROP_FACTOR,
            lines_per_level: LINES_PER_LEVEL,
            line_clear_delay_ms: LINE_CLEAR_PAUSE_MS,
            preview: 1,
            drop_points: false,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every field; the first problem found is returned
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_DIMENSION {
            return Err(ConfigError::InvalidWidth(self.width));
        }
        if self.height < MIN_DIMENSION {
            return Err(ConfigError::InvalidHeight(self.height));
        }
        if self.gravity_ms.is_empty() {
            return Err(ConfigError::EmptyGravityTable);
        }
        let mut previous: Option<u32> = None;
        for (level, &interval) in self.gravity_ms.iter().enumerate() {
            if interval == 0 {
                return Err(ConfigError::ZeroGravityInterval { level });
            }
            if let Some(previous) = previous {
                if interval > previous {
                    return Err(ConfigError::IncreasingGravity {
                        level,
                        previous,
                        interval,
                    });
                }
            }
            previous = Some(interval);
        }
        if self.soft_drop_factor == 0 {
            return Err(ConfigError::ZeroSoftDropFactor);
        }
        if self.lines_per_level == 0 {
            return Err(ConfigError::ZeroLinesPerLevel);
        }
        if self.preview == 0 || self.preview > MAX_PREVIEW {
            return Err(ConfigError::InvalidPreview(self.preview));
        }
        Ok(())
    }
}
