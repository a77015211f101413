//! Error types for grid queries and game configuration.
//!
//! Only recoverable conditions live here. Invariant violations (locking onto an
//! occupied or out-of-bounds cell) panic instead, because they mean the
//! collision logic upstream is wrong.

use thiserror::Error;

/// Grid query errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: i32,
        col: i32,
        rows: usize,
        cols: usize,
    },
}

/// Configuration rejected by [`GameConfig::validate`](crate::config::GameConfig::validate)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid width {0} is below the minimum of 4 columns")]
    InvalidWidth(u8),
    #[error("grid height {0} is below the minimum of 4 rows")]
    InvalidHeight(u8),
    #[error("gravity table is empty")]
    EmptyGravityTable,
    #[error("gravity interval for level {level} is zero")]
    ZeroGravityInterval { level: usize },
    #[error("gravity interval for level {level} ({interval}ms) is slower than the level before it ({previous}ms)")]
    IncreasingGravity {
        level: usize,
        previous: u32,
        interval: u32,
    },
    #[error("soft drop factor must be at least 1")]
    ZeroSoftDropFactor,
    #[error("lines per level must be at least 1")]
    ZeroLinesPerLevel,
    #[error("preview length {0} is outside 1..=5")]
    InvalidPreview(usize),
    #[error("prepared grid is {got_cols}x{got_rows}, config expects {cols}x{rows}")]
    GridMismatch {
        cols: u8,
        rows: u8,
        got_cols: usize,
        got_rows: usize,
    },
}

impl ConfigError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::InvalidWidth(_) | ConfigError::InvalidHeight(_) => "invalid_dimensions",
            ConfigError::EmptyGravityTable
            | ConfigError::ZeroGravityInterval { .. }
            | ConfigError::IncreasingGravity { .. } => "invalid_gravity",
            ConfigError::ZeroSoftDropFactor => "invalid_soft_drop",
            ConfigError::ZeroLinesPerLevel => "invalid_level_step",
            ConfigError::InvalidPreview(_) => "invalid_preview",
            ConfigError::GridMismatch { .. } => "grid_mismatch",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = ConfigError::IncreasingGravity {
            level: 3,
            previous: 500,
            interval: 700,
        };
        assert_eq!(
            err.to_string(),
            "gravity interval for level 3 (700ms) is slower than the level before it (500ms)"
        );
        assert_eq!(err.code(), "invalid_gravity");

        let err = GridError::OutOfBounds {
            row: -1,
            col: 4,
            rows: 20,
            cols: 10,
        };
        assert_eq!(err.to_string(), "cell (-1, 4) is outside the 20x10 grid");
    }
}
