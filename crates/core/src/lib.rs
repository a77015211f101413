//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every game rule and all game state. It has no dependency on
//! terminals, timers or threads, so the same engine runs under the terminal
//! shell, in integration tests, and in benchmarks.
//!
//! - **Deterministic**: a seeded configuration deals the same pieces every run
//! - **Clock-free**: hosts report elapsed milliseconds; the engine never reads a clock
//! - **Owned snapshots**: renderers get a copy, never a reference into the engine
//!
//! # Module Structure
//!
//! - [`grid`]: cell matrix with occupancy queries and row-clear compaction
//! - [`pieces`]: SRS shape tables and the active piece value
//! - [`collision`]: placement legality, kick tables, drops
//! - [`generator`]: bag and uniform piece sequences
//! - [`scoring`]: line-clear points, level steps, gravity intervals
//! - [`config`]: validated game configuration
//! - [`engine`]: the phase state machine
//! - [`snapshot`]: render input
//! - [`stats`]: per-shape spawn counts
//!
//! # Game Rules
//!
//! Classic single-player rules:
//!
//! - **Randomizer**: 7-bag by default, uniform draws optionally
//! - **Rotation**: SRS states with SRS, basic or no wall kicks
//! - **Lock Delay**: 450ms once a piece rests, reset by moves at most 15 times
//! - **Scoring**: 40/100/300/1200 × (level + 1); one level per 10 lines
//! - **Ghost Piece**: snapshots report where a hard drop would land
//!
//! # Example
//!
//! ```
//! use quadfall_core::{Engine, GameConfig};
//! use quadfall_core::types::{Intent, Phase};
//!
//! let mut engine = Engine::new(GameConfig::default().with_seed(12345)).unwrap();
//! assert_eq!(engine.phase(), Phase::Falling);
//!
//! engine.submit_intent(Intent::MoveRight);
//! engine.submit_intent(Intent::RotateCw);
//! engine.advance_time(16);
//! engine.submit_intent(Intent::HardDrop);
//!
//! let event = engine.take_last_event().unwrap();
//! assert!(event.hard_drop);
//! assert_eq!(engine.snapshot().stats.total(), 2);
//! ```
//!
//! # Timing
//!
//! Call [`Engine::advance_time`] with the milliseconds since the last call.
//! Gravity starts at 1000ms per row at level 0 and speeds up with the level;
//! soft drop divides the interval by 10.

pub mod collision;
pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod grid;
pub mod pieces;
pub mod scoring;
pub mod snapshot;
pub mod stats;

pub use quadfall_types as types;

// Re-export commonly used types for convenience
pub use collision::{can_place, drop_to_floor, resolve_move, resolve_rotation, KickTable, Spin};
pub use config::GameConfig;
pub use engine::{Engine, LockEvent};
pub use error::{ConfigError, GridError};
pub use generator::{PieceGenerator, Randomizer};
pub use grid::{ClearedRows, Grid};
pub use pieces::{get_shape, occupied_cells, Piece, PieceCells};
pub use scoring::{level_for_lines, line_clear_points};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use stats::PieceStats;
