//! Engine module - the game state machine
//!
//! The engine owns the grid, the active piece, the generator and every counter.
//! Hosts drive it with two calls: [`Engine::advance_time`] with the wall-clock
//! milliseconds since the last call, and [`Engine::submit_intent`] for player
//! input. Everything a host draws comes from [`Engine::snapshot`].
//!
//! # Phases
//!
//! ```text
//! Spawning -> Falling <-> Locking -> LineClear -> Spawning
//!     \__________\___________\___________\______-> GameOver
//! ```
//!
//! - **Falling**: gravity moves the piece one row per interval. A blocked
//!   gravity step starts the lock delay.
//! - **Locking**: the piece rests on the stack. Moves and rotations reset the
//!   lock timer, at most `lock_reset_limit` times per piece. A move that leaves
//!   the piece unsupported sends it back to Falling.
//! - **LineClear**: full rows are removed and scored, then the engine waits
//!   `line_clear_delay_ms` (only when rows were cleared) before the next spawn.
//! - **GameOver**: the spawn position was blocked. Only [`Engine::reset`]
//!   leaves it.
//!
//! Pausing freezes every timer in any phase except GameOver.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::collision::{can_place, drop_to_floor, is_grounded, resolve_move, resolve_rotation, Spin};
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::generator::PieceGenerator;
use crate::grid::Grid;
use crate::pieces::Piece;
use crate::scoring::{
    drop_points, gravity_interval_ms, level_for_lines, line_clear_points, soft_drop_interval_ms,
};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::stats::PieceStats;
use crate::types::{Intent, PieceKind, Phase};

/// What happened when the last piece locked (consumed by hosts)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub hard_drop: bool,
    /// Original indices of the cleared rows, bottom to top
    pub cleared_rows: Vec<usize>,
    pub points: u32,
    /// Level after the clear was counted
    pub level: u32,
}

impl LockEvent {
    pub fn lines_cleared(&self) -> usize {
        self.cleared_rows.len()
    }
}

/// A single-player game session
#[derive(Debug, Clone)]
pub struct Engine<R = StdRng> {
    config: GameConfig,
    grid: Grid,
    generator: PieceGenerator<R>,
    active: Option<Piece>,
    phase: Phase,
    paused: bool,
    score: u32,
    level: u32,
    lines: u32,
    fall_timer_ms: u32,
    lock_timer_ms: u32,
    lock_resets: u8,
    /// Deepest anchor row at which the lock timer was started for this piece
    lock_floor: i32,
    line_clear_timer_ms: u32,
    /// Soft drop gravity stays on until the piece locks
    soft_drop: bool,
    stats: PieceStats,
    last_event: Option<LockEvent>,
}

impl Engine<StdRng> {
    /// Start a game; seeds from `config.seed` or from the OS
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Engine<R> {
    /// Start a game drawing pieces from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let generator = PieceGenerator::new(config.randomizer, rng);
        let grid = Grid::new(config.width, config.height);
        Self::with_parts(config, generator, grid)
    }

    /// Start a game from a prepared generator and grid
    ///
    /// The grid must match the configured dimensions. The first piece spawns
    /// immediately, so a grid with a blocked spawn area starts in GameOver.
    pub fn with_parts(
        config: GameConfig,
        generator: PieceGenerator<R>,
        grid: Grid,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if grid.column_count() != config.width as usize || grid.row_count() != config.height as usize
        {
            return Err(ConfigError::GridMismatch {
                cols: config.width,
                rows: config.height,
                got_cols: grid.column_count(),
                got_rows: grid.row_count(),
            });
        }

        let level = config.start_level;
        let mut engine = Self {
            config,
            grid,
            generator,
            active: None,
            phase: Phase::Spawning,
            paused: false,
            score: 0,
            level,
            lines: 0,
            fall_timer_ms: 0,
            lock_timer_ms: 0,
            lock_resets: 0,
            lock_floor: i32::MIN,
            line_clear_timer_ms: 0,
            soft_drop: false,
            stats: PieceStats::default(),
            last_event: None,
        };
        engine.spawn();
        Ok(engine)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn next_piece(&self) -> PieceKind {
        self.generator.peek()
    }

    pub fn statistics(&self) -> &PieceStats {
        &self.stats
    }

    /// Take and clear the last lock event
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Normal gravity interval at the current level
    pub fn gravity_interval_ms(&self) -> u32 {
        gravity_interval_ms(&self.config.gravity_ms, self.level)
    }

    /// Interval the active piece actually falls at
    fn fall_interval_ms(&self) -> u32 {
        let base = self.gravity_interval_ms();
        if self.soft_drop {
            soft_drop_interval_ms(base, self.config.soft_drop_factor)
        } else {
            base
        }
    }

    /// Advance the clock by `elapsed_ms`
    ///
    /// The elapsed time is spent step by step: a large value runs every
    /// gravity step, lock and spawn it covers, in order, exactly as the same
    /// total split over many small calls would.
    pub fn advance_time(&mut self, elapsed_ms: u32) {
        let mut budget = elapsed_ms;
        while budget > 0 && !self.paused {
            match self.phase {
                Phase::Falling => {
                    let remaining = self.fall_interval_ms().saturating_sub(self.fall_timer_ms);
                    if budget < remaining {
                        self.fall_timer_ms += budget;
                        return;
                    }
                    budget -= remaining;
                    self.fall_timer_ms = 0;
                    self.gravity_step();
                }
                Phase::Locking => {
                    let remaining = self.config.lock_delay_ms.saturating_sub(self.lock_timer_ms);
                    if budget < remaining {
                        self.lock_timer_ms += budget;
                        return;
                    }
                    budget -= remaining;
                    self.lock_timer_ms = self.config.lock_delay_ms;
                    self.lock_active(false);
                }
                Phase::LineClear => {
                    let remaining = self
                        .config
                        .line_clear_delay_ms
                        .saturating_sub(self.line_clear_timer_ms);
                    if budget < remaining {
                        self.line_clear_timer_ms += budget;
                        return;
                    }
                    budget -= remaining;
                    self.spawn();
                }
                Phase::Spawning => self.spawn(),
                Phase::GameOver => return,
            }
        }
    }

    /// Apply one player intent; `true` when the game state changed
    ///
    /// Intents that do not apply in the current phase are ignored.
    pub fn submit_intent(&mut self, intent: Intent) -> bool {
        if intent == Intent::Pause {
            if self.is_game_over() {
                return false;
            }
            self.paused = !self.paused;
            return true;
        }

        if self.paused || !self.phase.has_active_piece() {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };

        match intent {
            Intent::MoveLeft => self.try_commit(resolve_move(&self.grid, &piece, 0, -1)),
            Intent::MoveRight => self.try_commit(resolve_move(&self.grid, &piece, 0, 1)),
            Intent::RotateCw => self.try_commit(resolve_rotation(
                &self.grid,
                &piece,
                Spin::Clockwise,
                self.config.kicks,
            )),
            Intent::RotateCcw => self.try_commit(resolve_rotation(
                &self.grid,
                &piece,
                Spin::CounterClockwise,
                self.config.kicks,
            )),
            Intent::SoftDrop => self.soft_drop(piece),
            Intent::HardDrop => {
                let landed = drop_to_floor(&self.grid, &piece);
                if self.config.drop_points {
                    let rows = (landed.row - piece.row) as u32;
                    self.score = self.score.saturating_add(drop_points(rows, true));
                }
                self.active = Some(landed);
                self.lock_active(true);
                true
            }
            Intent::Pause => unreachable!("pause is handled above"),
        }
    }

    fn try_commit(&mut self, moved: Option<Piece>) -> bool {
        let Some(moved) = moved else {
            return false;
        };
        self.active = Some(moved);
        if self.phase == Phase::Locking {
            if self.lock_resets < self.config.lock_reset_limit {
                self.lock_resets += 1;
                self.lock_timer_ms = 0;
            }
            if !is_grounded(&self.grid, &moved) {
                self.phase = Phase::Falling;
            }
        }
        true
    }

    fn soft_drop(&mut self, piece: Piece) -> bool {
        let newly_latched = !self.soft_drop;
        self.soft_drop = true;
        match resolve_move(&self.grid, &piece, 1, 0) {
            Some(moved) => {
                self.active = Some(moved);
                self.fall_timer_ms = 0;
                if self.config.drop_points {
                    self.score = self.score.saturating_add(drop_points(1, false));
                }
                true
            }
            None if self.phase == Phase::Falling => {
                self.begin_locking();
                true
            }
            None => newly_latched,
        }
    }

    fn gravity_step(&mut self) {
        let Some(piece) = self.active else {
            return;
        };
        match resolve_move(&self.grid, &piece, 1, 0) {
            Some(moved) => {
                self.active = Some(moved);
                if self.soft_drop && self.config.drop_points {
                    self.score = self.score.saturating_add(drop_points(1, false));
                }
            }
            None => self.begin_locking(),
        }
    }

    /// Enter Locking for the resting active piece
    ///
    /// The timer restarts only when the piece rests lower than it ever has.
    /// Landing again on the same floor keeps the running timer, and once the
    /// resets are spent the piece locks on the next tick.
    fn begin_locking(&mut self) {
        let Some(piece) = self.active else {
            return;
        };
        if piece.row > self.lock_floor {
            self.lock_floor = piece.row;
            self.lock_timer_ms = 0;
        } else if self.lock_resets >= self.config.lock_reset_limit {
            self.lock_timer_ms = self.config.lock_delay_ms;
        }
        self.phase = Phase::Locking;
    }

    fn lock_active(&mut self, hard_drop: bool) {
        let Some(piece) = self.active.take() else {
            return;
        };
        let cells = piece.cells().map(|(row, col)| (row, col, piece.kind));
        self.grid.lock_cells(&cells);
        self.phase = Phase::LineClear;

        let cleared = self.grid.clear_full_rows();
        let points = line_clear_points(cleared.count(), self.level);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(cleared.count() as u32);
        self.level = level_for_lines(
            self.config.start_level,
            self.lines,
            self.config.lines_per_level,
        );

        let wait = !cleared.is_empty() && self.config.line_clear_delay_ms > 0;
        self.last_event = Some(LockEvent {
            kind: piece.kind,
            hard_drop,
            cleared_rows: cleared.into_rows(),
            points,
            level: self.level,
        });

        self.line_clear_timer_ms = 0;
        if !wait {
            self.spawn();
        }
    }

    fn spawn(&mut self) {
        self.phase = Phase::Spawning;
        self.fall_timer_ms = 0;
        self.lock_timer_ms = 0;
        self.lock_resets = 0;
        self.lock_floor = i32::MIN;
        self.line_clear_timer_ms = 0;
        self.soft_drop = false;

        let kind = self.generator.next();
        let piece = Piece::spawn(kind, self.grid.column_count());
        if !can_place(&self.grid, piece.kind, piece.rotation, piece.anchor()) {
            self.active = None;
            self.phase = Phase::GameOver;
            return;
        }

        self.stats.record(kind);
        self.active = Some(piece);
        self.phase = Phase::Falling;
    }

    /// Start a new game with the same configuration
    ///
    /// The generator keeps its randomness state, so the new game deals a
    /// different sequence.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.generator.reset();
        self.active = None;
        self.paused = false;
        self.score = 0;
        self.level = self.config.start_level;
        self.lines = 0;
        self.stats = PieceStats::default();
        self.last_event = None;
        self.spawn();
    }

    /// Owned copy of everything needed to draw a frame
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            cols: self.grid.column_count(),
            rows: self.grid.row_count(),
            grid: self.grid.cells().to_vec(),
            active: self.active.map(ActiveSnapshot::from),
            ghost: self
                .active
                .map(|piece| drop_to_floor(&self.grid, &piece).cells()),
            next: self.generator.peek(),
            next_queue: self.generator.peek_n(self.config.preview),
            score: self.score,
            level: self.level,
            lines: self.lines,
            phase: self.phase,
            paused: self.paused,
            stats: self.stats,
        }
    }
}
