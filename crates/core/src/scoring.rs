//! Scoring module - classic line-clear scoring, levels and gravity
//!
//! Line clears use the classic Nintendo table scaled by level:
//!
//! | lines | points at level L |
//! |-------|-------------------|
//! | 1 | 40 × (L + 1) |
//! | 2 | 100 × (L + 1) |
//! | 3 | 300 × (L + 1) |
//! | 4 | 1200 × (L + 1) |
//!
//! Each row of the table is worth more than that many singles, and the jump to
//! four lines is the largest.

use crate::types::LINE_SCORES;

/// Points for clearing `lines` rows in one lock at `level`
///
/// Returns 0 for `lines` outside `1..=4`.
pub fn line_clear_points(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines].saturating_mul(level.saturating_add(1))
}

/// Drop bonus: +1 per soft-dropped row, +2 per hard-dropped row
pub fn drop_points(rows: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        rows.saturating_mul(2)
    } else {
        rows
    }
}

/// Level after `total_lines` cleared lines
///
/// Steps up by one every `lines_per_level` lines from `start_level`, so it
/// never decreases as lines accumulate.
pub fn level_for_lines(start_level: u32, total_lines: u32, lines_per_level: u32) -> u32 {
    start_level.saturating_add(total_lines / lines_per_level.max(1))
}

/// Gravity interval for `level`; levels past the table use its last entry
///
/// `table` must be non-empty (enforced by config validation). An empty table
/// falls back to one second per row.
pub fn gravity_interval_ms(table: &[u32], level: u32) -> u32 {
    let idx = (level as usize).min(table.len().saturating_sub(1));
    table.get(idx).copied().unwrap_or(1000)
}

/// Soft drop interval: the base interval divided by `factor`, at least 1ms
pub fn soft_drop_interval_ms(base_interval: u32, factor: u32) -> u32 {
    (base_interval / factor.max(1)).max(1)
}
