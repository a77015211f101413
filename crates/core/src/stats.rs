//! Per-session spawn statistics

use crate::types::{PieceKind, SHAPE_COUNT};

/// How many pieces of each shape have spawned this session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PieceStats {
    counts: [u32; SHAPE_COUNT],
}

impl PieceStats {
    pub fn record(&mut self, kind: PieceKind) {
        let slot = &mut self.counts[kind.index()];
        *slot = slot.saturating_add(1);
    }

    pub fn count(&self, kind: PieceKind) -> u32 {
        self.counts[kind.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// `(kind, count)` pairs in [`PieceKind::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (PieceKind, u32)> + '_ {
        PieceKind::ALL.into_iter().map(|kind| (kind, self.count(kind)))
    }
}
