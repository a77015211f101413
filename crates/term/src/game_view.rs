//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure (no I/O), so it is unit-tested directly.

use crate::core::{get_shape, GameSnapshot, LockEvent};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{PieceKind, Rotation};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Width of the statistics column left of the key legend
const STATS_W: u16 = 14;

const KEYS: [(&str, &str); 8] = [
    ("←→", "move"),
    ("↑ x", "rotate"),
    ("z", "rotate ccw"),
    ("↓", "soft drop"),
    ("spc", "hard drop"),
    ("p", "pause"),
    ("r", "restart"),
    ("q", "quit"),
];
/// Draws the well, the side panel and overlays.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Terminal columns per grid cell
    cell_w: u16,
    /// Terminal rows per grid cell
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Size of the bordered well for a grid of `cols` × `rows`
    pub fn frame_size(&self, cols: usize, rows: usize) -> (u16, u16) {
        (
            (cols as u16).saturating_mul(self.cell_w).saturating_add(2),
            (rows as u16).saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// `last_clear` is the host's most recent lock event; clears are shown in
    /// the side panel.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        last_clear: Option<&LockEvent>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let (frame_w, frame_h) = self.frame_size(snap.cols, snap.rows);
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = Style::plain(Rgb::new(200, 200, 200), PANEL_BG);
        fb.draw_box(origin_x, origin_y, frame_w, frame_h, border);

        let empty = Style::plain(Rgb::new(90, 90, 100), WELL_BG).dim();
        for row in 0..snap.rows {
            for col in 0..snap.cols {
                match snap.cell(row, col) {
                    Some(kind) => self.fill_cell(fb, origin_x, origin_y, row, col, '█', piece_style(kind)),
                    None => self.fill_cell(fb, origin_x, origin_y, row, col, '·', empty),
                }
            }
        }

        if let Some(ghost) = snap.ghost {
            let style = Style::plain(Rgb::new(140, 140, 140), WELL_BG).dim();
            for (row, col) in ghost {
                if in_well(snap, row, col) {
                    self.fill_cell(fb, origin_x, origin_y, row as usize, col as usize, '░', style);
                }
            }
        }

        if let Some(active) = snap.active {
            for (row, col) in active.cells {
                if in_well(snap, row, col) {
                    let style = piece_style(active.kind);
                    self.fill_cell(fb, origin_x, origin_y, row as usize, col as usize, '█', style);
                }
            }
        }

        let panel_x = origin_x + frame_w + 2;
        self.draw_panel(fb, snap, last_clear, viewport, panel_x, origin_y);
        draw_keys(fb, viewport, panel_x.saturating_add(STATS_W), origin_y);

        if snap.is_game_over() {
            draw_overlay(fb, origin_x, origin_y, frame_w, frame_h, &["GAME OVER", "r: restart"]);
        } else if snap.paused {
            draw_overlay(fb, origin_x, origin_y, frame_w, frame_h, &["PAUSED"]);
        }
    }

    /// Render into a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        last_clear: Option<&LockEvent>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, last_clear, viewport, &mut fb);
        fb
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        row: usize,
        col: usize,
        ch: char,
        style: Style,
    ) {
        let x = origin_x + 1 + col as u16 * self.cell_w;
        let y = origin_y + 1 + row as u16 * self.cell_h;
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        last_clear: Option<&LockEvent>,
        viewport: Viewport,
        x: u16,
        top: u16,
    ) {
        if x >= viewport.width || viewport.width - x < 12 {
            return;
        }
        let label = Style::plain(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = Style::plain(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = top;
        for (name, number) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(x, y, name, label);
            fb.put_str(x, y + 1, &number.to_string(), value);
            y += 3;
        }

        fb.put_str(x, y, "NEXT", label);
        y += 1;
        for &(r, c) in get_shape(snap.next, Rotation::North).iter() {
            let px = x + c as u16 * 2;
            let py = y + r as u16;
            fb.fill_rect(px, py, 2, 1, '█', piece_style(snap.next));
        }
        y += 2;
        let queue: String = snap
            .next_queue
            .iter()
            .skip(1)
            .map(|kind| kind.letter())
            .collect();
        if !queue.is_empty() {
            fb.put_str(x, y, &queue, value.dim());
        }
        y += 2;

        fb.put_str(x, y, "PIECES", label);
        y += 1;
        for (kind, count) in snap.stats.iter() {
            if y >= viewport.height {
                return;
            }
            fb.put_char(x, y, kind.letter(), piece_style(kind));
            fb.put_str(x + 2, y, &count.to_string(), value);
            y += 1;
        }

        if let Some(event) = last_clear {
            if let Some(name) = clear_name(event.lines_cleared()) {
                y += 1;
                fb.put_str(x, y, name, label);
                fb.put_str(x, y + 1, &format!("+{}", event.points), value);
            }
        }
    }
}

fn in_well(snap: &GameSnapshot, row: i32, col: i32) -> bool {
    row >= 0 && col >= 0 && (row as usize) < snap.rows && (col as usize) < snap.cols
}

/// Display colour for each shape
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

fn piece_style(kind: PieceKind) -> Style {
    Style::plain(piece_color(kind), WELL_BG).bold()
}

/// Panel banner for a clear of `lines` rows
pub fn clear_name(lines: usize) -> Option<&'static str> {
    match lines {
        1 => Some("SINGLE"),
        2 => Some("DOUBLE"),
        3 => Some("TRIPLE"),
        4 => Some("TETRIS"),
        _ => None,
    }
}

/// Key legend, drawn only when it fits whole
fn draw_keys(fb: &mut FrameBuffer, viewport: Viewport, x: u16, top: u16) {
    let width = KEYS
        .iter()
        .map(|(_, action)| 4 + action.len() as u16)
        .max()
        .unwrap_or(0);
    if x.saturating_add(width) > viewport.width || top + KEYS.len() as u16 + 1 > viewport.height {
        return;
    }
    let label = Style::plain(Rgb::new(220, 220, 220), PANEL_BG).bold();
    let key_style = Style::plain(Rgb::new(240, 220, 80), PANEL_BG);
    let text = Style::plain(Rgb::new(160, 160, 160), PANEL_BG);

    fb.put_str(x, top, "KEYS", label);
    for (y, (key, action)) in (top + 1..).zip(KEYS) {
        fb.put_str(x, y, key, key_style);
        fb.put_str(x + 4, y, action, text);
    }
}

fn draw_overlay(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, lines: &[&str]) {
    let style = Style::plain(Rgb::new(255, 255, 255), PANEL_BG).bold();
    let first = y + (h / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, text) in lines.iter().enumerate() {
        fb.put_centered(x, w, first + i as u16, text, style);
    }
}
