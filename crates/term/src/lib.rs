//! Terminal rendering for the game.
//!
//! A small game-oriented layer: [`GameView`] turns a snapshot into a
//! [`FrameBuffer`], and [`TerminalRenderer`] flushes framebuffers through
//! `crossterm` with diffed redraws. No widget toolkit is involved, so there is
//! precise control over the aspect ratio (two columns per grid cell).

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use quadfall_core as core;
pub use quadfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{clear_name, piece_color, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
