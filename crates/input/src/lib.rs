//! Terminal input - `crossterm` key events to engine intents
//!
//! Holds no state and knows nothing about game rules. Shell-level commands
//! (restart, quit) are kept apart from [`Intent`](crate::types::Intent) so the
//! engine never sees them.

pub mod map;

pub use quadfall_types as types;

pub use map::{intent_for, map_key, should_quit, KeyCommand};
