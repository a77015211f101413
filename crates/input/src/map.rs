//! Key mapping from terminal events to intents and shell commands.

use crate::types::Intent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the shell to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Intent(Intent),
    Restart,
    Quit,
}

/// Map a key event; releases and unbound keys give `None`.
pub fn map_key(key: KeyEvent) -> Option<KeyCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(KeyCommand::Quit);
    }
    if matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R')) {
        return Some(KeyCommand::Restart);
    }
    intent_for(key.code).map(KeyCommand::Intent)
}

/// Intent bound to a key, regardless of press or release
pub fn intent_for(code: KeyCode) -> Option<Intent> {
    match code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Intent::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Intent::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Intent::SoftDrop)
        }

        // Rotation
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('x') | KeyCode::Char('X') => {
            Some(Intent::RotateCw)
        }
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(Intent::RotateCcw),

        KeyCode::Char(' ') | KeyCode::Enter => Some(Intent::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => Some(Intent::Pause),

        _ => None,
    }
}

/// Whether the key should quit the shell.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
