//! Key mapping from terminal events to game commands.

use crate::types::{GameCommand, Phase};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a game command.
///
/// The arrows move and rotate. Space hard-drops while a game is running and
/// starts one otherwise. Every other key is ignored.
pub fn map_key_event(key: KeyEvent, phase: Phase) -> Option<GameCommand> {
    match key.code {
        KeyCode::Left => Some(GameCommand::MoveLeft),
        KeyCode::Right => Some(GameCommand::MoveRight),
        KeyCode::Down => Some(GameCommand::MoveDown),
        KeyCode::Up => Some(GameCommand::RotateCw),
        KeyCode::Char(' ') => match phase {
            Phase::Playing => Some(GameCommand::HardDrop),
            Phase::NotStarted | Phase::GameOver => Some(GameCommand::Start),
        },
        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
