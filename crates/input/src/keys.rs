//! Key mapping from terminal events to session commands.

use crate::types::Command;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to a command. Unmapped keys become `Command::Unknown`.
pub fn handle_key_event(key: KeyEvent) -> Command {
    if should_quit(key) {
        return Command::Quit;
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Command::MoveLeft,
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Command::MoveDown,
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Command::MoveUp,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Command::MoveRight,
        _ => Command::Unknown,
    }
}

/// Map any terminal event to a command.
///
/// Only key presses count; releases, auto-repeat, mouse, focus and resize
/// events are `Command::Unknown`.
pub fn command_for_event(event: &Event) -> Command {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(*key),
        _ => Command::Unknown,
    }
}

/// Check if key should quit the session.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
