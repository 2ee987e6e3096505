// Keyboard input handling.
//
// Translates crossterm key events into reducer actions, or into a quit
// command for the event loop.

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use epl_app::Action;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Action),
    Quit,
}

/// Map a key press to a command. Unbound keys return `None`.
pub fn handle_key(key_event: KeyEvent) -> Option<Command> {
    // Only process key press events. On Windows, crossterm emits both
    // Press and Release events for each physical keypress.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        return match key_event.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    let action = match key_event.code {
        KeyCode::Char('q') => return Some(Command::Quit),

        // Player 1
        KeyCode::Down | KeyCode::Char('j') => Action::CycleFirst(1),
        KeyCode::Up | KeyCode::Char('k') => Action::CycleFirst(-1),

        // Player 2
        KeyCode::Char('J') => Action::CycleSecond(1),
        KeyCode::Char('K') => Action::CycleSecond(-1),

        // Filters
        KeyCode::Char('t') => Action::CycleTeamFilter,
        KeyCode::Char('p') => Action::CyclePositionFilter,

        KeyCode::Char('c') => Action::ToggleComparison,
        KeyCode::Char('f') => Action::SaveFavorite {
            saved_at: Utc::now(),
        },

        _ => return None,
    };
    Some(Command::Dispatch(action))
}
