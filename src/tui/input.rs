// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand messages sent to the
// app orchestrator, or into local ViewState mutations (selection movement,
// quit confirmation).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::protocol::UserCommand;

use super::ViewState;

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should be forwarded to
/// the app orchestrator (pick, undo, reset, randomize, copy, mute, quit).
/// Returns `None` when the key press was handled locally by mutating
/// `ViewState` (selection movement, quit confirmation) or was ignored.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Only process key press events. On Windows, crossterm emits both
    // Press and Release events for each physical keypress; ignoring
    // non-Press events prevents double-processing.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits immediately regardless of mode (escape hatch)
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    // Quit confirmation mode: only y/q confirm, n/Esc cancel, everything else blocked
    if view_state.confirm_quit {
        return handle_confirm_quit(key_event, view_state);
    }

    match key_event.code {
        // Selection movement over the available list
        KeyCode::Up | KeyCode::Char('k') => {
            view_state.select_up();
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            view_state.select_down();
            None
        }

        // Pick the selected team
        KeyCode::Enter => view_state
            .selected_team()
            .map(|team| UserCommand::Pick(team.id.clone())),

        // Board commands
        KeyCode::Char('u') => Some(UserCommand::Undo),
        KeyCode::Char('r') => Some(UserCommand::Reset),
        KeyCode::Char('s') => Some(UserCommand::Randomize),
        KeyCode::Char('c') => Some(UserCommand::Copy),
        KeyCode::Char('m') => Some(UserCommand::ToggleMute),

        // Quit: enter confirmation mode instead of quitting immediately
        KeyCode::Char('q') => {
            view_state.confirm_quit = true;
            None
        }

        _ => None,
    }
}

/// Handle key events while in quit confirmation mode.
///
/// - `y` or `q` confirms quit (sends UserCommand::Quit)
/// - `n` or `Esc` cancels (returns to normal mode)
/// - All other keys are blocked (no-op)
fn handle_confirm_quit(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') | KeyCode::Char('Q') => {
            Some(UserCommand::Quit)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            view_state.confirm_quit = false;
            None
        }
        _ => None, // Block all other input
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
