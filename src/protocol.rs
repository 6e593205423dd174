// Message types exchanged between the TUI and the app orchestrator.

use crate::draft::board::BoardView;

/// A user intent, sent from the TUI to the app task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// Assign the given team to the next open slot.
    Pick(String),
    /// Remove the most recent pick.
    Undo,
    /// Clear the whole board.
    Reset,
    /// Fill the remaining slots in random order.
    Randomize,
    /// Export the current order to the clipboard.
    Copy,
    /// Flip the pick-sound mute flag.
    ToggleMute,
    Quit,
}

/// Everything the TUI needs to draw one frame of the board.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardSnapshot {
    pub board: BoardView,
    /// Whether the pick cue is muted. Not persisted; resets per session.
    pub muted: bool,
    /// Transient status-line notice (e.g. copy result). Each snapshot
    /// replaces the previous notice, so it lasts until the next command.
    pub notice: Option<String>,
}

/// An update pushed from the app task to the TUI.
#[derive(Debug, Clone, PartialEq)]
pub enum UiUpdate {
    Snapshot(Box<BoardSnapshot>),
}
