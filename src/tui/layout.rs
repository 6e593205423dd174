// Screen layout: panel arrangement and sizing.
//
// Divides the terminal into fixed zones for the lottery board:
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +--------------------+-----------------------------+
// | Teams (40%)        | Draft Order (60%)            |
// |                    |                              |
// +--------------------+-----------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each board zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: board name, pick counter, completion badge, sound label.
    pub status_bar: Rect,
    /// Left panel: selectable list of still-available teams.
    pub available: Rect,
    /// Right panel: the twelve ordered pick slots.
    pub order: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the board layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    // Vertical: status(1) | middle(fill) | help(1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Min(10),   // middle section
            Constraint::Length(1), // help bar
        ])
        .split(area);

    let status_bar = vertical[0];
    let middle = vertical[1];
    let help_bar = vertical[2];

    // Horizontal: available teams (40%) | draft order (60%)
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(middle);

    AppLayout {
        status_bar,
        available: horizontal[0],
        order: horizontal[1],
        help_bar,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
