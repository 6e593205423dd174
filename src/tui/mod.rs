// TUI board: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` that mirrors the app's board snapshot. The
// app orchestrator pushes `UiUpdate` messages over an mpsc channel; the
// TUI applies them to `ViewState` and re-renders at ~30 fps.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use tokio::sync::mpsc;

use crate::catalog::TeamRecord;
use crate::draft::board::BoardView;
use crate::protocol::{UiUpdate, UserCommand};

use layout::build_layout;

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state that mirrors the application state for rendering.
///
/// Updated via `UiUpdate` messages from the app orchestrator; the
/// selection cursor and quit-confirmation flag are purely local.
pub struct ViewState {
    /// Board title from config, shown in the status bar.
    pub board_name: String,
    /// Latest projected board.
    pub board: BoardView,
    /// Whether the pick cue is muted.
    pub muted: bool,
    /// Transient status-line notice.
    pub notice: Option<String>,
    /// Selection cursor into `board.available`.
    pub selected: usize,
    /// Whether the quit confirmation overlay is active.
    pub confirm_quit: bool,
}

impl ViewState {
    pub fn new(board_name: String) -> Self {
        ViewState {
            board_name,
            board: BoardView::default(),
            muted: false,
            notice: None,
            selected: 0,
            confirm_quit: false,
        }
    }

    /// The currently selected available team, if any.
    pub fn selected_team(&self) -> Option<&TeamRecord> {
        self.board.available.get(self.selected)
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        if self.selected + 1 < self.board.available.len() {
            self.selected += 1;
        }
    }

    /// Keep the cursor on a valid row when the available list shrinks
    /// (after a pick or randomize).
    fn clamp_selection(&mut self) {
        let len = self.board.available.len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

/// Apply a single UiUpdate to the ViewState.
fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::Snapshot(snapshot) => {
            state.board = snapshot.board;
            state.muted = snapshot.muted;
            state.notice = snapshot.notice;
            state.clamp_selection();
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete board frame.
fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    widgets::available::render(frame, layout.available, state);
    widgets::order::render(frame, layout.order, state);
    render_help_bar(frame, layout.help_bar);

    if state.confirm_quit {
        render_quit_confirm(frame);
    }
}

fn render_help_bar(frame: &mut Frame, area: Rect) {
    let text = " ↑↓:Select | Enter:Pick | u:Undo | r:Reset | s:Shuffle | c:Copy | m:Sound | q:Quit";
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

/// Small centered overlay asking the user to confirm quitting.
fn render_quit_confirm(frame: &mut Frame) {
    let area = frame.area();
    let width = 30.min(area.width);
    let height = 3.min(area.height);
    let popup = Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    let paragraph = Paragraph::new("Quit? (y/n)")
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title(" Confirm "));
    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// This is the main entry point for the terminal UI. It:
/// 1. Initializes the terminal (enters raw mode, enables alternate screen).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Runs an async select loop: UI updates, keyboard input, render ticks.
/// 4. Restores the terminal on clean exit.
pub async fn run(
    board_name: String,
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Restore the terminal even when the render loop panics.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::new(board_name);
    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            // Board snapshots from the app orchestrator
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => {
                        apply_ui_update(&mut view_state, ui_update);
                    }
                    None => {
                        // Channel closed: app is shutting down
                        break;
                    }
                }
            }

            // Keyboard input
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(cmd) = input::handle_key(key_event, &mut view_state) {
                            let quitting = cmd == UserCommand::Quit;
                            let _ = cmd_tx.send(cmd).await;
                            if quitting {
                                break;
                            }
                        }
                    }
                    Some(Ok(_)) => {
                        // Resize and mouse events need no handling; the next
                        // render tick redraws against the new area.
                    }
                    Some(Err(_)) | None => {
                        break;
                    }
                }
            }

            // Render tick
            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &view_state))?;
            }
        }
    }

    ratatui::restore();

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, TeamRecord};
    use crate::draft::board;
    use crate::draft::state::DraftState;
    use crate::protocol::BoardSnapshot;

    fn test_catalog() -> Catalog {
        let teams = [
            ("crabs", "Snow Crabs"),
            ("lemurs", "Lemurs"),
            ("breakers", "Beach Breakers"),
            ("turtles", "Snapping Turtles"),
            ("predators", "Predators"),
            ("kodiaks", "Kodiaks"),
            ("cyclones", "Cyclones"),
            ("smog", "Smog Hogs"),
            ("sa", "San Antonio"),
            ("inferno", "Tulsa Inferno"),
            ("qkiwis", "Qkiwis"),
            ("spuds", "Dublin Spuds"),
        ];
        Catalog::new(
            teams
                .iter()
                .map(|(id, name)| TeamRecord {
                    id: id.to_string(),
                    name: name.to_string(),
                    logo: format!("assets/{id}.png"),
                })
                .collect(),
        )
        .unwrap()
    }

    fn snapshot_for(picks: &[&str]) -> BoardSnapshot {
        let catalog = test_catalog();
        let mut draft = DraftState::new();
        for id in picks {
            draft.pick(&catalog, id);
        }
        BoardSnapshot {
            board: board::project(&catalog, &draft),
            muted: false,
            notice: None,
        }
    }

    #[test]
    fn view_state_default_is_sensible() {
        let state = ViewState::new("Board".to_string());
        assert_eq!(state.board_name, "Board");
        assert!(state.board.available.is_empty());
        assert!(state.board.slots.is_empty());
        assert_eq!(state.selected, 0);
        assert!(!state.muted);
        assert!(!state.confirm_quit);
        assert!(state.notice.is_none());
        assert!(state.selected_team().is_none());
    }

    #[test]
    fn apply_snapshot_updates_board_and_flags() {
        let mut state = ViewState::new("Board".to_string());
        let mut snapshot = snapshot_for(&["crabs"]);
        snapshot.muted = true;
        snapshot.notice = Some("hi".to_string());

        apply_ui_update(&mut state, UiUpdate::Snapshot(Box::new(snapshot)));

        assert_eq!(state.board.pick_count, 1);
        assert_eq!(state.board.available.len(), 11);
        assert!(state.muted);
        assert_eq!(state.notice.as_deref(), Some("hi"));
    }

    #[test]
    fn apply_snapshot_replaces_stale_notice() {
        let mut state = ViewState::new("Board".to_string());
        state.notice = Some("old".to_string());

        apply_ui_update(&mut state, UiUpdate::Snapshot(Box::new(snapshot_for(&[]))));
        assert!(state.notice.is_none());
    }

    #[test]
    fn selection_is_clamped_when_available_list_shrinks() {
        let mut state = ViewState::new("Board".to_string());
        apply_ui_update(&mut state, UiUpdate::Snapshot(Box::new(snapshot_for(&[]))));

        // Cursor on the last of 12 teams.
        for _ in 0..20 {
            state.select_down();
        }
        assert_eq!(state.selected, 11);

        // Two teams picked: list shrinks to 10, cursor must follow.
        apply_ui_update(
            &mut state,
            UiUpdate::Snapshot(Box::new(snapshot_for(&["crabs", "lemurs"]))),
        );
        assert_eq!(state.selected, 9);
        assert!(state.selected_team().is_some());
    }

    #[test]
    fn selection_resets_when_board_completes() {
        let mut state = ViewState::new("Board".to_string());
        apply_ui_update(&mut state, UiUpdate::Snapshot(Box::new(snapshot_for(&[]))));
        state.select_down();

        let all = [
            "crabs", "lemurs", "breakers", "turtles", "predators", "kodiaks", "cyclones", "smog",
            "sa", "inferno", "qkiwis", "spuds",
        ];
        apply_ui_update(&mut state, UiUpdate::Snapshot(Box::new(snapshot_for(&all))));

        assert_eq!(state.selected, 0);
        assert!(state.selected_team().is_none());
        assert!(state.board.is_complete);
    }

    #[test]
    fn selected_team_follows_the_cursor() {
        let mut state = ViewState::new("Board".to_string());
        apply_ui_update(&mut state, UiUpdate::Snapshot(Box::new(snapshot_for(&[]))));

        assert_eq!(state.selected_team().unwrap().id, "crabs");
        state.select_down();
        assert_eq!(state.selected_team().unwrap().id, "lemurs");
    }
}
