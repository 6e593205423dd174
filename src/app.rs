// Application state and orchestration logic.
//
// The app task owns the draft state and is its only writer. The TUI sends
// `UserCommand`s over an mpsc channel; each command is applied to
// completion (mutate, persist, project) before the next one is received,
// and the resulting `BoardSnapshot` is pushed back for rendering.

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::clipboard;
use crate::config::Config;
use crate::cue;
use crate::db::Database;
use crate::draft::board::{self, BoardView};
use crate::draft::state::{DraftState, PickOutcome};
use crate::export;
use crate::protocol::{BoardSnapshot, UiUpdate, UserCommand};

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// The complete application state.
pub struct AppState {
    pub config: Config,
    pub catalog: Catalog,
    pub draft: DraftState,
    /// Gates the pick cue. Defaults to unmuted and is deliberately not
    /// persisted; every session starts with sound on.
    pub muted: bool,
    pub db: Database,
}

impl AppState {
    pub fn new(config: Config, catalog: Catalog, db: Database) -> Self {
        AppState {
            config,
            catalog,
            draft: DraftState::new(),
            muted: false,
            db,
        }
    }

    /// Project the current draft state into a renderable board.
    pub fn project(&self) -> BoardView {
        board::project(&self.catalog, &self.draft)
    }

    /// Build the snapshot pushed to the TUI after a command.
    pub fn build_snapshot(&self, notice: Option<String>) -> BoardSnapshot {
        BoardSnapshot {
            board: self.project(),
            muted: self.muted,
            notice,
        }
    }

    /// Mirror the draft state to the store. Write failures are logged and
    /// otherwise ignored; the in-memory state stays authoritative and the
    /// next successful save catches up.
    fn persist(&self) {
        if let Err(e) = self.db.save_order(self.draft.picks()) {
            warn!("Failed to persist draft order: {e}");
        }
    }

    /// Apply a single user command. Returns an optional status notice for
    /// the TUI. `Quit` is handled by the event loop and is a no-op here.
    pub fn handle_command(&mut self, cmd: &UserCommand) -> Option<String> {
        match cmd {
            UserCommand::Pick(team_id) => {
                let outcome = self.draft.pick(&self.catalog, team_id);
                if outcome == PickOutcome::Picked && !self.muted {
                    cue::pick_cue();
                }
                self.persist();
                None
            }
            UserCommand::Undo => {
                self.draft.undo();
                self.persist();
                None
            }
            UserCommand::Reset => {
                self.draft.reset();
                info!("Board reset");
                self.persist();
                None
            }
            UserCommand::Randomize => {
                let filled = self
                    .draft
                    .randomize_fill(&self.catalog, &mut rand::rng());
                if filled > 0 {
                    info!("Randomize filled {filled} slots");
                }
                self.persist();
                None
            }
            UserCommand::Copy => {
                let text = export::render_order(&self.catalog, &self.draft);
                match clipboard::copy(&text) {
                    Ok(()) => Some(format!("Copied {} picks", self.draft.len())),
                    Err(e) => {
                        warn!("Clipboard export failed: {e}");
                        Some(format!("Clipboard error: {e}"))
                    }
                }
            }
            UserCommand::ToggleMute => {
                self.muted = !self.muted;
                None
            }
            UserCommand::Quit => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Startup recovery
// ---------------------------------------------------------------------------

/// Restore the draft order saved by a previous session.
///
/// Fail-soft by design: a missing, unreadable, or invalid blob starts an
/// empty board and never aborts startup. An invalid blob is overwritten
/// immediately so it cannot resurface. Returns whether a non-trivial order
/// was restored.
pub fn restore_from_db(state: &mut AppState) -> bool {
    match state.db.load_order() {
        Ok(Some(picks)) => {
            let count = picks.len();
            if state.draft.restore(picks, &state.catalog) {
                match state.db.last_saved_at().ok().flatten() {
                    Some(ts) => info!("Restored {count} picks from previous session (saved {ts})"),
                    None => info!("Restored {count} picks from previous session"),
                }
                count > 0
            } else {
                warn!("Persisted order was invalid, starting with an empty board");
                state.persist();
                false
            }
        }
        Ok(None) => {
            info!("No saved order found, starting fresh");
            false
        }
        Err(e) => {
            warn!("Failed to load saved order, starting with an empty board: {e}");
            false
        }
    }
}

// ---------------------------------------------------------------------------
// Main event loop
// ---------------------------------------------------------------------------

/// Run the main application event loop until the command channel closes or
/// the user quits.
pub async fn run(
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    info!("Application event loop started");

    // Seed the TUI with the restored board before the first command.
    let _ = ui_tx
        .send(UiUpdate::Snapshot(Box::new(state.build_snapshot(None))))
        .await;

    while let Some(cmd) = cmd_rx.recv().await {
        if cmd == UserCommand::Quit {
            info!("Quit command received, shutting down");
            break;
        }

        let notice = state.handle_command(&cmd);
        let _ = ui_tx
            .send(UiUpdate::Snapshot(Box::new(state.build_snapshot(notice))))
            .await;
    }

    info!("Application event loop exiting");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
