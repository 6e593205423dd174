// Lottery board entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config, build the team catalog
// 3. Open the database, restore any saved order
// 4. Create mpsc channels
// 5. Spawn the app logic task
// 6. Run the TUI event loop (blocking until the user quits)
// 7. Cleanup on exit

use draft_lottery::app;
use draft_lottery::config;
use draft_lottery::db;
use draft_lottery::tui;

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing (log to file, not terminal)
    init_tracing()?;
    info!("Lottery board starting up");

    // 2. Load config and build the catalog
    let config = config::load_config().context("failed to load configuration")?;
    let catalog = config.catalog().context("failed to build team catalog")?;
    info!(
        "Config loaded: board='{}', {} teams",
        config.board.name,
        catalog.len()
    );

    // 3. Open the database and restore the saved order
    let db_path = config
        .resolve_db_path()
        .context("failed to resolve database path")?;
    let db = db::Database::open(db_path.to_string_lossy().as_ref())
        .context("failed to open database")?;
    info!("Database opened at {}", db_path.display());

    let board_name = config.board.name.clone();
    let mut app_state = app::AppState::new(config, catalog, db);
    if app::restore_from_db(&mut app_state) {
        info!("Draft order restored from previous session");
    } else {
        info!("Starting with an empty board");
    }

    // 4. Create mpsc channels
    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (ui_tx, ui_rx) = mpsc::channel(64);

    // 5. Spawn the app logic task
    let app_handle = tokio::spawn(async move {
        if let Err(e) = app::run(cmd_rx, ui_tx, app_state).await {
            error!("Application loop error: {}", e);
        }
    });

    // 6. Run the TUI event loop (blocking until the user quits)
    if let Err(e) = tui::run(board_name, ui_rx, cmd_tx).await {
        error!("TUI error: {}", e);
    }

    // 7. Cleanup: wait for the app task to finish (with timeout)
    let _ = tokio::time::timeout(std::time::Duration::from_secs(5), async {
        let _ = app_handle.await;
    })
    .await;

    info!("Lottery board shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by
/// the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("draft-lottery.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("draft_lottery=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
