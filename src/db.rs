// SQLite persistence layer for the draft order.

use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use tracing::warn;

/// Key under which the draft order blob is stored. The whole persisted
/// state is this single entry.
const ORDER_KEY: &str = "draft_order";

/// SQLite-backed key-value store holding the serialized draft order.
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open (or create) a SQLite database at `path` and ensure the schema
    /// exists. Pass `":memory:"` for an ephemeral in-memory database
    /// (useful for tests).
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open database at {path}"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )
        .context("failed to set database pragmas")?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS board_state (
                key        TEXT PRIMARY KEY,
                value      TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );",
        )
        .context("failed to create database schema")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the database connection.
    ///
    /// Panics if the mutex is poisoned (another thread panicked while
    /// holding the lock). This should never happen in normal operation.
    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().expect("database mutex poisoned")
    }

    /// Persist the draft order. Uses INSERT OR REPLACE so repeated saves
    /// overwrite the previous value; the store keeps exactly one entry per
    /// key with single-statement atomicity.
    pub fn save_order(&self, picks: &[String]) -> Result<()> {
        let conn = self.conn();
        let json = serde_json::to_string(picks).context("failed to serialize draft order")?;
        let stamp = chrono::Utc::now().to_rfc3339();
        conn.execute(
            "INSERT OR REPLACE INTO board_state (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![ORDER_KEY, json, stamp],
        )
        .context("failed to save draft order")?;
        Ok(())
    }

    /// Load the persisted draft order.
    ///
    /// Returns `None` when no order has been saved yet, or when the stored
    /// value does not parse as a JSON string array (the blob is then
    /// treated as absent and overwritten by the next save). Semantic
    /// validation against the catalog is the caller's job.
    pub fn load_order(&self) -> Result<Option<Vec<String>>> {
        let conn = self.conn();
        let mut stmt = conn
            .prepare("SELECT value FROM board_state WHERE key = ?1")
            .context("failed to prepare load_order query")?;

        let mut rows = stmt
            .query_map(params![ORDER_KEY], |row| {
                let json: String = row.get(0)?;
                Ok(json)
            })
            .context("failed to query draft order")?;

        match rows.next() {
            Some(row_result) => {
                let json = row_result.context("failed to read draft order row")?;
                match serde_json::from_str::<Vec<String>>(&json) {
                    Ok(picks) => Ok(Some(picks)),
                    Err(e) => {
                        warn!("Stored draft order is unreadable, treating as absent: {e}");
                        Ok(None)
                    }
                }
            }
            None => Ok(None),
        }
    }

    /// Timestamp of the last save, if any. RFC 3339 UTC.
    pub fn last_saved_at(&self) -> Result<Option<String>> {
        let conn = self.conn();
        let mut stmt = conn
            .prepare("SELECT updated_at FROM board_state WHERE key = ?1")
            .context("failed to prepare last_saved_at query")?;
        let mut rows = stmt
            .query_map(params![ORDER_KEY], |row| row.get::<_, String>(0))
            .context("failed to query save timestamp")?;
        match rows.next() {
            Some(row_result) => Ok(Some(row_result.context("failed to read timestamp row")?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: create a fresh in-memory database for each test.
    fn test_db() -> Database {
        Database::open(":memory:").expect("in-memory database should open")
    }

    fn picks(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn open_creates_schema() {
        let db = test_db();
        let conn = db.conn();
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='board_state'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn load_order_none_when_never_saved() {
        let db = test_db();
        assert!(db.load_order().unwrap().is_none());
        assert!(db.last_saved_at().unwrap().is_none());
    }

    #[test]
    fn save_and_load_round_trip_preserves_order() {
        let db = test_db();
        let order = picks(&["crabs", "lemurs", "spuds"]);
        db.save_order(&order).unwrap();

        let loaded = db.load_order().unwrap();
        assert_eq!(loaded, Some(order));
    }

    #[test]
    fn save_empty_order_round_trips() {
        let db = test_db();
        db.save_order(&[]).unwrap();
        assert_eq!(db.load_order().unwrap(), Some(vec![]));
    }

    #[test]
    fn save_overwrites_previous_value() {
        let db = test_db();
        db.save_order(&picks(&["crabs"])).unwrap();
        db.save_order(&picks(&["lemurs", "crabs"])).unwrap();

        assert_eq!(db.load_order().unwrap(), Some(picks(&["lemurs", "crabs"])));

        // Still exactly one row in the store.
        let conn = db.conn();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM board_state", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn unreadable_blob_loads_as_absent() {
        let db = test_db();
        {
            let conn = db.conn();
            conn.execute(
                "INSERT OR REPLACE INTO board_state (key, value, updated_at)
                 VALUES ('draft_order', 'not json at all', 'x')",
                [],
            )
            .unwrap();
        }
        assert!(db.load_order().unwrap().is_none());
    }

    #[test]
    fn wrong_json_type_loads_as_absent() {
        let db = test_db();
        {
            let conn = db.conn();
            conn.execute(
                "INSERT OR REPLACE INTO board_state (key, value, updated_at)
                 VALUES ('draft_order', '{\"picks\": 3}', 'x')",
                [],
            )
            .unwrap();
        }
        assert!(db.load_order().unwrap().is_none());

        // The next save self-heals the bad blob.
        db.save_order(&picks(&["crabs"])).unwrap();
        assert_eq!(db.load_order().unwrap(), Some(picks(&["crabs"])));
    }

    #[test]
    fn save_records_timestamp() {
        let db = test_db();
        db.save_order(&picks(&["crabs"])).unwrap();
        let stamp = db.last_saved_at().unwrap().expect("timestamp after save");
        // RFC 3339: date, 'T', time
        assert!(stamp.contains('T'), "unexpected timestamp format: {stamp}");
    }
}
