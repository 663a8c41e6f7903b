//! Database Connection and Setup
//!
//! Manages the SQLite connection and migrations.

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Database state wrapper
///
/// The connection is filled in by the background init task; commands that
/// run before that see "Database not initialized".
#[derive(Clone)]
pub struct DbState {
    pub conn: Arc<Mutex<Option<Connection>>>,
    pub db_path: PathBuf,
}

impl DbState {
    pub fn new(db_path: PathBuf) -> Self {
        Self {
            conn: Arc::new(Mutex::new(None)),
            db_path,
        }
    }
}

/// Open the database at `db_path` and run migrations
pub async fn init_db(db_path: &Path) -> Result<DbState, String> {
    let conn = if db_path == Path::new(":memory:") {
        Connection::open_in_memory().map_err(|e| format!("Failed to open db: {}", e))?
    } else {
        Connection::open(db_path).map_err(|e| format!("Failed to open db: {}", e))?
    };

    run_migrations(&conn)?;

    let state = DbState::new(db_path.to_path_buf());
    *state.conn.lock().await = Some(conn);

    Ok(state)
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> Result<(), String> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS stock (
            id TEXT PRIMARY KEY,
            brand TEXT NOT NULL,
            quantity INTEGER NOT NULL DEFAULT 0,
            price REAL NOT NULL DEFAULT 0,
            description TEXT,
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL
        )",
        (),
    )
    .map_err(|e| e.to_string())?;

    // Index for the public/admin listing order
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_stock_created_at ON stock(created_at DESC)",
        (),
    )
    .map_err(|e| e.to_string())?;

    Ok(())
}
