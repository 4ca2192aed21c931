//! `SQLite` schema for the key/value storage medium.

use rusqlite::Connection;

use crate::error::Result;

/// SQL statement to create the key/value table.
pub const CREATE_STORAGE_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS storage (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
)
";

/// All schema statements in order of execution.
pub const SCHEMA_STATEMENTS: &[&str] = &[CREATE_STORAGE_TABLE];

/// Create the storage table if it does not exist yet.
///
/// # Errors
///
/// Returns an error if a schema statement fails.
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    for statement in SCHEMA_STATEMENTS {
        conn.execute(statement, [])?;
    }
    Ok(())
}
