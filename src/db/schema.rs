use rusqlite::Connection;

use crate::error::CarpoolResult;

/// Initialize the database schema. Creates all tables if they don't exist.
///
/// `must_ride_with` and `person_blocks.driver_id` carry no foreign key: a
/// removed driver may still be referenced, and allocation copes with that.
pub fn initialize(conn: &Connection) -> CarpoolResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS people (
            id TEXT PRIMARY KEY NOT NULL,
            position INTEGER NOT NULL,
            name TEXT NOT NULL,
            has_license INTEGER NOT NULL DEFAULT 0,
            seats INTEGER NOT NULL DEFAULT 4,
            must_ride_with TEXT,
            is_driving_today INTEGER NOT NULL DEFAULT 0,
            is_going_today INTEGER NOT NULL DEFAULT 0,
            is_driving_self_only INTEGER,
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS person_blocks (
            person_id TEXT NOT NULL REFERENCES people(id) ON DELETE CASCADE,
            driver_id TEXT NOT NULL,
            PRIMARY KEY (person_id, driver_id)
        );

        CREATE TABLE IF NOT EXISTS assignment_snapshot (
            slot INTEGER PRIMARY KEY NOT NULL CHECK (slot = 1),
            payload TEXT NOT NULL,
            saved_at TEXT NOT NULL
        );

        PRAGMA foreign_keys = ON;
        ",
    )?;
    Ok(())
}

/// Create an in-memory connection for testing.
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    conn
}
