use rusqlite::Connection;

use crate::error::RosterResult;

/// Initialize the database schema. Creates all tables if they don't exist.
pub fn initialize(conn: &Connection) -> RosterResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS person_stats (
            person TEXT NOT NULL,
            stat TEXT NOT NULL,
            count INTEGER NOT NULL,
            fetched_at TEXT NOT NULL,
            PRIMARY KEY (person, stat)
        );
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
