// ==========================================
// Inventory Console - SQLite connection setup
// ==========================================
// Goals:
// - one place for Connection::open + PRAGMA behavior, so every module
//   gets the same foreign-key and busy-timeout settings
// - schema bootstrap is idempotent (CREATE TABLE IF NOT EXISTS)
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// Default busy_timeout (milliseconds)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Apply uniform PRAGMAs to a connection.
///
/// foreign_keys and busy_timeout are per-connection settings, so this
/// must run on every connection we open.
pub fn configure_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Open a SQLite connection with the uniform configuration applied.
pub fn open_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_connection(&conn)?;
    Ok(conn)
}

/// Create the products table if it does not exist.
///
/// Schema is exactly the product record: id (unique, non-empty), name,
/// price (>= 0), stock (>= 0). The import pipeline is the gatekeeper for
/// the value constraints; the CHECK clauses are the store-level backstop.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id    TEXT PRIMARY KEY NOT NULL CHECK (id <> ''),
            name  TEXT NOT NULL CHECK (name <> ''),
            price REAL NOT NULL CHECK (price >= 0),
            stock INTEGER NOT NULL CHECK (stock >= 0)
        );
        "#,
    )?;
    Ok(())
}
