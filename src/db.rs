use std::path::Path;
use std::time::Duration;

use rusqlite::Connection;

use crate::error::Result;

/// How the store authenticates to the database file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CredentialMode {
    /// Plain file access under the current user.
    #[default]
    Trusted,
    /// SQLCipher encryption keyed by a passphrase.
    Passphrase(String),
}

pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS expenses (
    id INTEGER PRIMARY KEY,
    date TEXT NOT NULL,
    category TEXT NOT NULL,
    amount_cents INTEGER NOT NULL,
    description TEXT
);
";

pub fn get_connection(
    db_path: &Path,
    credentials: &CredentialMode,
    busy_timeout: Duration,
) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    // The key pragma must come before anything else touches the file.
    if let CredentialMode::Passphrase(key) = credentials {
        conn.pragma_update(None, "key", key)?;
    }
    conn.busy_timeout(busy_timeout)?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;
    Ok(conn)
}

pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_db() -> (tempfile::TempDir, Connection) {
        let dir = tempfile::tempdir().unwrap();
        let conn = get_connection(
            &dir.path().join("test.db"),
            &CredentialMode::Trusted,
            Duration::from_secs(5),
        )
        .unwrap();
        init_db(&conn).unwrap();
        (dir, conn)
    }

    #[test]
    fn test_init_db_creates_expenses_table() {
        let (_dir, conn) = test_db();
        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<Vec<_>, _>>()
            .unwrap();
        assert!(tables.contains(&"expenses".to_string()), "missing table: expenses");
    }

    #[test]
    fn test_init_db_is_idempotent() {
        let (_dir, conn) = test_db();
        init_db(&conn).unwrap();
    }

    #[test]
    fn test_schema_has_expected_columns() {
        let (_dir, conn) = test_db();
        conn.prepare("SELECT id, date, category, amount_cents, description FROM expenses")
            .unwrap();
    }

    #[test]
    fn test_passphrase_protects_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.db");
        let key = CredentialMode::Passphrase("hunter2".to_string());
        let timeout = Duration::from_secs(5);

        let conn = get_connection(&path, &key, timeout).unwrap();
        init_db(&conn).unwrap();
        conn.execute(
            "INSERT INTO expenses (date, category, amount_cents, description) VALUES ('2024-07-15', 'Food', 500, NULL)",
            [],
        )
        .unwrap();
        drop(conn);

        // Same key reads the row back.
        let conn = get_connection(&path, &key, timeout).unwrap();
        let count: i64 = conn
            .query_row("SELECT count(*) FROM expenses", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 1);
        drop(conn);

        // No key or the wrong key never gets past the open pragmas.
        assert!(get_connection(&path, &CredentialMode::Trusted, timeout).is_err());
        let wrong = CredentialMode::Passphrase("swordfish".to_string());
        assert!(get_connection(&path, &wrong, timeout).is_err());
    }
}
