use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;
use rusqlite::Connection;

use crate::daterange::DateRange;
use crate::db::{self, CredentialMode};
use crate::error::Result;
use crate::models::{from_cents, to_cents, Expense, ExpenseDraft};

/// Everything needed to reach the database, passed in at construction.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub db_name: String,
    pub credentials: CredentialMode,
    pub busy_timeout: Duration,
}

impl StoreConfig {
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(&self.db_name)
    }
}

/// The expense table behind every command. Each operation opens its own
/// connection and drops it on the way out, success or failure.
#[derive(Debug)]
pub struct RecordStore {
    config: StoreConfig,
}

impl RecordStore {
    pub fn new(config: StoreConfig) -> Self {
        RecordStore { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn connect(&self) -> Result<Connection> {
        db::get_connection(
            &self.config.db_path(),
            &self.config.credentials,
            self.config.busy_timeout,
        )
    }

    pub fn init(&self) -> Result<()> {
        let conn = self.connect()?;
        db::init_db(&conn)
    }

    /// Append a new expense and return its store-assigned id.
    pub fn insert(&self, draft: &ExpenseDraft) -> Result<i64> {
        let cents = to_cents(draft.amount)?;
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO expenses (date, category, amount_cents, description) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![draft.date.to_string(), draft.category, cents, draft.description],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Replace every non-id field of the matching row. An id with no row
    /// behind it updates nothing and still returns Ok.
    pub fn update(&self, id: i64, draft: &ExpenseDraft) -> Result<()> {
        let cents = to_cents(draft.amount)?;
        let conn = self.connect()?;
        conn.execute(
            "UPDATE expenses SET date = ?1, category = ?2, amount_cents = ?3, description = ?4 WHERE id = ?5",
            rusqlite::params![draft.date.to_string(), draft.category, cents, draft.description, id],
        )?;
        Ok(())
    }

    /// Remove the given rows in one transaction with a single commit and
    /// report how many rows actually went away. Ids that no longer exist
    /// delete zero rows, so a repeat succeeds.
    pub fn delete(&self, ids: &[i64]) -> Result<usize> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let mut removed = 0;
        for id in ids {
            removed += tx.execute("DELETE FROM expenses WHERE id = ?1", [id])?;
        }
        tx.commit()?;
        Ok(removed)
    }

    /// All expenses newest-first, optionally restricted to a date range.
    pub fn list(&self, range: Option<&DateRange>) -> Result<Vec<Expense>> {
        let conn = self.connect()?;
        let rows = match range {
            Some(r) => {
                let mut stmt = conn.prepare(
                    "SELECT id, date, category, amount_cents, description FROM expenses \
                     WHERE date >= ?1 AND date < ?2 ORDER BY id DESC",
                )?;
                let rows = stmt.query_map(
                    rusqlite::params![r.start.to_string(), r.end.to_string()],
                    row_to_expense,
                )?;
                rows.collect::<std::result::Result<Vec<_>, _>>()?
            }
            None => {
                let mut stmt = conn.prepare(
                    "SELECT id, date, category, amount_cents, description FROM expenses \
                     ORDER BY id DESC",
                )?;
                let rows = stmt.query_map([], row_to_expense)?;
                rows.collect::<std::result::Result<Vec<_>, _>>()?
            }
        };
        Ok(rows)
    }
}

fn row_to_expense(row: &rusqlite::Row) -> rusqlite::Result<Expense> {
    let date_text: String = row.get(1)?;
    let date = NaiveDate::parse_from_str(&date_text, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(Expense {
        id: row.get(0)?,
        date,
        category: row.get(2)?,
        amount: from_cents(row.get(3)?),
        description: row.get(4)?,
    })
}
