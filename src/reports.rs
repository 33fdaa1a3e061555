use rust_decimal::Decimal;

use crate::error::Result;
use crate::models::from_cents;
use crate::store::RecordStore;

// ---------------------------------------------------------------------------
// Category totals
// ---------------------------------------------------------------------------

pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

/// Total spend per category over the whole table. Group order is whatever
/// the database returns; callers that care sort for themselves.
pub fn category_totals(store: &RecordStore) -> Result<Vec<CategoryTotal>> {
    let conn = store.connect()?;
    let mut stmt = conn.prepare(
        "SELECT category, SUM(amount_cents) as total FROM expenses GROUP BY category",
    )?;
    let rows: Vec<CategoryTotal> = stmt
        .query_map([], |row| {
            Ok(CategoryTotal {
                category: row.get(0)?,
                total: from_cents(row.get(1)?),
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Month totals
// ---------------------------------------------------------------------------

pub struct MonthTotal {
    pub month: String,
    pub total: Decimal,
}

/// Total spend per calendar month, ascending by the YYYY-MM key. The ISO
/// date text makes the string sort chronological.
pub fn month_totals(store: &RecordStore) -> Result<Vec<MonthTotal>> {
    let conn = store.connect()?;
    let mut stmt = conn.prepare(
        "SELECT substr(date, 1, 7) as month, SUM(amount_cents) as total \
         FROM expenses GROUP BY substr(date, 1, 7) ORDER BY month",
    )?;
    let rows: Vec<MonthTotal> = stmt
        .query_map([], |row| {
            Ok(MonthTotal {
                month: row.get(0)?,
                total: from_cents(row.get(1)?),
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}
