use chrono::{Datelike, Local, NaiveDate};
use rusqlite::Connection;

use crate::error::Result;
use crate::settings::store_config;
use crate::store::RecordStore;

const MONTHS: u32 = 6;

struct DemoExpense {
    date: String,
    category: &'static str,
    amount_cents: i64,
    description: Option<&'static str>,
}

/// Fixed monthly costs generated every month.
struct RecurringExpense {
    day: u32,
    category: &'static str,
    description: &'static str,
    amount_cents: i64,
}

const RECURRING: &[RecurringExpense] = &[
    RecurringExpense { day: 1, category: "Rent", description: "Monthly rent", amount_cents: 120000 },
    RecurringExpense { day: 3, category: "Utilities", description: "Internet", amount_cents: 4999 },
    RecurringExpense { day: 6, category: "Health", description: "Gym membership", amount_cents: 2900 },
    RecurringExpense { day: 10, category: "Subscriptions", description: "Streaming", amount_cents: 1599 },
];

/// Grocery run amounts cycled across months; three runs per month.
const GROCERY_DAYS: &[u32] = &[4, 13, 24];
const GROCERY_AMOUNTS: &[i64] = &[5234, 7810, 4375, 6120, 8255, 3990];

/// One-off expenses — each month picks a subset based on index.
struct RotatingExpense {
    day: u32,
    category: &'static str,
    description: &'static str,
    amount_cents: i64,
}

const ROTATING: &[RotatingExpense] = &[
    RotatingExpense { day: 15, category: "Fuel", description: "Petrol", amount_cents: 5540 },
    RotatingExpense { day: 20, category: "Dining", description: "Dinner out", amount_cents: 3620 },
    RotatingExpense { day: 25, category: "Transport", description: "Train pass", amount_cents: 2750 },
    RotatingExpense { day: 28, category: "Clothing", description: "New clothes", amount_cents: 4399 },
    RotatingExpense { day: 7, category: "Entertainment", description: "Cinema", amount_cents: 1900 },
    RotatingExpense { day: 12, category: "Health", description: "Pharmacy", amount_cents: 1685 },
    RotatingExpense { day: 19, category: "Dining", description: "Brunch", amount_cents: 2480 },
    RotatingExpense { day: 26, category: "Fuel", description: "Petrol", amount_cents: 4895 },
    RotatingExpense { day: 14, category: "Entertainment", description: "Concert ticket", amount_cents: 6500 },
    RotatingExpense { day: 18, category: "Transport", description: "Taxi", amount_cents: 1320 },
];

/// Clamp a day to the last valid day of the given year/month.
fn clamp_day(year: i32, month: u32, day: u32) -> u32 {
    let last = NaiveDate::from_ymd_opt(year, month + 1, 1)
        .or_else(|| NaiveDate::from_ymd_opt(year + 1, 1, 1))
        .and_then(|d| d.pred_opt());
    match last {
        Some(d) => day.min(d.day()),
        None => day.min(28),
    }
}

fn make_date(year: i32, month: u32, day: u32) -> String {
    let d = clamp_day(year, month, day);
    format!("{year:04}-{month:02}-{d:02}")
}

/// Build six months of demo expenses ending at the current month.
fn generate_expenses() -> Vec<DemoExpense> {
    let today = Local::now().date_naive();
    let mut expenses = Vec::new();

    for i in 0..MONTHS {
        // Count backwards: i=0 is the oldest month, i=MONTHS-1 the current one
        let months_ago = MONTHS - 1 - i;
        let target = today - chrono::Months::new(months_ago);
        let year = target.year();
        let month = target.month();
        let idx = i as usize;

        for r in RECURRING {
            expenses.push(DemoExpense {
                date: make_date(year, month, r.day),
                category: r.category,
                amount_cents: r.amount_cents,
                description: Some(r.description),
            });
        }

        for (j, day) in GROCERY_DAYS.iter().enumerate() {
            let pick = (idx * GROCERY_DAYS.len() + j) % GROCERY_AMOUNTS.len();
            expenses.push(DemoExpense {
                date: make_date(year, month, *day),
                category: "Food",
                amount_cents: GROCERY_AMOUNTS[pick],
                description: None,
            });
        }

        for j in 0..3usize {
            let pick = (idx * 3 + j) % ROTATING.len();
            let rot = &ROTATING[pick];
            expenses.push(DemoExpense {
                date: make_date(year, month, rot.day),
                category: rot.category,
                amount_cents: rot.amount_cents,
                description: Some(rot.description),
            });
        }
    }

    expenses
}

fn insert_demo_data(conn: &Connection) -> Result<usize> {
    let expenses = generate_expenses();
    for e in &expenses {
        conn.execute(
            "INSERT INTO expenses (date, category, amount_cents, description) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![e.date, e.category, e.amount_cents, e.description],
        )?;
    }
    Ok(expenses.len())
}

pub fn run() -> Result<()> {
    let store = RecordStore::new(store_config());
    let db_path = store.config().db_path();

    if !db_path.exists() {
        eprintln!("No database found. Run `outlay init` first.");
        std::process::exit(1);
    }

    let conn = store.connect()?;

    // Idempotency guard: never mix demo rows into real records.
    let count: i64 = conn.query_row("SELECT count(*) FROM expenses", [], |r| r.get(0))?;
    if count > 0 {
        println!("Database already has {count} expense(s); demo data not loaded.");
        return Ok(());
    }

    let inserted = insert_demo_data(&conn)?;
    let categories: i64 =
        conn.query_row("SELECT count(DISTINCT category) FROM expenses", [], |r| r.get(0))?;

    println!("Demo data loaded!");
    println!("  Expenses:   {inserted}");
    println!("  Months:     {MONTHS}");
    println!("  Categories: {categories}");
    println!();
    println!("Try these next:");
    println!("  outlay list");
    println!("  outlay list --month {}", Local::now().format("%Y-%m"));
    println!("  outlay chart categories");
    println!("  outlay chart months");

    Ok(())
}
