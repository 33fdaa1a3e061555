use comfy_table::{Cell, Table};
use rust_decimal::Decimal;

use crate::daterange;
use crate::error::Result;
use crate::fmt;
use crate::models::Expense;
use crate::settings::store_config;
use crate::store::RecordStore;

pub fn run(month: Option<String>, date: Option<String>) -> Result<()> {
    let range = daterange::resolve(month.as_deref(), date.as_deref())?;

    let store = RecordStore::new(store_config());
    let expenses = match store.list(range.as_ref()) {
        Ok(rows) => rows,
        Err(e) => {
            log::warn!("could not read expenses: {e}");
            Vec::new()
        }
    };

    println!("{}", format_expenses(&expenses));
    Ok(())
}

pub fn format_expenses(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Date", "Category", "Amount", "Description"]);
    for e in expenses {
        table.add_row(vec![
            Cell::new(e.id),
            Cell::new(e.date),
            Cell::new(&e.category),
            Cell::new(fmt::amount(e.amount)),
            Cell::new(e.description.as_deref().unwrap_or_default()),
        ]);
    }

    let total: Decimal = expenses.iter().map(|e| e.amount).sum();
    format!(
        "Expenses\n{table}\n{} record(s), total {}",
        expenses.len(),
        fmt::amount(total)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(id: i64, date: &str, category: &str, cents: i64, desc: Option<&str>) -> Expense {
        Expense {
            id,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            category: category.to_string(),
            amount: Decimal::new(cents, 2),
            description: desc.map(|s| s.to_string()),
        }
    }

    #[test]
    fn test_format_expenses_has_rows_and_footer() {
        let rows = vec![
            expense(2, "2024-07-16", "Fuel", 4000, None),
            expense(1, "2024-07-15", "Food", 1250, Some("lunch")),
        ];
        let out = format_expenses(&rows);
        assert!(out.contains("2024-07-16"));
        assert!(out.contains("Fuel"));
        assert!(out.contains("40.00"));
        assert!(out.contains("lunch"));
        assert!(out.contains("2 record(s), total 52.50"));
    }

    #[test]
    fn test_format_expenses_blank_description() {
        let rows = vec![expense(1, "2024-07-15", "Food", 500, None)];
        let out = format_expenses(&rows);
        assert!(!out.contains("None"));
    }

    #[test]
    fn test_format_expenses_empty() {
        assert_eq!(format_expenses(&[]), "No expenses found.");
    }
}
