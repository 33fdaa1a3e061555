use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

/// Build an `outlay` command sandboxed to its own home directory, so
/// settings and the database never touch the real user's files.
fn outlay(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("outlay").unwrap();
    cmd.env("HOME", home).env_remove("OUTLAY_DB_KEY");
    cmd
}

fn init(home: &Path) {
    outlay(home).arg("init").assert().success();
}

fn add(home: &Path, amount: &str, category: &str, description: &str, date: &str) {
    outlay(home)
        .args(["add", amount, category, description, "--date", date])
        .assert()
        .success();
}

#[test]
fn test_init_creates_database() {
    let home = tempfile::tempdir().unwrap();

    outlay(home.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized outlay at"));

    let db = home.path().join("Documents").join("outlay").join("outlay.db");
    assert!(db.exists(), "expected database at {}", db.display());
}

#[test]
fn test_add_then_list() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());

    outlay(home.path())
        .args(["add", "12.50", "Food", "Lunch", "--date", "2024-07-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense #1"));

    outlay(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("12.50"))
        .stdout(predicate::str::contains("1 record(s), total 12.50"));
}

#[test]
fn test_list_empty_database() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());

    outlay(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));
}

#[test]
fn test_list_month_filter_spans_the_whole_month() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());
    add(home.path(), "10.00", "Food", "first", "2024-12-01");
    add(home.path(), "20.00", "Food", "last", "2024-12-31");
    add(home.path(), "30.00", "Food", "next year", "2025-01-01");

    outlay(home.path())
        .args(["list", "--month", "2024-12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-12-01"))
        .stdout(predicate::str::contains("2024-12-31"))
        .stdout(predicate::str::contains("2025-01-01").not())
        .stdout(predicate::str::contains("2 record(s), total 30.00"));
}

#[test]
fn test_list_date_filter_matches_one_day() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());
    add(home.path(), "10.00", "Food", "breakfast", "2024-07-15");
    add(home.path(), "20.00", "Fuel", "petrol", "2024-07-16");

    outlay(home.path())
        .args(["list", "--date", "2024-07-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-07-15"))
        .stdout(predicate::str::contains("2024-07-16").not())
        .stdout(predicate::str::contains("1 record(s), total 10.00"));
}

#[test]
fn test_list_rejects_month_and_date_together() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());

    outlay(home.path())
        .args(["list", "--month", "2024-07", "--date", "2024-07-15"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_list_rejects_bad_month_format() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());

    outlay(home.path())
        .args(["list", "--month", "2024-13"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid format. Use YYYY-MM"));
}

#[test]
fn test_list_rejects_bad_date_format() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());

    outlay(home.path())
        .args(["list", "--date", "07-15-2024"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid format. Use YYYY-MM-DD"));
}

#[test]
fn test_add_rejects_bad_amount() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());

    outlay(home.path())
        .args(["add", "abc", "Food"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Amount must be numeric"));
}

#[test]
fn test_add_rejects_out_of_range_amount() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());

    outlay(home.path())
        .args(["add", "1000000000000000000000000000", "Food"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Amount is out of range"));
}

#[test]
fn test_add_rejects_bad_date() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());

    outlay(home.path())
        .args(["add", "5.00", "Food", "--date", "2024/07/15"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Date must be in YYYY-MM-DD format"));
}

#[test]
fn test_add_rejects_blank_category() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());

    outlay(home.path())
        .args(["add", "5.00", "  "])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Please fill Date, Category and Amount"));
}

#[test]
fn test_edit_replaces_every_field() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());
    add(home.path(), "10.00", "Food", "lunch", "2024-07-15");

    outlay(home.path())
        .args([
            "edit", "1", "--date", "2024-07-16", "--category", "Transport", "--amount", "22.40",
            "--desc", "taxi",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated expense #1"));

    outlay(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Transport"))
        .stdout(predicate::str::contains("taxi"))
        .stdout(predicate::str::contains("22.40"))
        .stdout(predicate::str::contains("Food").not());
}

#[test]
fn test_edit_unknown_id_succeeds_without_changes() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());
    add(home.path(), "10.00", "Food", "lunch", "2024-07-15");

    outlay(home.path())
        .args(["edit", "99", "--date", "2024-07-16", "--category", "Fuel", "--amount", "5.00"])
        .assert()
        .success();

    outlay(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Fuel").not());
}

#[test]
fn test_delete_accepts_missing_ids() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());
    add(home.path(), "10.00", "Food", "lunch", "2024-07-15");
    add(home.path(), "20.00", "Fuel", "petrol", "2024-07-16");

    // Only the row that existed counts.
    outlay(home.path())
        .args(["delete", "1", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 record(s)"));

    outlay(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fuel"))
        .stdout(predicate::str::contains("Food").not());
}

#[test]
fn test_chart_categories_prints_table_when_piped() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());
    add(home.path(), "15.00", "Food", "groceries", "2024-07-01");
    add(home.path(), "5.00", "Fuel", "petrol", "2024-07-02");

    outlay(home.path())
        .args(["chart", "categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spending by Category"))
        .stdout(predicate::str::contains("75.0%"))
        .stdout(predicate::str::contains("25.0%"))
        .stdout(predicate::str::contains("20.00"));
}

#[test]
fn test_chart_months_prints_table_when_piped() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());
    add(home.path(), "10.00", "Food", "a", "2024-02-10");
    add(home.path(), "5.00", "Food", "b", "2024-01-20");

    let output = outlay(home.path())
        .args(["chart", "months"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spending by Month"))
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    let jan = text.find("2024-01").expect("January missing");
    let feb = text.find("2024-02").expect("February missing");
    assert!(jan < feb, "months out of order:\n{text}");
}

#[test]
fn test_chart_with_no_data() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());

    outlay(home.path())
        .args(["chart", "categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data to visualize."));

    outlay(home.path())
        .args(["chart", "months"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data to visualize."));
}

#[test]
fn test_status_before_and_after_init() {
    let home = tempfile::tempdir().unwrap();

    outlay(home.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database not found"));

    init(home.path());
    add(home.path(), "10.00", "Food", "lunch", "2024-07-15");
    add(home.path(), "20.00", "Fuel", "petrol", "2024-08-16");

    outlay(home.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expenses:    2"))
        .stdout(predicate::str::contains("Categories:  2"))
        .stdout(predicate::str::contains("Months:      2"));
}

#[test]
fn test_demo_loads_once() {
    let home = tempfile::tempdir().unwrap();
    init(home.path());

    outlay(home.path())
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Demo data loaded!"));

    outlay(home.path())
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("demo data not loaded"));
}

#[test]
fn test_init_with_custom_data_dir() {
    let home = tempfile::tempdir().unwrap();
    let data = home.path().join("ledger");
    std::fs::create_dir_all(&data).unwrap();

    outlay(home.path())
        .args(["init", "--data-dir", data.to_str().unwrap()])
        .assert()
        .success();

    assert!(data.join("outlay.db").exists());

    add(home.path(), "10.00", "Food", "lunch", "2024-07-15");
    outlay(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"));
}
