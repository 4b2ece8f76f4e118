use std::fs;
use std::path::Path;

use assert_cmd::Command;
use chrono::Datelike;
use predicates::prelude::*;
use tempfile::TempDir;

fn tracker(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expense-tracker").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", data_dir)
        .env_remove("RUST_LOG");
    cmd
}

fn year() -> i32 {
    chrono::Local::now().year()
}

fn add(data_dir: &Path, args: &[&str]) {
    tracker(data_dir)
        .arg("add")
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Expense added successfully"));
}

fn data(data_dir: &Path) -> serde_json::Value {
    let raw = fs::read_to_string(data_dir.join("data.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn add_then_list_month() {
    let temp = TempDir::new().unwrap();
    let date = format!("{}-03-01", year());

    tracker(temp.path())
        .args([
            "add",
            "--description",
            "Lunch",
            "--amount",
            "12.5",
            "--date",
            &date,
            "--category",
            "Food",
        ])
        .assert()
        .success()
        .stdout("Expense added successfully (ID: 1)\n");

    tracker(temp.path())
        .args(["list", "--month", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "1   {}  Lunch        $12.50  Food",
            date
        )))
        .stdout(predicate::str::contains("ID  Date"));
}

#[test]
fn list_empty_store() {
    let temp = TempDir::new().unwrap();
    tracker(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout("No expenses found.\n");
}

#[test]
fn invalid_amount_reports_error_and_saves_nothing() {
    let temp = TempDir::new().unwrap();
    tracker(temp.path())
        .args(["add", "--description", "Refund", "--amount", "-5"])
        .assert()
        .success()
        .stdout("Error: Amount must be positive.\n");

    assert!(!temp.path().join("data.json").exists());
}

#[test]
fn huge_amount_is_rejected_without_overflow() {
    let temp = TempDir::new().unwrap();
    tracker(temp.path())
        .args(["add", "--description", "Typo", "--amount", "1e17"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Error: Amount is too large"));

    assert!(!temp.path().join("data.json").exists());

    for _ in 0..2 {
        add(temp.path(), &["--description", "House", "--amount", "10000000000000"]);
    }
    tracker(temp.path())
        .arg("summary")
        .assert()
        .success()
        .stdout("Total expenses: $20000000000000.00\n");
}

#[test]
fn invalid_date_reports_error() {
    let temp = TempDir::new().unwrap();
    tracker(temp.path())
        .args(["add", "--description", "Tea", "--amount", "2", "--date", "2024/01/01"])
        .assert()
        .success()
        .stdout("Error: Invalid date format. Use YYYY-MM-DD.\n");
}

#[test]
fn out_of_range_month_reports_error() {
    let temp = TempDir::new().unwrap();
    tracker(temp.path())
        .args(["list", "--month", "13"])
        .assert()
        .success()
        .stdout("Error: Month must be between 1 and 12.\n");
}

#[test]
fn update_clears_category_only() {
    let temp = TempDir::new().unwrap();
    add(
        temp.path(),
        &["--description", "Lunch", "--amount", "12.5", "--date", "2024-03-01", "--category", "Food"],
    );

    tracker(temp.path())
        .args(["update", "--id", "1", "--category", ""])
        .assert()
        .success()
        .stdout("Expense updated successfully\n");

    let expense = &data(temp.path())["expenses"][0];
    assert!(expense["category"].is_null());
    assert_eq!(expense["description"], "Lunch");
    assert_eq!(expense["date"], "2024-03-01");
    assert_eq!(expense["amount"], 12.5);
}

#[test]
fn update_missing_id_is_reported() {
    let temp = TempDir::new().unwrap();
    tracker(temp.path())
        .args(["update", "--id", "7", "--amount", "3"])
        .assert()
        .success()
        .stdout("Error: Expense ID not found: 7\n");

    assert!(!temp.path().join("data.json").exists());
}

#[test]
fn delete_missing_id_leaves_file_untouched() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), &["--description", "Bus", "--amount", "3"]);
    let before = fs::read(temp.path().join("data.json")).unwrap();

    tracker(temp.path())
        .args(["delete", "--id", "99"])
        .assert()
        .success()
        .stdout("Error: Expense ID not found: 99\n");

    assert_eq!(fs::read(temp.path().join("data.json")).unwrap(), before);
}

#[test]
fn delete_keeps_counter() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), &["--description", "Bus", "--amount", "3"]);

    tracker(temp.path())
        .args(["delete", "--id", "1"])
        .assert()
        .success()
        .stdout("Expense deleted successfully\n");

    let doc = data(temp.path());
    assert_eq!(doc["expenses"].as_array().unwrap().len(), 0);
    assert_eq!(doc["next_id"], 2);
}

#[test]
fn summary_warns_when_over_budget() {
    let temp = TempDir::new().unwrap();
    let date = format!("{}-05-10", year());
    add(temp.path(), &["--description", "Groceries", "--amount", "80", "--date", &date]);
    add(temp.path(), &["--description", "Dinner", "--amount", "40.25", "--date", &date]);

    tracker(temp.path())
        .args(["budget", "set", "--month", "5", "--amount", "100"])
        .assert()
        .success()
        .stdout(format!("Budget set for {}-05: $100.00\n", year()));

    tracker(temp.path())
        .args(["summary", "--month", "5"])
        .assert()
        .success()
        .stdout(format!(
            "Total expenses for May: $120.25\n\
             Warning: over budget for {}-05! Budget $100.00, spent $120.25\n",
            year()
        ));

    tracker(temp.path())
        .arg("summary")
        .assert()
        .success()
        .stdout("Total expenses: $120.25\n");
}

#[test]
fn budget_set_is_idempotent() {
    let temp = TempDir::new().unwrap();
    for _ in 0..2 {
        tracker(temp.path())
            .args(["budget", "set", "--month", "5", "--amount", "100"])
            .assert()
            .success();
    }

    let budgets = data(temp.path())["budgets"].clone();
    let budgets = budgets.as_object().unwrap();
    assert_eq!(budgets.len(), 1);
    assert_eq!(budgets[&format!("{}-05", year())], 100.0);
}

#[test]
fn budget_show_variants() {
    let temp = TempDir::new().unwrap();
    tracker(temp.path())
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout("No budgets set.\n");

    tracker(temp.path())
        .args(["budget", "set", "--month", "11", "--amount", "20"])
        .assert()
        .success();
    tracker(temp.path())
        .args(["budget", "set", "--month", "2", "--amount", "1500.5"])
        .assert()
        .success();

    tracker(temp.path())
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(format!(
            "Month    Budget\n{y}-02  $1500.50\n{y}-11  $20.00\n",
            y = year()
        ));

    tracker(temp.path())
        .args(["budget", "show", "--month", "3"])
        .assert()
        .success()
        .stdout(format!("No budget set for {}-03.\n", year()));
}

#[test]
fn export_writes_filtered_csv() {
    let temp = TempDir::new().unwrap();
    add(
        temp.path(),
        &["--description", "Lunch, team", "--amount", "12.5", "--date", "2024-03-01", "--category", "food"],
    );
    add(
        temp.path(),
        &["--description", "Rent", "--amount", "900", "--date", "2024-03-02", "--category", "Housing"],
    );

    let out = temp.path().join("out").join("food.csv");
    tracker(temp.path())
        .args(["export", "--csv"])
        .arg(&out)
        .args(["--category", "FOOD"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Exported 1 expenses to "));

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "id,date,description,amount,category\n1,2024-03-01,\"Lunch, team\",12.50,food\n"
    );
}

#[test]
fn export_nothing_writes_no_file() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("empty.csv");

    tracker(temp.path())
        .args(["export", "--csv"])
        .arg(&out)
        .assert()
        .success()
        .stdout("No expenses to export.\n");

    assert!(!out.exists());
}

#[test]
fn corrupt_store_is_backed_up_and_reset() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("data.json"), "{{{ definitely not json").unwrap();

    tracker(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout("No expenses found.\n");

    assert_eq!(
        fs::read_to_string(temp.path().join("data.bak")).unwrap(),
        "{{{ definitely not json"
    );

    add(temp.path(), &["--description", "Fresh start", "--amount", "1"]);
    assert_eq!(data(temp.path())["expenses"][0]["id"], 1);
}

#[test]
fn data_dir_flag_overrides_env() {
    let env_dir = TempDir::new().unwrap();
    let flag_dir = TempDir::new().unwrap();

    tracker(env_dir.path())
        .arg("--data-dir")
        .arg(flag_dir.path())
        .args(["add", "--description", "Bus", "--amount", "3"])
        .assert()
        .success();

    assert!(flag_dir.path().join("data.json").exists());
    assert!(!env_dir.path().join("data.json").exists());
}

#[test]
fn currency_symbol_from_settings() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.json"),
        r#"{"currency_symbol": "€"}"#,
    )
    .unwrap();

    tracker(temp.path())
        .args(["budget", "set", "--month", "1", "--amount", "5"])
        .assert()
        .success()
        .stdout(format!("Budget set for {}-01: €5.00\n", year()));
}

#[test]
fn malformed_settings_fall_back_to_defaults() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.json"), "{ not json").unwrap();

    tracker(temp.path())
        .args(["budget", "set", "--month", "1", "--amount", "5"])
        .assert()
        .success()
        .stdout(format!("Budget set for {}-01: $5.00\n", year()));

    tracker(temp.path())
        .args(["--verbose", "budget", "show", "--month", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("ignoring settings file"));
}
