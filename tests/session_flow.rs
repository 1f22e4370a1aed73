mod common;

use std::fs;

use wallet_core::storage::StorageBackend;

#[test]
fn register_add_expense_and_exit_saves() {
    let base = common::temp_base();
    let out = common::run_script(&base, "1\nalice\npw\n3\nfood\n12.5\n7\n16\n");

    assert!(out.contains("No data file found, starting with an empty system."));
    assert!(out.contains("User registered and logged in successfully!"));
    assert!(out.contains("Created new expense category `food`."));
    assert!(out.contains("Transaction added successfully!"));
    assert!(out.contains("Total Expenses: 12.50"));
    assert!(out.contains("Data saved successfully."));

    let store = common::storage_in(&base).load().unwrap().unwrap();
    assert_eq!(store.user("alice").unwrap().wallet().balance(), -12.5);
}

#[test]
fn commands_require_login() {
    let base = common::temp_base();
    let out = common::run_script(&base, "6\n16\n");
    assert!(out.contains("You need to log in first."));
}

#[test]
fn invalid_input_is_reported_and_reprompted() {
    let base = common::temp_base();
    let out = common::run_script(&base, "99\n1\nbob\npw\n4\nsalary\nabc\n-5\n100\n6\n16\n");

    assert!(out.contains("Invalid command. Try again."));
    assert!(out.contains("Invalid amount. Please enter a valid number."));
    assert!(out.contains("Amount must be positive. Try again."));
    assert!(out.contains("Total Income: 100.00"));
}

#[test]
fn exceeding_budget_emits_notifications() {
    let base = common::temp_base();
    let out = common::run_script(&base, "1\ncarol\npw\n5\nfun\n10\n3\nfun\n15\n16\n");

    assert!(out.contains("Category not found. New expense category created and budget set successfully!"));
    assert!(out.contains("Expense exceeds budget for category: fun"));
    assert!(out.contains("Warning: Your total balance is negative."));
}

#[test]
fn data_survives_between_sessions() {
    let base = common::temp_base();
    common::run_script(&base, "1\ndave\npw\n4\nsalary\n40\n16\n");
    let out = common::run_script(&base, "2\ndave\npw\n6\n2\ndave\nwrong\n16\n");

    assert!(out.contains("Data loaded successfully."));
    assert!(out.contains("Logged in as dave"));
    assert!(out.contains("Total Income: 40.00"));
    assert!(out.contains("Invalid username or password."));
}

#[test]
fn redirected_reports_append_to_file() {
    let base = common::temp_base();
    let report = base.join("report.txt");
    let script = format!(
        "1\nerin\npw\n4\nsalary\n10\n14\n{path}\n6\n15\n14\n{path}\n6\n15\n16\n",
        path = report.display()
    );
    let out = common::run_script(&base, &script);

    assert!(!out.contains("Total Income: 10.00"));
    assert_eq!(out.matches("Output redirected back to console.").count(), 2);
    let written = fs::read_to_string(&report).unwrap();
    assert_eq!(written.matches("Total Income: 10.00").count(), 2);
}

#[test]
fn category_lists_report_each_name() {
    let base = common::temp_base();
    let out = common::run_script(
        &base,
        "1\nfrank\npw\n3\nfood\n5\n13\nfood; ghost;\n8\nfood\n16\n",
    );

    assert!(out.contains("Expenses for category 'food': Category: food, Spent: 5.00"));
    assert!(out.contains("Error for category 'ghost': Category not found: ghost"));
    assert!(out.contains("Category food is not an income category."));
}

#[test]
fn end_of_input_still_saves() {
    let base = common::temp_base();
    let out = common::run_script(&base, "1\ngina\npw\n");

    assert!(out.contains("Input closed. Exiting..."));
    assert!(base.join("wallet_data.json").exists());
}

#[test]
fn budget_on_income_category_keeps_original_message() {
    let base = common::temp_base();
    let out = common::run_script(&base, "1\nhal\npw\n4\nsalary\n5\n5\nsalary\n10\n16\n");

    assert!(out.contains("Error: You can't set budget with income category"));
}

#[cfg(target_os = "linux")]
#[test]
fn failing_report_file_falls_back_to_console() {
    let base = common::temp_base();
    let out = common::run_script(
        &base,
        "1\nzed\npw\n4\nsalary\n10\n14\n/dev/full\n6\n6\n16\n",
    );

    assert!(out.contains("Output redirected to file: /dev/full"));
    assert!(out.contains("Error writing report:"));
    assert!(out.contains("Total Income: 10.00"));
    assert!(out.contains("Data saved successfully."));

    let store = common::storage_in(&base).load().unwrap().unwrap();
    assert_eq!(store.user("zed").unwrap().wallet().balance(), 10.0);
}

#[test]
fn corrupt_data_file_starts_empty_session() {
    let base = common::temp_base();
    fs::write(base.join("wallet_data.json"), "{ broken").unwrap();

    let out = common::run_script(&base, "1\nivy\npw\n16\n");

    assert!(out.contains("Error loading data:"));
    assert!(out.contains("User registered and logged in successfully!"));
    assert!(out.contains("Data saved successfully."));
}

#[test]
fn failed_save_is_reported_without_aborting() {
    let base = common::temp_base();
    fs::create_dir(base.join("wallet_data.json")).unwrap();

    let out = common::run_script(&base, "1\njay\npw\n16\n");

    assert!(out.contains("Error loading data:"));
    assert!(out.contains("Error saving data:"));
    assert!(base.join("wallet_data.json").is_dir());
}
