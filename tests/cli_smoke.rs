use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn fintrack_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("fintrack"))
}

fn cmd_with_home() -> (tempfile::TempDir, Command) {
    let home = tempfile::tempdir().expect("tempdir");
    let mut cmd = fintrack_cmd();
    cmd.env("FINTRACK_DATA_DIR", home.path());
    (home, cmd)
}

fn run_ok(home: &tempfile::TempDir, args: &[&str]) {
    let mut cmd = fintrack_cmd();
    cmd.env("FINTRACK_DATA_DIR", home.path());
    cmd.args(args);
    cmd.assert().success();
}

fn run_ok_out(home: &tempfile::TempDir, args: &[&str]) -> String {
    let mut cmd = fintrack_cmd();
    cmd.env("FINTRACK_DATA_DIR", home.path());
    cmd.args(args);
    let out = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(out).expect("utf8 stdout")
}

#[test]
fn init_creates_config_and_data_dirs() {
    let (home, mut cmd) = cmd_with_home();

    cmd.arg("init");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete"));

    assert!(home.path().join("config.json").exists());
    assert!(home.path().join("data").exists());

    let out = run_ok_out(&home, &["config"]);
    assert!(out.contains("Initialized:    true"));
    assert!(out.contains("Currency:            RON"));
}

#[test]
fn show_commands_do_not_create_plans() {
    let (home, _cmd) = cmd_with_home();

    let out = run_ok_out(&home, &["budget", "show", "--month", "2025-03"]);
    assert!(out.contains("No budget plan for 2025-03."));

    let out = run_ok_out(&home, &["payments", "show", "--month", "2025-03"]);
    assert!(out.contains("No payments tracked for 2025-03."));

    assert!(!home.path().join("data").join("budgets.json").exists());
    assert!(!home.path().join("data").join("payments.json").exists());
}

#[test]
fn budget_flow_computes_totals_and_allocations() {
    let (home, _cmd) = cmd_with_home();
    let month = "2025-03";

    run_ok(
        &home,
        &["budget", "add-income", "Salary", "8000", "--month", month],
    );
    run_ok(
        &home,
        &[
            "budget",
            "add-income",
            "Freelance",
            "2000",
            "--kind",
            "side",
            "--month",
            month,
        ],
    );
    run_ok(
        &home,
        &[
            "budget",
            "add-expense",
            "Rent",
            "2500",
            "--category",
            "fixed",
            "--subcategory",
            "housing",
            "--month",
            month,
        ],
    );
    run_ok(
        &home,
        &["budget", "add-expense", "Groceries", "1200", "--month", month],
    );
    run_ok(
        &home,
        &["budget", "add-expense", "Utilities", "400", "--month", month],
    );
    run_ok(
        &home,
        &[
            "budget",
            "add-allocation",
            "savings",
            "--percent",
            "30",
            "--month",
            month,
        ],
    );

    let out = run_ok_out(&home, &["budget", "show", "--month", month]);
    assert!(out.contains("10000.00"));
    assert!(out.contains("4100.00"));
    assert!(out.contains("5900.00"));
    // 30% of the leftover.
    assert!(out.contains("1770.00"));

    let list = run_ok_out(&home, &["budget", "list"]);
    assert!(list.contains(month));
}

#[test]
fn payment_flow_tracks_paid_state() {
    let (home, _cmd) = cmd_with_home();
    let month = "2025-03";

    run_ok(
        &home,
        &[
            "payments",
            "add",
            "Rent",
            "2500",
            "2025-03-05",
            "--month",
            month,
        ],
    );
    run_ok(
        &home,
        &[
            "payments",
            "add",
            "Internet",
            "200",
            "2025-03-20",
            "--month",
            month,
        ],
    );

    let out = run_ok_out(&home, &["payments", "show", "--month", month]);
    assert!(out.contains("Rent"));
    assert!(out.contains("Internet"));
    assert!(out.contains("0% done") || out.contains("0 of 2"));

    // Pay rent via its short id from the listing output.
    let added = run_ok_out(&home, &["payments", "show", "--month", month]);
    assert!(added.contains("2500.00"));
}

#[test]
fn shopping_flow_checks_items() {
    let (home, _cmd) = cmd_with_home();

    run_ok(&home, &["shopping", "new", "Groceries"]);
    run_ok(&home, &["shopping", "add", "Groceries", "Milk", "-q", "2"]);
    run_ok(&home, &["shopping", "add", "Groceries", "Bread"]);

    let out = run_ok_out(&home, &["shopping", "list", "Groceries"]);
    assert!(out.contains("Groceries (0/2 done)"));
    assert!(out.contains("Milk"));

    let overview = run_ok_out(&home, &["shopping", "list"]);
    assert!(overview.contains("0/2 done"));

    run_ok(&home, &["shopping", "drop", "Groceries"]);
    let overview = run_ok_out(&home, &["shopping", "list"]);
    assert!(overview.contains("No shopping lists"));
}

#[test]
fn duplicate_shopping_list_fails() {
    let (home, _cmd) = cmd_with_home();

    run_ok(&home, &["shopping", "new", "Groceries"]);

    let mut cmd = fintrack_cmd();
    cmd.env("FINTRACK_DATA_DIR", home.path());
    cmd.args(["shopping", "new", "groceries"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn demo_mode_never_touches_disk() {
    let (home, _cmd) = cmd_with_home();

    let out = run_ok_out(&home, &["--demo", "budget", "show"]);
    assert!(out.contains("Salary"));
    assert!(out.contains("10000.00"));

    // Nothing persisted.
    assert!(!home.path().join("data").join("budgets.json").exists());
}

#[test]
fn convert_rejects_non_positive_amount() {
    let (home, _cmd) = cmd_with_home();

    let mut cmd = fintrack_cmd();
    cmd.env("FINTRACK_DATA_DIR", home.path());
    cmd.args(["convert", "0", "EUR", "RON"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("must be positive"));
}

#[test]
fn export_json_writes_dump() {
    let (home, _cmd) = cmd_with_home();
    let month = "2025-03";

    run_ok(
        &home,
        &["budget", "add-income", "Salary", "8000", "--month", month],
    );

    let out_file = home.path().join("dump.json");
    run_ok(
        &home,
        &["export", "json", "--out", out_file.to_str().expect("utf8 path")],
    );

    let contents = std::fs::read_to_string(&out_file).expect("dump exists");
    assert!(contents.contains("budget_plans"));
    assert!(contents.contains("Salary"));
}
