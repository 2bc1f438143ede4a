use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

/// A stockz command isolated from any user or project configuration.
fn stockz(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stockz").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env_remove("STOCKZ_LOG")
        .arg("--no-color");
    cmd
}

fn run_script(dir: &Path, script: &str, extra: &[&str]) -> assert_cmd::assert::Assert {
    let path = dir.join("session.txt");
    std::fs::write(&path, script).unwrap();
    stockz(dir)
        .arg("--debounce-ms")
        .arg("0")
        .args(extra)
        .arg("--script")
        .arg(&path)
        .assert()
}

#[test]
fn test_add_then_list() {
    let dir = tempfile::tempdir().unwrap();
    run_script(dir.path(), "add Arroz 5\nadd Feijão Preto 2\nlist\n", &[])
        .success()
        .stdout(predicate::str::contains("Added Arroz (5)"))
        .stdout(predicate::str::contains("Added Feijão Preto (2)"))
        .stdout(predicate::str::contains("Product"))
        .stdout(predicate::str::contains("1.  Arroz"))
        .stdout(predicate::str::contains("2.  Feijão Preto"));
}

#[test]
fn test_readding_asks_before_merging() {
    let dir = tempfile::tempdir().unwrap();
    run_script(dir.path(), "add Café 2\nadd CAFE 3\ny\nsummary\n", &[])
        .success()
        .stdout(predicate::str::contains("\"Café\" is already in stock"))
        .stdout(predicate::str::contains("Added 3 to Café (now 5)"))
        .stdout(predicate::str::contains("Products: 1"))
        .stdout(predicate::str::contains("Total quantity: 5"));
}

#[test]
fn test_declined_merge_leaves_stock_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    run_script(dir.path(), "add Café 2\nadd cafe 3\nn\nsummary\n", &[])
        .success()
        .stdout(predicate::str::contains("Café left unchanged"))
        .stdout(predicate::str::contains("Total quantity: 2"));
}

#[test]
fn test_invalid_add_alerts() {
    let dir = tempfile::tempdir().unwrap();
    run_script(dir.path(), "add 0\nsummary\n", &[])
        .success()
        .stdout(predicate::str::contains("! Product name is required!"))
        .stdout(predicate::str::contains(
            "! Quantity must be a number greater than or equal to 1!",
        ))
        .stdout(predicate::str::contains("Products: 0"));
}

#[test]
fn test_min_quantity_flag() {
    let dir = tempfile::tempdir().unwrap();
    run_script(dir.path(), "add Sal 0.5\n", &["--min-quantity", "0.5"])
        .success()
        .stdout(predicate::str::contains("Added Sal (0.5)"));
}

#[test]
fn test_negative_minimum_flag_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    run_script(dir.path(), "add Arroz -3\nsummary\n", &["--min-quantity=-5"])
        .success()
        .stdout(predicate::str::contains(
            "! Quantity must be a number greater than or equal to 1!",
        ))
        .stdout(predicate::str::contains("Products: 0"));
}

#[test]
fn test_edit_prompts_for_quantity() {
    let dir = tempfile::tempdir().unwrap();
    run_script(dir.path(), "add Arroz 5\nedit 1\n12\nsummary\n", &[])
        .success()
        .stdout(predicate::str::contains("Edit quantity of \"Arroz\": [5]"))
        .stdout(predicate::str::contains("Updated Arroz: 12"))
        .stdout(predicate::str::contains("Total quantity: 12"));
}

#[test]
fn test_edit_rejects_bad_quantity() {
    let dir = tempfile::tempdir().unwrap();
    run_script(dir.path(), "add Arroz 5\nedit arroz\nmuito\nsummary\n", &[])
        .success()
        .stdout(predicate::str::contains("! Invalid quantity!"))
        .stdout(predicate::str::contains("Total quantity: 5"));
}

#[test]
fn test_delete_after_confirmation() {
    let dir = tempfile::tempdir().unwrap();
    run_script(
        dir.path(),
        "add Arroz 5\nadd Café 1\ndelete arroz\ny\nlist\n",
        &[],
    )
    .success()
    .stdout(predicate::str::contains(
        "Are you sure you want to delete this product?",
    ))
    .stdout(predicate::str::contains("Deleted Arroz"))
    .stdout(predicate::str::contains("1.  Café"));
}

#[test]
fn test_yes_flag_answers_confirmations() {
    let dir = tempfile::tempdir().unwrap();
    run_script(dir.path(), "add Arroz 5\ndelete 1\nsummary\n", &["--yes"])
        .success()
        .stdout(predicate::str::contains("Deleted Arroz"))
        .stdout(predicate::str::contains("Products: 0"));
}

#[test]
fn test_search_filters_table() {
    let dir = tempfile::tempdir().unwrap();
    run_script(
        dir.path(),
        "add Arroz 5\nadd Feijão 2\nsearch FEIJAO\nlist\n",
        &[],
    )
    .success()
    .stdout(predicate::str::contains("1 matching"))
    .stdout(predicate::str::contains("1 hidden by search"));
}

#[test]
fn test_unknown_row_and_command_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    run_script(dir.path(), "edit 3\nfrobnicate\nsummary\n", &[])
        .success()
        .stdout(predicate::str::contains("Row not found"))
        .stdout(predicate::str::contains("Unknown command: frobnicate"))
        .stdout(predicate::str::contains("Products: 0"));
}

#[test]
fn test_closed_section_hides_list() {
    let dir = tempfile::tempdir().unwrap();
    run_script(dir.path(), "add Arroz 5\nstock\nlist\n", &[])
        .success()
        .stdout(predicate::str::contains("Stock section closed"))
        .stdout(predicate::str::contains("The stock section is closed"));
}

#[test]
fn test_verify_and_html() {
    let dir = tempfile::tempdir().unwrap();
    run_script(dir.path(), "add Arroz 5\nverify\nhtml\n", &[])
        .success()
        .stdout(predicate::str::contains("Stock is consistent (1 entries)"))
        .stdout(predicate::str::contains("<tr"))
        .stdout(predicate::str::contains("Arroz"));
}

#[test]
fn test_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let assert = run_script(dir.path(), "add Café 2\nlist\n", &["--output", "json"]).success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["messages"][0]["level"], "success");
    assert_eq!(lines[1]["rows"][0]["key"], "cafe");
    assert_eq!(lines[1]["rows"][0]["quantity"], 2.0);
}

#[test]
fn test_reads_stdin_without_script() {
    let dir = tempfile::tempdir().unwrap();
    stockz(dir.path())
        .write_stdin("add Arroz 5\nquit\nadd Café 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Arroz (5)"))
        .stdout(predicate::str::contains("Café").not());
}

#[test]
fn test_config_subcommand() {
    let dir = tempfile::tempdir().unwrap();
    stockz(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("min_quantity = 1.0"))
        .stdout(predicate::str::contains("debounce_delay_ms = 300"));
}

#[test]
fn test_config_reads_project_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("stockz.toml"), "min_quantity = 2.0\n").unwrap();
    stockz(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("min_quantity = 2.0"));
}

#[test]
fn test_config_rejects_negative_minimum() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("stockz.toml"), "min_quantity = -5.0\n").unwrap();
    stockz(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("min_quantity = 1.0"));
}

#[test]
fn test_missing_script_fails() {
    let dir = tempfile::tempdir().unwrap();
    stockz(dir.path())
        .arg("--script")
        .arg(dir.path().join("nope.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("nope.txt"));
}
