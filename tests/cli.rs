use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn libris_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("libris").unwrap();
    cmd.env("LIBRIS_CONFIG_DIR", config_dir.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn write_config(dir: &TempDir, json: &str) {
    fs::write(dir.path().join("config.json"), json).unwrap();
}

#[test]
fn test_list_shows_sample_catalog() {
    let temp = TempDir::new().unwrap();
    libris_cmd(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("The Great Gatsby"))
        .stdout(predicate::str::contains("To Kill a Mockingbird"))
        .stdout(predicate::str::contains("1984"));
}

#[test]
fn test_no_command_lists() {
    let temp = TempDir::new().unwrap();
    libris_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("9780743273565"));
}

#[test]
fn test_borrow_available_book() {
    let temp = TempDir::new().unwrap();
    libris_cmd(&temp)
        .args(["borrow", "654321", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Successfully borrowed \"The Great Gatsby\". Due date:",
        ))
        .stdout(predicate::str::contains("2/3"));
}

#[test]
fn test_borrow_unavailable_book_fails() {
    let temp = TempDir::new().unwrap();
    libris_cmd(&temp)
        .args(["borrow", "654321", "3"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not available"));
}

#[test]
fn test_borrow_unknown_book_fails() {
    let temp = TempDir::new().unwrap();
    libris_cmd(&temp)
        .args(["borrow", "654321", "999999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Book not found: 999999"));
}

#[test]
fn test_borrow_with_bad_patron_id_fails() {
    let temp = TempDir::new().unwrap();
    for patron in ["abcdef", "12345", "1234567"] {
        libris_cmd(&temp)
            .args(["borrow", patron, "1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("6 digits"));
    }
}

#[test]
fn test_add_book() {
    let temp = TempDir::new().unwrap();
    libris_cmd(&temp)
        .args(["add", "Dune", "Frank Herbert", "9780441013593", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Book \"Dune\" has been successfully added to the catalog.",
        ))
        .stdout(predicate::str::contains("3/3"));
}

#[test]
fn test_add_book_validation_errors() {
    let temp = TempDir::new().unwrap();
    let long_title = "A".repeat(201);

    libris_cmd(&temp)
        .args(["add", long_title.as_str(), "Author", "1234567890123", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("200 characters"));

    libris_cmd(&temp)
        .args(["add", "Title", "Author", "123456789", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("13 digits"));

    libris_cmd(&temp)
        .args(["add", "Title", "Author", "1234567890123", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive"));

    libris_cmd(&temp)
        .args(["add", "Copy", "Someone", "9780743273565", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_stubs_report_not_implemented() {
    let temp = TempDir::new().unwrap();

    libris_cmd(&temp)
        .args(["return", "123456", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not implemented"));

    libris_cmd(&temp)
        .args(["fee", "123456", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Late fee: $0.00"))
        .stdout(predicate::str::contains("not implemented"));

    libris_cmd(&temp)
        .args(["search", "Gatsby", "--field", "title"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Great Gatsby").not())
        .stdout(predicate::str::contains("not implemented"));

    libris_cmd(&temp)
        .args(["status", "123456"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not implemented"));
}

#[test]
fn test_config_can_disable_seeding() {
    let temp = TempDir::new().unwrap();
    write_config(&temp, r#"{ "seed_sample_catalog": false }"#);

    libris_cmd(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("The catalog is empty."));
}

#[test]
fn test_config_borrow_limit() {
    let temp = TempDir::new().unwrap();
    write_config(&temp, r#"{ "max_loans_per_patron": 1 }"#);

    // The sample patron already holds "1984"
    libris_cmd(&temp)
        .args(["borrow", "123456", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("borrowing limit of 1"));
}

#[test]
fn test_config_dir_flag_wins_over_env() {
    let env_dir = TempDir::new().unwrap();
    let flag_dir = TempDir::new().unwrap();
    write_config(&env_dir, r#"{ "seed_sample_catalog": false }"#);

    libris_cmd(&env_dir)
        .arg("--config-dir")
        .arg(flag_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("The Great Gatsby"));
}

#[test]
fn test_malformed_config_fails() {
    let temp = TempDir::new().unwrap();
    write_config(&temp, "{ not json");

    libris_cmd(&temp)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));
}

#[test]
fn test_borrow_negative_book_id_is_not_found() {
    let temp = TempDir::new().unwrap();
    libris_cmd(&temp)
        .args(["borrow", "123456", "-1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Book not found: -1"));
}

#[test]
fn test_out_of_range_loan_period_is_a_config_error() {
    let temp = TempDir::new().unwrap();
    write_config(&temp, r#"{ "loan_period_days": 4294967295 }"#);

    libris_cmd(&temp)
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Config error"))
        .stderr(predicate::str::contains("loan_period_days"));
}

#[test]
fn test_zero_loan_limit_still_seeds() {
    let temp = TempDir::new().unwrap();
    write_config(&temp, r#"{ "max_loans_per_patron": 0 }"#);

    libris_cmd(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("The Great Gatsby"))
        .stdout(predicate::str::contains("0/1"));

    libris_cmd(&temp)
        .args(["borrow", "654321", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("borrowing limit of 0"));
}
