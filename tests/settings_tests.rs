use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

#[test]
fn test_custom_minimums() {
    let mut settings = NamedTempFile::new().unwrap();
    writeln!(
        settings,
        r#"{{ "minimum_deposit_amount": "1", "minimum_transfer_amount": "50" }}"#
    )
    .unwrap();

    let mut input = NamedTempFile::new().unwrap();
    writeln!(input, "kind,balance,ceiling,amount").unwrap();
    writeln!(input, "deposit,0,100,5").unwrap();
    writeln!(input, "transfer,100,100,40").unwrap();
    writeln!(input, "withdrawal,100,100,40").unwrap();

    let mut cmd = Command::new(cargo_bin!("txforms"));
    cmd.arg("--settings")
        .arg(settings.path())
        .arg("check")
        .arg(input.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1,deposit,5,accepted,"))
        .stdout(predicate::str::contains(
            "2,transfer,40,rejected,You can transfer at least Rs.50",
        ))
        .stdout(predicate::str::contains("3,withdrawal,40,accepted,"));
}

#[test]
fn test_invalid_settings_rejected() {
    let mut settings = NamedTempFile::new().unwrap();
    writeln!(settings, r#"{{ "minimum_deposit_amount": "-5" }}"#).unwrap();

    let mut cmd = Command::new(cargo_bin!("txforms"));
    cmd.arg("--settings")
        .arg(settings.path())
        .arg("daterange")
        .arg("2024-01-01 - 2024-01-31");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("must not be negative"));
}
