use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Run phonebook with given args.
fn phonebook() -> Command {
    cargo_bin_cmd!("phonebook")
}

fn validate(dir: &assert_fs::TempDir, name: &str, number: &str) -> assert_cmd::assert::Assert {
    phonebook()
        .current_dir(dir.path())
        .args(["validate", name, number])
        .assert()
}

#[test]
fn reports_normalized_name_and_grammar() {
    let dir = assert_fs::TempDir::new().unwrap();

    validate(&dir, "Doe, John", "1(670)123-4567")
        .success()
        .stdout(predicate::str::contains("stored as: John Doe"))
        .stdout(predicate::str::contains("country1-parens"));
}

#[test]
fn accepts_every_documented_format() {
    let dir = assert_fs::TempDir::new().unwrap();

    for number in [
        "670-123-4567",
        "(670)123-4567",
        "1-670-123-4567",
        "1(670)123-4567",
        "670 123 4567",
        "670.123.4567",
        "+1 670 123 4567",
        "+1.670.123.4567",
        "123-4567",
        "12345",
        "011 701 111 1234",
        "12345.12345",
        "011 1 703 111 1234",
        "+1(703)111-2121",
        "+32 (21) 212-2324",
        "+4512 34 56 78",
        "4512 3456",
    ] {
        validate(&dir, "John Doe", number).success();
    }
}

#[test]
fn seven_digit_number_passes_without_grammar() {
    let dir = assert_fs::TempDir::new().unwrap();

    validate(&dir, "John Doe", "1234567")
        .success()
        .stdout(predicate::str::contains("no format enforced"));
}

#[test]
fn rejects_bad_extension() {
    let dir = assert_fs::TempDir::new().unwrap();

    validate(&dir, "John Doe", "1234")
        .failure()
        .stderr(predicate::str::contains("5-digit extension"));
}

#[test]
fn rejects_name_rules_in_order() {
    let dir = assert_fs::TempDir::new().unwrap();

    validate(&dir, "", "12345")
        .failure()
        .stderr(predicate::str::contains("Name is required"));
    validate(&dir, "Ron O Henry Jr", "12345")
        .failure()
        .stderr(predicate::str::contains("at most 3 are allowed"));
    validate(&dir, "Ron O''Henry", "12345")
        .failure()
        .stderr(predicate::str::contains("one apostrophe"));
    validate(&dir, "Ron O’Henry-Smith-Barnes", "12345")
        .failure()
        .stderr(predicate::str::contains("one hyphen"));
    validate(&dir, "<Script>", "12345")
        .failure()
        .stderr(predicate::str::contains("does not look like a name"));
}

#[test]
fn honours_disabled_shape_check() {
    let dir = assert_fs::TempDir::new().unwrap();

    phonebook()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
    dir.child(".phonebook/config.toml")
        .write_str("[phonebook]\nversion = \"0.1.0\"\n\n[validation]\nenforce_name_shape = false\n")
        .unwrap();

    validate(&dir, "<Script>", "12345").success();
}

#[test]
fn validate_does_not_touch_storage() {
    let dir = assert_fs::TempDir::new().unwrap();

    phonebook()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    validate(&dir, "John Doe", "670-123-4567").success();

    dir.child(".phonebook/phonebook.csv").assert("");
    dir.child(".phonebook/audit.log")
        .assert(predicate::path::missing());
}
