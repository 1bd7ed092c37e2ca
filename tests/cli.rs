use predicates::{prelude::*, str::is_match};

#[test]
fn prints_single_build_number_line() {
    assert_cmd::cargo::cargo_bin_cmd!("buildnum")
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(is_match(r"^[0-9]+[0-9]{2}\n$").unwrap())
        .stderr(predicate::str::is_empty());
}

#[test]
fn logging_stays_off_stdout() {
    assert_cmd::cargo::cargo_bin_cmd!("buildnum")
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout(is_match(r"^[0-9]+[0-9]{2}\n$").unwrap())
        .stderr(predicate::str::contains("build number"));
}
