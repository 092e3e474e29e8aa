use assert_cmd::Command;
use predicates::prelude::{predicate, PredicateBooleanExt};

fn random_output(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("dungaf").unwrap();
    cmd.arg("random").arg("--logging-level").arg("off").args(args);
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_same_seed_same_framework() {
    let args = ["--seed", "7", "--max-args", "6", "--max-attacks", "10"];
    assert_eq!(random_output(&args), random_output(&args));
}

#[test]
fn test_exact_sizes() {
    let mut cmd = Command::cargo_bin("dungaf").unwrap();
    cmd.arg("random")
        .arg("--logging-level")
        .arg("off")
        .args(["--min-args", "3", "--max-args", "3", "--pool-size", "3"])
        .args(["--min-attacks", "0", "--max-attacks", "0"]);
    cmd.assert()
        .success()
        .stdout(predicate::eq("({a0, a1, a2}, {})\n"));
}

#[test]
fn test_with_semantics() {
    let mut cmd = Command::cargo_bin("dungaf").unwrap();
    cmd.arg("random")
        .arg("--logging-level")
        .arg("off")
        .args(["--min-args", "2", "--max-args", "2", "--pool-size", "2"])
        .args(["--min-attacks", "0", "--max-attacks", "0", "-s", "GR"]);
    cmd.assert()
        .success()
        .stdout(predicate::eq("({a0, a1}, {})\n{a0, a1}\n"));
}

#[test]
fn test_framework_line() {
    let mut cmd = Command::cargo_bin("dungaf").unwrap();
    cmd.arg("random")
        .arg("--logging-level")
        .arg("off")
        .args(["--seed", "3", "--min-attacks", "1"]);
    cmd.assert().success().stdout(
        predicate::str::starts_with("({a")
            .and(predicate::str::contains("}, {("))
            .and(predicate::str::ends_with(")})\n")),
    );
}

#[test]
fn test_unreachable_bounds() {
    let mut cmd = Command::cargo_bin("dungaf").unwrap();
    cmd.arg("random")
        .args(["--min-args", "5", "--pool-size", "3"]);
    cmd.assert().failure();
}
