use assert_cmd::Command;
use predicates::prelude::*;

fn monco() -> Command {
    Command::cargo_bin("monco").unwrap()
}

#[test]
fn filter_prints_matching_lines() {
    monco()
        .args(["filter", "Alice | Bob & Charlie | Dan"])
        .write_stdin("Alice\nBob\nBob and Charlie\nDan\n")
        .assert()
        .success()
        .stdout("Alice\nBob and Charlie\nDan\n");
}

#[test]
fn filter_numbers_lines() {
    monco()
        .args(["filter", "--number", "!alice"])
        .write_stdin("Alice\nBob\n")
        .assert()
        .success()
        .stdout("1) Bob\n");
}

#[test]
fn filter_without_match_exits_one() {
    monco()
        .args(["filter", "zed"])
        .write_stdin("Alice\n")
        .assert()
        .code(1)
        .stdout("");
}

#[test]
fn filter_rejects_bad_query() {
    monco()
        .args(["filter", "(Alice"])
        .write_stdin("Alice\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Mismatched parentheses"));
}

#[test]
fn filter_explain_prints_postfix() {
    monco()
        .args(["filter", "--explain", "A | B & C"])
        .write_stdin("a\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("A B C & |"));
}

#[test]
fn filter_skips_over_invalid_utf8_lines() {
    monco()
        .args(["filter", "alice"])
        .write_stdin(b"Alice\n\xff\xfe bad\nalice again\n".to_vec())
        .assert()
        .success()
        .stdout(b"Alice\nalice again\n".to_vec());
}
