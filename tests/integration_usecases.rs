use std::fs;

use split_ledger::{app::replay, domain::balance::BalancePolicy};

fn run_case(input_csv: &str, policy: BalancePolicy) -> String {
    let mut out = Vec::<u8>::new();
    replay(input_csv.as_bytes(), &mut out, policy).expect("replay failed");
    String::from_utf8(out).expect("output was not valid UTF-8")
}

fn normalize_csv(s: &str) -> String {
    // Normalize line endings + trim trailing whitespace lines.
    s.replace("\r\n", "\n")
        .lines()
        .map(|l| l.trim_end())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn assert_case(policy: BalancePolicy, expected_path: &str) {
    let input = fs::read_to_string("tests/fixtures/trip_input.csv").unwrap();
    let expected = fs::read_to_string(expected_path).unwrap();

    let actual = run_case(&input, policy);

    assert_eq!(normalize_csv(&actual), normalize_csv(&expected));
}

#[test]
fn trip_split_and_paid() {
    assert_case(
        BalancePolicy::SplitAndPaid,
        "tests/fixtures/trip_split_and_paid.csv",
    );
}

#[test]
fn trip_accumulated() {
    assert_case(
        BalancePolicy::Accumulated,
        "tests/fixtures/trip_accumulated.csv",
    );
}

#[test]
fn trip_mean_deviation() {
    assert_case(
        BalancePolicy::MeanDeviation,
        "tests/fixtures/trip_mean_deviation.csv",
    );
}

#[test]
fn empty_input_writes_header_only() {
    let actual = run_case("type,name,amount,participants,payer\n", BalancePolicy::Accumulated);
    assert_eq!(normalize_csv(&actual), "member,balance");
}

#[test]
fn malformed_row_aborts_replay() {
    let input = "type,name,amount,participants,payer\nmember,alice,,,\nrefund,,5,,\n";
    let mut out = Vec::<u8>::new();

    let err = replay(input.as_bytes(), &mut out, BalancePolicy::SplitAndPaid).unwrap_err();

    assert_eq!(
        err.to_string(),
        "parse error: unknown action type: refund at record 2"
    );
    assert!(out.is_empty());
}
