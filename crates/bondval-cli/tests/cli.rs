//! Command-line integration tests.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn bondval() -> Command {
    let mut cmd = Command::cargo_bin("bondval").unwrap();
    cmd.env_remove("BONDVAL_TOLERANCE")
        .env_remove("BONDVAL_MAX_ITERATIONS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn reprice_default_table() {
    bondval()
        .arg("reprice")
        .assert()
        .success()
        .stdout(predicate::str::contains("1189.426"))
        .stdout(predicate::str::contains("1138.332768"))
        .stdout(predicate::str::contains("1089.825"))
        .stdout(predicate::str::contains("22.71406"));
}

#[test]
fn reprice_json_keeps_shock_order() {
    let output = bondval()
        .args(["reprice", "--format", "json", "--shocks=0.01,-0.01,0"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let shocks: Vec<f64> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["shock"].as_f64().unwrap())
        .collect();
    assert_eq!(shocks, vec![0.01, -0.01, 0.0]);
}

#[test]
fn reprice_csv_has_header() {
    bondval()
        .args(["reprice", "--format", "csv", "--shocks", "0"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "shock,yield_rate,price,macaulay_duration,modified_duration,convexity",
        ));
}

#[test]
fn price_annual_bond() {
    bondval()
        .args([
            "price",
            "--face",
            "1000",
            "--coupon",
            "0.08",
            "--maturity",
            "4",
            "--frequency",
            "1",
            "--yield",
            "0.05",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Modified Duration"))
        .stdout(predicate::str::contains("3.428355"));
}

#[test]
fn price_minimal() {
    bondval()
        .args(["price", "--yield", "0.03", "--format", "minimal"])
        .assert()
        .success()
        .stdout("1138.332768\n");
}

#[test]
fn price_json_with_shift() {
    let output = bondval()
        .args(["price", "--yield", "0.03", "--shift", "0.01", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["terms"]["coupon_frequency"], 2);
    assert!((report["price"].as_f64().unwrap() - 1138.3328).abs() < 1e-3);
    let repriced = report["shift"]["repriced"].as_f64().unwrap();
    let estimated = report["shift"]["estimated_price"].as_f64().unwrap();
    assert!((repriced - 1089.82585).abs() < 1e-4);
    assert!((estimated - repriced).abs() < 1.0);
}

#[test]
fn ytm_premium_bond() {
    bondval()
        .args([
            "ytm",
            "--face",
            "950",
            "--coupon",
            "0.05",
            "--maturity",
            "5",
            "--frequency",
            "1",
            "--price",
            "1100",
            "--format",
            "minimal",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0.01681"));
}

#[test]
fn ytm_bisection_from_env_tolerance() {
    bondval()
        .env("BONDVAL_TOLERANCE", "1e-9")
        .args(["ytm", "--price", "1138.3327682778", "--method", "bisection"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bisection"))
        .stdout(predicate::str::contains("3.0000%"));
}

#[test]
fn ytm_unreachable_price_fails() {
    bondval()
        .args(["ytm", "--price", "5000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("did not converge"));
}

#[test]
fn ytm_iteration_budget_from_env() {
    bondval()
        .env("BONDVAL_MAX_ITERATIONS", "2")
        .env("BONDVAL_TOLERANCE", "1e-14")
        .args(["ytm", "--price", "1100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("after 2 iterations"));
}

#[test]
fn zero_frequency_is_rejected() {
    bondval()
        .args(["price", "--frequency", "0", "--yield", "0.03"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn cashflows_from_terms_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"face_value": 100.0, "coupon_rate": 0.0, "maturity": 2.0, "coupon_frequency": 1}}"#
    )
    .unwrap();

    bondval()
        .args(["cashflows", "--format", "csv", "--yield", "0.05", "--terms"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("period,time,amount,kind,present_value"))
        .stdout(predicate::str::contains("2,2.0,100.0"))
        .stdout(predicate::str::contains("90.70294784"));
}

#[test]
fn terms_file_conflicts_with_flags() {
    bondval()
        .args(["cashflows", "--terms", "bond.json", "--face", "100"])
        .assert()
        .failure();
}

#[test]
fn malformed_terms_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    bondval()
        .args(["price", "--yield", "0.03", "--terms"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid terms file"));
}
