//! Exécutable : codes de sortie et séparation stdout/stderr.
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dephasage_thermique"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn binary")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn machine_format_with_comma_decimals() {
    let out = run(&["0,04", "30", "0,021", "-e", "0.2", "-f"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "1 63.49 18.27 1.10\n");
    assert!(stderr(&out).is_empty());
}

#[test]
fn default_report_is_french() {
    let out = run(&["0.04", "30", "0.021"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.starts_with("Données entrées\n"));
    assert!(text.contains("\t           Épaisseur:  1.00 m\n"));
    assert!(text.contains("Résultats"));
}

#[test]
fn speed_only_prints_one_unlabelled_number() {
    let out = run(&["0.04", "30", "0.021", "-v", "-d", "-f"]);
    assert!(out.status.success());
    let text = stdout(&out);
    let speed: f64 = text.trim().parse().expect("bare number");
    assert!((speed - 18.268_282_862).abs() < 1e-6);
}

#[test]
fn phase_shift_only_long_flag() {
    let out = run(&["0.04", "30", "0.021", "--epaisseur", "0.2", "--dephasage-seulement"]);
    assert!(out.status.success());
    let shift: f64 = stdout(&out).trim().parse().expect("bare number");
    assert!((shift - 1.095_341).abs() < 1e-6);
}

#[test]
fn non_numeric_input_fails_without_output() {
    let out = run(&["0.04", "trente", "0.021"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).contains("masse volumique"));
}

#[test]
fn zero_capacity_is_reported_as_domain_error() {
    let out = run(&["0.04", "30", "0"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).contains("division par zéro"));
}

#[test]
fn negative_conductivity_is_reported_not_nan() {
    let out = run(&["-0.04", "30", "0.021", "-v"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());
    assert!(!stderr(&out).contains("NaN"));
    assert!(stderr(&out).contains("racine carrée"));
}

#[test]
fn english_errors_are_fully_translated() {
    let out = run(&["0.04", "thirty", "0.021", "--langue", "en"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        stderr(&out),
        "Error: numeric conversion: density: \"thirty\" is not a valid decimal number\n"
    );
}

#[test]
fn overflow_is_reported_instead_of_printing_inf() {
    let out = run(&["1e300", "1e-300", "1e-10", "-v"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).contains("dépassement de capacité"));
}

#[test]
fn missing_argument_is_a_usage_error() {
    let out = run(&["0.04", "30"]);
    assert!(!out.status.success());
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).contains("Usage"));
}
