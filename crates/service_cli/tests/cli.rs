//! End-to-end tests of the `statlib` binary.

use std::process::{Command, Output};

fn statlib(args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_statlib"));
    for key in [
        "STATLIB_CONFIG",
        "STATLIB_LOG_LEVEL",
        "STATLIB_FORMAT",
        "STATLIB_SEED",
        "STATLIB_TOLERANCE",
        "STATLIB_MAX_ITERATIONS",
        "STATLIB_BATCH_SIZE",
        "STATLIB_PARALLEL_THRESHOLD",
        "RUST_LOG",
    ] {
        command.env_remove(key);
    }
    command.args(args).output().expect("failed to launch statlib")
}

fn json(output: &Output) -> serde_json::Value {
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn test_quantile_json() {
    let output = statlib(&["--format", "json", "quantile", "--dist", "f", "-a", "5", "-b", "20", "0.95"]);
    let report = json(&output);

    assert_eq!(report["function"], "quantile");
    let value = report["values"][0].as_f64().unwrap();
    assert!((value - 2.710_890).abs() / 2.710_890 < 1e-5, "value = {}", value);
}

#[test]
fn test_cdf_table() {
    let output = statlib(&["cdf", "--dist", "gamma", "-a", "1", "-b", "1", "0", "1"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Gamma(shape=1, scale=1) cdf"));
    assert_eq!(stdout.lines().count(), 4);
}

#[test]
fn test_sample_is_reproducible() {
    let args = [
        "--format", "json", "sample", "--dist", "gamma", "-a", "3", "-b", "2", "--count", "20",
        "--seed", "42",
    ];
    let first = json(&statlib(&args));
    let second = json(&statlib(&args));

    assert_eq!(first["values"], second["values"]);
    assert_eq!(first["seed"], 42);
    assert_eq!(first["values"][0].as_array().unwrap().len(), 20);
}

#[test]
fn test_sample_seed_from_environment() {
    let mut command = Command::new(env!("CARGO_BIN_EXE_statlib"));
    command.env_remove("STATLIB_CONFIG").env("STATLIB_SEED", "7");
    let output = command
        .args(["--format", "json", "sample", "--dist", "f", "-a", "5", "-b", "20", "--rows", "2", "--cols", "3"])
        .output()
        .unwrap();
    let report = json(&output);

    assert_eq!(report["seed"], 7);
    assert_eq!(report["rows"], 2);
    assert_eq!(report["values"][1].as_array().unwrap().len(), 3);
}

#[test]
fn test_invalid_probability_fails() {
    let output = statlib(&["quantile", "--dist", "gamma", "-a", "2", "-b", "1", "1.5"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("InvalidProbability"));
}

#[test]
fn test_invalid_parameter_fails() {
    let output = statlib(&["cdf", "--dist", "f", "-a", "0", "-b", "1", "1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("df1"));
}

#[test]
fn test_invalid_format_fails() {
    let output = statlib(&["--format", "xml", "check"]);
    assert!(!output.status.success());
}

#[test]
fn test_check_passes() {
    let output = statlib(&["check"]);
    assert!(output.status.success(), "stdout: {}", String::from_utf8_lossy(&output.stdout));
    assert!(String::from_utf8_lossy(&output.stdout).contains("11 of 11 checks passed"));
}
