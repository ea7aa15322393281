//! End-to-end checks of the `ank` binary.

use std::process::{Command, Output};

fn ank(args: &[&str]) -> Output {
    // Run from an empty directory so a stray ank.toml cannot leak in.
    let dir = tempfile::tempdir().unwrap();
    Command::new(env!("CARGO_BIN_EXE_ank"))
        .current_dir(dir.path())
        .args(args)
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

#[test]
fn reduce_policies() {
    assert_eq!(stdout(&ank(&["reduce", "29"])).trim(), "2");
    assert_eq!(
        stdout(&ank(&["reduce", "29", "--policy", "standard"])).trim(),
        "11"
    );
    assert_eq!(stdout(&ank(&["reduce", "33", "--policy", "ruling"])).trim(), "6");
    assert_eq!(stdout(&ank(&["reduce", "-29"])).trim(), "2");
}

#[test]
fn fractal_text() {
    let out = ank(&["fractal", "15.03.1990"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("Behavior fractal: 6311"));
}

#[test]
fn parse_normalises_iso_input() {
    let out = ank(&["parse", "1990-03-15"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim(), "15.03.1990");
}

#[test]
fn tasks_from_explicit_numbers() {
    let out = ank(&[
        "tasks", "--soul", "6", "--mind", "3", "--destiny", "1", "--year", "1",
    ]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(stdout(&out).contains("Task numbers:"));
}

#[test]
fn tasks_missing_input_fails() {
    let out = ank(&["tasks", "--soul", "6"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("--destiny"));
}

#[test]
fn individual_with_target() {
    let out = ank(&["individual", "15.03.1990", "--on", "2025-10-18"]);
    assert!(out.status.success(), "{}", stderr(&out));
    let s = stdout(&out);
    assert!(s.contains("year  (CHIG): 15 + 3 + 2025 = 2043"), "{s}");
}

#[test]
fn abracadabra_short_name_fails() {
    let out = ank(&["abracadabra", "--name", "Li"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Not enough data"));
}

#[test]
fn name_number() {
    let out = ank(&["name", "Li"]);
    assert!(stdout(&out).contains("Name number: 3"));
}

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

#[test]
fn personal_json() {
    let out = ank(&["--json", "personal", "15.03.1990"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["destiny"], 1);
    assert_eq!(v["soul"], 6);
}

#[test]
fn report_json_has_all_sections() {
    let out = ank(&[
        "report",
        "15.03.1990",
        "--name",
        "Alexander",
        "--surname",
        "Pushkin",
        "--on",
        "2025-10-18",
        "--json",
    ]);
    assert!(out.status.success(), "{}", stderr(&out));
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    for key in [
        "personal",
        "fractal",
        "tasks",
        "life_cycle",
        "individual",
        "square",
        "abracadabra",
    ] {
        assert!(!v[key].is_null(), "missing {key}");
    }
    assert_eq!(v["life_cycle"]["years"].as_array().unwrap().len(), 100);
}

// ---------------------------------------------------------------------------
// Errors, strictness and config
// ---------------------------------------------------------------------------

#[test]
fn invalid_date_exits_1() {
    let out = ank(&["fractal", "not-a-date"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Invalid birth date"));
    assert!(out.stdout.is_empty());
}

#[test]
fn strict_flag_rejects_impossible_date() {
    assert!(ank(&["square", "31.02.1990"]).status.success());
    let out = ank(&["--strict", "square", "31.02.1990"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn config_file_sets_json_and_strict() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[dates]\nstrict = true\n[output]\nformat = \"json\"\n").unwrap();
    let config = path.to_str().unwrap();

    let out = ank(&["--config", config, "fractal", "15.03.1990"]);
    assert!(out.status.success(), "{}", stderr(&out));
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["fractal"], "6311");

    let out = ank(&["--config", config, "fractal", "31.02.1990"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn config_in_working_directory_is_picked_up() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("ank.toml"), "[output]\nformat = \"json\"\n").unwrap();
    let out = Command::new(env!("CARGO_BIN_EXE_ank"))
        .current_dir(dir.path())
        .args(["reduce", "29"])
        .output()
        .unwrap();
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["value"], 2);
}

#[test]
fn bad_config_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[colors]\n").unwrap();
    let out = ank(&["--config", path.to_str().unwrap(), "reduce", "5"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("invalid config"));
}

#[test]
fn debug_logging_goes_to_stderr() {
    let out = ank(&["--log-level", "debug", "reduce", "5"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim(), "5");
    assert!(stderr(&out).contains("config"));
}
