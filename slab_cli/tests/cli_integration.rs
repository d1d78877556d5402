//! CLI integration tests for the `slab` binary.

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

fn slab() -> Command {
    Command::cargo_bin("slab").unwrap()
}

fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

// ============================================================================
// slab bars
// ============================================================================

#[test]
fn test_bars_lists_catalog() {
    slab()
        .arg("bars")
        .assert()
        .success()
        .stdout(predicate::str::contains("#10"))
        .stdout(predicate::str::contains("#36"))
        .stdout(predicate::str::contains("1006"));
}

#[test]
fn test_bars_json() {
    let output = slab().args(["bars", "--json"]).output().unwrap();
    assert!(output.status.success());

    let bars: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let bars = bars.as_array().unwrap();
    assert_eq!(bars.len(), 9);
    assert_eq!(bars[1]["designation"], "#13");
    assert_eq!(bars[8]["designation"], "#36");
}

// ============================================================================
// slab design
// ============================================================================

#[test]
fn test_design_defaults_text_report() {
    slab()
        .arg("design")
        .assert()
        .success()
        .stdout(predicate::str::contains("ONE-WAY REINFORCED CONCRETE SLAB DESIGN REPORT"))
        .stdout(predicate::str::contains("Slab Thickness: 180 mm"))
        .stdout(predicate::str::contains("Status: PASS - No shear reinforcement required"))
        .stdout(predicate::str::contains("complies with ACI 318-14"));
}

#[test]
fn test_design_json_output() {
    let output = slab()
        .args(["design", "--format", "json", "--support", "cantilever", "--span", "1500"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["support"], "cantilever");
    assert_eq!(result["thickness"]["thickness_mm"], 150.0);
    assert_eq!(result["moments"].as_array().unwrap().len(), 1);
    assert_eq!(result["shear"]["status"], "Pass");
}

#[test]
fn test_design_thickness_override_warns() {
    slab()
        .args(["design", "--thickness", "150"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "User-specified thickness (150mm) is less than calculated minimum (180mm)",
        ));
}

#[test]
fn test_design_unknown_bar_fails() {
    slab()
        .args(["design", "--main-bar", "#99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not recognized"));
}

#[test]
fn test_design_unknown_support_fails() {
    slab()
        .args(["design", "--support", "pinned"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("support_condition"));
}

#[test]
fn test_design_infeasible_section_fails() {
    slab()
        .args(["design", "--thickness", "50", "--cover", "40", "--main-bar", "#25"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Geometrically infeasible"));
}

#[test]
fn test_design_invalid_span_fails() {
    slab()
        .args(["design", "--span", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("clear_span_mm"));
}

#[test]
fn test_design_from_input_file() {
    let tmp = temp_dir();
    let input = tmp.path().join("slab.json");
    fs::write(
        &input,
        r##"{
            "clear_span_mm": 1500.0,
            "material": { "fc_mpa": 28.0, "fy_mpa": 420.0 },
            "loads": { "superimposed_dead_kn_m2": 1.5, "live_kn_m2": 3.0 },
            "support": "cantilever",
            "shrinkage_bar": "#10"
        }"##,
    )
    .unwrap();

    slab()
        .args(["design", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Support Condition: Cantilever"))
        .stdout(predicate::str::contains("Slab Thickness: 150 mm"))
        .stdout(predicate::str::contains("Shrinkage Reinforcement: #10"));
}

#[test]
fn test_flags_override_input_file() {
    let tmp = temp_dir();
    let input = tmp.path().join("slab.json");
    fs::write(
        &input,
        r#"{
            "clear_span_mm": 1500.0,
            "material": { "fc_mpa": 28.0, "fy_mpa": 420.0 },
            "loads": { "superimposed_dead_kn_m2": 1.5, "live_kn_m2": 3.0 },
            "support": "cantilever"
        }"#,
    )
    .unwrap();

    slab()
        .args(["design", "--support", "simply-supported", "--span", "3500", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Support Condition: Simply Supported"))
        .stdout(predicate::str::contains("Slab Thickness: 180 mm"));
}

#[test]
fn test_design_missing_input_file() {
    let tmp = temp_dir();
    slab()
        .args(["design", "--input"])
        .arg(tmp.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_design_malformed_input_file() {
    let tmp = temp_dir();
    let input = tmp.path().join("broken.json");
    fs::write(&input, r#"{ "clear_span_mm": 3500.0"#).unwrap();

    slab()
        .args(["design", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse design input"))
        .stderr(predicate::str::contains("Serialization error"));
}

#[test]
fn test_design_writes_report_and_csv() {
    let tmp = temp_dir();
    let report = tmp.path().join("report.txt");
    let csv = tmp.path().join("results.csv");

    slab()
        .args(["design", "--support", "one-end-continuous", "--span", "4000", "--report"])
        .arg(&report)
        .arg("--csv")
        .arg(&csv)
        .assert()
        .success();

    let text = fs::read_to_string(&report).unwrap();
    assert!(text.contains("INPUT PARAMETERS"));
    assert!(text.contains("Support Condition: One End Continuous"));

    let table = fs::read_to_string(&csv).unwrap();
    assert!(table.starts_with("Location,Moment (kN·m),Bar Size,Spacing (mm),As (mm²/m)"));
    assert_eq!(table.lines().count(), 4);
}

#[test]
fn test_design_writes_dated_files_into_directory() {
    let tmp = temp_dir();

    slab()
        .args(["design", "--report"])
        .arg(tmp.path())
        .arg("--csv")
        .arg(tmp.path())
        .assert()
        .success();

    let names: Vec<String> = fs::read_dir(tmp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert!(names.iter().any(|n| n.starts_with("slab_report_") && n.ends_with(".txt")));
    assert!(names.iter().any(|n| n.starts_with("slab_results_") && n.ends_with(".csv")));
}
