use std::{fs, path::PathBuf};

use serde_json::Value;
use tempfile::tempdir;

use prereqs_cli::{Args, run};

/// Demo inputs live at the workspace root, not in the crate.
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args(catalog: PathBuf, output: PathBuf) -> Args {
    Args {
        catalog: catalog.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: Some(demos_path().join("config.toml").to_string_lossy().to_string()),
        merge: None,
        institutions: Vec::new(),
        seed: Some(17),
        template: None,
        log_level: "off".to_string(),
    }
}

/// Copies the demo catalog so runs that rewrite it leave the original intact.
fn scratch_catalog(dir: &std::path::Path) -> PathBuf {
    let path = dir.join("catalog.json");
    fs::copy(demos_path().join("catalog.json"), &path).expect("Failed to copy demo catalog");
    path
}

#[test]
fn e2e_smoke_test_demo_catalog() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("out");
    let catalog = scratch_catalog(temp_dir.path());

    let report = run(&args(catalog, output.clone())).expect("Run failed");

    assert!(report.is_success(), "Unexpected failures: {:?}", report.failures);
    let mut units: Vec<String> = report
        .exported
        .iter()
        .map(|unit| format!("{}/{}", unit.institution, unit.department))
        .collect();
    units.sort();
    assert_eq!(units, ["A/COSC", "A/MATH", "U/COMM-DIS"]);

    for unit in &report.exported {
        let text = fs::read_to_string(&unit.path).expect("Missing document");
        let document: Value = serde_json::from_str(&text).expect("Invalid document");
        assert_eq!(document["nodes"].as_array().unwrap().len(), unit.nodes);
        assert_eq!(document["edges"].as_array().unwrap().len(), unit.edges);
    }

    // COSC-311 names MATH 211, which is not in the catalog.
    let cosc = fs::read_to_string(output.join("A").join("COSC").join("data.json")).unwrap();
    assert!(cosc.contains(r#""label":"MATH-211""#));
}

#[test]
fn e2e_smoke_test_merge_rewrites_catalog() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let catalog = scratch_catalog(temp_dir.path());

    let mut args = args(catalog.clone(), temp_dir.path().join("out"));
    args.merge = Some(demos_path().join("listings.json").to_string_lossy().to_string());
    args.institutions = vec!["A".to_string()];

    let report = run(&args).expect("Run failed");
    assert!(report.is_success());

    let rewritten: Value = serde_json::from_str(&fs::read_to_string(&catalog).unwrap()).unwrap();
    assert!(rewritten["A"]["MATH-355"].is_object());
    assert!(rewritten["U"]["COMM-DIS-301"].is_object());

    let math = report
        .exported
        .iter()
        .find(|unit| unit.department == "MATH")
        .expect("MATH not exported");
    let text = fs::read_to_string(&math.path).unwrap();
    assert!(text.contains(r#""label":"MATH-355""#));
}

#[test]
fn e2e_smoke_test_template_is_copied() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("out");

    let mut args = args(scratch_catalog(temp_dir.path()), output.clone());
    args.template = Some(demos_path().join("template").to_string_lossy().to_string());
    args.institutions = vec!["U".to_string()];

    run(&args).expect("Run failed");

    let department = output.join("U").join("COMM-DIS");
    assert!(department.join("index.html").is_file());
    assert!(department.join("data.json").is_file());
}

#[test]
fn e2e_smoke_test_error_cases() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("out");

    let missing = args(temp_dir.path().join("absent.json"), output.clone());
    assert!(run(&missing).is_err(), "Missing catalog should fail");

    let invalid = temp_dir.path().join("invalid.json");
    fs::write(&invalid, "{ not json").unwrap();
    assert!(run(&args(invalid, output.clone())).is_err(), "Invalid catalog should fail");

    let mut unknown = args(scratch_catalog(temp_dir.path()), output.clone());
    unknown.institutions = vec!["Z".to_string()];
    assert!(run(&unknown).is_err(), "Unknown institution should fail");

    let mut no_config = args(scratch_catalog(temp_dir.path()), output);
    no_config.config = Some(temp_dir.path().join("absent.toml").to_string_lossy().to_string());
    assert!(run(&no_config).is_err(), "Missing explicit config should fail");
}
