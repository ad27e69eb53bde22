//! End-to-end runs of the `svy` binary.

use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::TempDir;

const INTERVIEW: &str = r#"{
  "id": 7,
  "uuid": "itv-7",
  "accessCode": "1234-5678",
  "startedAt": 1759320000,
  "languages": ["fr"],
  "household": {
    "uuid": "hh-7",
    "size": 1,
    "members": [{
      "uuid": "per-7",
      "age": 40,
      "journeys": [{
        "uuid": "jo-7",
        "startDate": "2025-10-01",
        "visitedPlaces": [
          { "uuid": "vp-a", "activity": "work",
            "geography": { "type": "Feature", "geometry": { "type": "Point", "coordinates": [-73.6, 45.5] } } },
          { "uuid": "vp-b", "activity": "shopping",
            "geography": { "type": "Feature", "geometry": { "type": "Point", "coordinates": [-73.5, 45.6] } } }
        ],
        "trips": [{
          "uuid": "tr-7",
          "originVisitedPlaceUuid": "vp-a",
          "destinationVisitedPlaceUuid": "vp-b",
          "segments": [{ "uuid": "seg-7" }]
        }]
      }]
    }]
  }
}"#;

/// Run `svy` from `dir`, isolated from any ambient survey configuration.
fn svy(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_svy"))
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("SVY_LOG")
        .output()
        .expect("run svy")
}

fn workspace() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("interview.json"), INTERVIEW).unwrap();
    dir
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be json")
}

#[test]
fn findings_are_printed_and_exit_cleanly() {
    let dir = workspace();
    let output = svy(dir.path(), &["audit", "interview.json"]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let findings = stdout_json(&output);
    let codes: Vec<&str> = findings
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["errorCode"].as_str().unwrap())
        .collect();
    assert_eq!(codes, ["S_M_Mode"]);
    assert_eq!(findings[0]["file"], "interview.json");
    assert_eq!(findings[0]["objectUuid"], "seg-7");
    assert_eq!(findings[0]["message"], "Segment mode is missing");
}

#[test]
fn messages_follow_the_locale() {
    let dir = workspace();
    let output = svy(dir.path(), &["audit", "interview.json", "--locale", "fr", "--format", "raw"]);

    assert!(output.status.success());
    let findings = stdout_json(&output);
    assert_eq!(findings[0]["message"], "Le mode du segment est manquant");
}

#[test]
fn configured_access_code_format_is_enforced() {
    let dir = workspace();
    std::fs::write(dir.path().join("survey.toml"), "[access_code]\nformat = \"eight_digits\"\n").unwrap();
    let bad = INTERVIEW.replace("1234-5678", "ABC");
    std::fs::write(dir.path().join("bad_code.json"), bad).unwrap();

    let output = svy(dir.path(), &["--config", "survey.toml", "audit", "bad_code.json"]);

    assert!(output.status.success());
    let findings = stdout_json(&output);
    let codes: Vec<&str> = findings
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["errorCode"].as_str().unwrap())
        .collect();
    assert_eq!(codes, ["I_I_AccessCode", "S_M_Mode"]);
}

#[test]
fn unreadable_file_exits_with_error() {
    let dir = workspace();
    let output = svy(dir.path(), &["audit", "interview.json", "missing.json"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read interview file missing.json"), "{stderr}");
}

#[test]
fn malformed_file_exits_with_error() {
    let dir = workspace();
    std::fs::write(dir.path().join("broken.json"), "{ \"id\": ").unwrap();
    let output = svy(dir.path(), &["audit", "broken.json"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to parse interview file broken.json"));
}

#[test]
fn unsupported_locale_is_rejected() {
    let dir = workspace();
    let output = svy(dir.path(), &["audit", "interview.json", "--locale", "de"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid value 'de'"), "{stderr}");
    assert!(stderr.contains("[possible values: en, fr]"), "{stderr}");
}

#[test]
fn codes_lists_the_catalog() {
    let dir = workspace();
    let output = svy(dir.path(), &["codes", "--format", "raw", "--locale", "fr"]);

    assert!(output.status.success());
    let entries = stdout_json(&output);
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 42);
    assert!(entries.iter().all(|e| e["message"].is_string() && e["objectType"].is_string()));
    assert!(entries.iter().any(|e| e["errorCode"] == "HM_M_Geography" && e["objectType"] == "home"));
}
