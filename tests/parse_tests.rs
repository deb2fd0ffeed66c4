//! Integration tests for parse and summary commands

#![allow(deprecated)]

use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{fixture, tripday_cmd};

fn parse_output(args: &[&str], stdin: Option<&str>) -> Value {
    let temp = TempDir::new().unwrap();
    let mut cmd = tripday_cmd();
    cmd.current_dir(temp.path()).arg("parse").args(args);
    if let Some(input) = stdin {
        cmd.write_stdin(input);
    }
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_parse_adds_days_and_passes_record_through() {
    let path = fixture("lisbon.json");
    let parsed = parse_output(&[path.to_str().unwrap()], None);
    let original: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    for key in [
        "itinerary",
        "from_location",
        "to_location",
        "start_date",
        "end_date",
        "metadata",
        "weather_info",
        "transportation_info",
        "attractions",
        "restaurants",
        "hotels",
        "local_tips",
        "request_details",
    ] {
        assert_eq!(parsed[key], original[key], "field {} changed", key);
    }

    let days = parsed["days"].as_array().unwrap();
    assert_eq!(days.len(), 3);
    assert_eq!(days[0]["dayNumber"], "1");
    assert_eq!(days[0]["date"], "Friday, June 14, 2024");
    assert_eq!(
        days[1]["fullTitle"],
        "Day 2: Saturday, June 15, 2024 - Exploring the Old Town"
    );
    assert_eq!(days[2]["date"], "");
    assert_eq!(days[2]["dayTitle"], "Sintra");
    assert_eq!(days[2]["content"][0], "Train from Rossio station.");
}

#[test]
fn test_parse_raw_stdin_compact() {
    let temp = TempDir::new().unwrap();

    let output = tripday_cmd()
        .current_dir(temp.path())
        .args(["parse", "-", "--raw", "--compact"])
        .write_stdin("**Day 1**\nBreakfast\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);

    let parsed: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["days"][0]["fullTitle"], "Day 1: ");
    assert_eq!(parsed["days"][0]["content"][0], "Breakfast");
}

#[test]
fn test_parse_empty_days() {
    let path = fixture("no_days.json");
    let parsed = parse_output(&[path.to_str().unwrap()], None);
    assert_eq!(parsed["days"], serde_json::json!([]));
    assert_eq!(parsed["to_location"], "Bergen");
}

#[test]
fn test_parse_is_repeatable() {
    let path = fixture("lisbon.json");
    let first = parse_output(&[path.to_str().unwrap()], None);
    let second = parse_output(&[path.to_str().unwrap()], None);
    assert_eq!(first, second);
}

#[test]
fn test_parse_record_without_itinerary() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("empty.json");
    fs::write(&path, "{\"from_location\": \"Rome\"}").unwrap();

    tripday_cmd()
        .current_dir(temp.path())
        .arg("parse")
        .arg(&path)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("no 'itinerary' text field"));
}

#[test]
fn test_summary() {
    let temp = TempDir::new().unwrap();

    tripday_cmd()
        .current_dir(temp.path())
        .arg("summary")
        .arg(fixture("lisbon.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Trip: Berlin to Lisbon"))
        .stdout(predicate::str::contains("Start: Friday, June 14, 2024"))
        .stdout(predicate::str::contains("End: Sunday, June 16, 2024"))
        .stdout(predicate::str::contains("Length: 3 days"))
        .stdout(predicate::str::contains("Travelers: 2"))
        .stdout(predicate::str::contains("Pace: relaxed"))
        .stdout(predicate::str::contains("Weather: Clear sky (clear)"))
        .stdout(predicate::str::contains("Days: 3"));
}

#[test]
fn test_parse_passes_loose_metadata_through() {
    let input = serde_json::json!({
        "itinerary": "**Day 1: Friday, June 14, 2024 - Lisbon - Sintra Day Trip**\nTrain at 9",
        "metadata": {"includes_weather": null, "number_of_travelers": 2.0},
        "end_date": null
    });
    let parsed = parse_output(&["-", "--compact"], Some(&input.to_string()));

    assert_eq!(parsed["metadata"], input["metadata"]);
    assert_eq!(parsed["end_date"], Value::Null);
    assert!(parsed.as_object().unwrap().contains_key("end_date"));
    assert_eq!(parsed["days"][0]["dayTitle"], "Lisbon - Sintra Day Trip");
}

#[test]
fn test_parse_sparse_metadata_unchanged() {
    let input = serde_json::json!({
        "itinerary": "**Day 1**",
        "metadata": {"number_of_travelers": 2}
    });
    let parsed = parse_output(&["-"], Some(&input.to_string()));

    assert_eq!(parsed["metadata"], serde_json::json!({"number_of_travelers": 2}));
}

#[test]
fn test_summary_raw_counts_days() {
    let temp = TempDir::new().unwrap();

    tripday_cmd()
        .current_dir(temp.path())
        .args(["summary", "--raw"])
        .arg(fixture("lisbon.txt"))
        .assert()
        .success()
        .stdout("Trip\nDays: 2\n");
}
