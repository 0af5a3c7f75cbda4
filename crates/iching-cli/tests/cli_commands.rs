//! Integration tests for the `iching` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn iching() -> Command {
    Command::cargo_bin("iching").unwrap()
}

// ---------------------------------------------------------------------------
// trigram
// ---------------------------------------------------------------------------

#[test]
fn trigram_shows_details() {
    iching()
        .args(["trigram", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Field / The Receptive"))
        .stdout(predicate::str::contains("devoted, yielding"))
        .stdout(predicate::str::contains("mother"));
}

#[test]
fn trigram_out_of_range() {
    for bad in ["0", "9", "5.2", "five"] {
        iching()
            .args(["trigram", bad])
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "trigram number must be an integer between 1 and 8",
            ));
    }
}

#[test]
fn trigram_hexagrams() {
    iching()
        .args(["trigram", "2", "--hexagrams"])
        .assert()
        .success()
        .stdout(predicate::str::contains("15 hexagrams"));
}

#[test]
fn trigram_hexagrams_by_position() {
    for position in ["top", "bottom"] {
        iching()
            .args(["trigram", "2", "--hexagrams", "--position", position])
            .assert()
            .success()
            .stdout(predicate::str::contains("8 hexagrams"));
    }
}

#[test]
fn trigram_hexagrams_bad_position() {
    iching()
        .args(["trigram", "2", "--hexagrams", "--position", "middle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("position must be one of: top, bottom"));
}

// ---------------------------------------------------------------------------
// hexagram
// ---------------------------------------------------------------------------

#[test]
fn hexagram_shows_details() {
    iching()
        .args(["hexagram", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Force / The Creative"))
        .stdout(predicate::str::contains("111111"));
}

#[test]
fn hexagram_out_of_range() {
    iching()
        .args(["hexagram", "65"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "hexagram number must be an integer between 1 and 64, got 65",
        ));
}

#[test]
fn hexagram_change_to() {
    iching()
        .args(["hexagram", "1", "--change-to", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 -> 2 (111111)"));
}

#[test]
fn hexagram_change_to_self() {
    iching()
        .args(["hexagram", "5", "--change-to", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no change"));
}

#[test]
fn hexagram_flip_lines() {
    iching()
        .args(["hexagram", "1", "--flip", "101010"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 -> 64 (010101)"))
        .stdout(predicate::str::contains("lines:  1, 3, 5"));
}

#[test]
fn hexagram_flip_malformed() {
    for bad in ["1010", "1010101", "10101x", "102010"] {
        iching()
            .args(["hexagram", "1", "--flip", bad])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid argument"));
    }
}

#[test]
fn hexagram_changes_table() {
    iching()
        .args(["hexagram", "1", "--changes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Changing lines"))
        .stdout(predicate::str::contains("Before Completion").or(predicate::str::contains(
            "Not Yet Fording",
        )));
}

// ---------------------------------------------------------------------------
// sequence
// ---------------------------------------------------------------------------

#[test]
fn sequence_lists_trigrams() {
    iching()
        .args(["sequence", "laterHeaven"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. ☲ 7 Radiance"))
        .stdout(predicate::str::contains("8. ☴ 6 Ground"));
}

#[test]
fn sequence_unknown_name() {
    iching()
        .args(["sequence", "unrecognized"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "name must be a trigram sequence name: earlierHeaven, laterHeaven",
        ));
}

// ---------------------------------------------------------------------------
// ask
// ---------------------------------------------------------------------------

#[test]
fn ask_prints_reading() {
    iching()
        .args(["ask", "Should I travel?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Question:"))
        .stdout(predicate::str::contains("mixed entropy"));
}

#[test]
fn ask_seeded_is_reproducible() {
    let run = || {
        let output = iching()
            .args(["ask", "Should I travel?", "--seeded", "--json"])
            .output()
            .unwrap();
        assert!(output.status.success());
        output.stdout
    };
    let first = run();
    let second = run();
    assert_eq!(first, second);

    let reading: serde_json::Value = serde_json::from_slice(&first).unwrap();
    assert_eq!(reading["entropy"], "seeded");
    assert_eq!(reading["question"], "Should I travel?");
    assert_eq!(reading["lines"].as_array().unwrap().len(), 6);
}

// ---------------------------------------------------------------------------
// graph
// ---------------------------------------------------------------------------

#[test]
fn graph_to_stdout() {
    let output = iching().arg("graph").output().unwrap();
    assert!(output.status.success());
    let graph: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(graph["nodes"].as_array().unwrap().len(), 72);
    assert_eq!(graph["edges"].as_array().unwrap().len(), 4160);
}

#[test]
fn graph_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("graph.json");
    iching()
        .args(["graph", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("72 nodes and 4160 edges"));

    let content = fs::read_to_string(&path).unwrap();
    let graph: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(graph["nodes"][0]["id"], "t1");
    assert_eq!(graph["nodes"][0]["type"], "trigram");
    assert_eq!(graph["edges"][0]["id"], "h1-t1-bottom");
}
