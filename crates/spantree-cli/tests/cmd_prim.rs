//! Integration tests for `spantree prim`.
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::Command;

/// Path to the compiled `spantree` binary.
fn spantree_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("spantree");
    path
}

/// Path to a shared fixture file.
fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../../tests/fixtures");
    path.push(name);
    path
}

#[test]
fn prim_classroom_human_reaches_all() {
    let out = Command::new(spantree_bin())
        .args(["prim", fixture("classroom.json").to_str().expect("path")])
        .output()
        .expect("run spantree prim");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Prim trace from A"), "{stdout}");
    assert!(stdout.contains("Total weight: 23"), "{stdout}");
    assert!(stdout.contains("Reached 5 of 5 vertices"), "{stdout}");
}

#[test]
fn prim_json_step_order() {
    let out = Command::new(spantree_bin())
        .args([
            "prim",
            fixture("classroom.json").to_str().expect("path"),
            "--format",
            "json",
        ])
        .output()
        .expect("run spantree prim");
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).expect("JSON");
    assert_eq!(json["seed"], "A");
    let new_vertices: Vec<&str> = json["prim_trace"]
        .as_array()
        .expect("trace")
        .iter()
        .map(|s| s["new_vertex"].as_str().expect("id"))
        .collect();
    assert_eq!(new_vertices, vec!["D", "E", "C", "B"]);
    assert_eq!(
        json["prim_trace"][3]["reached"],
        serde_json::json!(["A", "D", "E", "C", "B"])
    );
    assert_eq!(json["total_weight"], 23);
}

#[test]
fn prim_start_flag_changes_seed() {
    let out = Command::new(spantree_bin())
        .args([
            "prim",
            fixture("classroom.json").to_str().expect("path"),
            "--start",
            "C",
            "--format",
            "json",
        ])
        .output()
        .expect("run spantree prim");
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).expect("JSON");
    assert_eq!(json["seed"], "C");
    assert_eq!(json["prim_trace"][0]["new_vertex"], "E");
    assert_eq!(json["total_weight"], 23);
}

#[test]
fn prim_unknown_start_exits_1() {
    let out = Command::new(spantree_bin())
        .args([
            "prim",
            fixture("classroom.json").to_str().expect("path"),
            "--start",
            "Q",
        ])
        .output()
        .expect("run spantree prim");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("vertex not found: \"Q\""));
}

#[test]
fn prim_disconnected_graph_is_partial_but_succeeds() {
    let out = Command::new(spantree_bin())
        .args(["prim", fixture("two-triangles.json").to_str().expect("path")])
        .output()
        .expect("run spantree prim");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Reached 3 of 6 vertices"), "{stdout}");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("disconnected"), "{stderr}");
}

#[test]
fn prim_quiet_silences_warning() {
    let out = Command::new(spantree_bin())
        .args([
            "prim",
            fixture("two-triangles.json").to_str().expect("path"),
            "--quiet",
        ])
        .output()
        .expect("run spantree prim");
    assert!(out.status.success());
    assert!(out.stderr.is_empty(), "{}", String::from_utf8_lossy(&out.stderr));
}

#[test]
fn prim_empty_graph() {
    let out = Command::new(spantree_bin())
        .args(["prim", fixture("empty.json").to_str().expect("path")])
        .output()
        .expect("run spantree prim");
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("Graph has no vertices."));
}
