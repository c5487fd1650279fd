//! Integration tests for `spantree init` and `spantree version`.
#![allow(clippy::expect_used)]

use std::io::Write as _;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use spantree_core::{GraphFile, Weight, compute_mst};

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

#[test]
fn init_prints_empty_skeleton() {
    let out = Command::new(spantree_bin())
        .arg("init")
        .output()
        .expect("run spantree init");
    assert!(out.status.success());
    let file: GraphFile = serde_json::from_slice(&out.stdout).expect("valid graph file");
    assert!(file.vertices.is_empty());
    assert!(file.edges.is_empty());
}

#[test]
fn init_example_is_the_classroom_graph() {
    let out = Command::new(spantree_bin())
        .args(["init", "--example"])
        .output()
        .expect("run spantree init");
    assert!(out.status.success());
    let file: GraphFile = serde_json::from_slice(&out.stdout).expect("valid graph file");
    assert_eq!(file.vertices.len(), 5);
    assert_eq!(file.edges.len(), 8);
    let mst = compute_mst(&file).expect("builds");
    assert_eq!(mst.total_weight, Weight::from(23));
}

#[test]
fn init_example_pipes_into_kruskal() {
    let init = Command::new(spantree_bin())
        .args(["init", "--example"])
        .output()
        .expect("run spantree init");
    assert!(init.status.success());

    let mut child = Command::new(spantree_bin())
        .args(["kruskal", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn spantree kruskal");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(&init.stdout)
        .expect("write stdin");
    let out = child.wait_with_output().expect("wait");
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("Total weight: 23"));
}

#[test]
fn version_matches_core() {
    let out = Command::new(spantree_bin())
        .arg("version")
        .output()
        .expect("run spantree version");
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout).trim(),
        spantree_core::version()
    );
}
