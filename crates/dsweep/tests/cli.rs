//! End-to-end tests for the `dsweep` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn dsweep() -> Command {
    Command::cargo_bin("dsweep").expect("binary is built")
}

const SMALL_MANIFEST: &str = r#"
suite = "SMALL"

[[benchmark]]
name = "kmp-kmp"
category = "kmp"
harness = "common/harness.c"
kernels = ["kmp"]
main_id = 0x90
exec_cmd = "%(source_dir)s/kmp/kmp/kmp-kmp-gem5-accel"
run_args = "%(source_dir)s/kmp/kmp/input.data %(source_dir)s/kmp/kmp/check.data"
arrays = [{ name = "pattern", size = 4, word_size = 1, partition = "complete" }]
loops = [{ function = "CPF", label = "c1", trip_count = 4 }]
"#;

#[test]
fn test_list_builtin() {
    dsweep()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("bfs-bulk"))
        .stdout(predicate::str::contains("viterbi-viterbi"));
}

#[test]
fn test_list_category_json() {
    let output = dsweep()
        .args(["list", "--category", "md", "--format", "json"])
        .output()
        .expect("run dsweep");
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let names: Vec<_> = json
        .as_array()
        .expect("array of benchmarks")
        .iter()
        .map(|b| b["name"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(names, ["md-grid", "md-knn"]);
}

#[test]
fn test_list_unknown_category() {
    dsweep()
        .args(["list", "--category", "crypto"])
        .assert()
        .failure();
}

#[test]
fn test_show() {
    dsweep()
        .args(["show", "aes-aes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("aes256_encrypt_ecb"))
        .stdout(predicate::str::contains("0x00000010"))
        .stdout(predicate::str::contains("sbox"));
}

#[test]
fn test_show_nonexistent() {
    dsweep().args(["show", "nonexistent"]).assert().failure().code(1);
}

#[test]
fn test_expand() {
    dsweep()
        .args(["expand", "aes-aes", "--source-dir", "/data/MachSuite"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "/data/MachSuite/aes/aes/aes-aes-gem5-accel \
             /data/MachSuite/aes/aes/input.data /data/MachSuite/aes/aes/check.data\n",
        ));
}

#[test]
fn test_expand_source_dir_with_spaces() {
    dsweep()
        .args(["expand", "aes-aes", "--source-dir", "/my data/MachSuite"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "'/my data/MachSuite/aes/aes/aes-aes-gem5-accel' \
             '/my data/MachSuite/aes/aes/input.data' '/my data/MachSuite/aes/aes/check.data'\n",
        ));
}

#[test]
fn test_check_builtin() {
    dsweep().arg("check").assert().success();
}

#[test]
fn test_unknown_suite() {
    dsweep()
        .args(["--suite", "polybench", "list"])
        .assert()
        .failure();
}

#[test]
fn test_suites() {
    dsweep()
        .arg("suites")
        .assert()
        .success()
        .stdout(predicate::str::contains("machsuite"));
}

#[test]
fn test_suites_ignores_catalog_selection() {
    dsweep()
        .args(["--suite", "polybench", "suites"])
        .assert()
        .success()
        .stdout(predicate::str::contains("machsuite"));
}

#[test]
fn test_manifest() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("small.toml");
    std::fs::write(&path, SMALL_MANIFEST).expect("write manifest");

    dsweep()
        .arg("--manifest")
        .arg(&path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("kmp-kmp"))
        .stdout(predicate::str::contains("bfs-bulk").not());
}

#[test]
fn test_invalid_manifest() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, SMALL_MANIFEST.replace("trip_count = 4", "trip_count = 0"))
        .expect("write manifest");

    dsweep()
        .arg("--manifest")
        .arg(&path)
        .arg("check")
        .assert()
        .failure();
}

#[test]
fn test_export_reloads() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("machsuite.toml");

    dsweep()
        .arg("export")
        .arg("--output")
        .arg(&path)
        .assert()
        .success();

    dsweep()
        .arg("--manifest")
        .arg(&path)
        .args(["show", "viterbi-viterbi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unroll_flatten"))
        .stdout(predicate::str::contains("block"));
}
