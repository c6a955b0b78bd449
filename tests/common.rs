#![allow(dead_code)]
use assert_cmd::{cargo_bin_cmd, Command};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn st() -> Command {
    cargo_bin_cmd!("studytracker")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_studytracker.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB schema for a test store
pub fn init_db(db_path: &str) {
    st()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Record one complete session via the CLI (zero-length, but it lands in
/// every ledger)
pub fn record_session(db_path: &str, activity: &str) {
    st()
        .args(["--db", db_path, "--test", "start"])
        .assert()
        .success();
    st()
        .args(["--db", db_path, "--test", "stop", "--activity", activity])
        .assert()
        .success();
}
