//! Common test utilities for avkg integration tests

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;
use walkdir::WalkDir;

/// Path to the bundled fixture data directory
pub fn fixture_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("common")
        .join("fixtures")
        .join("data")
}

/// The real avkg binary with a clean environment
#[allow(deprecated)]
pub fn avkg_cmd() -> Command {
    let mut cmd = Command::cargo_bin("avkg").expect("avkg binary should be built");
    cmd.env_remove("AVKG_DATA_DIR")
        .env_remove("AVKG_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// avkg pointed at the fixture data
pub fn avkg_with_fixture() -> Command {
    let mut cmd = avkg_cmd();
    cmd.arg("--data-dir").arg(fixture_data_dir());
    cmd
}

/// A scratch data directory for integration tests
pub struct TestDataDir {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to the data root
    pub path: PathBuf,
}

impl TestDataDir {
    /// Create an empty data directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a data directory pre-filled with the fixture data
    pub fn from_fixture() -> Self {
        let dir = Self::new();
        let fixture = fixture_data_dir();
        for entry in WalkDir::new(&fixture).min_depth(1) {
            let entry = entry.expect("Failed to walk fixture data");
            let relative = entry
                .path()
                .strip_prefix(&fixture)
                .expect("Fixture entry outside fixture root");
            let target = dir.path.join(relative);
            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&target).expect("Failed to create category directory");
            } else {
                std::fs::copy(entry.path(), &target).expect("Failed to copy data file");
            }
        }
        dir
    }

    /// Write a file below the data root
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }
}

impl Default for TestDataDir {
    fn default() -> Self {
        Self::new()
    }
}
