//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// A date far enough ahead that every slot on it is in the future.
pub const DAY: &str = "2099-03-14";

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the tablebook data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created yet; tablebook creates it.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("tablebook-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// Environment variables that would leak into the run are cleared.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("tablebook").expect("Failed to find tablebook binary");
        for var in [
            "TABLEBOOK_DATA_DIR",
            "TABLEBOOK_BUSY_TIMEOUT",
            "TABLEBOOK_DISABLE_AUTOINIT",
            "TABLEBOOK_BIND",
            "TABLEBOOK_MAXIMUM_LOCK_WAIT_SECONDS",
            "TABLEBOOK_OUTPUT_FORMAT",
            "TABLEBOOK_LOG",
            "TABLEBOOK_LOG_MODE",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Book `table` at `time` on [`DAY`] and return the new id.
    ///
    /// # Panics
    /// Panics if the create command fails or doesn't print an id.
    pub fn create(&self, table: u8, time: &str) -> i64 {
        let output = self
            .command()
            .args(["create", "--date", DAY, "--time", time])
            .args(["--table", &table.to_string()])
            .args(["--party-size", "4", "--responsible", "Ana"])
            .output()
            .expect("Failed to run create command");

        assert!(
            output.status.success(),
            "Create failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in output");
        stdout.trim().parse().expect("Output is not a reservation id")
    }

    /// Confirm reservation `id` as `server`.
    ///
    /// # Panics
    /// Panics if the confirm command fails.
    pub fn confirm(&self, id: i64, server: &str) {
        self.command()
            .args(["confirm", &id.to_string(), "--server", server])
            .assert()
            .success();
    }

    /// Run a report command with `--format json` and parse its output.
    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .command()
            .args(args)
            .args(["--format", "json"])
            .output()
            .expect("Failed to run report command");

        assert!(
            output.status.success(),
            "Report failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("Report output is not JSON")
    }
}
