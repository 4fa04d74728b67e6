//! TestWorld pattern for declarative integration test setup.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment for running the `cybercell` binary.
///
/// # Example
/// ```no_run
/// use cybercell_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let result = world.run(&["routes"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".cybercell");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    /// Write `config.toml` into the data directory.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.config_path(), toml).expect("Failed to write config");
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a command (e.g. from `cargo_bin_cmd!("cybercell")`) for
    /// plain output against this world's data directory.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        self.configure_with_format(cmd, "plain")
    }

    /// Same as [`configure_command`](Self::configure_command) with JSON output.
    pub fn configure_json_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        self.configure_with_format(cmd, "json")
    }

    fn configure_with_format<'a>(&self, cmd: &'a mut Command, format: &str) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .arg("--format")
            .arg(format);

        cmd.current_dir(self.temp_dir.path());
        cmd.env("CYBERCELL_PATH", self.data_dir());
        // Keep RUST_LOG from the outer test run out of stderr assertions
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run the binary with plain output.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("cybercell")
            .map_err(|e| anyhow::anyhow!("Failed to find cybercell binary: {}", e))?;
        self.configure_command(&mut cmd);
        cmd.args(args);
        CliResult::from_command(&mut cmd)
    }

    /// Run the binary with JSON output.
    #[allow(deprecated)]
    pub fn run_json(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("cybercell")
            .map_err(|e| anyhow::anyhow!("Failed to find cybercell binary: {}", e))?;
        self.configure_json_command(&mut cmd);
        cmd.args(args);
        CliResult::from_command(&mut cmd)
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    fn from_command(cmd: &mut Command) -> Result<Self> {
        let output = cmd.output()?;
        Ok(Self {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
