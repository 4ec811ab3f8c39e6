//! TestWorld pattern for CLI integration tests.
//!
//! Each world owns a temporary data directory, so config files and logs
//! written by one test never leak into another.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment for running the `leetmetric` binary.
///
/// # Example
/// ```no_run
/// use leetmetric_testing::TestWorld;
///
/// let world = TestWorld::new().with_endpoint("http://127.0.0.1:9");
/// let result = world.run(&["lookup", "abc"]).unwrap();
/// assert!(!result.success());
/// ```
pub struct TestWorld {
    _temp_dir: TempDir,
    data_dir: PathBuf,
    endpoint: Option<String>,
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
        let data_dir = temp_dir.path().join(".leetmetric");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            _temp_dir: temp_dir,
            data_dir,
            endpoint: None,
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Point every command at this stats endpoint (passed as `--endpoint`)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write `config.toml` into the data directory
    pub fn write_config(&self, content: &str) -> Result<PathBuf> {
        let path = self.data_dir.join("config.toml");
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Apply data-dir, endpoint and env settings to a command
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());

        if let Some(endpoint) = &self.endpoint {
            cmd.arg("--endpoint").arg(endpoint);
        }

        cmd.env("NO_COLOR", "1");
        cmd.env_remove("RUST_LOG");
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run the `leetmetric` binary with `args` and capture its output
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("leetmetric")
            .map_err(|e| anyhow::anyhow!("Failed to find leetmetric binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Captured result of one CLI invocation
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }
}
