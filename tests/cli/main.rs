use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use tempfile::TempDir;

mod init;
mod lang;
mod opportunities;
mod session;
mod summary;
mod users;

const BIN: &str = env!("CARGO_BIN_EXE_tatawu");

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Pin config discovery to the sandbox.
        fs::create_dir_all(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(BIN);
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for stable assertions
        cmd.env("TATAWU_STATE_DIR", self.project_dir.join(".state"));
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Result<Output> {
        self.command()
            .args(args)
            .output()
            .with_context(|| format!("Failed to run tatawu {:?}", args))
    }

    /// Run and return (exit code, stdout). Stderr is ignored here; tests
    /// that care about it use `run` directly.
    pub fn run_stdout(&self, args: &[&str]) -> Result<(i32, String)> {
        let output = self.run(args)?;
        let code = output.status.code().context("Process was terminated")?;
        let stdout = String::from_utf8(output.stdout).context("stdout was not UTF-8")?;
        Ok((code, stdout))
    }
}
