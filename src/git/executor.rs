//! git command executor
//!
//! Handles running git commands and capturing their output.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use super::GitError;
use super::constants::{self, commands, errors, flags};
use super::template::Formats;

/// Executor for git commands
#[derive(Debug, Clone)]
pub struct GitExecutor {
    /// Path to the repository (None = current directory)
    repo_path: Option<PathBuf>,
}

impl Default for GitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl GitExecutor {
    /// Create a new executor for the current directory
    pub fn new() -> Self {
        Self { repo_path: None }
    }

    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: Some(path.into()),
        }
    }

    /// Repository path, if one was given
    pub fn repo_path(&self) -> Option<&Path> {
        self.repo_path.as_deref()
    }

    /// Run a git command with the given arguments
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let mut cmd = Command::new(constants::GIT_COMMAND);

        if let Some(ref path) = self.repo_path {
            cmd.arg(flags::REPO_PATH).arg(path);
        }

        cmd.args(args);
        debug!(?args, repo = ?self.repo_path, "running git");

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let exit_code = output.status.code().unwrap_or(-1);

            if stderr.contains(errors::NOT_A_REPO) {
                return Err(GitError::NotARepository);
            }

            Err(GitError::CommandFailed { stderr, exit_code })
        }
    }

    /// Fail early if the path is not inside a git repository
    pub fn check_repository(&self) -> Result<(), GitError> {
        self.run(&[commands::REV_PARSE, flags::GIT_DIR]).map(|_| ())
    }

    /// Run `git log` over all local branches, newest first
    pub fn log_raw(&self, limit: Option<usize>) -> Result<String, GitError> {
        let limit = limit.map(|n| format!("{}={}", flags::MAX_COUNT, n));
        let mut args = vec![
            commands::LOG,
            flags::NO_COLOR,
            flags::BRANCHES,
            Formats::log(),
        ];

        if let Some(ref max_count) = limit {
            args.push(max_count);
        }

        self.run(&args)
    }
}
