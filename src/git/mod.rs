//! git command execution layer
//!
//! This module loads commit history by running `git log` and parsing its
//! output into [`Commit`](crate::model::Commit) records.

pub mod constants;
mod executor;
/// Parser module (public for integration testing)
pub mod parser;
mod template;

pub use executor::GitExecutor;
pub use parser::Parser;

use std::io;
use thiserror::Error;

use crate::model::Commit;

/// Errors that can occur when executing git commands
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("git command failed (exit code {exit_code}): {stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    #[error("Failed to parse git output: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("git is not installed or not in PATH")]
    GitNotFound,
}

/// Load up to `limit` commits from the repository
pub fn load_commits(executor: &GitExecutor, limit: Option<usize>) -> Result<Vec<Commit>, GitError> {
    let output = executor.log_raw(limit)?;
    Parser::parse_log(&output)
}
