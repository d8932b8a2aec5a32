//! git output parser
//!
//! Parses the output from git commands into structured data.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::GitError;
use super::constants::special;
use super::template::{DECORATION_SEPARATOR, FIELD_SEPARATOR, LOG_FIELD_COUNT};
use crate::model::Commit;

/// Full or abbreviated hex object name (SHA-1 or SHA-256)
static SHA_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-f]{7,64}$").expect("Invalid sha regex"));

/// Parser for git command output
pub struct Parser;

impl Parser {
    /// Parse `git log` output into a list of Commits
    ///
    /// Each line represents one commit, with fields separated by tabs.
    /// Merge commits keep only their first parent.
    pub fn parse_log(output: &str) -> Result<Vec<Commit>, GitError> {
        let mut commits = Vec::new();

        for line in output.lines() {
            if line.trim().is_empty() {
                continue;
            }

            let commit = Self::parse_log_record(line)?;
            commits.push(commit);
        }

        Ok(commits)
    }

    /// Parse a single log record (one line, tab-separated fields)
    fn parse_log_record(record: &str) -> Result<Commit, GitError> {
        let fields: Vec<&str> = record.splitn(LOG_FIELD_COUNT, FIELD_SEPARATOR).collect();

        if fields.len() < LOG_FIELD_COUNT {
            return Err(GitError::ParseError(format!(
                "Expected {} fields, got {}: {:?}",
                LOG_FIELD_COUNT,
                fields.len(),
                fields
            )));
        }

        let sha = fields[0].trim();
        if !SHA_REGEX.is_match(sha) {
            return Err(GitError::ParseError(format!("Invalid commit hash: {:?}", sha)));
        }

        let mut parents = fields[1].split_whitespace();
        let parent_sha = parents.next().map(str::to_string);
        let extra_parents = parents.count();
        if extra_parents > 0 {
            debug!(sha, extra_parents, "merge commit, keeping first parent only");
        }

        Ok(Commit {
            sha: sha.to_string(),
            parent_sha,
            author_email: fields[2].to_string(),
            timestamp: fields[3].to_string(),
            branches: Self::parse_decorations(fields[4]),
            message: fields[5].trim_end().to_string(),
            context: None,
        })
    }

    /// Extract branch names from a `%D` decoration list
    ///
    /// Tags, a bare `HEAD` and remote `HEAD` pointers are dropped;
    /// `HEAD -> main` is kept as is.
    pub fn parse_decorations(decorations: &str) -> Vec<String> {
        decorations
            .split(DECORATION_SEPARATOR)
            .map(str::trim)
            .filter(|d| {
                !d.is_empty()
                    && *d != special::HEAD
                    && !d.starts_with(special::TAG_PREFIX)
                    && !d.ends_with(special::REMOTE_HEAD_SUFFIX)
            })
            .map(str::to_string)
            .collect()
    }
}
