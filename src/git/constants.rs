//! git-specific constants
//!
//! Centralized definitions for git command names, flags, and special values.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// Default number of commits loaded into the graph
pub const DEFAULT_LOG_LIMIT: usize = 50;

/// git subcommands
pub mod commands {
    pub const LOG: &str = "log";
    pub const REV_PARSE: &str = "rev-parse";
}

/// git command flags
pub mod flags {
    /// Run as if started in the given directory (global flag)
    pub const REPO_PATH: &str = "-C";
    /// Disable color output for parsing
    pub const NO_COLOR: &str = "--no-color";
    /// Include every local branch, not only HEAD
    pub const BRANCHES: &str = "--branches";
    /// Limit the number of commits
    pub const MAX_COUNT: &str = "--max-count";
    /// Print the git directory (rev-parse)
    pub const GIT_DIR: &str = "--git-dir";
}

/// Special values in git output
pub mod special {
    /// Decoration prefix for tags (`tag: v1.0`)
    pub const TAG_PREFIX: &str = "tag: ";
    /// Detached or symbolic HEAD decoration
    pub const HEAD: &str = "HEAD";
    /// Remote HEAD pointer decoration suffix (`origin/HEAD`)
    pub const REMOTE_HEAD_SUFFIX: &str = "/HEAD";
}

/// Error detection patterns in git output
pub mod errors {
    /// Pattern indicating not a git repository
    pub const NOT_A_REPO: &str = "not a git repository";
}
