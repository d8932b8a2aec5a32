//! Commit data model

use serde::{Deserialize, Serialize};

/// Number of SHA characters shown in the UI
pub const SHORT_SHA_LEN: usize = 7;

/// Abbreviate a SHA for display
///
/// Strings shorter than [`SHORT_SHA_LEN`] are returned unchanged.
pub fn short_sha(sha: &str) -> &str {
    match sha.char_indices().nth(SHORT_SHA_LEN) {
        Some((idx, _)) => &sha[..idx],
        None => sha,
    }
}

/// Claude conversation session attached to a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationContext {
    /// Session/thread identifier
    pub context_id: String,

    /// Number of messages recorded for this commit
    pub total_messages: u32,

    /// True if this commit starts a new conversation thread,
    /// false if it continues the thread of an ancestor commit
    pub is_new_session: bool,
}

impl ConversationContext {
    pub fn new(context_id: impl Into<String>, total_messages: u32, is_new_session: bool) -> Self {
        Self {
            context_id: context_id.into(),
            total_messages,
            is_new_session,
        }
    }
}

/// A Git commit as consumed by the layout engine
///
/// Only a single parent is tracked. Merge commits keep their first parent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Commit {
    /// Full commit hash
    pub sha: String,

    /// Author email
    pub author_email: String,

    /// Timestamp (ISO 8601 format)
    pub timestamp: String,

    /// First line of the commit message
    pub message: String,

    /// Parent commit hash (None for root commits)
    pub parent_sha: Option<String>,

    /// Branch names whose tip is this commit
    pub branches: Vec<String>,

    /// Associated conversation session
    pub context: Option<ConversationContext>,
}

impl Commit {
    /// Create a commit with only identity and linkage set
    pub fn new(sha: impl Into<String>, parent_sha: Option<&str>) -> Self {
        Self {
            sha: sha.into(),
            parent_sha: parent_sha.map(str::to_string),
            ..Self::default()
        }
    }

    /// Display abbreviation of the SHA
    pub fn short_sha(&self) -> &str {
        short_sha(&self.sha)
    }

    /// Get a display string for the message
    pub fn display_message(&self) -> &str {
        if self.message.is_empty() {
            "(no message)"
        } else {
            &self.message
        }
    }

    /// Branch used for lane binding
    ///
    /// The first branch name with `HEAD -> ` and `origin/` prefixes removed.
    pub fn primary_branch(&self) -> Option<&str> {
        let first = self.branches.first()?;
        let name = first.strip_prefix("HEAD -> ").unwrap_or(first);
        let name = name.strip_prefix("origin/").unwrap_or(name);
        if name.is_empty() { None } else { Some(name) }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_branches(mut self, branches: &[&str]) -> Self {
        self.branches = branches.iter().map(|b| b.to_string()).collect();
        self
    }

    pub fn with_context(mut self, context: ConversationContext) -> Self {
        self.context = Some(context);
        self
    }
}
