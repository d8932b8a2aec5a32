//! UI symbols (markers, labels)

/// Node markers in the detail panel
pub mod markers {
    /// Commit marker (●)
    pub const COMMIT: char = '●';
    /// Root commit marker (◆)
    pub const ROOT: char = '◆';
    /// Conversation context marker (◇)
    pub const CONTEXT: char = '◇';
}

/// Empty state indicators
pub mod empty {
    /// Label for commits without a session
    pub const NO_SESSION: &str = "(no session)";
    /// Label for commits without a branch
    pub const NO_BRANCH: &str = "(detached)";
}
