//! git log format definitions for stable output parsing
//!
//! The format pins field order and separators regardless of user
//! configuration (`log.decorate`, `format.pretty`, ...).

/// Separator used between fields in formatted output (tab character)
pub const FIELD_SEPARATOR: char = '\t';

/// Separator between decorations in the `%D` field
pub const DECORATION_SEPARATOR: &str = ", ";

/// Number of fields in one log record
pub const LOG_FIELD_COUNT: usize = 6;

/// Formats for git commands
pub struct Formats;

impl Formats {
    /// Format for `git log` output
    ///
    /// Fields (separated by tab):
    /// 1. full commit hash
    /// 2. parent hashes (space-separated, empty for root commits)
    /// 3. author email
    /// 4. author date (strict ISO 8601)
    /// 5. ref decorations without parentheses (`HEAD -> main, origin/main, tag: v1`)
    /// 6. subject (first line of the message)
    ///
    /// The subject comes last so a tab inside it cannot shift other fields.
    pub fn log() -> &'static str {
        "--format=%H%x09%P%x09%ae%x09%aI%x09%D%x09%s"
    }
}
