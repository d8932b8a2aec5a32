//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Colors for Graph View
pub mod graph_view {
    use super::*;

    /// Commit node color
    pub const COMMIT: Color = Color::Blue;
    /// Root commit node color
    pub const ROOT: Color = Color::Magenta;
    /// Conversation context node color
    pub const CONTEXT: Color = Color::Rgb(217, 119, 87);
    /// Lineage edge color
    pub const LINEAGE: Color = Color::Gray;
    /// Branch-out edge color
    pub const BRANCH_OUT: Color = Color::Rgb(217, 119, 87);
    /// Continuation edge color
    pub const CONTINUATION: Color = Color::Rgb(236, 165, 137);
    /// Merge-back edge color
    pub const MERGE_BACK: Color = Color::Rgb(99, 102, 241);
    /// Selected node color
    pub const SELECTED: Color = Color::Yellow;
    /// Short SHA label color
    pub const SHA_LABEL: Color = Color::Yellow;
    /// Branch label color
    pub const BRANCH: Color = Color::Cyan;
    /// Secondary text (timestamps, emails)
    pub const MUTED: Color = Color::DarkGray;
}

/// Colors for the conversation pane
pub mod transcript {
    use super::*;

    /// User message header
    pub const USER: Color = Color::Blue;
    /// Claude message header
    pub const ASSISTANT: Color = Color::Rgb(217, 119, 87);
    /// Session markers and other system notes
    pub const SYSTEM: Color = Color::DarkGray;
    /// Message timestamps
    pub const TIME: Color = Color::DarkGray;
}
