//! Placeholders for panes with nothing to show

use ratatui::{style::Stylize, text::Line, widgets::Paragraph};

/// Centered message with an optional gray hint below it
pub fn empty_state(title: &str, hint: Option<&str>) -> Paragraph<'static> {
    let mut lines = vec![Line::from(""), Line::from(title.to_string()).centered()];

    if let Some(hint_text) = hint {
        lines.push(Line::from(""));
        lines.push(Line::from(hint_text.to_string()).dark_gray().centered());
    }

    Paragraph::new(lines)
}

/// Graph pane for a history without commits
pub fn no_commits_state() -> Paragraph<'static> {
    empty_state(
        "No commits to display.",
        Some("Press Ctrl+L to reload, or run with --demo"),
    )
}

/// Conversation pane for a commit without a Claude session
pub fn no_session_state() -> Paragraph<'static> {
    empty_state(
        "No Claude session for this commit.",
        Some("Select a commit with a ◇ context to read its conversation"),
    )
}

/// Conversation pane for a session whose transcript is missing or empty
pub fn no_messages_state() -> Paragraph<'static> {
    empty_state("No messages in this conversation", None)
}
