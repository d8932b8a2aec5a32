//! Keybinding definitions for ctxgraph
//!
//! All keybindings are defined here for easy modification.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+L (refresh)
/// Note: Accept both 'l' and 'L' for terminal compatibility
pub fn is_refresh_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('l') | KeyCode::Char('L'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key is Ctrl+C (force quit)
pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys
// =============================================================================

/// Quit application
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Alternative quit
pub const ESC: KeyCode = KeyCode::Esc;

// =============================================================================
// Navigation keys
// =============================================================================

/// Move cursor up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Move cursor up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Move cursor down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Move cursor down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Go to top
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to bottom
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Graph View keys
// =============================================================================

/// Jump to the next commit of the selected session
pub const NEXT_IN_SESSION: KeyCode = KeyCode::Char('n');

/// Jump to the previous commit of the selected session
pub const PREV_IN_SESSION: KeyCode = KeyCode::Char('N');

/// Toggle the detail panel
pub const TOGGLE_DETAIL: KeyCode = KeyCode::Char('d');

/// Toggle the conversation pane
pub const TOGGLE_TRANSCRIPT: KeyCode = KeyCode::Char('t');

/// Scroll the conversation down one line
pub const SCROLL_TRANSCRIPT_DOWN: KeyCode = KeyCode::Char('J');

/// Scroll the conversation up one line
pub const SCROLL_TRANSCRIPT_UP: KeyCode = KeyCode::Char('K');

// =============================================================================
// Status bar hints
// =============================================================================

/// A key hint displayed in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_NAVIGATE: KeyHint = KeyHint {
    key: "j/k",
    label: "Move",
    color: Color::Blue,
};
pub const HINT_SESSION: KeyHint = KeyHint {
    key: "n/N",
    label: "Session",
    color: Color::Magenta,
};
pub const HINT_DETAIL: KeyHint = KeyHint {
    key: "d",
    label: "Detail",
    color: Color::Green,
};
pub const HINT_TRANSCRIPT: KeyHint = KeyHint {
    key: "t",
    label: "Chat",
    color: Color::Yellow,
};
pub const HINT_SCROLL_TRANSCRIPT: KeyHint = KeyHint {
    key: "J/K",
    label: "Scroll",
    color: Color::Yellow,
};
pub const HINT_REFRESH: KeyHint = KeyHint {
    key: "^L",
    label: "Refresh",
    color: Color::Blue,
};
pub const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Red,
};

/// Hints for the graph view
///
/// Session and conversation hints only appear while the selected commit
/// has a context.
pub fn graph_view_hints(has_session: bool) -> Vec<KeyHint> {
    let mut hints = vec![HINT_NAVIGATE];
    if has_session {
        hints.extend([HINT_SESSION, HINT_TRANSCRIPT, HINT_SCROLL_TRANSCRIPT]);
    }
    hints.extend([HINT_DETAIL, HINT_REFRESH, HINT_QUIT]);
    hints
}
