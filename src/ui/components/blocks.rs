//! Block components for UI rendering

use ratatui::{
    text::Line,
    widgets::{Block, BorderType, Borders},
};

/// Create a block with title and specified borders
pub fn titled_block<'a>(title: Line<'a>, borders: Borders) -> Block<'a> {
    Block::default().borders(borders).title(title)
}

/// Create a block with all borders and a title
pub fn bordered_block<'a>(title: Line<'a>) -> Block<'a> {
    titled_block(title, Borders::ALL)
}

/// Create a rounded block with all borders (for side panels)
pub fn side_panel_block<'a>(title: Line<'a>) -> Block<'a> {
    bordered_block(title).border_type(BorderType::Rounded)
}
