//! Error banner widget

use ratatui::{Frame, prelude::*, widgets::Paragraph};

use crate::ui::components;

/// Render an error message just above the status bar
pub fn render_error_banner(frame: &mut Frame, error: &str, status_bar_height: u16) {
    let area = frame.area();
    if area.height < status_bar_height + 3 {
        return;
    }

    let error_area = Rect {
        x: area.x + 2,
        y: area.y + area.height - status_bar_height - 2,
        width: area.width.saturating_sub(4),
        height: 1,
    };

    let error_line = components::build_error_line(error);
    frame.render_widget(Paragraph::new(error_line), error_area);
}
