//! Rendering logic for the application

use ratatui::{Frame, layout::Rect};

use super::state::App;
use crate::ui::widgets::{render_error_banner, render_graph_status_bar};

/// Height of the status bar at the bottom of the screen
const STATUS_BAR_HEIGHT: u16 = 1;

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let main_area = Rect {
            height: area.height.saturating_sub(STATUS_BAR_HEIGHT),
            ..area
        };

        self.graph_view.render(frame, main_area);
        render_graph_status_bar(frame, &self.graph_view);

        // Render error banner above status bar (errors are always shown prominently)
        if let Some(ref error) = self.error_message {
            render_error_banner(frame, error, STATUS_BAR_HEIGHT);
        }
    }
}
