//! Input handling for the application

use crossterm::event::KeyEvent;

use super::state::App;
use crate::keys;
use crate::ui::views::GraphAction;

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Clear error message on any key press
        self.error_message = None;

        if keys::is_interrupt_key(&key) {
            self.quit();
            return;
        }

        match self.graph_view.handle_key(key) {
            GraphAction::None => {}
            GraphAction::Refresh => self.refresh_graph(),
            GraphAction::Quit => self.quit(),
        }
    }
}
