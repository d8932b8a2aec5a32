//! Input handling for GraphView

use crossterm::event::KeyEvent;

use crate::keys;

use super::{GraphAction, GraphView};

impl GraphView {
    /// Handle key event and return action
    pub fn handle_key(&mut self, key: KeyEvent) -> GraphAction {
        if keys::is_refresh_key(&key) {
            return GraphAction::Refresh;
        }

        let cursor = self.cursor;
        match key.code {
            k if keys::is_move_down(k) => self.move_down(),
            k if keys::is_move_up(k) => self.move_up(),
            keys::GO_TOP => self.move_to_top(),
            keys::GO_BOTTOM => self.move_to_bottom(),
            keys::NEXT_IN_SESSION => self.next_in_session(),
            keys::PREV_IN_SESSION => self.prev_in_session(),
            keys::TOGGLE_DETAIL => self.toggle_detail(),
            keys::TOGGLE_TRANSCRIPT => self.toggle_transcript(),
            keys::SCROLL_TRANSCRIPT_DOWN => self.scroll_transcript_down(),
            keys::SCROLL_TRANSCRIPT_UP => self.scroll_transcript_up(),
            keys::QUIT | keys::ESC => return GraphAction::Quit,
            _ => {}
        }
        // A new selection starts its transcript from the top
        if self.cursor != cursor {
            self.transcript_scroll.set(0);
        }
        GraphAction::None
    }
}
