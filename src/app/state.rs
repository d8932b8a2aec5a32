//! Application state

use crate::layout::LayoutEngine;
use crate::source::CommitSource;
use crate::ui::views::GraphView;

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Graph view state
    pub graph_view: GraphView,
    /// Where commits are loaded from
    pub source: CommitSource,
    /// Layout engine used on every refresh
    pub engine: LayoutEngine,
    /// Error message to display
    pub error_message: Option<String>,
}

impl App {
    /// Construct a new instance of [`App`] and load the initial graph
    pub fn new(source: CommitSource, engine: LayoutEngine) -> Self {
        let mut app = Self {
            running: true,
            graph_view: GraphView::new(*engine.config()),
            source,
            engine,
            error_message: None,
        };

        app.refresh_graph();

        app
    }

    /// Set running to false to quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }
}
