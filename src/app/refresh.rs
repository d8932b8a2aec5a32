//! Data refresh operations (reload from the commit source)

use tracing::{info, warn};

use super::state::App;

impl App {
    /// Reload commits and recompute the layout
    ///
    /// On failure the previous graph stays on screen with an error banner.
    pub fn refresh_graph(&mut self) {
        match self.source.load() {
            Ok(history) => {
                let layout = self.engine.compute(&history.commits);
                info!(
                    source = %self.source.label(),
                    commits = layout.commit_nodes.len(),
                    contexts = layout.context_nodes.len(),
                    conversations = history.conversations.len(),
                    "graph refreshed"
                );
                self.graph_view.set_graph(history.commits, layout);
                self.graph_view.set_conversations(history.conversations);
                self.error_message = None;
            }
            Err(e) => {
                warn!(error = %e, "failed to load commits");
                self.error_message = Some(e.to_string());
            }
        }
    }
}
