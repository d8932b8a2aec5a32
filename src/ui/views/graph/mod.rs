//! Graph View - commit lineage with Claude sessions drawn beside it

mod input;
mod render;


pub use render::flatten_path;

use std::cell::Cell;

use crate::context::ConversationMap;
use crate::layout::{LayoutConfig, compute_layout};
use crate::model::{Commit, Conversation, GraphLayout, LayoutNode};

/// Action returned by GraphView after handling a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphAction {
    /// No action needed
    None,
    /// Reload commits and recompute the layout
    Refresh,
    /// Leave the application
    Quit,
}

/// Graph View state
#[derive(Debug)]
pub struct GraphView {
    /// Commits as loaded, used for the detail panel
    commits: Vec<Commit>,
    /// Layout computed from `commits`
    layout: GraphLayout,
    /// Indices into `layout.commit_nodes`, top to bottom then left to right
    order: Vec<usize>,
    /// Position in `order`
    cursor: usize,
    /// Configuration the layout was computed with (drives render scale)
    config: LayoutConfig,
    /// Transcripts keyed by `context_id`
    conversations: ConversationMap,
    /// First visible transcript row; render clamps it to the content
    transcript_scroll: Cell<usize>,
    /// Detail panel visible
    pub show_detail: bool,
    /// Conversation pane visible (when the terminal is tall enough)
    pub show_transcript: bool,
}

impl Default for GraphView {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl GraphView {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            commits: Vec::new(),
            layout: compute_layout(&[]),
            order: Vec::new(),
            cursor: 0,
            config,
            conversations: ConversationMap::new(),
            transcript_scroll: Cell::new(0),
            show_detail: true,
            show_transcript: true,
        }
    }

    /// Replace the displayed graph
    ///
    /// Keeps the selection on the same commit when it is still present,
    /// otherwise selects the first commit.
    pub fn set_graph(&mut self, commits: Vec<Commit>, layout: GraphLayout) {
        let previous = self.selected_node().map(|n| n.sha.clone());

        let mut order: Vec<usize> = (0..layout.commit_nodes.len()).collect();
        order.sort_by(|&a, &b| {
            let (na, nb) = (&layout.commit_nodes[a], &layout.commit_nodes[b]);
            na.y.total_cmp(&nb.y).then(na.x.total_cmp(&nb.x))
        });

        self.commits = commits;
        self.layout = layout;
        self.order = order;
        self.cursor = previous
            .as_deref()
            .and_then(|sha| self.position_of(sha))
            .unwrap_or(0);
        if self.selected_node().map(|n| n.sha.as_str()) != previous.as_deref() {
            self.transcript_scroll.set(0);
        }
    }

    /// Replace the transcripts shown in the conversation pane
    pub fn set_conversations(&mut self, conversations: ConversationMap) {
        self.conversations = conversations;
        self.transcript_scroll.set(0);
    }

    /// Look up a transcript by `context_id`
    pub fn conversation(&self, context_id: &str) -> Option<&Conversation> {
        self.conversations.get(context_id)
    }

    /// Transcript of the selected commit's session
    pub fn selected_conversation(&self) -> Option<&Conversation> {
        let context = self.selected_commit()?.context.as_ref()?;
        self.conversation(&context.context_id)
    }

    pub fn layout(&self) -> &GraphLayout {
        &self.layout
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of selectable commits
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the currently selected commit node
    pub fn selected_node(&self) -> Option<&LayoutNode> {
        self.order
            .get(self.cursor)
            .map(|&i| &self.layout.commit_nodes[i])
    }

    /// Get the currently selected commit
    pub fn selected_commit(&self) -> Option<&Commit> {
        self.selected_node().and_then(|node| self.commit(&node.sha))
    }

    /// Look up a commit by SHA
    ///
    /// The last occurrence wins, matching how the layout treats duplicates.
    pub fn commit(&self, sha: &str) -> Option<&Commit> {
        self.commits.iter().rev().find(|c| c.sha == sha)
    }

    fn position_of(&self, sha: &str) -> Option<usize> {
        self.order
            .iter()
            .position(|&i| self.layout.commit_nodes[i].sha == sha)
    }

    /// Select a commit by SHA, returning false if it is not displayed
    pub fn select(&mut self, sha: &str) -> bool {
        match self.position_of(sha) {
            Some(pos) => {
                if pos != self.cursor {
                    self.cursor = pos;
                    self.transcript_scroll.set(0);
                }
                true
            }
            None => false,
        }
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.order.len() {
            self.cursor += 1;
        }
    }

    /// Move to top
    pub fn move_to_top(&mut self) {
        self.cursor = 0;
    }

    /// Move to bottom
    pub fn move_to_bottom(&mut self) {
        self.cursor = self.order.len().saturating_sub(1);
    }

    /// Move to the next commit of the selected commit's session
    ///
    /// Does nothing when the selection has no context or is the last
    /// commit of its session.
    pub fn next_in_session(&mut self) {
        if let Some(pos) = self.find_in_session(true) {
            self.cursor = pos;
        }
    }

    /// Move to the previous commit of the selected commit's session
    pub fn prev_in_session(&mut self) {
        if let Some(pos) = self.find_in_session(false) {
            self.cursor = pos;
        }
    }

    fn find_in_session(&self, forward: bool) -> Option<usize> {
        let context_id = self.selected_commit()?.context.as_ref()?.context_id.clone();
        let same_session = |pos: &usize| {
            let node = &self.layout.commit_nodes[self.order[*pos]];
            self.commit(&node.sha)
                .and_then(|c| c.context.as_ref())
                .is_some_and(|ctx| ctx.context_id == context_id)
        };

        if forward {
            (self.cursor + 1..self.order.len()).find(same_session)
        } else {
            (0..self.cursor).rev().find(same_session)
        }
    }

    /// Toggle the detail panel
    pub fn toggle_detail(&mut self) {
        self.show_detail = !self.show_detail;
    }

    /// Toggle the conversation pane
    pub fn toggle_transcript(&mut self) {
        self.show_transcript = !self.show_transcript;
    }

    pub fn transcript_scroll(&self) -> usize {
        self.transcript_scroll.get()
    }

    /// Scroll the conversation down one row
    ///
    /// Bounded by the unwrapped row count; rendering tightens the bound to
    /// what the pane actually shows.
    pub fn scroll_transcript_down(&mut self) {
        let rows = self
            .selected_conversation()
            .map_or(0, |c| render::transcript_row_count(&c.messages));
        let next = self.transcript_scroll.get() + 1;
        if next < rows {
            self.transcript_scroll.set(next);
        }
    }

    /// Scroll the conversation up one row
    pub fn scroll_transcript_up(&mut self) {
        let current = self.transcript_scroll.get();
        self.transcript_scroll.set(current.saturating_sub(1));
    }
}
