//! Data models for ctxgraph
//!
//! This module contains UI-independent data structures: the commits fed
//! into the layout engine, the conversations behind them, and the
//! positioned graph the engine produces.

mod commit;
mod conversation;
mod graph;

pub use commit::{Commit, ConversationContext, SHORT_SHA_LEN, short_sha};
pub use conversation::{Conversation, Message, MessageRole};
pub use graph::{
    ConnectionKind, ConnectionPath, GraphLayout, LayoutNode, LineStyle, NodeKind, NodeRef,
    PathCommand, PathSpec, Point, ViewportBounds,
};
