//! ctxgraph - Git history with linked Claude conversation sessions
//!
//! Lays out a commit graph with conversation contexts beside the commits
//! they produced, and shows it in a terminal viewer.
//!
//! This library provides:
//! - [`layout`]: The graph layout engine
//! - [`model`]: Commits, contexts and layout output types
//! - [`git`]: git command execution and parsing
//! - [`context`]: Conversation context files
//! - [`source`]: Commit sources for the viewer
//! - [`demo`]: Built-in sample history
//! - [`app`]: Application state and logic
//! - [`keys`]: Key binding definitions
//! - [`ui`]: User interface components

pub mod app;
pub mod context;
pub mod demo;
pub mod git;
pub mod keys;
pub mod layout;
pub mod model;
pub mod source;
pub mod ui;

pub use layout::{LayoutEngine, compute_layout};
