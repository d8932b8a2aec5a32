//! View components
//!
//! Each view represents a screen in the application.

mod graph;

pub use graph::{GraphAction, GraphView, flatten_path};
