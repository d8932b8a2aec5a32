//! Mapping from (lane, depth) slots to pixel coordinates

use super::config::LayoutConfig;
use crate::model::{LayoutNode, NodeKind, Point};

/// Pixel position of a lane/depth slot
pub(crate) fn slot_position(config: &LayoutConfig, lane: usize, depth: usize) -> Point {
    Point::new(
        config.origin.x + lane as f64 * config.lane_spacing,
        config.origin.y + depth as f64 * config.depth_spacing,
    )
}

/// Commit node at its slot
pub(crate) fn commit_node(config: &LayoutConfig, sha: &str, lane: usize, depth: usize) -> LayoutNode {
    let p = slot_position(config, lane, depth);
    LayoutNode {
        kind: NodeKind::Commit,
        sha: sha.to_string(),
        x: p.x,
        y: p.y,
        lane,
        depth,
    }
}

/// Context node placed beside its commit node
///
/// Shares the commit's lane and depth; only the pixel position is offset.
pub(crate) fn context_node(config: &LayoutConfig, commit: &LayoutNode) -> LayoutNode {
    LayoutNode {
        kind: NodeKind::Context,
        x: commit.x + config.context_offset.x,
        y: commit.y + config.context_offset.y,
        ..commit.clone()
    }
}
