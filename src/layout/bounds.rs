//! Viewport bounds for fit-to-view

use super::config::LayoutConfig;
use crate::model::{LayoutNode, ViewportBounds};

/// Bounding box around every node, plus padding
///
/// The right edge always leaves room for a context node beside the
/// rightmost lane, even when no commit there has a context.
pub(crate) fn viewport_bounds(
    config: &LayoutConfig,
    commit_nodes: &[LayoutNode],
    context_nodes: &[LayoutNode],
) -> ViewportBounds {
    let r = config.node_radius;
    let pad = &config.padding;

    let mut min_x = config.origin.x;
    let mut min_y = config.origin.y;
    let mut max_x = config.origin.x;
    let mut max_y = config.origin.y;

    for node in commit_nodes.iter().chain(context_nodes) {
        min_x = min_x.min(node.x - r);
        min_y = min_y.min(node.y - r);
        max_x = max_x.max(node.x + r);
        max_y = max_y.max(node.y + r);
    }

    if let Some(rightmost) = commit_nodes.iter().map(|n| n.x).reduce(f64::max) {
        max_x = max_x.max(rightmost + config.context_offset.x + r);
    }

    ViewportBounds {
        min_x: min_x - pad.left,
        min_y: min_y - pad.top,
        max_x: max_x + pad.right,
        max_y: max_y + pad.bottom,
    }
}
