//! Connection synthesis
//!
//! Lineage edges follow the commit graph. Session edges follow the
//! conversation contexts, scanning commits in depth order:
//!
//! ```text
//!   git ──branch-out──▶ ctx        session starts
//!                        │ continuation
//!                        ▼
//!   git                 ctx        same context_id, not a new session
//!    ▲                   │
//!    └────merge-back─────┘         next commit leaves the session
//! ```

use std::collections::HashSet;

use tracing::debug;

use super::graph::CommitGraph;
use super::path::build_path;
use crate::model::{ConnectionKind, ConnectionPath, LayoutNode, LineStyle, NodeRef};

/// Positioned nodes indexed like the commit graph
pub(crate) struct Placement<'n> {
    pub commits: &'n [LayoutNode],
    /// Context node per commit, if the commit has a context
    pub contexts: &'n [Option<LayoutNode>],
}

/// Collects edges, dropping repeats of the same ordered pair
struct EdgeList {
    edges: Vec<ConnectionPath>,
    seen: HashSet<(NodeRef, NodeRef)>,
}

impl EdgeList {
    fn new() -> Self {
        Self {
            edges: Vec::new(),
            seen: HashSet::new(),
        }
    }

    fn push(&mut self, kind: ConnectionKind, style: LineStyle, from: &LayoutNode, to: &LayoutNode) {
        let key = (from.node_ref(), to.node_ref());
        if !self.seen.insert(key.clone()) {
            return;
        }
        let (from_ref, to_ref) = key;
        self.edges.push(ConnectionPath {
            kind,
            style,
            from: from_ref,
            to: to_ref,
            path: build_path(kind, style, from.position(), to.position()),
        });
    }
}

/// Build every edge of the layout
///
/// Lineage edges come first in `topo_order`, then session edges in
/// `depth_order`.
pub(crate) fn build_connections(
    graph: &CommitGraph<'_>,
    placement: &Placement<'_>,
    topo_order: &[usize],
    depth_order: &[usize],
) -> Vec<ConnectionPath> {
    let mut edges = EdgeList::new();
    add_lineage(&mut edges, graph, placement, topo_order);
    add_sessions(&mut edges, graph, placement, depth_order);
    edges.edges
}

/// One parent → child edge per commit with a resolvable parent
fn add_lineage(
    edges: &mut EdgeList,
    graph: &CommitGraph<'_>,
    placement: &Placement<'_>,
    topo_order: &[usize],
) {
    for &child in topo_order {
        let Some(parent) = graph.parents[child] else {
            continue;
        };
        let from = &placement.commits[parent];
        let to = &placement.commits[child];
        let style = if from.lane == to.lane {
            LineStyle::Straight
        } else {
            LineStyle::Curved
        };
        edges.push(ConnectionKind::Lineage, style, from, to);
    }
}

fn add_sessions(
    edges: &mut EdgeList,
    graph: &CommitGraph<'_>,
    placement: &Placement<'_>,
    depth_order: &[usize],
) {
    for (pos, &i) in depth_order.iter().enumerate() {
        let (Some(context), Some(node)) = (&graph.commits[i].context, &placement.contexts[i]) else {
            continue;
        };

        let predecessor = if context.is_new_session {
            None
        } else {
            let found = depth_order[..pos].iter().rev().copied().find(|&j| {
                graph.commits[j]
                    .context
                    .as_ref()
                    .is_some_and(|c| c.context_id == context.context_id)
            });
            if found.is_none() {
                debug!(
                    sha = %graph.commits[i].sha,
                    context_id = %context.context_id,
                    "continued session has no earlier commit, treating as new session"
                );
            }
            found
        };

        match predecessor.and_then(|j| placement.contexts[j].as_ref()) {
            Some(prev) => edges.push(ConnectionKind::Continuation, LineStyle::Straight, prev, node),
            None => {
                let origin = branch_origin(graph, placement, depth_order, pos);
                edges.push(ConnectionKind::BranchOut, LineStyle::Curved, origin, node);
            }
        }

        let next = depth_order.get(pos + 1).copied();
        let session_ends = next.is_none_or(|n| match &graph.commits[n].context {
            None => true,
            Some(c) => c.context_id != context.context_id || c.is_new_session,
        });
        if session_ends {
            let target = &placement.commits[next.unwrap_or(i)];
            edges.push(ConnectionKind::MergeBack, LineStyle::Curved, node, target);
        }
    }
}

/// Git node a new session branches out of
///
/// The commit's own node, unless the previous commit in depth order has no
/// context of its own, in which case the session peels off from there.
fn branch_origin<'n>(
    graph: &CommitGraph<'_>,
    placement: &Placement<'n>,
    depth_order: &[usize],
    pos: usize,
) -> &'n LayoutNode {
    let own = depth_order[pos];
    let origin = pos
        .checked_sub(1)
        .map(|p| depth_order[p])
        .filter(|&prev| graph.commits[prev].context.is_none())
        .unwrap_or(own);
    &placement.commits[origin]
}
