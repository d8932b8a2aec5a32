//! Graph layout engine
//!
//! Turns a flat list of commits into positioned commit and context nodes
//! plus the connections between them. The engine is pure: it never mutates
//! its input, allocates fresh state on every call, and accepts any input
//! shape (empty, unordered, duplicate SHAs, dangling parents, cycles).

mod bounds;
mod config;
mod connections;
mod coords;
mod depth;
mod graph;
mod lane;
mod path;


pub use config::{LayoutConfig, LayoutConfigError, Padding};
pub use path::build_path;

use tracing::trace;

use crate::model::{Commit, GraphLayout};
use connections::Placement;
use graph::CommitGraph;

/// Layout engine holding only its configuration
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Create an engine, rejecting configurations that cannot be laid out
    pub fn new(config: LayoutConfig) -> Result<Self, LayoutConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Compute the full layout for `commits`
    pub fn compute(&self, commits: &[Commit]) -> GraphLayout {
        let config = &self.config;
        let graph = CommitGraph::build(commits);

        let topo_order = graph.topological_order();
        let depths = depth::assign_depths(&graph);
        let lanes = lane::assign_lanes(&graph, &topo_order);

        let commit_nodes: Vec<_> = (0..graph.len())
            .map(|i| coords::commit_node(config, &graph.commits[i].sha, lanes[i], depths[i]))
            .collect();
        let context_nodes: Vec<_> = (0..graph.len())
            .map(|i| {
                graph.commits[i]
                    .context
                    .as_ref()
                    .map(|_| coords::context_node(config, &commit_nodes[i]))
            })
            .collect();

        // Stable sort keeps input order among commits at the same depth
        let mut depth_order: Vec<usize> = (0..graph.len()).collect();
        depth_order.sort_by_key(|&i| depths[i]);

        let connections = connections::build_connections(
            &graph,
            &Placement {
                commits: &commit_nodes,
                contexts: &context_nodes,
            },
            &topo_order,
            &depth_order,
        );

        let ordered_commits: Vec<_> = topo_order.iter().map(|&i| commit_nodes[i].clone()).collect();
        let ordered_contexts: Vec<_> = topo_order
            .iter()
            .filter_map(|&i| context_nodes[i].clone())
            .collect();
        let bounds = bounds::viewport_bounds(config, &ordered_commits, &ordered_contexts);

        trace!(
            commits = ordered_commits.len(),
            contexts = ordered_contexts.len(),
            connections = connections.len(),
            "layout computed"
        );

        GraphLayout {
            commit_nodes: ordered_commits,
            context_nodes: ordered_contexts,
            connections,
            bounds,
        }
    }
}

/// Compute a layout with the default configuration
pub fn compute_layout(commits: &[Commit]) -> GraphLayout {
    LayoutEngine::default().compute(commits)
}
