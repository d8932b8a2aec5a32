//! Depth assignment (vertical slots)

use std::collections::VecDeque;

use tracing::debug;

use super::graph::CommitGraph;

/// Assign each commit its distance from a root
///
/// Breadth-first from all roots at once; a commit is finalized on first
/// visit. Commits the traversal never reaches (cycles, or chains hanging off
/// a cycle) fall back to their position in the caller's input, counting
/// dropped duplicates.
pub(crate) fn assign_depths(graph: &CommitGraph<'_>) -> Vec<usize> {
    let mut depths: Vec<Option<usize>> = vec![None; graph.len()];
    let mut queue: VecDeque<(usize, usize)> = graph.roots().map(|i| (i, 0)).collect();

    while let Some((i, depth)) = queue.pop_front() {
        if depths[i].is_some() {
            continue;
        }
        depths[i] = Some(depth);
        for &child in &graph.children[i] {
            if depths[child].is_none() {
                queue.push_back((child, depth + 1));
            }
        }
    }

    depths
        .into_iter()
        .enumerate()
        .map(|(i, depth)| {
            depth.unwrap_or_else(|| {
                let fallback = graph.positions[i];
                debug!(sha = %graph.commits[i].sha, fallback, "commit unreachable from any root");
                fallback
            })
        })
        .collect()
}
