//! Lane assignment (horizontal slots)

use std::collections::HashMap;

use super::graph::CommitGraph;

/// Assign each commit a lane, visiting commits in `order`
///
/// `order` must be parent-before-child. Rules, in priority order:
/// - a commit whose parent already has a lane inherits it if it is the
///   parent's only child or its first child; later siblings open new lanes
/// - otherwise a commit reuses the lane bound to its primary branch, or
///   binds a new lane to that branch
/// - otherwise it gets a new lane
///
/// Only commits placed without a parent lane bind branch names; a branch
/// tip that inherited its lane leaves the name unbound.
pub(crate) fn assign_lanes(graph: &CommitGraph<'_>, order: &[usize]) -> Vec<usize> {
    let mut lanes: Vec<Option<usize>> = vec![None; graph.len()];
    let mut branch_lanes: HashMap<&str, usize> = HashMap::new();
    let mut next_lane = 0;
    let mut fresh_lane = || {
        let lane = next_lane;
        next_lane += 1;
        lane
    };

    for &i in order {
        let commit = graph.commits[i];
        let branch = commit.primary_branch();

        let lane = match graph.parents[i].and_then(|p| lanes[p].map(|lane| (p, lane))) {
            Some((parent, parent_lane)) => {
                if graph.children[parent].first() == Some(&i) {
                    parent_lane
                } else {
                    fresh_lane()
                }
            }
            None => match branch {
                Some(name) => *branch_lanes.entry(name).or_insert_with(&mut fresh_lane),
                None => fresh_lane(),
            },
        };
        lanes[i] = Some(lane);
    }

    // Every index appears in a topological order, so this only guards
    // against callers passing a partial order.
    lanes
        .into_iter()
        .map(|lane| lane.unwrap_or_else(&mut fresh_lane))
        .collect()
}
