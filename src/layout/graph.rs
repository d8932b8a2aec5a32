//! Adjacency index over the input commits
//!
//! Resolves parent links once so the layout passes can work with indices.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::model::Commit;

/// Commits deduplicated by SHA with resolved parent/child links
///
/// Duplicate SHAs keep the last occurrence. A parent is resolvable only if
/// it is present in the set and is not the commit itself.
#[derive(Debug)]
pub(crate) struct CommitGraph<'a> {
    pub commits: Vec<&'a Commit>,
    /// Index of each kept commit in the caller's input
    pub positions: Vec<usize>,
    pub parents: Vec<Option<usize>>,
    /// Children of each commit, in input order
    pub children: Vec<Vec<usize>>,
}

impl<'a> CommitGraph<'a> {
    pub fn build(input: &'a [Commit]) -> Self {
        let mut seen = HashSet::new();
        let mut kept: Vec<(usize, &Commit)> = input
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, c)| seen.insert(c.sha.as_str()))
            .collect();
        kept.reverse();
        let (positions, commits): (Vec<usize>, Vec<&Commit>) = kept.into_iter().unzip();

        if commits.len() != input.len() {
            debug!(
                duplicates = input.len() - commits.len(),
                "duplicate commit SHAs in layout input, keeping last occurrence"
            );
        }

        let index: HashMap<&str, usize> = commits
            .iter()
            .enumerate()
            .map(|(i, c)| (c.sha.as_str(), i))
            .collect();

        let mut parents = Vec::with_capacity(commits.len());
        let mut children = vec![Vec::new(); commits.len()];

        for (i, commit) in commits.iter().enumerate() {
            let parent = match commit.parent_sha.as_deref() {
                None => None,
                Some(sha) if sha == commit.sha => {
                    debug!(sha = %commit.sha, "commit lists itself as parent, treating as root");
                    None
                }
                Some(sha) => match index.get(sha) {
                    Some(&p) => Some(p),
                    None => {
                        debug!(sha = %commit.sha, parent = sha, "parent not in input, treating as root");
                        None
                    }
                },
            };
            if let Some(p) = parent {
                children[p].push(i);
            }
            parents.push(parent);
        }

        Self {
            commits,
            positions,
            parents,
            children,
        }
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Commits with no resolvable parent, in input order
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(|&i| self.parents[i].is_none())
    }

    /// Parent-before-child order
    ///
    /// Visits commits in input order, walking up to the oldest unvisited
    /// ancestor first, so independent chains keep their relative order.
    /// Cycles are cut where the walk meets an already visited commit.
    pub fn topological_order(&self) -> Vec<usize> {
        let mut visited = vec![false; self.len()];
        let mut order = Vec::with_capacity(self.len());
        let mut chain = Vec::new();

        for start in 0..self.len() {
            let mut current = Some(start);
            while let Some(i) = current {
                if visited[i] {
                    break;
                }
                visited[i] = true;
                chain.push(i);
                current = self.parents[i];
            }
            order.extend(chain.drain(..).rev());
        }

        order
    }
}
