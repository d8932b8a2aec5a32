//! Where the viewer gets its commits from
//!
//! Either a git repository (optionally joined with a conversation context
//! file) or the built-in sample history.

use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::context::{self, ContextError, ConversationMap};
use crate::demo;
use crate::git::{self, GitError, GitExecutor};
use crate::model::Commit;

/// Errors that can occur when loading commits
#[derive(Error, Debug)]
pub enum SourceError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Context(#[from] ContextError),
}

/// Everything one load produces
#[derive(Debug, Clone, Default)]
pub struct History {
    pub commits: Vec<Commit>,
    /// Transcripts keyed by `context_id`
    pub conversations: ConversationMap,
}

/// Commit source for the viewer
#[derive(Debug, Clone)]
pub enum CommitSource {
    /// Read history from a git repository
    Git {
        executor: GitExecutor,
        /// Maximum number of commits to load
        limit: Option<usize>,
        /// JSON file with conversation contexts keyed by commit SHA,
        /// optionally with their transcripts
        contexts: Option<PathBuf>,
    },
    /// Built-in sample history
    Demo,
}

impl CommitSource {
    /// Load commits, newest first for git and oldest first for the demo
    ///
    /// The layout does not depend on input order, so callers need not sort.
    pub fn load(&self) -> Result<History, SourceError> {
        match self {
            Self::Git {
                executor,
                limit,
                contexts,
            } => {
                executor.check_repository()?;
                let mut commits = git::load_commits(executor, *limit)?;
                let Some(path) = contexts else {
                    return Ok(History {
                        commits,
                        conversations: ConversationMap::new(),
                    });
                };
                let file = context::load_contexts(path)?;
                let attached = context::attach_contexts(&mut commits, &file.contexts);
                debug!(attached, total = commits.len(), "attached conversation contexts");
                Ok(History {
                    commits,
                    conversations: file.conversations,
                })
            }
            Self::Demo => Ok(History {
                commits: demo::sample_commits(),
                conversations: demo::sample_conversations(),
            }),
        }
    }

    /// Short label for the title bar
    pub fn label(&self) -> String {
        match self {
            Self::Git { executor, .. } => match executor.repo_path() {
                Some(path) => path.display().to_string(),
                None => ".".to_string(),
            },
            Self::Demo => "demo".to_string(),
        }
    }
}
