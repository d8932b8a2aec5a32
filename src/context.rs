//! Conversation context source
//!
//! Loads Claude session records from a JSON file and attaches them to
//! commits by SHA.
//!
//! The file is either a bare array of records keyed by commit hash, or an
//! object that also carries the transcripts keyed by `context_id`:
//!
//! ```json
//! {
//!   "contexts": [
//!     { "commit_sha": "abc123...", "context_id": "ctx-550e8400",
//!       "total_messages": 10, "new_session": true }
//!   ],
//!   "conversations": {
//!     "ctx-550e8400": { "messages": [
//!       { "type": "user", "content": "...", "timestamp": "...",
//!         "uuid": "a1", "parentUuid": null }
//!     ] }
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::model::{Commit, Conversation, ConversationContext};

/// Contexts keyed by full commit SHA
pub type ContextMap = HashMap<String, ConversationContext>;

/// Transcripts keyed by `context_id`
pub type ConversationMap = HashMap<String, Conversation>;

/// Errors that can occur when loading a context file
#[derive(Error, Debug)]
pub enum ContextError {
    #[error("Failed to read context file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid context file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parsed content of a context file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextFile {
    pub contexts: ContextMap,
    pub conversations: ConversationMap,
}

/// Top-level shapes accepted for a context file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawContextFile {
    Records(Vec<ContextRecord>),
    Full {
        contexts: Vec<ContextRecord>,
        #[serde(default)]
        conversations: HashMap<String, Conversation>,
    },
}

/// One record of the context file
#[derive(Debug, Deserialize)]
struct ContextRecord {
    commit_sha: String,
    context_id: String,
    #[serde(default)]
    total_messages: u32,
    #[serde(alias = "is_new_session")]
    new_session: bool,
}

/// Parse a context file from JSON text
///
/// Later records for the same commit replace earlier ones. A transcript
/// without a `context_id` takes the key it is stored under.
pub fn parse_context_file(json: &str) -> Result<ContextFile, serde_json::Error> {
    let (records, conversations) = match serde_json::from_str(json)? {
        RawContextFile::Records(records) => (records, HashMap::new()),
        RawContextFile::Full {
            contexts,
            conversations,
        } => (contexts, conversations),
    };

    let contexts = records
        .into_iter()
        .map(|r| {
            (
                r.commit_sha,
                ConversationContext::new(r.context_id, r.total_messages, r.new_session),
            )
        })
        .collect();
    let conversations = conversations
        .into_iter()
        .map(|(key, mut conversation)| {
            if conversation.context_id.is_empty() {
                conversation.context_id = key.clone();
            }
            (key, conversation)
        })
        .collect();

    Ok(ContextFile {
        contexts,
        conversations,
    })
}

/// Parse only the context records from JSON text
pub fn parse_contexts(json: &str) -> Result<ContextMap, serde_json::Error> {
    parse_context_file(json).map(|file| file.contexts)
}

/// Load a context file from disk
pub fn load_contexts(path: &Path) -> Result<ContextFile, ContextError> {
    let json = fs::read_to_string(path).map_err(|source| ContextError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file = parse_context_file(&json).map_err(|source| ContextError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        contexts = file.contexts.len(),
        conversations = file.conversations.len(),
        "loaded conversation contexts"
    );
    Ok(file)
}

/// Attach contexts to the matching commits
///
/// Commits without a record keep whatever context they already had.
/// Returns the number of commits that received a context.
pub fn attach_contexts(commits: &mut [Commit], contexts: &ContextMap) -> usize {
    let mut attached = 0;
    for commit in commits.iter_mut() {
        if let Some(context) = contexts.get(&commit.sha) {
            commit.context = Some(context.clone());
            attached += 1;
        }
    }
    attached
}
