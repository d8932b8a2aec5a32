//! Git integration tests.
//!
//! Loads history from real temporary repositories and runs the layout on it.

#[macro_use]
#[path = "common/mod.rs"]
mod common;

use common::TestRepo;
use ctxgraph::compute_layout;
use ctxgraph::git::{self, GitError, GitExecutor};
use ctxgraph::model::{ConnectionKind, LineStyle};
use ctxgraph::source::{CommitSource, SourceError};

#[test]
fn test_load_linear_history() {
    skip_if_no_git!();
    let mut repo = TestRepo::new();
    let a = repo.commit("First");
    let b = repo.commit("Second");
    let c = repo.commit("Third");

    let executor = GitExecutor::with_repo_path(repo.path());
    let commits = git::load_commits(&executor, None).expect("log should succeed");

    // Newest first
    let shas: Vec<&str> = commits.iter().map(|c| c.sha.as_str()).collect();
    assert_eq!(shas, vec![c.as_str(), b.as_str(), a.as_str()]);
    assert_eq!(commits[0].parent_sha.as_deref(), Some(b.as_str()));
    assert_eq!(commits[2].parent_sha, None);
    assert_eq!(commits[0].message, "Third");
    assert_eq!(commits[0].author_email, "test@example.com");
    assert_eq!(commits[0].primary_branch(), Some("main"));

    let layout = compute_layout(&commits);
    for (sha, depth) in [(&a, 0), (&b, 1), (&c, 2)] {
        let node = layout.commit_node(sha).unwrap();
        assert_eq!((node.lane, node.depth), (0, depth), "{sha}");
    }
    assert_eq!(layout.connections_of(ConnectionKind::Lineage).count(), 2);
}

#[test]
fn test_branches_get_separate_lanes() {
    skip_if_no_git!();
    let mut repo = TestRepo::new();
    let root = repo.commit("Root");
    let main_tip = repo.commit("Main work");
    repo.git(&["checkout", "--quiet", &root]);
    repo.branch("feature");
    let feature_tip = repo.commit("Feature work");

    let executor = GitExecutor::with_repo_path(repo.path());
    let commits = git::load_commits(&executor, None).unwrap();
    assert_eq!(commits.len(), 3, "both branches are listed");

    let layout = compute_layout(&commits);
    let main_node = layout.commit_node(&main_tip).unwrap();
    let feature_node = layout.commit_node(&feature_tip).unwrap();
    assert_eq!(main_node.depth, 1);
    assert_eq!(feature_node.depth, 1);
    assert_ne!(main_node.lane, feature_node.lane);

    let styles: Vec<LineStyle> = layout
        .connections_of(ConnectionKind::Lineage)
        .map(|c| c.style)
        .collect();
    assert_eq!(styles.len(), 2);
    assert!(styles.contains(&LineStyle::Straight));
    assert!(styles.contains(&LineStyle::Curved));
}

#[test]
fn test_merge_commit_keeps_first_parent() {
    skip_if_no_git!();
    let mut repo = TestRepo::new();
    repo.commit("Root");
    repo.branch("feature");
    repo.write_file("feature.txt", "feature");
    repo.git(&["add", "feature.txt"]);
    repo.git(&["commit", "--quiet", "-m", "Feature"]);
    repo.checkout("main");
    let main_tip = repo.commit("Main work");
    repo.git(&["merge", "--quiet", "--no-ff", "--no-edit", "feature"]);
    let merge = repo.head();

    let executor = GitExecutor::with_repo_path(repo.path());
    let commits = git::load_commits(&executor, None).unwrap();
    let merge_commit = commits.iter().find(|c| c.sha == merge).unwrap();
    assert_eq!(merge_commit.parent_sha.as_deref(), Some(main_tip.as_str()));
}

#[test]
fn test_limit_truncates_history() {
    skip_if_no_git!();
    let mut repo = TestRepo::new();
    for i in 0..5 {
        repo.commit(&format!("Commit {i}"));
    }

    let executor = GitExecutor::with_repo_path(repo.path());
    let commits = git::load_commits(&executor, Some(2)).unwrap();
    assert_eq!(commits.len(), 2);

    // The oldest loaded commit points outside the window and becomes a root
    let layout = compute_layout(&commits);
    let mut depths: Vec<usize> = layout.commit_nodes.iter().map(|n| n.depth).collect();
    depths.sort();
    assert_eq!(depths, vec![0, 1]);
}

#[test]
fn test_not_a_repository() {
    skip_if_no_git!();
    let dir = tempfile::tempdir().unwrap();
    let executor = GitExecutor::with_repo_path(dir.path());

    let result = executor.check_repository();
    assert!(matches!(result, Err(GitError::NotARepository)));
}

#[test]
fn test_source_attaches_contexts() {
    skip_if_no_git!();
    let mut repo = TestRepo::new();
    let a = repo.commit("Add auth");
    let b = repo.commit("Refactor auth");
    let c = repo.commit("Bump deps");

    let contexts = format!(
        r#"[
            {{"commit_sha": "{a}", "context_id": "ctx-1", "total_messages": 10, "new_session": true}},
            {{"commit_sha": "{b}", "context_id": "ctx-1", "total_messages": 8, "new_session": false}}
        ]"#
    );
    let contexts_path = repo.path().join("contexts.json");
    std::fs::write(&contexts_path, contexts).unwrap();

    let source = CommitSource::Git {
        executor: GitExecutor::with_repo_path(repo.path()),
        limit: None,
        contexts: Some(contexts_path),
    };
    let history = source.load().expect("load should succeed");
    let layout = compute_layout(&history.commits);

    assert_eq!(layout.context_nodes.len(), 2);
    assert_eq!(layout.connections_of(ConnectionKind::BranchOut).count(), 1);
    assert_eq!(layout.connections_of(ConnectionKind::Continuation).count(), 1);

    let merge_backs: Vec<_> = layout.connections_of(ConnectionKind::MergeBack).collect();
    assert_eq!(merge_backs.len(), 1);
    assert_eq!(merge_backs[0].from.sha, b);
    assert_eq!(merge_backs[0].to.sha, c);
}

#[test]
fn test_source_loads_transcripts() {
    skip_if_no_git!();
    let mut repo = TestRepo::new();
    let a = repo.commit("Add auth");

    let contexts = format!(
        r#"{{
            "contexts": [
                {{"commit_sha": "{a}", "context_id": "ctx-1", "total_messages": 2, "new_session": true}}
            ],
            "conversations": {{
                "ctx-1": {{"context_id": "ctx-1", "messages": [
                    {{"type": "user", "content": "Add auth please", "uuid": "a1", "parentUuid": null}},
                    {{"type": "assistant", "content": "Done", "uuid": "a2", "parentUuid": "a1"}}
                ]}}
            }}
        }}"#
    );
    let contexts_path = repo.path().join("contexts.json");
    std::fs::write(&contexts_path, contexts).unwrap();

    let source = CommitSource::Git {
        executor: GitExecutor::with_repo_path(repo.path()),
        limit: None,
        contexts: Some(contexts_path),
    };
    let history = source.load().expect("load should succeed");

    assert_eq!(history.commits[0].context.as_ref().unwrap().context_id, "ctx-1");
    let messages = &history.conversations["ctx-1"].messages;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].content, "Add auth please");
}

#[test]
fn test_source_reports_bad_context_file() {
    skip_if_no_git!();
    let mut repo = TestRepo::new();
    repo.commit("Only");

    let source = CommitSource::Git {
        executor: GitExecutor::with_repo_path(repo.path()),
        limit: None,
        contexts: Some(repo.path().join("missing.json")),
    };
    assert!(matches!(source.load(), Err(SourceError::Context(_))));
}
