//! Library-level tests for `Repository` against real repositories.

use glimpse::git::{BranchScope, GitError, LogQuery, Repository};

use crate::common::TestRepo;

#[test]
fn test_open_rejects_non_repository() {
    let repo = TestRepo::new();
    let outside = repo.base_path().join("plain");
    std::fs::create_dir(&outside).unwrap();
    // No GIT_CEILING_DIRECTORIES here; a temp dir is never inside a work tree
    let err = Repository::open(&outside).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<GitError>(),
        Some(GitError::NotARepository { .. })
    ));
}

#[test]
fn test_current_branch() {
    let repo = TestRepo::with_initial_commit();
    let repository = Repository::open(repo.root_path()).unwrap();
    assert_eq!(repository.current_branch().unwrap().as_deref(), Some("main"));

    repo.git(&["checkout", "--detach"]);
    assert_eq!(repository.current_branch().unwrap(), None);
}

#[test]
fn test_remote_tracking_without_upstream() {
    let repo = TestRepo::with_initial_commit();
    let repository = Repository::open(repo.root_path()).unwrap();
    assert_eq!(repository.upstream_branch("main"), None);
    assert_eq!(repository.remote_tracking("main"), None);
    assert_eq!(repository.remote_tracking(""), None);

    let status = repository.repository_status().unwrap();
    assert_eq!(status.remote_branch(), None);
    assert_eq!((status.ahead(), status.behind()), (0, 0));
    assert!(status.is_clean());
}

#[test]
fn test_remote_tracking_counts_divergence() {
    let repo = TestRepo::with_initial_commit();
    repo.commit("Second commit");
    repo.setup_remote();
    repo.git(&["reset", "--hard", "HEAD~1"]);
    repo.commit("Local only");

    let repository = Repository::open(repo.root_path()).unwrap();
    let tracking = repository.remote_tracking("main").unwrap();
    assert_eq!(tracking.upstream, "origin/main");
    assert_eq!((tracking.ahead, tracking.behind), (1, 1));
    assert_eq!(
        repository.ahead_behind("main", "origin/main"),
        Some((1, 1))
    );
}

#[test]
fn test_ahead_behind_unknown_ref() {
    let repo = TestRepo::with_initial_commit();
    let repository = Repository::open(repo.root_path()).unwrap();
    assert_eq!(repository.ahead_behind("main", "origin/missing"), None);
}

#[test]
fn test_repository_status_buckets() {
    let repo = TestRepo::with_initial_commit();
    repo.write_file("staged.txt", "new\n");
    repo.git(&["add", "staged.txt"]);
    repo.write_file("file.txt", "modified\n");
    repo.write_file("untracked.txt", "?\n");

    let repository = Repository::open(repo.root_path()).unwrap();
    let status = repository.repository_status().unwrap();
    assert_eq!(status.branch(), "main");
    assert_eq!(status.staged()[0].path(), "staged.txt");
    assert_eq!(status.staged()[0].display_status(), 'A');
    assert_eq!(status.modified()[0].path(), "file.txt");
    assert_eq!(status.untracked()[0].path(), "untracked.txt");
    assert!(status.conflicts().is_empty());
    assert!(!status.is_clean());
}

#[test]
fn test_commits_with_query() {
    let repo = TestRepo::new();
    repo.commit_as("Alice", "2024-01-01T00:00:00Z", "First");
    repo.commit_as("Bob", "2024-06-01T00:00:00Z", "Second");

    let repository = Repository::open(repo.root_path()).unwrap();
    let all = repository.commits(&LogQuery::default()).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].message, "Second");

    let bob = repository
        .commits(&LogQuery {
            author: Some("Bob".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(bob.len(), 1);
    assert_eq!(bob[0].author, "Bob");

    assert_eq!(repository.recent_commits(1).unwrap().len(), 1);
}

#[test]
fn test_branches_by_scope() {
    let repo = TestRepo::with_initial_commit();
    repo.git(&["branch", "topic"]);
    repo.setup_remote();

    let repository = Repository::open(repo.root_path()).unwrap();
    let local = repository.branches(BranchScope::Local).unwrap();
    assert_eq!(local.len(), 2);
    assert!(local.iter().all(|b| !b.is_remote));
    assert!(local.iter().any(|b| b.name == "main" && b.is_current));

    let remote = repository.branches(BranchScope::Remote).unwrap();
    assert_eq!(remote.len(), 1);
    assert_eq!(remote[0].name, "origin/main");
    assert!(remote[0].is_remote);

    assert_eq!(repository.branches(BranchScope::All).unwrap().len(), 3);
}

#[test]
fn test_remote_tracking_keeps_upstream_when_counting_fails() {
    let repo = TestRepo::with_initial_commit();
    repo.setup_remote();
    // Point the upstream at a blob so rev-list cannot walk it
    let blob = repo.git(&["hash-object", "-w", "file.txt"]);
    repo.git(&["update-ref", "refs/remotes/origin/main", blob.trim()]);

    let repository = Repository::open(repo.root_path()).unwrap();
    assert_eq!(repository.ahead_behind("main", "origin/main"), None);

    let tracking = repository.remote_tracking("main").unwrap();
    assert_eq!(tracking.upstream, "origin/main");
    assert_eq!((tracking.ahead, tracking.behind), (0, 0));

    let status = repository.repository_status().unwrap();
    assert_eq!(status.remote_branch(), Some("origin/main"));
    assert_eq!((status.ahead(), status.behind()), (0, 0));
}

#[test]
fn test_status_keeps_non_ascii_paths_readable() {
    let repo = TestRepo::with_initial_commit();
    repo.write_file("café.txt", "bonjour\n");
    repo.write_file("docs/naïve notes.md", "x\n");

    let repository = Repository::open(repo.root_path()).unwrap();
    let status = repository.repository_status().unwrap();
    let paths: Vec<&str> = status.untracked().iter().map(|f| f.path()).collect();
    assert_eq!(paths, ["café.txt", "docs/"]);
}
