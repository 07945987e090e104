use crate::common::TestRepo;

/// `main` (current) and `feature/login`, one commit each.
fn repo_with_branches() -> TestRepo {
    let repo = TestRepo::with_initial_commit();
    repo.git(&["checkout", "-b", "feature/login"]);
    repo.commit_file("login.rs", "fn login() {}\n", "Add login feature");
    repo.git(&["checkout", "main"]);
    repo
}

#[test]
fn test_branch_default_lists_local() {
    let repo = repo_with_branches();
    let out = repo.glimpse_ok(&["branch"]);
    assert_eq!(out, "  feature/login\n* main\n");
}

#[test]
fn test_branch_with_dates() {
    let repo = repo_with_branches();
    let out = repo.glimpse_ok(&["branch", "-d"]);
    assert_eq!(out, "  feature/login (2025-01-01)\n* main (2025-01-01)\n");
}

#[test]
fn test_branch_with_dates_from_config() {
    let repo = repo_with_branches();
    repo.write_config("with-dates = true\n");
    let out = repo.glimpse_ok(&["branch"]);
    assert!(out.contains("* main (2025-01-01)"));
}

#[test]
fn test_branch_remote_without_remotes() {
    let repo = repo_with_branches();
    let out = repo.glimpse_ok(&["branch", "--remote"]);
    assert_eq!(out, "No branches found.\n");
}

#[test]
fn test_branch_all_includes_remote_and_skips_head_symref() {
    let repo = repo_with_branches();
    repo.setup_remote();
    repo.git(&["remote", "set-head", "origin", "main"]);

    let out = repo.glimpse_ok(&["branch", "-a", "-f", "json"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let names: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["feature/login", "main", "origin/main"]);

    let remote = &value[2];
    assert_eq!(remote["is_remote"], true);
    assert_eq!(remote["is_current"], false);
    assert_eq!(remote["last_commit_message"], "Initial commit");
    assert_eq!(remote["last_commit_author"], "Test User");
    assert_eq!(value[1]["is_current"], true);
}

#[test]
fn test_branch_remote_only() {
    let repo = repo_with_branches();
    repo.setup_remote();
    let out = repo.glimpse_ok(&["branch", "-r"]);
    assert_eq!(out, "  origin/main\n");
}

#[test]
fn test_branch_tree() {
    let repo = repo_with_branches();
    repo.setup_remote();
    let out = repo.glimpse_ok(&["branch", "--tree", "--all"]);
    insta::assert_snapshot!(out.trim_end(), @"
    Git Branch Tree

    📁 Repository
    │
    ├── 🌿 Local Branches
    │   ├──   feature/login
    │   ├── * main
    │
    └── 🌐 Remote Branches
        └── origin/main

    Current branch: main
    ");
}

#[test]
fn test_branch_tree_from_config() {
    let repo = repo_with_branches();
    repo.write_config("branch-format = \"tree\"\n");
    let out = repo.glimpse_ok(&["branch"]);
    assert!(out.starts_with("Git Branch Tree\n"));
    assert!(out.contains("│   └── * main"));
}

#[test]
fn test_branch_table() {
    let repo = repo_with_branches();
    let out = repo.glimpse_ok(&["branch", "-f", "table"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Git Branches");
    assert!(lines[2].starts_with("Branch               Type       Last Commit     Message"));
    assert!(lines[4].starts_with("feature/login        local      2025-01-01      Add login feature"));
    assert!(lines[4].ends_with("Test User"));
    assert!(lines[5].starts_with("main                 current    2025-01-01      Initial commit"));
}

#[test]
fn test_branch_graph() {
    let repo = TestRepo::with_initial_commit();
    repo.git(&["checkout", "-b", "feature/login"]);
    repo.commit_file("login.rs", "fn login() {}\n", "Add login feature");
    repo.git(&["checkout", "main"]);
    repo.commit_file("main.rs", "fn main() {}\n", "Hotfix startup crash");
    repo.git(&["merge", "--no-ff", "-m", "Merge branch 'feature/login'", "feature/login"]);

    let out = repo.glimpse_ok(&["branch", "--graph"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Git Branch Graph");
    assert_eq!(lines[2], "Commit Graph:");
    assert_eq!(lines[4], "  │");
    assert!(lines[5].starts_with("  ├─╮ "));
    assert!(lines[5].ends_with(" Merge branch 'feature/login'"));
    assert!(out.contains(" Initial commit by Test User\n"));
    assert!(out.contains("Legend:\n"));
}

#[test]
fn test_branch_graph_limits_depth() {
    let repo = TestRepo::with_initial_commit();
    for i in 0..12 {
        repo.commit(&format!("Change {i}"));
    }
    let out = repo.glimpse_ok(&["branch", "-g"]);
    assert_eq!(out.matches('●').count() - 3, 10);
    assert!(!out.contains("Initial commit"));
}
