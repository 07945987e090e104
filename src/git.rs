//! Git operations and the models parsed from git's textual output.
//!
//! Nothing here reads the object store: every model is built from the output
//! of a `git` subprocess, so correctness is bounded by the stability of those
//! output formats.

mod branch;
mod commit;
mod error;
mod repository;
mod status;
mod tracking;

pub use branch::{BRANCH_FORMAT, Branch, BranchScope, is_remote_branch_name, parse_branch_output};
pub use commit::{
    Commit, LOG_FORMAT, LogQuery, count_by_author, filter_by_message, parse_log_output,
};
pub use error::GitError;
pub use repository::Repository;
pub use status::{
    Category, FileEntry, RepositoryStatus, StatusCode, parse_porcelain_status, status_description,
};
pub use tracking::{RemoteTracking, parse_ahead_behind};
