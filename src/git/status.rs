//! Classification of `git status --porcelain` output.
//!
//! Each changed path arrives as `XY path`, where `X` is the index-vs-HEAD
//! state and `Y` is the worktree-vs-index state. The two positions are
//! independent axes, so a file can be staged and modified at once, and
//! conflict markers may appear in either position. [`StatusCode::classify`]
//! resolves every code to exactly one [`Category`] with a fixed rule order:
//!
//! 1. `U` in either position, or a both-sides pair (`AA`, `DD`): conflict
//! 2. `??`: untracked
//! 3. index position set: staged
//! 4. worktree position set: modified (or untracked for `?`)
//!
//! Anything else, and any line too short to carry a code and a path, is
//! skipped rather than reported.

use serde::Serialize;
use serde::ser::SerializeStruct;

use super::tracking::RemoteTracking;

/// Which bucket a changed file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Category {
    #[strum(serialize = "Conflicts")]
    Conflict,
    Staged,
    Modified,
    Untracked,
}

/// A porcelain two-character status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode {
    index: char,
    worktree: char,
}

impl StatusCode {
    pub fn new(index: char, worktree: char) -> Self {
        Self { index, worktree }
    }

    /// Position 0: index vs. last commit.
    pub fn index(&self) -> char {
        self.index
    }

    /// Position 1: worktree vs. index.
    pub fn worktree(&self) -> char {
        self.worktree
    }

    /// Unmerged paths: `U` on either side, or both sides added/deleted.
    pub fn is_conflict(&self) -> bool {
        matches!(
            (self.index, self.worktree),
            ('U', _) | (_, 'U') | ('A', 'A') | ('D', 'D')
        )
    }

    /// Decide the category and the display character for this code.
    ///
    /// Returns `None` for codes that carry no change (e.g. two spaces).
    pub fn classify(&self) -> Option<(Category, char)> {
        if self.is_conflict() {
            return Some((Category::Conflict, 'U'));
        }

        match (self.index, self.worktree) {
            ('?', '?') => Some((Category::Untracked, '?')),
            (index, _) if index != ' ' && index != '?' => Some((Category::Staged, index)),
            (_, '?') => Some((Category::Untracked, '?')),
            (_, worktree) if worktree != ' ' => Some((Category::Modified, worktree)),
            _ => None,
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.index, self.worktree)
    }
}

/// Human-readable label for a display status character.
///
/// Total: unrecognized characters map to `"Unknown"`.
pub fn status_description(status: char) -> &'static str {
    match status {
        'M' => "Modified",
        'A' => "Added",
        'D' => "Deleted",
        'R' => "Renamed",
        'C' => "Copied",
        'U' => "Unmerged",
        '?' => "Untracked",
        _ => "Unknown",
    }
}

/// One changed path and its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: String,
    code: StatusCode,
    category: Category,
    display_status: char,
}

impl FileEntry {
    /// Classify `code` for `path`. `None` if the code carries no change or
    /// the path is empty.
    pub fn new(code: StatusCode, path: impl Into<String>) -> Option<Self> {
        let path = path.into();
        if path.is_empty() {
            return None;
        }
        let (category, display_status) = code.classify()?;
        Some(Self {
            path,
            code,
            category,
            display_status,
        })
    }

    /// Parse one `XY path` line. The path is everything after the separator
    /// following the code, spaces included.
    pub fn from_porcelain_line(line: &str) -> Option<Self> {
        let mut chars = line.chars();
        let index = chars.next()?;
        let worktree = chars.next()?;
        let path = chars.as_str().strip_prefix(' ')?;
        Self::new(StatusCode::new(index, worktree), path)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn code(&self) -> StatusCode {
        self.code
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn display_status(&self) -> char {
        self.display_status
    }

    /// Index-side state, `None` when unchanged or untracked.
    pub fn index_state(&self) -> Option<char> {
        Some(self.code.index).filter(|c| !matches!(c, ' ' | '?'))
    }

    /// Worktree-side state, `None` when unchanged.
    pub fn worktree_state(&self) -> Option<char> {
        Some(self.code.worktree).filter(|c| *c != ' ')
    }

    pub fn description(&self) -> &'static str {
        status_description(self.display_status)
    }
}

impl Serialize for FileEntry {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FileEntry", 3)?;
        state.serialize_field("path", &self.path)?;
        state.serialize_field("status", &self.display_status.to_string())?;
        state.serialize_field("statusCode", &self.code.to_string())?;
        state.end()
    }
}

/// Parse full `git status --porcelain` output, preserving line order.
pub fn parse_porcelain_status(output: &str) -> Vec<FileEntry> {
    output
        .lines()
        .filter_map(|line| {
            let entry = FileEntry::from_porcelain_line(line);
            if entry.is_none() && !line.is_empty() {
                log::debug!("Skipping unrecognized status line: {line:?}");
            }
            entry
        })
        .collect()
}

/// Snapshot of a repository's working-tree state for one invocation.
///
/// Built once via [`RepositoryStatus::from_parts`] and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryStatus {
    branch: String,
    ahead: usize,
    behind: usize,
    staged: Vec<FileEntry>,
    modified: Vec<FileEntry>,
    untracked: Vec<FileEntry>,
    conflicts: Vec<FileEntry>,
    is_clean: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    remote_branch: Option<String>,
}

impl RepositoryStatus {
    /// Assemble a snapshot from the current branch, optional tracking info,
    /// and classified entries.
    pub fn from_parts(
        branch: impl Into<String>,
        tracking: Option<RemoteTracking>,
        entries: impl IntoIterator<Item = FileEntry>,
    ) -> Self {
        let mut status = Self {
            branch: branch.into(),
            ..Default::default()
        };

        if let Some(tracking) = tracking {
            status.ahead = tracking.ahead;
            status.behind = tracking.behind;
            status.remote_branch = Some(tracking.upstream);
        }

        for entry in entries {
            let bucket = match entry.category() {
                Category::Conflict => &mut status.conflicts,
                Category::Staged => &mut status.staged,
                Category::Modified => &mut status.modified,
                Category::Untracked => &mut status.untracked,
            };
            bucket.push(entry);
        }

        status.is_clean = status.staged.is_empty()
            && status.modified.is_empty()
            && status.untracked.is_empty()
            && status.conflicts.is_empty();

        status
    }

    /// Checked-out branch, empty when HEAD is detached.
    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn remote_branch(&self) -> Option<&str> {
        self.remote_branch.as_deref()
    }

    pub fn ahead(&self) -> usize {
        self.ahead
    }

    pub fn behind(&self) -> usize {
        self.behind
    }

    pub fn staged(&self) -> &[FileEntry] {
        &self.staged
    }

    pub fn modified(&self) -> &[FileEntry] {
        &self.modified
    }

    pub fn untracked(&self) -> &[FileEntry] {
        &self.untracked
    }

    pub fn conflicts(&self) -> &[FileEntry] {
        &self.conflicts
    }

    pub fn files(&self, category: Category) -> &[FileEntry] {
        match category {
            Category::Conflict => &self.conflicts,
            Category::Staged => &self.staged,
            Category::Modified => &self.modified,
            Category::Untracked => &self.untracked,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.is_clean
    }
}
