//! Style constants and emojis for terminal output
//!
//! # Styling with color-print
//!
//! Use `cformat!` with HTML-like tags for user-facing messages:
//!
//! ```
//! use color_print::cformat;
//!
//! let branch = "feature";
//! let msg = cformat!("<red>Not on branch <bold>{branch}</></>");
//! assert!(msg.contains("feature"));
//! ```
//!
//! # anstyle constants
//!
//! Renderers compose `Style` constants with `StyledLine` where styles are
//! chosen at runtime (per bucket, per branch kind).

use anstyle::{AnsiColor, Color, Style};

const fn fg(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

// ============================================================================
// Semantic Style Constants
// ============================================================================

/// Section headers (bold blue)
pub const HEADER: Style = fg(AnsiColor::Blue).bold();

/// Labels preceding a value, e.g. `Remote: ` (cyan)
pub const LABEL: Style = fg(AnsiColor::Cyan);

/// Values following a label (white)
pub const VALUE: Style = fg(AnsiColor::White);

/// Commit hashes (yellow)
pub const HASH: Style = fg(AnsiColor::Yellow);

/// Author names (green)
pub const AUTHOR: Style = fg(AnsiColor::Green);

/// Dates (cyan)
pub const DATE: Style = fg(AnsiColor::Cyan);

/// Conflicted files (red)
pub const CONFLICT: Style = fg(AnsiColor::Red);

/// Staged files (green)
pub const STAGED: Style = fg(AnsiColor::Green);

/// Modified, unstaged files (yellow)
pub const MODIFIED: Style = fg(AnsiColor::Yellow);

/// Untracked files (cyan)
pub const UNTRACKED: Style = fg(AnsiColor::Cyan);

/// Clean working tree / in-sync messages (green)
pub const CLEAN: Style = fg(AnsiColor::Green);

/// Commits ahead of upstream (green)
pub const AHEAD: Style = fg(AnsiColor::Green);

/// Commits behind upstream (yellow)
pub const BEHIND: Style = fg(AnsiColor::Yellow);

/// Local branches (green)
pub const LOCAL_BRANCH: Style = fg(AnsiColor::Green);

/// Remote branches (red)
pub const REMOTE_BRANCH: Style = fg(AnsiColor::Red);

/// The checked-out branch (yellow)
pub const CURRENT_BRANCH: Style = fg(AnsiColor::Yellow);

/// Graph lane for feature work (green)
pub const LANE_FEATURE: Style = fg(AnsiColor::Green);

/// Graph lane for hotfixes (red)
pub const LANE_HOTFIX: Style = fg(AnsiColor::Red);

/// Graph lane for develop (blue)
pub const LANE_DEVELOP: Style = fg(AnsiColor::Blue);

/// Graph lane for everything else (yellow)
pub const LANE_MAIN: Style = fg(AnsiColor::Yellow);

/// Bold, uncolored
pub const BOLD: Style = Style::new().bold();

// ============================================================================
// Message Emojis
// ============================================================================

/// Error emoji: `cformat!("{ERROR_EMOJI} <red>message</>")`
pub const ERROR_EMOJI: &str = "❌";

/// Hint emoji: `cformat!("{HINT_EMOJI} <dim>message</>")`
pub const HINT_EMOJI: &str = "💡";

/// Repository root in tree views
pub const REPOSITORY_EMOJI: &str = "📁";

/// Local branch group in tree views
pub const LOCAL_EMOJI: &str = "🌿";

/// Remote branch group in tree views
pub const REMOTE_EMOJI: &str = "🌐";
