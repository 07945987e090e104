//! Remote-tracking (upstream) information.

/// Upstream branch and divergence counts for the checked-out branch.
///
/// `ahead` counts commits only on the local side, `behind` commits only on
/// the upstream side. Both come straight from git; nothing is recomputed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteTracking {
    pub upstream: String,
    pub ahead: usize,
    pub behind: usize,
}

/// Parse `git rev-list --left-right --count A...B` output.
///
/// Requires exactly two whitespace-separated non-negative integers, local
/// count first.
pub fn parse_ahead_behind(output: &str) -> Option<(usize, usize)> {
    let mut parts = output.split_whitespace();
    let ahead = parts.next()?.parse().ok()?;
    let behind = parts.next()?.parse().ok()?;
    parts.next().is_none().then_some((ahead, behind))
}
