use crate::dependency_model::domain::{GraphStatistics, Scope};
use std::collections::BTreeSet;

/// ExpandResponse - Result DTO of scope reconstruction
///
/// Statistics are computed over the reconstructed scopes only, so a scope
/// filter is reflected in the expanded node count.
#[derive(Debug, Clone)]
pub struct ExpandResponse {
    /// Reconstructed scopes, ordered by name
    pub scopes: BTreeSet<Scope>,
    /// Present when the request asked for statistics
    pub statistics: Option<GraphStatistics>,
    /// Number of issues attached to nodes of the reconstructed trees
    pub issue_count: usize,
}

impl ExpandResponse {
    pub fn new(
        scopes: BTreeSet<Scope>,
        statistics: Option<GraphStatistics>,
        issue_count: usize,
    ) -> Self {
        Self {
            scopes,
            statistics,
            issue_count,
        }
    }

    /// Used for the `--fail-on-issues` exit code
    pub fn has_issues(&self) -> bool {
        self.issue_count > 0
    }
}
