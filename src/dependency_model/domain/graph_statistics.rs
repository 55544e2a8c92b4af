use super::{DependencyGraph, Scope};
use std::collections::BTreeSet;

/// GraphStatistics value object describing how much the compact form saves
/// compared to the expanded scopes.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStatistics {
    identifier_count: usize,
    fragment_count: usize,
    scope_count: usize,
    root_count: usize,
    compact_node_count: usize,
    expanded_node_count: usize,
}

impl GraphStatistics {
    /// Collects statistics for `graph` and the scopes reconstructed from it.
    ///
    /// `scopes` may be a subset of the graph's scopes; node and scope counts
    /// then describe that subset.
    pub fn collect(graph: &DependencyGraph, scopes: &BTreeSet<Scope>) -> Self {
        Self {
            identifier_count: graph.identifiers().len(),
            fragment_count: graph.scope_roots().count(),
            scope_count: scopes.len(),
            root_count: scopes.iter().map(|scope| scope.dependencies().len()).sum(),
            compact_node_count: graph.node_count(),
            expanded_node_count: scopes.iter().map(Scope::node_count).sum(),
        }
    }

    pub fn identifier_count(&self) -> usize {
        self.identifier_count
    }

    pub fn fragment_count(&self) -> usize {
        self.fragment_count
    }

    pub fn scope_count(&self) -> usize {
        self.scope_count
    }

    pub fn root_count(&self) -> usize {
        self.root_count
    }

    pub fn compact_node_count(&self) -> usize {
        self.compact_node_count
    }

    pub fn expanded_node_count(&self) -> usize {
        self.expanded_node_count
    }

    /// Expanded nodes per stored node; 1.0 for an empty graph
    pub fn sharing_ratio(&self) -> f64 {
        if self.compact_node_count == 0 {
            return 1.0;
        }
        self.expanded_node_count as f64 / self.compact_node_count as f64
    }
}
