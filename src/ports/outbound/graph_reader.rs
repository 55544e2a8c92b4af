use crate::dependency_model::domain::{DependencyGraph, Scope};
use crate::shared::Result;
use std::collections::BTreeSet;
use std::path::Path;

/// GraphReader port for loading dependency data
///
/// Abstracts where the compact graph and the expanded scopes come from, so the
/// use cases can be driven from files in production and from memory in tests.
pub trait GraphReader {
    /// Reads a compact dependency graph.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The source does not exist or cannot be read
    /// - The content is not a valid graph (syntax, out-of-range index,
    ///   ambiguous fragment)
    fn read_graph(&self, path: &Path) -> Result<DependencyGraph>;

    /// Reads expanded scopes, the input of graph compaction.
    ///
    /// # Errors
    /// Returns an error if the source is missing, unreadable or malformed.
    fn read_scopes(&self, path: &Path) -> Result<BTreeSet<Scope>>;
}
