use crate::dependency_model::domain::{GraphStatistics, Scope};
use crate::shared::Result;
use std::collections::BTreeSet;

/// ScopeFormatter port for rendering reconstructed scopes
///
/// Implementations turn the expanded trees into a report format
/// (JSON, Markdown, ...). Output must depend only on the inputs, so that two
/// runs over the same graph produce byte-identical reports.
pub trait ScopeFormatter {
    /// Formats the scopes, optionally with graph statistics
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, scopes: &BTreeSet<Scope>, statistics: Option<&GraphStatistics>)
        -> Result<String>;
}
