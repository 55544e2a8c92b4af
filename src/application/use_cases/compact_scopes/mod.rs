use crate::application::dto::CompactResponse;
use crate::dependency_model::domain::GraphStatistics;
use crate::dependency_model::services::DependencyGraphBuilder;
use crate::ports::outbound::{GraphReader, ProgressReporter};
use crate::shared::Result;
use anyhow::Context;
use std::path::Path;

/// CompactScopesUseCase - Builds a compact graph from expanded scopes
///
/// The inverse of [`ExpandGraphUseCase`](super::ExpandGraphUseCase): the
/// produced graph reconstructs exactly the scopes that were read.
///
/// # Type Parameters
/// * `GR` - GraphReader implementation
/// * `PR` - ProgressReporter implementation
pub struct CompactScopesUseCase<GR, PR> {
    graph_reader: GR,
    progress_reporter: PR,
}

impl<GR, PR> CompactScopesUseCase<GR, PR>
where
    GR: GraphReader,
    PR: ProgressReporter,
{
    pub fn new(graph_reader: GR, progress_reporter: PR) -> Self {
        Self {
            graph_reader,
            progress_reporter,
        }
    }

    pub fn execute(&self, scopes_path: &Path) -> Result<CompactResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading scopes from: {}",
            scopes_path.display()
        ));
        let scopes = self.graph_reader.read_scopes(scopes_path)?;

        let graph = DependencyGraphBuilder::from_scopes(&scopes)
            .context("Failed to build a compact graph from the scopes")?;
        let statistics = GraphStatistics::collect(&graph, &scopes);

        self.progress_reporter.report_completion(&format!(
            "✅ Compacted {} scope(s): {} expanded node(s) stored as {}",
            statistics.scope_count(),
            statistics.expanded_node_count(),
            statistics.compact_node_count()
        ));

        Ok(CompactResponse::new(graph, statistics))
    }
}
