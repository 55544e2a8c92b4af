use crate::application::dto::{ExpandRequest, ExpandResponse};
use crate::dependency_model::domain::{DependencyGraph, GraphStatistics, Scope};
use crate::dependency_model::services::CachedScopeReconstructor;
use crate::ports::outbound::{GraphReader, ProgressReporter};
use crate::shared::error::AppError;
use crate::shared::Result;
use anyhow::Context;
use std::collections::BTreeSet;
use std::sync::Arc;

/// ExpandGraphUseCase - Reconstructs the scopes of a compact dependency graph
///
/// # Type Parameters
/// * `GR` - GraphReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ExpandGraphUseCase<GR, PR> {
    graph_reader: GR,
    progress_reporter: PR,
}

impl<GR, PR> ExpandGraphUseCase<GR, PR>
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

    /// Executes the reconstruction
    ///
    /// # Errors
    /// * The graph cannot be read or fails validation
    /// * The scope filter names a scope the graph does not have
    /// * A scope refers to a root that is missing from the fragment set
    pub fn execute(&self, request: ExpandRequest) -> Result<ExpandResponse> {
        // Step 1: Load and validate the compact graph
        let graph = Arc::new(self.read_graph(&request)?);

        // Step 2: Resolve which scopes to reconstruct
        let selected = Self::select_scopes(&graph, &request.scope_filter)?;

        // Step 3: Reconstruct, one progress step per scope
        let scopes = self.reconstruct(Arc::clone(&graph), &selected)?;

        // Step 4: Summarize
        let issue_count = scopes.iter().map(|scope| scope.collect_issues().len()).sum();
        let statistics = request
            .include_statistics
            .then(|| GraphStatistics::collect(&graph, &scopes));

        self.progress_reporter.report_completion(&format!(
            "✅ Reconstructed {} scope(s) with {} issue(s)",
            scopes.len(),
            issue_count
        ));

        Ok(ExpandResponse::new(scopes, statistics, issue_count))
    }

    fn read_graph(&self, request: &ExpandRequest) -> Result<DependencyGraph> {
        self.progress_reporter.report(&format!(
            "📖 Loading dependency graph from: {}",
            request.graph_path.display()
        ));

        let graph = self.graph_reader.read_graph(&request.graph_path)?;

        self.progress_reporter.report(&format!(
            "✅ Loaded {} identifier(s), {} fragment(s), {} scope(s)",
            graph.identifiers().len(),
            graph.scope_roots().count(),
            graph.scopes().len()
        ));

        Ok(graph)
    }

    /// An empty filter selects every scope; unknown names are an error
    fn select_scopes(graph: &DependencyGraph, filter: &[String]) -> Result<Vec<String>> {
        if filter.is_empty() {
            return Ok(graph.scope_names().map(str::to_string).collect());
        }

        let unknown: Vec<&str> = filter
            .iter()
            .map(String::as_str)
            .filter(|name| graph.scope_root_indices(name).is_none())
            .collect();

        if !unknown.is_empty() {
            let available: Vec<&str> = graph.scope_names().collect();
            return Err(AppError::Validation {
                message: format!(
                    "Unknown scope(s): {}. Available scopes: {}",
                    unknown.join(", "),
                    if available.is_empty() {
                        "(none)".to_string()
                    } else {
                        available.join(", ")
                    }
                ),
            }
            .into());
        }

        let selected: BTreeSet<&str> = filter.iter().map(String::as_str).collect();
        Ok(selected.into_iter().map(str::to_string).collect())
    }

    fn reconstruct(
        &self,
        graph: Arc<DependencyGraph>,
        selected: &[String],
    ) -> Result<BTreeSet<Scope>> {
        let reconstructor = CachedScopeReconstructor::new(graph);
        let total = selected.len();
        let mut scopes = BTreeSet::new();

        for (idx, name) in selected.iter().enumerate() {
            let scope = reconstructor
                .scope(name)
                .with_context(|| format!("Failed to reconstruct scope '{}'", name))?;
            if let Some(scope) = scope {
                scopes.insert(Arc::unwrap_or_clone(scope));
            }
            self.progress_reporter
                .report_progress(idx + 1, total, Some(name.as_str()));
        }

        Ok(scopes)
    }
}
