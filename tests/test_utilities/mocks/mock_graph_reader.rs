use depgraph::prelude::*;
use std::collections::BTreeSet;
use std::path::Path;

/// Mock GraphReader serving an in-memory graph or scopes
///
/// Reading something that was not configured fails the same way a missing
/// file would.
#[derive(Default)]
pub struct MockGraphReader {
    graph: Option<DependencyGraph>,
    scopes: Option<BTreeSet<Scope>>,
}

impl MockGraphReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_graph(mut self, graph: DependencyGraph) -> Self {
        self.graph = Some(graph);
        self
    }

    pub fn with_scopes(mut self, scopes: BTreeSet<Scope>) -> Self {
        self.scopes = Some(scopes);
        self
    }
}

impl GraphReader for MockGraphReader {
    fn read_graph(&self, path: &Path) -> Result<DependencyGraph> {
        self.graph
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Input file not found: {}", path.display()))
    }

    fn read_scopes(&self, path: &Path) -> Result<BTreeSet<Scope>> {
        self.scopes
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Input file not found: {}", path.display()))
    }
}
