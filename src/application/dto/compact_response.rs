use crate::dependency_model::domain::{DependencyGraph, GraphStatistics};

/// CompactResponse - Result DTO of graph compaction
#[derive(Debug, Clone)]
pub struct CompactResponse {
    pub graph: DependencyGraph,
    pub statistics: GraphStatistics,
}

impl CompactResponse {
    pub fn new(graph: DependencyGraph, statistics: GraphStatistics) -> Self {
        Self { graph, statistics }
    }
}
