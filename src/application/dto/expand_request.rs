use std::path::PathBuf;

/// ExpandRequest - Request DTO for scope reconstruction
#[derive(Debug, Clone)]
pub struct ExpandRequest {
    /// Path to the compact dependency graph (JSON or YAML)
    pub graph_path: PathBuf,
    /// Scopes to reconstruct; empty means all scopes of the graph
    pub scope_filter: Vec<String>,
    /// Whether the report should carry graph statistics
    pub include_statistics: bool,
}

impl ExpandRequest {
    pub fn new(graph_path: PathBuf) -> Self {
        Self {
            graph_path,
            scope_filter: Vec::new(),
            include_statistics: false,
        }
    }

    pub fn with_scope_filter(mut self, scope_filter: Vec<String>) -> Self {
        self.scope_filter = scope_filter;
        self
    }

    pub fn with_statistics(mut self, include_statistics: bool) -> Self {
        self.include_statistics = include_statistics;
        self
    }
}
