use crate::dependency_model::domain::{DependencyGraph, GraphStatistics, Scope};
use crate::ports::outbound::ScopeFormatter;
use crate::shared::Result;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Serialize)]
struct ScopeReport<'a> {
    scopes: &'a BTreeSet<Scope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    statistics: Option<Statistics>,
}

#[derive(Debug, Serialize)]
struct Statistics {
    identifiers: usize,
    fragments: usize,
    scopes: usize,
    roots: usize,
    #[serde(rename = "compactNodes")]
    compact_nodes: usize,
    #[serde(rename = "expandedNodes")]
    expanded_nodes: usize,
    #[serde(rename = "sharingRatio")]
    sharing_ratio: f64,
}

impl From<&GraphStatistics> for Statistics {
    fn from(stats: &GraphStatistics) -> Self {
        Self {
            identifiers: stats.identifier_count(),
            fragments: stats.fragment_count(),
            scopes: stats.scope_count(),
            roots: stats.root_count(),
            compact_nodes: stats.compact_node_count(),
            expanded_nodes: stats.expanded_node_count(),
            sharing_ratio: stats.sharing_ratio(),
        }
    }
}

/// JsonFormatter adapter rendering scopes as pretty-printed JSON
///
/// The report wraps the scopes in a `scopes` key, which the file reader
/// accepts again as compaction input.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Renders the compact graph itself
    pub fn format_graph(&self, graph: &DependencyGraph) -> Result<String> {
        serde_json::to_string_pretty(graph).map_err(Into::into)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeFormatter for JsonFormatter {
    fn format(
        &self,
        scopes: &BTreeSet<Scope>,
        statistics: Option<&GraphStatistics>,
    ) -> Result<String> {
        let report = ScopeReport {
            scopes,
            statistics: statistics.map(Statistics::from),
        };
        serde_json::to_string_pretty(&report).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_model::domain::{
        DependencyReference, Issue, PackageLinkage, PackageReference, RootDependencyIndex,
    };
    use std::collections::BTreeMap;

    fn sample_graph() -> DependencyGraph {
        let ids = ["PyPI::requests:2.31.0", "PyPI::urllib3:2.0.0"]
            .iter()
            .map(|c| c.parse().unwrap())
            .collect();
        let root = DependencyReference::new(0)
            .with_linkage(PackageLinkage::ProjectDynamic)
            .with_dependencies([DependencyReference::new(1)]);
        let mut scopes = BTreeMap::new();
        scopes.insert("main".to_string(), vec![RootDependencyIndex::new(0)]);
        DependencyGraph::new(ids, [root], scopes).unwrap()
    }

    #[test]
    fn test_format_scopes() {
        let graph = sample_graph();
        let scopes = graph.create_scopes().unwrap();

        let json = JsonFormatter::new().format(&scopes, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "scopes": [{
                    "name": "main",
                    "dependencies": [{
                        "id": "PyPI::requests:2.31.0",
                        "linkage": "PROJECT_DYNAMIC",
                        "dependencies": [{"id": "PyPI::urllib3:2.0.0"}]
                    }]
                }]
            })
        );
    }

    #[test]
    fn test_format_with_statistics() {
        let graph = sample_graph();
        let scopes = graph.create_scopes().unwrap();
        let stats = GraphStatistics::collect(&graph, &scopes);

        let json = JsonFormatter::new().format(&scopes, Some(&stats)).unwrap();
        assert!(json.contains("\"statistics\""));
        assert!(json.contains("\"expandedNodes\": 2"));
        assert!(json.contains("\"sharingRatio\": 1.0"));
    }

    #[test]
    fn test_format_is_deterministic() {
        let graph = sample_graph();
        let formatter = JsonFormatter::new();
        let first = formatter.format(&graph.create_scopes().unwrap(), None).unwrap();
        let second = formatter.format(&graph.create_scopes().unwrap(), None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_format_keeps_issues() {
        let reference = PackageReference::new("NPM::lodash:4.17.21".parse().unwrap())
            .with_issues(vec![Issue::new("npm", "deprecated")]);
        let scopes = [Scope::new("dependencies", [reference].into_iter().collect())]
            .into_iter()
            .collect();

        let json = JsonFormatter::new().format(&scopes, None).unwrap();
        assert!(json.contains("\"message\": \"deprecated\""));
    }

    #[test]
    fn test_format_graph() {
        let json = JsonFormatter::new().format_graph(&sample_graph()).unwrap();
        let parsed: DependencyGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample_graph());
    }
}
