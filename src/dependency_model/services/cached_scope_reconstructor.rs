use crate::dependency_model::domain::{DependencyGraph, Scope};
use crate::shared::error::GraphError;
use dashmap::DashMap;
use std::sync::Arc;

/// CachedScopeReconstructor shares reconstructed scopes between consumers.
///
/// Wraps an immutable graph and remembers every scope once it has been
/// expanded. The cache is thread-safe: concurrent first requests for the same
/// scope may both expand it, but only the first result is stored and every
/// caller receives that one. Cached and uncached results are identical.
#[derive(Debug, Clone)]
pub struct CachedScopeReconstructor {
    graph: Arc<DependencyGraph>,
    cache: Arc<DashMap<String, Arc<Scope>>>,
}

impl CachedScopeReconstructor {
    pub fn new(graph: Arc<DependencyGraph>) -> Self {
        Self {
            graph,
            cache: Arc::new(DashMap::new()),
        }
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Returns the reconstructed scope, or `None` if the graph has no such scope.
    pub fn scope(&self, name: &str) -> Result<Option<Arc<Scope>>, GraphError> {
        if let Some(cached) = self.cache.get(name) {
            return Ok(Some(Arc::clone(cached.value())));
        }

        let Some(scope) = self.graph.create_scope(name)? else {
            return Ok(None);
        };

        let entry = self
            .cache
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(scope));
        Ok(Some(Arc::clone(entry.value())))
    }

    /// All scopes of the graph, ordered by name
    pub fn scopes(&self) -> Result<Vec<Arc<Scope>>, GraphError> {
        self.graph
            .scope_names()
            .filter_map(|name| self.scope(name).transpose())
            .collect()
    }

    /// Number of scopes expanded so far
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_model::domain::{DependencyReference, RootDependencyIndex};
    use std::collections::BTreeMap;
    use std::thread;

    fn sample_graph() -> DependencyGraph {
        let ids = [
            "Maven:org.apache.commons:commons-lang3:3.11",
            "Maven:org.apache.commons:commons-collections4:4.4",
            "Maven:org.junit:junit:5",
        ]
        .iter()
        .map(|c| c.parse().unwrap())
        .collect();
        let roots = [
            DependencyReference::new(0),
            DependencyReference::new(1).with_dependencies([DependencyReference::new(0)]),
            DependencyReference::new(2),
        ];
        let mut scopes = BTreeMap::new();
        scopes.insert(
            "scope1".to_string(),
            vec![RootDependencyIndex::new(0), RootDependencyIndex::new(1)],
        );
        scopes.insert(
            "scope2".to_string(),
            vec![RootDependencyIndex::new(1), RootDependencyIndex::new(2)],
        );
        DependencyGraph::new(ids, roots, scopes).unwrap()
    }

    #[test]
    fn test_cached_scopes_match_uncached() {
        let graph = Arc::new(sample_graph());
        let reconstructor = CachedScopeReconstructor::new(Arc::clone(&graph));

        let cached: Vec<Scope> = reconstructor
            .scopes()
            .unwrap()
            .iter()
            .map(|scope| scope.as_ref().clone())
            .collect();
        let uncached: Vec<Scope> = graph.create_scopes().unwrap().into_iter().collect();
        assert_eq!(cached, uncached);
    }

    #[test]
    fn test_scope_is_expanded_once() {
        let reconstructor = CachedScopeReconstructor::new(Arc::new(sample_graph()));

        let first = reconstructor.scope("scope1").unwrap().unwrap();
        let second = reconstructor.scope("scope1").unwrap().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(reconstructor.cache_size(), 1);
    }

    #[test]
    fn test_unknown_scope() {
        let reconstructor = CachedScopeReconstructor::new(Arc::new(sample_graph()));
        assert!(reconstructor.scope("missing").unwrap().is_none());
        assert_eq!(reconstructor.cache_size(), 0);
    }

    #[test]
    fn test_concurrent_access_yields_one_shared_value() {
        let reconstructor = CachedScopeReconstructor::new(Arc::new(sample_graph()));

        let results: Vec<Arc<Scope>> = thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let reconstructor = reconstructor.clone();
                    s.spawn(move || reconstructor.scope("scope2").unwrap().unwrap())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let stored = reconstructor.scope("scope2").unwrap().unwrap();
        assert!(results.iter().all(|scope| **scope == *stored));
        assert_eq!(reconstructor.cache_size(), 1);
    }

    #[test]
    fn test_dangling_reference_is_not_cached() {
        let ids = vec!["Maven:g:a:1".parse().unwrap()];
        let mut scopes = BTreeMap::new();
        scopes.insert(
            "broken".to_string(),
            vec![RootDependencyIndex::with_fragment(0, 4)],
        );
        let graph = DependencyGraph::new(ids, [DependencyReference::new(0)], scopes).unwrap();
        let reconstructor = CachedScopeReconstructor::new(Arc::new(graph));

        assert_eq!(
            reconstructor.scope("broken").unwrap_err(),
            GraphError::ReferenceNotFound {
                index: 0,
                fragment: 4
            }
        );
        assert!(reconstructor.scopes().is_err());
        assert_eq!(reconstructor.cache_size(), 0);
    }
}
