use crate::dependency_model::domain::{
    DependencyGraph, DependencyReference, Identifier, PackageReference, RootDependencyIndex, Scope,
};
use crate::shared::error::GraphError;
use std::collections::{BTreeMap, HashMap};

/// DependencyGraphBuilder service for producing compact graphs.
///
/// Accepts expanded dependency trees scope by scope and takes care of the
/// producer-side bookkeeping of the compact form:
///
/// - identifiers are interned in first-seen order,
/// - nested dependencies are embedded into their parent's reference,
/// - fragment numbers are assigned per identifier: a root whose subtree matches
///   an already registered root reuses its fragment, a divergent subtree gets
///   the next free one.
///
/// Nested siblings that differ only in their issues become one compact child
/// carrying the issues of both, so they expand as a single node.
#[derive(Debug, Default)]
pub struct DependencyGraphBuilder {
    packages: Vec<Identifier>,
    package_indices: HashMap<Identifier, usize>,
    scope_roots: BTreeMap<RootDependencyIndex, DependencyReference>,
    scopes: BTreeMap<String, Vec<RootDependencyIndex>>,
}

impl DependencyGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a compact graph that reconstructs exactly the given scopes
    pub fn from_scopes<'a>(
        scopes: impl IntoIterator<Item = &'a Scope>,
    ) -> Result<DependencyGraph, GraphError> {
        let mut builder = Self::new();
        for scope in scopes {
            builder.add_scope(scope.name());
            for dependency in scope.dependencies() {
                builder.add_dependency(scope.name(), dependency);
            }
        }
        builder.build()
    }

    /// Registers a scope, so that it appears in the graph even without
    /// dependencies.
    pub fn add_scope(&mut self, scope: &str) -> &mut Self {
        self.scopes.entry(scope.to_string()).or_default();
        self
    }

    /// Adds `dependency` with its whole subtree as a direct dependency of
    /// `scope` and returns the root index it was registered under.
    pub fn add_dependency(&mut self, scope: &str, dependency: &PackageReference) -> RootDependencyIndex {
        let reference = self.to_reference(dependency);
        let index = self.register_root(reference);

        let roots = self.scopes.entry(scope.to_string()).or_default();
        if !roots.contains(&index) {
            roots.push(index);
        }
        index
    }

    pub fn build(self) -> Result<DependencyGraph, GraphError> {
        DependencyGraph::new(self.packages, self.scope_roots.into_values(), self.scopes)
    }

    fn intern(&mut self, id: &Identifier) -> usize {
        if let Some(index) = self.package_indices.get(id) {
            return *index;
        }
        let index = self.packages.len();
        self.packages.push(id.clone());
        self.package_indices.insert(id.clone(), index);
        index
    }

    fn to_reference(&mut self, package: &PackageReference) -> DependencyReference {
        let pkg = self.intern(package.id());
        let dependencies: Vec<DependencyReference> = package
            .dependencies()
            .iter()
            .map(|dependency| self.to_reference(dependency))
            .collect();

        DependencyReference::new(pkg)
            .with_linkage(package.linkage())
            .with_issues(package.issues().to_vec())
            .with_dependencies(dependencies)
    }

    fn register_root(&mut self, reference: DependencyReference) -> RootDependencyIndex {
        let pkg = reference.pkg();
        let existing = RootDependencyIndex::new(pkg)..=RootDependencyIndex::with_fragment(pkg, usize::MAX);

        let mut next_fragment = 0;
        for (index, registered) in self.scope_roots.range(existing) {
            if registered.same_resolution(&reference) {
                return *index;
            }
            next_fragment = index.fragment + 1;
        }

        let index = RootDependencyIndex::with_fragment(pkg, next_fragment);
        self.scope_roots
            .insert(index, reference.with_fragment(next_fragment));
        index
    }
}
