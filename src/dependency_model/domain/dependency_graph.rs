use super::{DependencyReference, Identifier, PackageReference, RootDependencyIndex, Scope};
use crate::shared::error::GraphError;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// DependencyGraph aggregate: the compact, shared form of the dependency trees
/// of any number of scopes.
///
/// * `packages` is the identifier table; everything else refers to packages by
///   their position in it.
/// * `scope_roots` holds the fragment set: every distinct top-level tree that a
///   scope refers to, keyed by `(index, fragment)`.
/// * `scopes` maps scope names to the roots they depend on directly.
///
/// The graph is validated on construction and immutable afterwards, so
/// [`create_scopes`](Self::create_scopes) can be called from several threads at
/// once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CompactGraph", into = "CompactGraph")]
pub struct DependencyGraph {
    packages: Vec<Identifier>,
    scope_roots: BTreeMap<RootDependencyIndex, DependencyReference>,
    scopes: BTreeMap<String, Vec<RootDependencyIndex>>,
}

/// Serialized layout of [`DependencyGraph`]
#[derive(Serialize, Deserialize)]
struct CompactGraph {
    packages: Vec<Identifier>,
    #[serde(default)]
    scope_roots: Vec<DependencyReference>,
    #[serde(default)]
    scopes: BTreeMap<String, Vec<RootDependencyIndex>>,
}

impl DependencyGraph {
    /// Creates a validated graph.
    ///
    /// # Errors
    /// * [`GraphError::IndexOutOfRange`] if any reference, at any depth, or any
    ///   scope root points past the end of `packages`
    /// * [`GraphError::AmbiguousFragment`] if two different trees are registered
    ///   under the same `(index, fragment)`
    /// * [`GraphError::InvalidIdentifier`] if `packages` lists an identifier twice
    pub fn new(
        packages: Vec<Identifier>,
        scope_roots: impl IntoIterator<Item = DependencyReference>,
        scopes: BTreeMap<String, Vec<RootDependencyIndex>>,
    ) -> Result<Self, GraphError> {
        if let Some(duplicate) = find_duplicate(&packages) {
            return Err(GraphError::InvalidIdentifier {
                value: duplicate.to_coordinates(),
                reason: "listed more than once in the identifier table".to_string(),
            });
        }

        let size = packages.len();
        let in_range = |index: usize| index < size;

        let mut roots = BTreeMap::new();
        for reference in scope_roots {
            if let Some(index) = reference.find_index(&in_range) {
                return Err(GraphError::IndexOutOfRange { index, size });
            }
            match roots.entry(reference.root_index()) {
                Entry::Vacant(entry) => {
                    entry.insert(reference);
                }
                Entry::Occupied(entry) => {
                    if !entry.get().same_resolution(&reference) {
                        return Err(GraphError::AmbiguousFragment {
                            index: reference.pkg(),
                            fragment: reference.fragment(),
                        });
                    }
                }
            }
        }

        if let Some(index) = scopes.values().flatten().find(|index| !in_range(index.root)) {
            return Err(GraphError::IndexOutOfRange {
                index: index.root,
                size,
            });
        }

        Ok(Self {
            packages,
            scope_roots: roots,
            scopes,
        })
    }

    /// The identifier table
    pub fn identifiers(&self) -> &[Identifier] {
        &self.packages
    }

    pub fn identifier(&self, index: usize) -> Option<&Identifier> {
        self.packages.get(index)
    }

    /// The fragment set, ordered by `(index, fragment)`
    pub fn scope_roots(&self) -> impl Iterator<Item = &DependencyReference> {
        self.scope_roots.values()
    }

    /// The root index map
    pub fn scopes(&self) -> &BTreeMap<String, Vec<RootDependencyIndex>> {
        &self.scopes
    }

    pub fn scope_names(&self) -> impl Iterator<Item = &str> {
        self.scopes.keys().map(String::as_str)
    }

    pub fn scope_root_indices(&self, name: &str) -> Option<&[RootDependencyIndex]> {
        self.scopes.get(name).map(Vec::as_slice)
    }

    /// Looks up the fragment-set entry for a root index.
    pub fn root(&self, index: RootDependencyIndex) -> Result<&DependencyReference, GraphError> {
        self.scope_roots
            .get(&index)
            .ok_or(GraphError::ReferenceNotFound {
                index: index.root,
                fragment: index.fragment,
            })
    }

    /// Number of nodes stored in the fragment set
    pub fn node_count(&self) -> usize {
        self.scope_roots
            .values()
            .map(DependencyReference::node_count)
            .sum()
    }

    /// Reconstructs the expanded trees of every scope, ordered by scope name.
    ///
    /// # Errors
    /// Returns [`GraphError::ReferenceNotFound`] if a scope names a root that is
    /// not in the fragment set. No partial result is produced.
    pub fn create_scopes(&self) -> Result<BTreeSet<Scope>, GraphError> {
        self.scopes
            .iter()
            .map(|(name, roots)| self.expand_scope(name, roots))
            .collect()
    }

    /// Like [`create_scopes`](Self::create_scopes), restricted to the given scope
    /// names. Names the graph does not know are skipped.
    pub fn create_scopes_for<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<BTreeSet<Scope>, GraphError> {
        let wanted: HashSet<&str> = names.iter().map(AsRef::as_ref).collect();
        self.scopes
            .iter()
            .filter(|(name, _)| wanted.contains(name.as_str()))
            .map(|(name, roots)| self.expand_scope(name, roots))
            .collect()
    }

    /// Reconstructs a single scope, or `None` if the graph has no such scope.
    pub fn create_scope(&self, name: &str) -> Result<Option<Scope>, GraphError> {
        self.scopes
            .get(name)
            .map(|roots| self.expand_scope(name, roots))
            .transpose()
    }

    /// Expands one root of the fragment set into a package reference tree.
    pub fn expand_root(&self, index: RootDependencyIndex) -> Result<PackageReference, GraphError> {
        self.root(index).map(|reference| self.expand(reference))
    }

    fn expand_scope(&self, name: &str, roots: &[RootDependencyIndex]) -> Result<Scope, GraphError> {
        let dependencies = roots
            .iter()
            .map(|index| self.expand_root(*index))
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(Scope::new(name, dependencies))
    }

    // Only called on references owned by this graph, whose indices were checked
    // in `new`.
    fn expand(&self, reference: &DependencyReference) -> PackageReference {
        PackageReference::new(self.packages[reference.pkg()].clone())
            .with_linkage(reference.linkage())
            .with_issues(reference.issues().to_vec())
            .with_dependencies(
                reference
                    .dependencies()
                    .iter()
                    .map(|dependency| self.expand(dependency)),
            )
    }
}

impl TryFrom<CompactGraph> for DependencyGraph {
    type Error = GraphError;

    fn try_from(graph: CompactGraph) -> Result<Self, Self::Error> {
        Self::new(graph.packages, graph.scope_roots, graph.scopes)
    }
}

impl From<DependencyGraph> for CompactGraph {
    fn from(graph: DependencyGraph) -> Self {
        Self {
            packages: graph.packages,
            scope_roots: graph.scope_roots.into_values().collect(),
            scopes: graph.scopes,
        }
    }
}

fn find_duplicate(packages: &[Identifier]) -> Option<&Identifier> {
    let mut seen = HashSet::with_capacity(packages.len());
    packages.iter().find(|id| !seen.insert(*id))
}

/// Qualifies a scope name with the project it belongs to, so the scopes of
/// several projects can share one graph: `namespace:name:version:scope`.
pub fn qualify_scope(project_id: &Identifier, scope_name: &str) -> String {
    format!(
        "{}:{}:{}:{}",
        project_id.namespace(),
        project_id.name(),
        project_id.version(),
        scope_name
    )
}

/// Strips the project qualifier added by [`qualify_scope`]. Names with fewer
/// than three `:` are returned unchanged.
///
/// There is no marker for qualified names: anything before the third `:` is
/// taken as the qualifier, so an unqualified name such as `a:b:c:d` loses its
/// first three segments. Use [`unqualify_scope_of`] when the project is known.
pub fn unqualify_scope(scope_name: &str) -> &str {
    scope_name.splitn(4, ':').nth(3).unwrap_or(scope_name)
}

/// Strips the qualifier of `project_id` from `scope_name`. Names qualified for
/// another project, and unqualified names, are returned unchanged.
pub fn unqualify_scope_of<'a>(project_id: &Identifier, scope_name: &'a str) -> &'a str {
    let prefix = qualify_scope(project_id, "");
    scope_name.strip_prefix(prefix.as_str()).unwrap_or(scope_name)
}
