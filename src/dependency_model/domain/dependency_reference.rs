use super::{Issue, PackageLinkage, RootDependencyIndex};
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

/// One edge of the compact dependency graph.
///
/// The referenced package is addressed by its position in the graph's identifier
/// table. `fragment` distinguishes different root-level resolutions of the same
/// package. Children are embedded directly; equal subtrees inserted under one
/// parent collapse because the child set compares nodes structurally.
///
/// Equality, ordering and hashing cover `(pkg, fragment, linkage, dependencies)`.
/// Issues are carried along but do not make two nodes different: siblings that
/// differ only in their issues are merged into one child carrying the issues of
/// both, in input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencyReference {
    pkg: usize,
    #[serde(default, skip_serializing_if = "is_zero")]
    fragment: usize,
    #[serde(
        default,
        deserialize_with = "deserialize_siblings",
        skip_serializing_if = "BTreeSet::is_empty"
    )]
    dependencies: BTreeSet<DependencyReference>,
    #[serde(default, skip_serializing_if = "PackageLinkage::is_default")]
    linkage: PackageLinkage,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    issues: Vec<Issue>,
}

fn is_zero(value: &usize) -> bool {
    *value == 0
}

fn deserialize_siblings<'de, D>(deserializer: D) -> Result<BTreeSet<DependencyReference>, D::Error>
where
    D: Deserializer<'de>,
{
    let dependencies = Vec::<DependencyReference>::deserialize(deserializer)?;
    Ok(merge_siblings(BTreeSet::new(), dependencies))
}

/// Adds `dependencies` to `siblings`. A dependency equal to one already present
/// hands its issues, and those of its subtree, over to that sibling.
fn merge_siblings(
    mut siblings: BTreeSet<DependencyReference>,
    dependencies: impl IntoIterator<Item = DependencyReference>,
) -> BTreeSet<DependencyReference> {
    for dependency in dependencies {
        match siblings.take(&dependency) {
            Some(mut existing) => {
                existing.absorb(dependency);
                siblings.insert(existing);
            }
            None => {
                siblings.insert(dependency);
            }
        }
    }
    siblings
}

impl DependencyReference {
    /// Creates a leaf reference to fragment 0 of the given identifier index
    pub fn new(pkg: usize) -> Self {
        Self {
            pkg,
            fragment: 0,
            dependencies: BTreeSet::new(),
            linkage: PackageLinkage::default(),
            issues: Vec::new(),
        }
    }

    pub fn with_fragment(mut self, fragment: usize) -> Self {
        self.fragment = fragment;
        self
    }

    pub fn with_linkage(mut self, linkage: PackageLinkage) -> Self {
        self.linkage = linkage;
        self
    }

    pub fn with_issues(mut self, issues: Vec<Issue>) -> Self {
        self.issues = issues;
        self
    }

    pub fn with_dependencies(
        mut self,
        dependencies: impl IntoIterator<Item = DependencyReference>,
    ) -> Self {
        self.dependencies = merge_siblings(BTreeSet::new(), dependencies);
        self
    }

    pub fn pkg(&self) -> usize {
        self.pkg
    }

    pub fn fragment(&self) -> usize {
        self.fragment
    }

    pub fn linkage(&self) -> PackageLinkage {
        self.linkage
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn dependencies(&self) -> &BTreeSet<DependencyReference> {
        &self.dependencies
    }

    /// The key under which this reference is registered as a scope root
    pub fn root_index(&self) -> RootDependencyIndex {
        RootDependencyIndex::with_fragment(self.pkg, self.fragment)
    }

    /// Compares everything that makes up the resolved subtree except the fragment
    /// number, including the issues of every node.
    pub fn same_resolution(&self, other: &Self) -> bool {
        self.pkg == other.pkg
            && self.linkage == other.linkage
            && self.issues == other.issues
            && self.dependencies.len() == other.dependencies.len()
            && self
                .dependencies
                .iter()
                .zip(other.dependencies.iter())
                .all(|(a, b)| a.fragment == b.fragment && a.same_resolution(b))
    }

    // `other` must compare equal to `self`; issues never affect ordering, so the
    // merged node keeps its place in any set it is taken from.
    fn absorb(&mut self, other: DependencyReference) {
        self.issues.extend(other.issues);
        let dependencies = std::mem::take(&mut self.dependencies);
        self.dependencies = merge_siblings(dependencies, other.dependencies);
    }

    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self
            .dependencies
            .iter()
            .map(DependencyReference::node_count)
            .sum::<usize>()
    }

    /// Finds the first identifier index in this subtree for which `is_valid`
    /// returns false.
    pub(crate) fn find_index(&self, is_valid: &impl Fn(usize) -> bool) -> Option<usize> {
        if !is_valid(self.pkg) {
            return Some(self.pkg);
        }
        self.dependencies
            .iter()
            .find_map(|dependency| dependency.find_index(is_valid))
    }
}

impl Ord for DependencyReference {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pkg
            .cmp(&other.pkg)
            .then(self.fragment.cmp(&other.fragment))
            .then(self.linkage.cmp(&other.linkage))
            .then_with(|| self.dependencies.cmp(&other.dependencies))
    }
}

impl PartialOrd for DependencyReference {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for DependencyReference {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DependencyReference {}

impl Hash for DependencyReference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pkg.hash(state);
        self.fragment.hash(state);
        self.linkage.hash(state);
        self.dependencies.hash(state);
    }
}
