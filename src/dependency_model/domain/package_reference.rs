use super::{Identifier, Issue, PackageLinkage};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Fully expanded dependency tree node, as handed to report consumers.
///
/// Siblings are kept in identifier coordinate order. Two nodes are equal when
/// identifier, linkage, children and issues match. Issues only break ties, so
/// nodes that differ in nothing else stay side by side instead of one
/// replacing the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageReference {
    id: Identifier,
    #[serde(default, skip_serializing_if = "PackageLinkage::is_default")]
    linkage: PackageLinkage,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    issues: Vec<Issue>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    dependencies: BTreeSet<PackageReference>,
}

impl PackageReference {
    pub fn new(id: Identifier) -> Self {
        Self {
            id,
            linkage: PackageLinkage::default(),
            issues: Vec::new(),
            dependencies: BTreeSet::new(),
        }
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
        dependencies: impl IntoIterator<Item = PackageReference>,
    ) -> Self {
        self.dependencies = dependencies.into_iter().collect();
        self
    }

    pub fn id(&self) -> &Identifier {
        &self.id
    }

    pub fn linkage(&self) -> PackageLinkage {
        self.linkage
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn dependencies(&self) -> &BTreeSet<PackageReference> {
        &self.dependencies
    }

    /// Collects the identifiers of all transitive dependencies below this node.
    ///
    /// `max_depth` limits how many levels are visited: `Some(1)` yields the
    /// direct children only, `None` walks the whole subtree.
    pub fn collect_dependencies(&self, max_depth: Option<usize>) -> BTreeSet<Identifier> {
        let mut result = BTreeSet::new();
        self.collect_into(&mut result, max_depth);
        result
    }

    fn collect_into(&self, result: &mut BTreeSet<Identifier>, max_depth: Option<usize>) {
        if max_depth == Some(0) {
            return;
        }
        let remaining = max_depth.map(|depth| depth - 1);
        for dependency in &self.dependencies {
            result.insert(dependency.id.clone());
            dependency.collect_into(result, remaining);
        }
    }

    /// Visits this node and its subtree depth-first, parents before children
    pub fn visit<'a>(&'a self, visitor: &mut impl FnMut(&'a PackageReference)) {
        visitor(self);
        for dependency in &self.dependencies {
            dependency.visit(visitor);
        }
    }

    /// Returns every node in this subtree, including this one, that refers to `id`
    pub fn find_references(&self, id: &Identifier) -> Vec<&PackageReference> {
        let mut found = Vec::new();
        self.visit(&mut |node| {
            if node.id == *id {
                found.push(node);
            }
        });
        found
    }

    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.visit(&mut |_| count += 1);
        count
    }
}

impl Ord for PackageReference {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id
            .cmp(&other.id)
            .then(self.linkage.cmp(&other.linkage))
            .then_with(|| self.dependencies.cmp(&other.dependencies))
            .then_with(|| self.issues.cmp(&other.issues))
    }
}

impl PartialOrd for PackageReference {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PackageReference {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PackageReference {}
