use super::{Identifier, Issue, PackageReference};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A named group of direct dependencies ("compile", "test", ...) with their
/// fully expanded transitive trees.
///
/// Scopes order by name first, so a `BTreeSet<Scope>` iterates alphabetically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Scope {
    name: String,
    #[serde(default)]
    dependencies: BTreeSet<PackageReference>,
}

impl Scope {
    pub fn new(name: impl Into<String>, dependencies: BTreeSet<PackageReference>) -> Self {
        Self {
            name: name.into(),
            dependencies,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dependencies(&self) -> &BTreeSet<PackageReference> {
        &self.dependencies
    }

    /// Whether `id` occurs anywhere in this scope's trees
    pub fn contains(&self, id: &Identifier) -> bool {
        self.dependencies
            .iter()
            .any(|root| !root.find_references(id).is_empty())
    }

    /// Collects identifiers reachable from this scope.
    ///
    /// `Some(1)` returns the direct dependencies only; `None` is unlimited.
    pub fn collect_dependencies(&self, max_depth: Option<usize>) -> BTreeSet<Identifier> {
        let mut result = BTreeSet::new();
        if max_depth == Some(0) {
            return result;
        }
        let remaining = max_depth.map(|depth| depth - 1);
        for root in &self.dependencies {
            result.insert(root.id().clone());
            result.extend(root.collect_dependencies(remaining));
        }
        result
    }

    /// All issues in this scope, depth-first, each paired with the package it
    /// is attached to. Nothing is deduplicated.
    pub fn collect_issues(&self) -> Vec<(&Identifier, &Issue)> {
        let mut issues = Vec::new();
        for root in &self.dependencies {
            root.visit(&mut |node| {
                issues.extend(node.issues().iter().map(|issue| (node.id(), issue)));
            });
        }
        issues
    }

    /// Total number of package reference nodes in this scope
    pub fn node_count(&self) -> usize {
        self.dependencies.iter().map(PackageReference::node_count).sum()
    }
}
