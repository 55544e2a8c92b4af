pub mod dependency_graph;
pub mod dependency_reference;
pub mod graph_statistics;
pub mod identifier;
pub mod issue;
pub mod linkage;
pub mod package_reference;
pub mod root_index;
pub mod scope;

pub use dependency_graph::{qualify_scope, unqualify_scope, unqualify_scope_of, DependencyGraph};
pub use dependency_reference::DependencyReference;
pub use graph_statistics::GraphStatistics;
pub use identifier::Identifier;
pub use issue::{Issue, Severity};
pub use linkage::PackageLinkage;
pub use package_reference::PackageReference;
pub use root_index::RootDependencyIndex;
pub use scope::Scope;
