use serde::{Deserialize, Serialize};
use std::fmt;

/// How a dependency is attached to the package or project that requires it
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PackageLinkage {
    /// Package-to-package dependency, linked at runtime
    #[default]
    Dynamic,
    /// Package-to-package dependency, linked at build time
    Static,
    /// Direct dependency of a project, linked at runtime
    ProjectDynamic,
    /// Direct dependency of a project, linked at build time
    ProjectStatic,
}

impl PackageLinkage {
    pub fn is_default(&self) -> bool {
        *self == PackageLinkage::Dynamic
    }

    /// Whether the dependent side of the edge is a project rather than a package
    pub fn is_project_linkage(&self) -> bool {
        matches!(
            self,
            PackageLinkage::ProjectDynamic | PackageLinkage::ProjectStatic
        )
    }
}

impl fmt::Display for PackageLinkage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PackageLinkage::Dynamic => "dynamic",
            PackageLinkage::Static => "static",
            PackageLinkage::ProjectDynamic => "project-dynamic",
            PackageLinkage::ProjectStatic => "project-static",
        };
        write!(f, "{}", label)
    }
}
