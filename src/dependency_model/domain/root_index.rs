use serde::{Deserialize, Serialize};

/// Composite key naming one scope root: an identifier index plus the fragment
/// that selects which resolution of that identifier is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RootDependencyIndex {
    pub root: usize,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub fragment: usize,
}

fn is_zero(value: &usize) -> bool {
    *value == 0
}

impl RootDependencyIndex {
    pub fn new(root: usize) -> Self {
        Self::with_fragment(root, 0)
    }

    pub fn with_fragment(root: usize, fragment: usize) -> Self {
        Self { root, fragment }
    }
}
