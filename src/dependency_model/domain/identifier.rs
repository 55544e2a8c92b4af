use crate::shared::error::GraphError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Separator between the coordinate components
const SEPARATOR: char = ':';

/// Identifier value object naming exactly one package version.
///
/// The canonical form is the coordinate string `type:namespace:name:version`.
/// Identifiers are ordered by that string, which keeps every reconstructed tree
/// in the same order no matter how the facts were discovered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier {
    package_type: String,
    namespace: String,
    name: String,
    version: String,
}

impl Identifier {
    /// Creates an identifier from its four components.
    ///
    /// Only the version may contain `:`; in the other components it would make
    /// the coordinate string ambiguous.
    pub fn new(
        package_type: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self, GraphError> {
        let id = Self {
            package_type: package_type.into(),
            namespace: namespace.into(),
            name: name.into(),
            version: version.into(),
        };

        for component in [&id.package_type, &id.namespace, &id.name] {
            if component.contains(SEPARATOR) {
                return Err(GraphError::InvalidIdentifier {
                    value: id.to_coordinates(),
                    reason: format!(
                        "component '{}' must not contain '{}'",
                        component, SEPARATOR
                    ),
                });
            }
        }

        Ok(id)
    }

    pub fn package_type(&self) -> &str {
        &self.package_type
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the canonical `type:namespace:name:version` string.
    pub fn to_coordinates(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}{sep}{}",
            self.package_type,
            self.namespace,
            self.name,
            self.version,
            sep = SEPARATOR
        )
    }

    /// Bytes of the coordinate string, produced without allocating.
    fn coordinate_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        let sep = SEPARATOR as u8;
        self.package_type
            .bytes()
            .chain(std::iter::once(sep))
            .chain(self.namespace.bytes())
            .chain(std::iter::once(sep))
            .chain(self.name.bytes())
            .chain(std::iter::once(sep))
            .chain(self.version.bytes())
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.coordinate_bytes().cmp(other.coordinate_bytes())
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Identifier {
    type Err = GraphError;

    /// Parses a coordinate string. Missing trailing components are empty, and
    /// everything after the third separator belongs to the version.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(4, SEPARATOR);
        let mut next = || parts.next().unwrap_or_default().to_string();
        let (package_type, namespace, name, version) = (next(), next(), next(), next());
        Self::new(package_type, namespace, name, version)
    }
}

impl TryFrom<String> for Identifier {
    type Error = GraphError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.to_coordinates()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coordinates())
    }
}
