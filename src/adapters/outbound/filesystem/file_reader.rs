use crate::dependency_model::domain::{DependencyGraph, Scope};
use crate::ports::outbound::GraphReader;
use crate::shared::error::AppError;
use crate::shared::security::read_checked_file;
use crate::shared::Result;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;

/// Expanded scopes either as a bare list or wrapped the way the JSON report
/// writes them, so a report can be compacted again.
#[derive(Deserialize)]
#[serde(untagged)]
enum ScopesDocument {
    Report { scopes: BTreeSet<Scope> },
    List(BTreeSet<Scope>),
}

impl ScopesDocument {
    fn into_scopes(self) -> BTreeSet<Scope> {
        match self {
            ScopesDocument::Report { scopes } | ScopesDocument::List(scopes) => scopes,
        }
    }
}

/// Serialization syntax of an input file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputSyntax {
    Json,
    Yaml,
}

impl InputSyntax {
    fn of(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yml") | Some("yaml") => InputSyntax::Yaml,
            _ => InputSyntax::Json,
        }
    }
}

/// FileSystemReader adapter for reading graphs and scopes from disk
///
/// Accepts JSON, or YAML for files ending in `.yml`/`.yaml`. Symbolic links
/// and oversized files are rejected before anything is parsed.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn read_document<T: DeserializeOwned>(&self, path: &Path, kind: &str) -> Result<T> {
        if !path.exists() {
            return Err(AppError::FileNotFound {
                path: path.to_path_buf(),
                suggestion: format!("Check the path of the {} file.", kind),
            }
            .into());
        }

        let content = read_checked_file(path, kind)?;

        let parsed = match InputSyntax::of(path) {
            InputSyntax::Json => serde_json::from_str(&content).map_err(|e| e.to_string()),
            InputSyntax::Yaml => serde_yaml_ng::from_str(&content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|details| {
            AppError::ParseError {
                kind: kind.to_string(),
                path: path.to_path_buf(),
                details,
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphReader for FileSystemReader {
    fn read_graph(&self, path: &Path) -> Result<DependencyGraph> {
        self.read_document(path, "dependency graph")
    }

    fn read_scopes(&self, path: &Path) -> Result<BTreeSet<Scope>> {
        self.read_document::<ScopesDocument>(path, "scopes")
            .map(ScopesDocument::into_scopes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const GRAPH_JSON: &str = r#"{
  "packages": ["Maven:org.apache.commons:commons-lang3:3.11", "Maven:org.junit:junit:5"],
  "scope_roots": [{"pkg": 0}, {"pkg": 1}],
  "scopes": {"compile": [{"root": 0}], "test": [{"root": 0}, {"root": 1}]}
}"#;

    const GRAPH_YAML: &str = r#"
packages:
  - "Maven:org.apache.commons:commons-lang3:3.11"
scope_roots:
  - pkg: 0
    linkage: PROJECT_DYNAMIC
scopes:
  compile:
    - root: 0
"#;

    #[test]
    fn test_read_graph_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("graph.json");
        fs::write(&path, GRAPH_JSON).unwrap();

        let graph = FileSystemReader::new().read_graph(&path).unwrap();
        assert_eq!(graph.identifiers().len(), 2);
        assert_eq!(graph.scope_names().collect::<Vec<_>>(), vec!["compile", "test"]);
    }

    #[test]
    fn test_read_graph_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("graph.yml");
        fs::write(&path, GRAPH_YAML).unwrap();

        let graph = FileSystemReader::new().read_graph(&path).unwrap();
        let scopes = graph.create_scopes().unwrap();
        assert_eq!(scopes.len(), 1);
    }

    #[test]
    fn test_read_graph_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemReader::new().read_graph(&temp_dir.path().join("missing.json"));

        let err_string = result.unwrap_err().to_string();
        assert!(err_string.contains("Input file not found"));
    }

    #[test]
    fn test_read_graph_invalid_index() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("graph.json");
        fs::write(&path, r#"{"packages": [], "scope_roots": [{"pkg": 0}]}"#).unwrap();

        let err_string = FileSystemReader::new()
            .read_graph(&path)
            .unwrap_err()
            .to_string();
        assert!(err_string.contains("Failed to parse dependency graph file"));
        assert!(err_string.contains("out of range"));
    }

    #[test]
    fn test_read_scopes_list_and_report() {
        let temp_dir = TempDir::new().unwrap();
        let list_path = temp_dir.path().join("list.json");
        fs::write(
            &list_path,
            r#"[{"name": "compile", "dependencies": [{"id": "NPM::lodash:4.17.21"}]}]"#,
        )
        .unwrap();
        let report_path = temp_dir.path().join("report.json");
        fs::write(
            &report_path,
            r#"{"scopes": [{"name": "compile", "dependencies": [{"id": "NPM::lodash:4.17.21"}]}]}"#,
        )
        .unwrap();

        let reader = FileSystemReader::new();
        let from_list = reader.read_scopes(&list_path).unwrap();
        let from_report = reader.read_scopes(&report_path).unwrap();
        assert_eq!(from_list, from_report);
        assert_eq!(from_list.len(), 1);
    }

    #[test]
    fn test_input_syntax_by_extension() {
        assert_eq!(InputSyntax::of(Path::new("a.yaml")), InputSyntax::Yaml);
        assert_eq!(InputSyntax::of(Path::new("a.YML")), InputSyntax::Yaml);
        assert_eq!(InputSyntax::of(Path::new("a.json")), InputSyntax::Json);
        assert_eq!(InputSyntax::of(Path::new("graph")), InputSyntax::Json);
    }
}
