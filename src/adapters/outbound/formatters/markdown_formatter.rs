use crate::dependency_model::domain::{GraphStatistics, PackageReference, Scope};
use crate::ports::outbound::ScopeFormatter;
use crate::shared::Result;
use std::collections::BTreeSet;
use std::fmt::Write;

/// Markdown table header for graph statistics
const TABLE_HEADER: &str = "| Metric | Value |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|--------|-------|\n";

/// Indentation per tree level
const INDENT: &str = "  ";

/// MarkdownFormatter adapter rendering every scope as a nested bullet tree
///
/// Non-default linkage is shown next to the package; issues are listed below
/// the package they belong to unless disabled.
pub struct MarkdownFormatter {
    show_issues: bool,
}

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self { show_issues: true }
    }

    pub fn with_issues(show_issues: bool) -> Self {
        Self { show_issues }
    }

    /// Renders only the statistics table, as printed by `depgraph stats`
    pub fn format_statistics(&self, stats: &GraphStatistics) -> String {
        let mut output = String::new();
        Self::render_statistics(&mut output, stats);
        output
    }

    /// Escapes pipe characters and newlines for table cells and list items
    fn escape_markdown(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_statistics(output: &mut String, stats: &GraphStatistics) {
        output.push_str("## Summary\n\n");
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        let rows = [
            ("Identifiers", stats.identifier_count().to_string()),
            ("Fragments", stats.fragment_count().to_string()),
            ("Scopes", stats.scope_count().to_string()),
            ("Direct dependencies", stats.root_count().to_string()),
            ("Stored nodes", stats.compact_node_count().to_string()),
            ("Expanded nodes", stats.expanded_node_count().to_string()),
            ("Sharing ratio", format!("{:.2}", stats.sharing_ratio())),
        ];
        for (metric, value) in rows {
            let _ = writeln!(output, "| {} | {} |", metric, value);
        }
        output.push('\n');
    }

    fn render_scope(&self, output: &mut String, scope: &Scope) {
        let _ = writeln!(output, "## Scope: {}\n", Self::escape_markdown(scope.name()));

        if scope.dependencies().is_empty() {
            output.push_str("_No dependencies._\n\n");
            return;
        }

        for dependency in scope.dependencies() {
            self.render_reference(output, dependency, 0);
        }
        output.push('\n');
    }

    fn render_reference(&self, output: &mut String, reference: &PackageReference, depth: usize) {
        let indent = INDENT.repeat(depth);
        let _ = write!(
            output,
            "{}- `{}`",
            indent,
            reference.id().to_coordinates().replace('`', "'")
        );
        if !reference.linkage().is_default() {
            let _ = write!(output, " _({})_", reference.linkage());
        }
        output.push('\n');

        if self.show_issues {
            for issue in reference.issues() {
                let _ = writeln!(
                    output,
                    "{}{}- ⚠️ **{}** {}: {}",
                    indent,
                    INDENT,
                    issue.severity(),
                    Self::escape_markdown(issue.source()),
                    Self::escape_markdown(issue.message())
                );
            }
        }

        for dependency in reference.dependencies() {
            self.render_reference(output, dependency, depth + 1);
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeFormatter for MarkdownFormatter {
    fn format(
        &self,
        scopes: &BTreeSet<Scope>,
        statistics: Option<&GraphStatistics>,
    ) -> Result<String> {
        let mut output = String::from("# Dependency Scopes\n\n");

        if let Some(stats) = statistics {
            Self::render_statistics(&mut output, stats);
        }

        for scope in scopes {
            self.render_scope(&mut output, scope);
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_model::domain::{
        DependencyGraph, DependencyReference, Issue, PackageLinkage, RootDependencyIndex, Severity,
    };
    use std::collections::BTreeMap;

    fn pkg(coordinates: &str) -> PackageReference {
        PackageReference::new(coordinates.parse().unwrap())
    }

    fn single_scope(reference: PackageReference) -> BTreeSet<Scope> {
        [Scope::new("compile", [reference].into_iter().collect())]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_format_nested_tree() {
        let tree = pkg("Maven:g:web:1").with_dependencies([
            pkg("Maven:g:core:1").with_dependencies([pkg("Maven:g:logging:1")])
        ]);

        let output = MarkdownFormatter::new()
            .format(&single_scope(tree), None)
            .unwrap();

        assert!(output.starts_with("# Dependency Scopes\n\n"));
        assert!(output.contains("## Scope: compile\n\n"));
        assert!(output.contains(
            "- `Maven:g:web:1`\n  - `Maven:g:core:1`\n    - `Maven:g:logging:1`\n"
        ));
    }

    #[test]
    fn test_format_linkage_and_issues() {
        let tree = pkg("NPM::lodash:4.17.21")
            .with_linkage(PackageLinkage::ProjectStatic)
            .with_issues(vec![
                Issue::new("npm", "range | mismatch").with_severity(Severity::Warning)
            ]);

        let output = MarkdownFormatter::new()
            .format(&single_scope(tree.clone()), None)
            .unwrap();
        assert!(output.contains("- `NPM::lodash:4.17.21` _(project-static)_\n"));
        assert!(output.contains("  - ⚠️ **WARNING** npm: range \\| mismatch\n"));

        let hidden = MarkdownFormatter::with_issues(false)
            .format(&single_scope(tree), None)
            .unwrap();
        assert!(!hidden.contains("WARNING"));
    }

    #[test]
    fn test_format_empty_scope() {
        let scopes = [Scope::new("provided", BTreeSet::new())].into_iter().collect();
        let output = MarkdownFormatter::new().format(&scopes, None).unwrap();
        assert!(output.contains("## Scope: provided\n\n_No dependencies._\n"));
    }

    #[test]
    fn test_format_statistics_table() {
        let ids = vec!["Maven:g:a:1".parse().unwrap()];
        let mut scope_map = BTreeMap::new();
        scope_map.insert("compile".to_string(), vec![RootDependencyIndex::new(0)]);
        let graph = DependencyGraph::new(ids, [DependencyReference::new(0)], scope_map).unwrap();
        let scopes = graph.create_scopes().unwrap();
        let stats = GraphStatistics::collect(&graph, &scopes);

        let output = MarkdownFormatter::new().format(&scopes, Some(&stats)).unwrap();
        assert!(output.contains("## Summary\n\n| Metric | Value |\n|--------|-------|\n"));
        assert!(output.contains("| Identifiers | 1 |\n"));
        assert!(output.contains("| Sharing ratio | 1.00 |\n"));

        let table = MarkdownFormatter::new().format_statistics(&stats);
        assert!(table.starts_with("## Summary\n"));
        assert!(output.contains(&table));
    }

    #[test]
    fn test_scopes_rendered_in_name_order() {
        let scopes = ["test", "compile"]
            .into_iter()
            .map(|name| Scope::new(name, BTreeSet::new()))
            .collect();
        let output = MarkdownFormatter::new().format(&scopes, None).unwrap();

        let compile = output.find("## Scope: compile").unwrap();
        let test = output.find("## Scope: test").unwrap();
        assert!(compile < test);
    }
}
