use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ScopeFormatter;

/// Factory for creating scope formatters
///
/// Selects the formatter adapter for an output format, so the CLI never
/// names a concrete formatter.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format to create a formatter for
    /// * `show_issues` - Whether issues are rendered; JSON always keeps them
    ///
    /// # Examples
    /// ```
    /// use depgraph::application::dto::OutputFormat;
    /// use depgraph::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Markdown, true);
    /// ```
    pub fn create(format: OutputFormat, show_issues: bool) -> Box<dyn ScopeFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::with_issues(show_issues)),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use depgraph::application::dto::OutputFormat;
    /// use depgraph::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON format output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON format output...",
            OutputFormat::Markdown => "📝 Generating Markdown format output...",
        }
    }
}
