/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// The application core reaches input files, report formats, output
/// destinations and the console only through these traits.
pub mod graph_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod scope_formatter;

pub use graph_reader::GraphReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use scope_formatter::ScopeFormatter;
