mod cli;

use cli::{Args, Command};
use depgraph::adapters::outbound::console::StderrProgressReporter;
use depgraph::adapters::outbound::filesystem::FileSystemReader;
use depgraph::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use depgraph::application::dto::{ExpandRequest, OutputFormat};
use depgraph::application::factories::{FormatterFactory, PresenterFactory};
use depgraph::application::use_cases::{CompactScopesUseCase, ExpandGraphUseCase};
use depgraph::config::{self, ConfigFile};
use depgraph::shared::error::ExitCode;
use depgraph::shared::Result;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    let exit_code = match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\n{} {}", "Caused by:".yellow(), cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

fn run(args: Args) -> Result<ExitCode> {
    match args.command {
        Command::Expand {
            file,
            format,
            output,
            scopes,
            statistics,
            fail_on_issues,
            config,
        } => {
            let config = load_config(config.as_deref(), &file)?;
            let options = ExpandOptions::merge(format, scopes, fail_on_issues, config);
            run_expand(file, output, statistics, options)
        }
        Command::Compact { file, output } => run_compact(&file, output),
        Command::Stats { file } => run_stats(file),
    }
}

/// Effective `expand` settings: CLI flags override config values
#[derive(Debug, PartialEq)]
struct ExpandOptions {
    format: OutputFormat,
    scopes: Vec<String>,
    fail_on_issues: bool,
    show_issues: bool,
}

impl ExpandOptions {
    fn merge(
        format: Option<OutputFormat>,
        scopes: Vec<String>,
        fail_on_issues: bool,
        config: ConfigFile,
    ) -> Self {
        Self {
            format: format.or(config.output_format()).unwrap_or_default(),
            scopes: if scopes.is_empty() {
                config.scopes.unwrap_or_default()
            } else {
                scopes
            },
            fail_on_issues: fail_on_issues || config.fail_on_issues.unwrap_or(false),
            show_issues: config.show_issues.unwrap_or(true),
        }
    }
}

/// Loads the explicit config file, or discovers one next to the input
fn load_config(explicit: Option<&Path>, input: &Path) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        return config::load_config_from_path(path);
    }

    let dir = match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok(config::discover_config(dir)?.unwrap_or_default())
}

fn run_expand(
    file: PathBuf,
    output: Option<PathBuf>,
    statistics: bool,
    options: ExpandOptions,
) -> Result<ExitCode> {
    let progress_reporter = StderrProgressReporter::new();
    let use_case = ExpandGraphUseCase::new(FileSystemReader::new(), progress_reporter);

    let request = ExpandRequest::new(file)
        .with_scope_filter(options.scopes)
        .with_statistics(statistics);
    let response = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(options.format));
    let formatter = FormatterFactory::create(options.format, options.show_issues);
    let formatted_output = formatter.format(&response.scopes, response.statistics.as_ref())?;

    PresenterFactory::create(output.into()).present(&formatted_output)?;

    if options.fail_on_issues && response.has_issues() {
        eprintln!(
            "{}",
            format!(
                "⚠️  {} issue(s) found in the reconstructed scopes",
                response.issue_count
            )
            .yellow()
        );
        return Ok(ExitCode::IssuesDetected);
    }

    Ok(ExitCode::Success)
}

fn run_compact(file: &Path, output: Option<PathBuf>) -> Result<ExitCode> {
    let use_case = CompactScopesUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
    let response = use_case.execute(file)?;

    let formatted_output = JsonFormatter::new().format_graph(&response.graph)?;
    PresenterFactory::create(output.into()).present(&formatted_output)?;

    Ok(ExitCode::Success)
}

fn run_stats(file: PathBuf) -> Result<ExitCode> {
    let use_case = ExpandGraphUseCase::new(FileSystemReader::new(), StderrProgressReporter::quiet());
    let response = use_case.execute(ExpandRequest::new(file).with_statistics(true))?;

    if let Some(stats) = response.statistics {
        print!("{}", MarkdownFormatter::new().format_statistics(&stats));
    }

    Ok(ExitCode::Success)
}
