use clap::{Parser, Subcommand};
use std::path::PathBuf;

use depgraph::application::dto::OutputFormat;

/// Expand and compact shared dependency graphs
#[derive(Parser, Debug)]
#[command(name = "depgraph")]
#[command(version)]
#[command(
    about = "Reconstruct per-scope dependency trees from a compact dependency graph",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Reconstruct the dependency trees of every scope in a compact graph
    ///
    /// Repeated runs over the same graph produce identical output as long as
    /// every issue in it carries a timestamp. Issues without one are stamped
    /// with the current time when the graph is read.
    Expand {
        /// Compact dependency graph (JSON, or YAML for .yml/.yaml)
        file: PathBuf,

        /// Output format: json or markdown [default: json]
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reconstruct only the named scope.
        /// Can be specified multiple times: -s compile -s runtime
        #[arg(short, long = "scope", value_name = "SCOPE")]
        scopes: Vec<String>,

        /// Append graph statistics to the report
        #[arg(long)]
        statistics: bool,

        /// Exit with code 1 when any reconstructed node carries an issue
        #[arg(long)]
        fail_on_issues: bool,

        /// Config file (defaults to depgraph.config.yml next to the input)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Build a compact graph from expanded scopes
    Compact {
        /// Expanded scopes: a list of scopes or a JSON report of `expand`
        file: PathBuf,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print size and sharing statistics of a compact graph
    Stats {
        /// Compact dependency graph (JSON, or YAML for .yml/.yaml)
        file: PathBuf,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
