//! depgraph - compact, shared dependency graphs
//!
//! A dependency graph stores the dependency trees of many scopes (compile,
//! runtime, test, ...) in one compact form: identifiers are interned once and
//! subtrees that several scopes share are stored once. This library validates
//! such graphs, reconstructs the full per-scope trees from them and builds them
//! from expanded trees, following hexagonal architecture and Domain-Driven
//! Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_model`): Graph model, reconstruction and builder
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use depgraph::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = ExpandGraphUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
//!
//! let request = ExpandRequest::new(PathBuf::from("graph.json")).with_statistics(true);
//! let response = use_case.execute(request)?;
//!
//! let output = MarkdownFormatter::new().format(&response.scopes, response.statistics.as_ref())?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_model;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{
        CompactResponse, ExpandRequest, ExpandResponse, OutputFormat,
    };
    pub use crate::application::use_cases::{CompactScopesUseCase, ExpandGraphUseCase};
    pub use crate::dependency_model::domain::{
        qualify_scope, unqualify_scope, unqualify_scope_of, DependencyGraph, DependencyReference,
        GraphStatistics, Identifier, Issue, PackageLinkage, PackageReference, RootDependencyIndex,
        Scope, Severity,
    };
    pub use crate::dependency_model::services::{
        CachedScopeReconstructor, DependencyGraphBuilder,
    };
    pub use crate::ports::outbound::{
        GraphReader, OutputPresenter, ProgressReporter, ScopeFormatter,
    };
    pub use crate::shared::error::{AppError, ExitCode, GraphError};
    pub use crate::shared::Result;
}
