use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// CI jobs can tell a broken graph apart from a graph that merely carries
/// resolution issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - graph processed, no issues or issues not treated as failure
    Success = 0,
    /// Reconstructed trees carry issues and `--fail-on-issues` was requested
    IssuesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable input, invalid graph, write failure, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::IssuesDetected => write!(f, "Issues Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Structural violations of the compact dependency graph.
///
/// These are contract violations by whoever produced the graph. They abort
/// construction or reconstruction entirely; per-edge issues are data and never
/// show up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("Identifier index {index} is out of range; the identifier table holds {size} entries")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("Could not resolve dependency reference: no scope root with index {index} and fragment {fragment} (reference not found)")]
    ReferenceNotFound { index: usize, fragment: usize },

    #[error("Ambiguous fragment: index {index} with fragment {fragment} is registered with two different subtrees")]
    AmbiguousFragment { index: usize, fragment: usize },

    #[error("Invalid identifier '{value}': {reason}")]
    InvalidIdentifier { value: String, reason: String },
}

/// Application-specific errors raised by the adapters and use cases.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input file not found: {path}\n\n💡 Hint: {suggestion}")]
    FileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse {kind} file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file contains valid JSON or YAML in the expected layout")]
    ParseError {
        kind: String,
        path: PathBuf,
        details: String,
    },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },
}
