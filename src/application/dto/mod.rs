/// Data Transfer Objects for application layer
///
/// DTOs carry requests and results between the CLI, the use cases and the
/// formatters, keeping the domain model free of presentation concerns.
mod compact_response;
mod expand_request;
mod expand_response;
mod output_format;

pub use compact_response::CompactResponse;
pub use expand_request::ExpandRequest;
pub use expand_response::ExpandResponse;
pub use output_format::OutputFormat;
