/// Application layer - Use cases and DTOs
///
/// Orchestrates the dependency model and reaches files, console and report
/// formats only through the outbound ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
