/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the ports: files, console and report formats.
pub mod outbound;
