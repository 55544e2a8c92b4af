/// Ports module defining the interfaces between the application core and the
/// infrastructure adapters.
pub mod outbound;
