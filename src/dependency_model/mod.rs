//! Dependency model - the compact dependency graph and its reconstruction
//!
//! `domain` holds the value objects and the graph aggregate; `services` holds
//! the producer-side builder and the shared reconstruction cache.
pub mod domain;
pub mod services;
