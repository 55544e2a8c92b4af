mod cached_scope_reconstructor;
mod graph_builder;

pub use cached_scope_reconstructor::CachedScopeReconstructor;
pub use graph_builder::DependencyGraphBuilder;
