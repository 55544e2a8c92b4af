/// Use cases module containing application business logic orchestration
mod compact_scopes;
mod expand_graph;

pub use compact_scopes::CompactScopesUseCase;
pub use expand_graph::ExpandGraphUseCase;
